//! System configuration endpoints. Admin only.

use harbor_define::{Endpoint, Param, RestMethod};

use super::endpoint;

pub(super) fn endpoints() -> Vec<Endpoint> {
    vec![
        endpoint(
            "GetConfigurations",
            RestMethod::Get,
            "/configurations",
            "Return the system configurations.",
            vec![],
        ),
        endpoint(
            "PutConfigurations",
            RestMethod::Put,
            "/configurations",
            "Modify the system configurations.",
            vec![Param::body("configurations", "The configuration map to apply.").required()],
        ),
        endpoint(
            "PostConfigurationsReset",
            RestMethod::Post,
            "/configurations/reset",
            "Reset system configurations from environment variables.",
            vec![],
        ),
    ]
}
