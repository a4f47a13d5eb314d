//! Global search.

use harbor_define::{Endpoint, Param, ParamKind, RestMethod};

use super::endpoint;

pub(super) fn endpoints() -> Vec<Endpoint> {
    vec![endpoint(
        "GetSearch",
        RestMethod::Get,
        "/search",
        "Search public projects and repositories, plus those related to the current user.",
        vec![
            Param::query(
                "q",
                "q",
                ParamKind::String,
                "Search parameter for project and repository name.",
            )
            .required(),
        ],
    )]
}
