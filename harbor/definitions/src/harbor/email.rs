use harbor_define::{Endpoint, Param, RestMethod};

use super::endpoint;

pub(super) fn endpoints() -> Vec<Endpoint> {
    vec![endpoint(
        "PostEmailPing",
        RestMethod::Post,
        "/email/ping",
        "Test the connection to the mail server.",
        vec![Param::body("settings", "Email server settings to test.")],
    )]
}
