//! Access log endpoints.

use harbor_define::{Endpoint, RestMethod};

use super::{endpoint, log_filters, project_id};

pub(super) fn endpoints() -> Vec<Endpoint> {
    let mut project_logs = vec![project_id("Relevant project ID")];
    project_logs.extend(log_filters());

    vec![
        endpoint(
            "GetProjectsByProjectIdLogs",
            RestMethod::Get,
            "/projects/{project_id}/logs",
            "Search a project's access logs by operation and time range.",
            project_logs,
        ),
        endpoint(
            "GetLogs",
            RestMethod::Get,
            "/logs",
            "Recent operation logs of the projects the user belongs to.",
            log_filters(),
        ),
    ]
}
