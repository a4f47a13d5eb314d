//! Statistics, system info, and registry sync.

use harbor_define::{Endpoint, RestMethod};

use super::endpoint;

pub(super) fn endpoints() -> Vec<Endpoint> {
    vec![
        endpoint(
            "GetStatistics",
            RestMethod::Get,
            "/statistics",
            "Project and repository counts visible to the current user.",
            vec![],
        ),
        endpoint(
            "PostInternalSyncregistry",
            RestMethod::Post,
            "/internal/syncregistry",
            "Sync all repositories of the registry with the database.",
            vec![],
        ),
        endpoint(
            "GetSysteminfo",
            RestMethod::Get,
            "/systeminfo",
            "General system info. Available to anonymous requests.",
            vec![],
        ),
        endpoint(
            "GetSysteminfoVolumes",
            RestMethod::Get,
            "/systeminfo/volumes",
            "System volume info. Admin only.",
            vec![],
        ),
        endpoint(
            "GetSysteminfoGetcert",
            RestMethod::Get,
            "/systeminfo/getcert",
            "Download the default root certificate (OVA deployments). Admin only.",
            vec![],
        ),
    ]
}
