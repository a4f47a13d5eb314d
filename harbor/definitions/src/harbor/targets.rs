//! Replication target endpoints.

use harbor_define::{Endpoint, Param, ParamKind, RestMethod};

use super::{endpoint, id};

fn target_id() -> Param {
    id("The replication's target ID.")
}

pub(super) fn endpoints() -> Vec<Endpoint> {
    vec![
        endpoint(
            "GetTargets",
            RestMethod::Get,
            "/targets",
            "List replication targets, optionally filtered by name.",
            vec![Param::query(
                "name",
                "name",
                ParamKind::String,
                "The replication's target name.",
            )],
        ),
        endpoint(
            "PostTargets",
            RestMethod::Post,
            "/targets",
            "Create a replication target.",
            vec![Param::body("reptarget", "New created replication target.").required()],
        ),
        endpoint(
            "PostTargetsPing",
            RestMethod::Post,
            "/targets/ping",
            "Check that a target is reachable and its credential is valid.",
            vec![Param::body("target", "Target endpoint and credential to ping.").required()],
        ),
        endpoint(
            "PostTargetsByIdPing",
            RestMethod::Post,
            "/targets/{id}/ping",
            "Ping a saved replication target.",
            vec![target_id()],
        ),
        endpoint(
            "PutTargetsById",
            RestMethod::Put,
            "/targets/{id}",
            "Update a replication target.",
            vec![
                target_id(),
                Param::body("repoTarget", "Updates of replication's target.").required(),
            ],
        ),
        endpoint(
            "GetTargetsById",
            RestMethod::Get,
            "/targets/{id}",
            "Return a replication target.",
            vec![target_id()],
        ),
        endpoint(
            "DeleteTargetsById",
            RestMethod::Delete,
            "/targets/{id}",
            "Delete a replication target.",
            vec![target_id()],
        ),
        endpoint(
            "GetTargetsByIdPolicies",
            RestMethod::Get,
            "/targets/{id}/policies/",
            "List the policies that replicate to a target.",
            vec![target_id()],
        ),
    ]
}
