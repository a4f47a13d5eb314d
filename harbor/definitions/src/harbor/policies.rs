//! Replication policy endpoints.

use harbor_define::{Endpoint, Param, ParamKind, RestMethod};

use super::{endpoint, id};

pub(super) fn endpoints() -> Vec<Endpoint> {
    vec![
        endpoint(
            "GetPoliciesReplication",
            RestMethod::Get,
            "/policies/replication",
            "List replication policies, optionally filtered by name and project.",
            vec![
                Param::query(
                    "name",
                    "name",
                    ParamKind::String,
                    "The replication's policy name.",
                ),
                Param::query(
                    "projectId",
                    "project_id",
                    ParamKind::Integer,
                    "Relevant project ID.",
                ),
            ],
        ),
        endpoint(
            "PostPoliciesReplication",
            RestMethod::Post,
            "/policies/replication",
            "Create a replication policy. Enabled policies start replicating at once.",
            vec![Param::body("policyinfo", "Create new policy.").required()],
        ),
        endpoint(
            "GetPoliciesReplicationById",
            RestMethod::Get,
            "/policies/replication/{id}",
            "Return a replication policy.",
            vec![id("policy ID")],
        ),
        endpoint(
            "PutPoliciesReplicationById",
            RestMethod::Put,
            "/policies/replication/{id}",
            "Update a policy's name, description, target, and enablement.",
            vec![
                id("policy ID"),
                Param::body("policyupdate", "Update policy name, description, target and enablement.")
                    .required(),
            ],
        ),
        endpoint(
            "PutPoliciesReplicationByIdEnablement",
            RestMethod::Put,
            "/policies/replication/{id}/enablement",
            "Enable or disable a replication policy.",
            vec![
                id("policy ID"),
                Param::body("enabledflag", "The policy enablement flag.").required(),
            ],
        ),
    ]
}
