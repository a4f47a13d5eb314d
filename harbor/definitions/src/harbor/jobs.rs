//! Replication and scan job endpoints.

use harbor_define::{Endpoint, Param, ParamKind, RestMethod};

use super::{endpoint, id, page, page_size};

pub(super) fn endpoints() -> Vec<Endpoint> {
    vec![
        endpoint(
            "GetJobsReplication",
            RestMethod::Get,
            "/jobs/replication",
            "List replication jobs of a policy. Without a time range, the last 10 days.",
            vec![
                Param::query(
                    "policyId",
                    "policy_id",
                    ParamKind::Integer,
                    "The ID of the policy that triggered this job.",
                )
                .required(),
                Param::query("num", "num", ParamKind::Integer, "The return list length number."),
                Param::query(
                    "endTime",
                    "end_time",
                    ParamKind::Integer,
                    "The end time of jobs done. (Timestamp)",
                ),
                Param::query(
                    "startTime",
                    "start_time",
                    ParamKind::Integer,
                    "The start time of jobs. (Timestamp)",
                ),
                Param::query(
                    "repository",
                    "repository",
                    ParamKind::String,
                    "Filter jobs by repository name.",
                ),
                Param::query("status", "status", ParamKind::String, "Filter jobs by status."),
                page(),
                page_size(),
            ],
        ),
        endpoint(
            "DeleteJobsReplicationById",
            RestMethod::Delete,
            "/jobs/replication/{id}",
            "Remove a job from the job service.",
            vec![id("Delete job ID.")],
        ),
        endpoint(
            "GetJobsReplicationByIdLog",
            RestMethod::Get,
            "/jobs/replication/{id}/log",
            "Return the log of a replication job.",
            vec![id("Relevant job ID")],
        ),
        endpoint(
            "GetJobsScanByIdLog",
            RestMethod::Get,
            "/jobs/scan/{id}/log",
            "Return the log of a scan job.",
            vec![id("Relevant job ID")],
        ),
    ]
}
