//! Harbor registry REST API definition.
//!
//! Harbor exposes its management API under `http(s)://<host>/api`. Session
//! login lives outside that prefix at `/login` and `/log_out`; see the
//! `harbor-client` session module.
//!
//! ## Endpoint Categories
//!
//! | Category | Key Endpoints |
//! |----------|--------------|
//! | **Search** | `/search` |
//! | **Projects** | `/projects`, `/projects/{project_id}`, `/projects/{project_id}/members/` |
//! | **Users** | `/users`, `/users/current`, `/users/{user_id}` |
//! | **Repositories** | `/repositories`, `/repositories/{repo_name}/tags/{tag}` |
//! | **Logs** | `/logs`, `/projects/{project_id}/logs` |
//! | **Jobs** | `/jobs/replication`, `/jobs/scan/{id}/log` |
//! | **Policies** | `/policies/replication` |
//! | **Targets** | `/targets`, `/targets/{id}` |
//! | **System** | `/statistics`, `/systeminfo`, `/internal/syncregistry` |
//! | **LDAP** | `/ldap/ping`, `/ldap/users/search` |
//! | **Configurations** | `/configurations` |
//! | **Email** | `/email/ping` |
//!
//! ## Resources
//!
//! - [Harbor API reference](https://github.com/goharbor/harbor/blob/release-1.2.0/docs/swagger.yaml)

mod configurations;
mod email;
mod jobs;
mod ldap;
mod logs;
mod policies;
mod projects;
mod repositories;
mod search;
mod system;
mod targets;
mod users;

use harbor_define::{Endpoint, Param, ParamKind, RestApi, RestMethod};

/// Default API root used when a client is built without a domain.
pub const DEFAULT_BASE_URL: &str = "http://localhost/api";

/// Creates the Harbor REST API definition.
///
/// ## Parameter Naming
///
/// Callers use camelCase names (`projectId`, `pageSize`); the wire uses
/// snake_case (`project_id`, `page_size`). Each [`Param`] records both.
///
/// ## Examples
///
/// ```rust
/// use harbor_definitions::define_harbor_api;
///
/// let api = define_harbor_api();
/// let list = api.endpoint("GetProjects").unwrap();
/// assert_eq!(list.path, "/projects");
/// assert_eq!(list.param("pageSize").unwrap().wire_name, "page_size");
/// ```
pub fn define_harbor_api() -> RestApi {
    let endpoints = [
        search::endpoints(),
        projects::endpoints(),
        users::endpoints(),
        repositories::endpoints(),
        logs::endpoints(),
        jobs::endpoints(),
        policies::endpoints(),
        targets::endpoints(),
        system::endpoints(),
        ldap::endpoints(),
        configurations::endpoints(),
        email::endpoints(),
    ]
    .concat();

    RestApi {
        name: "Harbor".to_string(),
        description: "Harbor container registry management API".to_string(),
        base_url: DEFAULT_BASE_URL.to_string(),
        docs_url: Some(
            "https://github.com/goharbor/harbor/blob/release-1.2.0/docs/swagger.yaml".to_string(),
        ),
        headers: vec![
            (
                "Accept".to_string(),
                "application/json, text/plain".to_string(),
            ),
            (
                "Content-Type".to_string(),
                "text/plain,application/json".to_string(),
            ),
        ],
        endpoints,
    }
}

/// Shorthand for an endpoint literal.
fn endpoint(
    id: &str,
    method: RestMethod,
    path: &str,
    description: &str,
    params: Vec<Param>,
) -> Endpoint {
    Endpoint {
        id: id.to_string(),
        method,
        path: path.to_string(),
        description: description.to_string(),
        params,
    }
}

// =============================================================================
// Shared parameters
// =============================================================================

fn project_id(description: &str) -> Param {
    Param::path("projectId", "project_id", ParamKind::Integer, description)
}

fn user_id(description: &str) -> Param {
    Param::path("userId", "user_id", ParamKind::Integer, description)
}

fn repo_name(description: &str) -> Param {
    Param::path("repoName", "repo_name", ParamKind::String, description)
}

fn tag(description: &str) -> Param {
    Param::path("tag", "tag", ParamKind::String, description)
}

fn id(description: &str) -> Param {
    Param::path("id", "id", ParamKind::Integer, description)
}

fn page() -> Param {
    Param::query("page", "page", ParamKind::Integer, "The page number, default is 1.")
}

fn page_size() -> Param {
    Param::query(
        "pageSize",
        "page_size",
        ParamKind::Integer,
        "The size of per page, default is 10, maximum is 100.",
    )
}

/// Filters shared by the global and per-project access log endpoints.
fn log_filters() -> Vec<Param> {
    vec![
        Param::query("username", "username", ParamKind::String, "Username of the operator."),
        Param::query("repository", "repository", ParamKind::String, "The name of repository"),
        Param::query("tag", "tag", ParamKind::String, "The name of tag"),
        Param::query("operation", "operation", ParamKind::String, "The operation"),
        Param::query(
            "beginTimestamp",
            "begin_timestamp",
            ParamKind::String,
            "The begin timestamp",
        ),
        Param::query(
            "endTimestamp",
            "end_timestamp",
            ParamKind::String,
            "The end timestamp",
        ),
        page(),
        page_size(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbor_define::ParamLocation;

    fn find(id: &str) -> Endpoint {
        define_harbor_api()
            .endpoint(id)
            .cloned()
            .unwrap_or_else(|| panic!("{id} not defined"))
    }

    // =========================================================================
    // Table-wide checks
    // =========================================================================

    #[test]
    fn api_has_correct_metadata() {
        let api = define_harbor_api();
        assert_eq!(api.name, "Harbor");
        assert_eq!(api.base_url, "http://localhost/api");
        assert!(api.docs_url.is_some());
    }

    #[test]
    fn api_sends_fixed_accept_and_content_type() {
        let api = define_harbor_api();
        assert!(api.headers.contains(&(
            "Accept".to_string(),
            "application/json, text/plain".to_string()
        )));
        assert!(api.headers.contains(&(
            "Content-Type".to_string(),
            "text/plain,application/json".to_string()
        )));
    }

    #[test]
    fn api_has_expected_endpoint_count() {
        assert_eq!(define_harbor_api().endpoints.len(), 67);
    }

    #[test]
    fn table_passes_validation() {
        assert_eq!(define_harbor_api().validate(), Ok(()));
    }

    #[test]
    fn every_endpoint_has_a_description() {
        for ep in define_harbor_api().endpoints {
            assert!(!ep.description.is_empty(), "{} lacks a description", ep.id);
        }
    }

    #[test]
    fn all_path_params_are_required() {
        for ep in define_harbor_api().endpoints {
            for p in ep.path_params() {
                assert!(p.required, "{}.{} should be required", ep.id, p.name);
            }
        }
    }

    #[test]
    fn wire_names_are_snake_case() {
        for ep in define_harbor_api().endpoints {
            for p in ep.params.iter().filter(|p| p.location != ParamLocation::Body) {
                assert!(
                    !p.wire_name.chars().any(|c| c.is_ascii_uppercase()),
                    "{}.{} has wire name {}",
                    ep.id,
                    p.name,
                    p.wire_name
                );
            }
        }
    }

    // =========================================================================
    // Spot checks
    // =========================================================================

    #[test]
    fn list_projects_maps_page_size() {
        let ep = find("GetProjects");
        assert_eq!(ep.method, RestMethod::Get);
        let wire: Vec<_> = ep.query_params().map(|p| p.wire_name.as_str()).collect();
        assert_eq!(wire, vec!["name", "public", "owner", "page", "page_size"]);
        assert_eq!(ep.required_params().count(), 0);
    }

    #[test]
    fn head_projects_requires_project_name() {
        let ep = find("HeadProjects");
        assert_eq!(ep.method, RestMethod::Head);
        let p = ep.param("projectName").unwrap();
        assert!(p.required);
        assert_eq!(p.wire_name, "project_name");
    }

    #[test]
    fn delete_target_requires_id() {
        let ep = find("DeleteTargetsById");
        assert_eq!(ep.method, RestMethod::Delete);
        assert_eq!(ep.path, "/targets/{id}");
        assert_eq!(ep.required_params().collect::<Vec<_>>(), vec!["id"]);
    }

    #[test]
    fn members_paths_keep_trailing_slash() {
        assert_eq!(
            find("GetProjectsByProjectIdMembers").path,
            "/projects/{project_id}/members/"
        );
        assert_eq!(find("GetTargetsByIdPolicies").path, "/targets/{id}/policies/");
    }

    #[test]
    fn optional_bodies() {
        for id in [
            "PostProjectsByProjectIdMembers",
            "PutProjectsByProjectIdMembersByUserId",
            "PostLdapPing",
            "PostLdapUsersSearch",
            "PostEmailPing",
        ] {
            let body = find(id).body_param().cloned();
            assert!(matches!(body, Some(p) if !p.required), "{id}");
        }
    }

    #[test]
    fn required_bodies() {
        for (id, body) in [
            ("PostProjects", "project"),
            ("PutProjectsByProjectId", "project"),
            ("PostUsers", "user"),
            ("PutUsersByUserIdSysadmin", "hasAdminRole"),
            ("PostPoliciesReplication", "policyinfo"),
            ("PutTargetsById", "repoTarget"),
            ("PostLdapUsersImport", "uidList"),
            ("PutConfigurations", "configurations"),
        ] {
            let ep = find(id);
            let p = ep.body_param().unwrap();
            assert_eq!(p.name, body, "{id}");
            assert!(p.required, "{id}");
        }
    }

    #[test]
    fn replication_jobs_require_policy_id() {
        let ep = find("GetJobsReplication");
        assert_eq!(ep.required_params().collect::<Vec<_>>(), vec!["policyId"]);
        assert_eq!(ep.param("endTime").unwrap().wire_name, "end_time");
        assert_eq!(ep.param("startTime").unwrap().wire_name, "start_time");
    }

    #[test]
    fn global_and_project_logs_share_filters() {
        let global: Vec<_> = find("GetLogs").query_params().cloned().collect();
        let project: Vec<_> = find("GetProjectsByProjectIdLogs")
            .query_params()
            .cloned()
            .collect();
        assert_eq!(global, project);
    }
}
