//! One named method per operation.
//!
//! Each method forwards to [`HarborClient::call`] with its operation id, so
//! the descriptor table stays the single source of request shape.

use serde_json::Value;

use crate::client::HarborClient;
use crate::error::HarborError;
use crate::params::Params;
use crate::transport::HttpTransport;

macro_rules! operations {
    ($($method:ident => $id:literal,)+) => {
        /// Ids of every operation with a named method, in table order.
        pub const OPERATION_IDS: &[&str] = &[$($id),+];

        impl<T: HttpTransport> HarborClient<T> {
            $(
                #[doc = concat!("Runs the `", $id, "` operation.")]
                ///
                /// ## Errors
                ///
                /// See [`HarborClient::call`].
                pub async fn $method(&self, params: Params) -> Result<Value, HarborError> {
                    self.call($id, params).await
                }
            )+
        }
    };
}

operations! {
    get_search => "GetSearch",
    get_projects => "GetProjects",
    head_projects => "HeadProjects",
    post_projects => "PostProjects",
    get_projects_by_project_id => "GetProjectsByProjectId",
    put_projects_by_project_id => "PutProjectsByProjectId",
    delete_projects_by_project_id => "DeleteProjectsByProjectId",
    get_projects_by_project_id_metadatas => "GetProjectsByProjectIdMetadatas",
    post_projects_by_project_id_metadatas => "PostProjectsByProjectIdMetadatas",
    get_projects_by_project_id_metadatas_by_meta_name => "GetProjectsByProjectIdMetadatasByMetaName",
    put_projects_by_project_id_metadatas_by_meta_name => "PutProjectsByProjectIdMetadatasByMetaName",
    delete_projects_by_project_id_metadatas_by_meta_name => "DeleteProjectsByProjectIdMetadatasByMetaName",
    get_projects_by_project_id_members => "GetProjectsByProjectIdMembers",
    post_projects_by_project_id_members => "PostProjectsByProjectIdMembers",
    get_projects_by_project_id_members_by_user_id => "GetProjectsByProjectIdMembersByUserId",
    put_projects_by_project_id_members_by_user_id => "PutProjectsByProjectIdMembersByUserId",
    delete_projects_by_project_id_members_by_user_id => "DeleteProjectsByProjectIdMembersByUserId",
    get_users => "GetUsers",
    post_users => "PostUsers",
    get_users_current => "GetUsersCurrent",
    get_users_by_user_id => "GetUsersByUserId",
    put_users_by_user_id => "PutUsersByUserId",
    delete_users_by_user_id => "DeleteUsersByUserId",
    put_users_by_user_id_password => "PutUsersByUserIdPassword",
    put_users_by_user_id_sysadmin => "PutUsersByUserIdSysadmin",
    get_repositories => "GetRepositories",
    delete_repositories_by_repo_name => "DeleteRepositoriesByRepoName",
    get_repositories_by_repo_name_tags_by_tag => "GetRepositoriesByRepoNameTagsByTag",
    delete_repositories_by_repo_name_tags_by_tag => "DeleteRepositoriesByRepoNameTagsByTag",
    get_repositories_by_repo_name_tags => "GetRepositoriesByRepoNameTags",
    get_repositories_by_repo_name_tags_by_tag_manifest => "GetRepositoriesByRepoNameTagsByTagManifest",
    post_repositories_by_repo_name_tags_by_tag_scan => "PostRepositoriesByRepoNameTagsByTagScan",
    post_repositories_scan_all => "PostRepositoriesScanAll",
    get_repositories_by_repo_name_tags_by_tag_vulnerability_details => "GetRepositoriesByRepoNameTagsByTagVulnerabilityDetails",
    get_repositories_by_repo_name_signatures => "GetRepositoriesByRepoNameSignatures",
    get_repositories_top => "GetRepositoriesTop",
    get_projects_by_project_id_logs => "GetProjectsByProjectIdLogs",
    get_logs => "GetLogs",
    get_jobs_replication => "GetJobsReplication",
    delete_jobs_replication_by_id => "DeleteJobsReplicationById",
    get_jobs_replication_by_id_log => "GetJobsReplicationByIdLog",
    get_jobs_scan_by_id_log => "GetJobsScanByIdLog",
    get_policies_replication => "GetPoliciesReplication",
    post_policies_replication => "PostPoliciesReplication",
    get_policies_replication_by_id => "GetPoliciesReplicationById",
    put_policies_replication_by_id => "PutPoliciesReplicationById",
    put_policies_replication_by_id_enablement => "PutPoliciesReplicationByIdEnablement",
    get_targets => "GetTargets",
    post_targets => "PostTargets",
    post_targets_ping => "PostTargetsPing",
    post_targets_by_id_ping => "PostTargetsByIdPing",
    put_targets_by_id => "PutTargetsById",
    get_targets_by_id => "GetTargetsById",
    delete_targets_by_id => "DeleteTargetsById",
    get_targets_by_id_policies => "GetTargetsByIdPolicies",
    get_statistics => "GetStatistics",
    post_internal_syncregistry => "PostInternalSyncregistry",
    get_systeminfo => "GetSysteminfo",
    get_systeminfo_volumes => "GetSysteminfoVolumes",
    get_systeminfo_getcert => "GetSysteminfoGetcert",
    post_ldap_ping => "PostLdapPing",
    post_ldap_users_search => "PostLdapUsersSearch",
    post_ldap_users_import => "PostLdapUsersImport",
    get_configurations => "GetConfigurations",
    put_configurations => "PutConfigurations",
    post_configurations_reset => "PostConfigurationsReset",
    post_email_ping => "PostEmailPing",
}

#[cfg(test)]
mod tests {
    use super::*;
    use harbor_definitions::define_harbor_api;
    use serde_json::json;
    use std::collections::HashSet;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn every_table_entry_has_a_method() {
        let api = define_harbor_api();
        let table: Vec<&str> = api.endpoints.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(OPERATION_IDS, table.as_slice());
    }

    #[test]
    fn ids_are_unique() {
        let unique: HashSet<_> = OPERATION_IDS.iter().collect();
        assert_eq!(unique.len(), OPERATION_IDS.len());
    }

    #[tokio::test]
    async fn named_method_dispatches_by_id() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/systeminfo/volumes"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"storage": {"total": 100, "free": 40}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let client = HarborClient::new(Some(&format!("{}/api", server.uri()))).unwrap();
        let body = client.get_systeminfo_volumes(Params::new()).await.unwrap();
        assert_eq!(body["storage"]["free"], 40);
    }

    #[tokio::test]
    async fn named_method_checks_required_params() {
        let client = HarborClient::new(None).unwrap();
        let err = client
            .put_users_by_user_id_password(Params::new().with("userId", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, HarborError::MissingParameter { ref name } if name == "password"));
    }
}
