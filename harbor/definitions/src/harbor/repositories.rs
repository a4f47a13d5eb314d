//! Repository, tag, scan, and signature endpoints.
//!
//! Repository names include their project (`library/nginx`) and are
//! substituted into paths without escaping.

use harbor_define::{Endpoint, Param, ParamKind, RestMethod};

use super::{endpoint, page, page_size, repo_name, tag};

pub(super) fn endpoints() -> Vec<Endpoint> {
    vec![
        endpoint(
            "GetRepositories",
            RestMethod::Get,
            "/repositories",
            "Search repositories of a project, optionally filtered by name.",
            vec![
                Param::query(
                    "projectId",
                    "project_id",
                    ParamKind::Integer,
                    "Relevant project ID.",
                )
                .required(),
                Param::query("q", "q", ParamKind::String, "Repo name for filtering results."),
                page(),
                page_size(),
            ],
        ),
        endpoint(
            "DeleteRepositoriesByRepoName",
            RestMethod::Delete,
            "/repositories/{repo_name}",
            "Delete a repository by name.",
            vec![repo_name("The name of repository which will be deleted.")],
        ),
        endpoint(
            "GetRepositoriesByRepoNameTagsByTag",
            RestMethod::Get,
            "/repositories/{repo_name}/tags/{tag}",
            "Return one tag of a repository, including its signature when Notary is deployed.",
            vec![
                repo_name("Relevant repository name."),
                tag("Tag of the repository."),
            ],
        ),
        endpoint(
            "DeleteRepositoriesByRepoNameTagsByTag",
            RestMethod::Delete,
            "/repositories/{repo_name}/tags/{tag}",
            "Delete one tag of a repository.",
            vec![
                repo_name("The name of repository which will be deleted."),
                tag("Tag of a repository."),
            ],
        ),
        endpoint(
            "GetRepositoriesByRepoNameTags",
            RestMethod::Get,
            "/repositories/{repo_name}/tags",
            "List the tags of a repository.",
            vec![repo_name("Relevant repository name.")],
        ),
        endpoint(
            "GetRepositoriesByRepoNameTagsByTagManifest",
            RestMethod::Get,
            "/repositories/{repo_name}/tags/{tag}/manifest",
            "Return the manifest of a tag.",
            vec![
                repo_name("Repository name"),
                tag("Tag name"),
                Param::query(
                    "version",
                    "version",
                    ParamKind::String,
                    "The version of manifest, \"v1\" or \"v2\", default is \"v2\"",
                ),
            ],
        ),
        endpoint(
            "PostRepositoriesByRepoNameTagsByTagScan",
            RestMethod::Post,
            "/repositories/{repo_name}/tags/{tag}/scan",
            "Trigger a vulnerability scan of an image. Project admins only.",
            vec![repo_name("Repository name"), tag("Tag name")],
        ),
        endpoint(
            "PostRepositoriesScanAll",
            RestMethod::Post,
            "/repositories/scanAll",
            "Scan every image in the registry in the background.",
            vec![Param::query(
                "projectId",
                "project_id",
                ParamKind::Integer,
                "Only scan images under this project.",
            )],
        ),
        endpoint(
            "GetRepositoriesByRepoNameTagsByTagVulnerabilityDetails",
            RestMethod::Get,
            "/repositories/{repo_name}/tags/{tag}/vulnerability/details",
            "Return the vulnerabilities found by the last successful scan.",
            vec![repo_name("Repository name"), tag("Tag name")],
        ),
        endpoint(
            "GetRepositoriesByRepoNameSignatures",
            RestMethod::Get,
            "/repositories/{repo_name}/signatures",
            "Return the Notary signatures of a repository.",
            vec![repo_name("repository name.")],
        ),
        endpoint(
            "GetRepositoriesTop",
            RestMethod::Get,
            "/repositories/top",
            "List the most popular public repositories.",
            vec![Param::query(
                "count",
                "count",
                ParamKind::Integer,
                "The number of the requested public repositories, default is 10.",
            )],
        ),
    ]
}
