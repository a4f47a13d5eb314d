//! Project, project metadata, and project member endpoints.
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | GetProjects | GET | /projects |
//! | HeadProjects | HEAD | /projects |
//! | PostProjects | POST | /projects |
//! | GetProjectsByProjectId | GET | /projects/{project_id} |
//! | PutProjectsByProjectId | PUT | /projects/{project_id} |
//! | DeleteProjectsByProjectId | DELETE | /projects/{project_id} |
//! | GetProjectsByProjectIdMetadatas | GET | /projects/{project_id}/metadatas |
//! | PostProjectsByProjectIdMetadatas | POST | /projects/{project_id}/metadatas |
//! | GetProjectsByProjectIdMetadatasByMetaName | GET | /projects/{project_id}/metadatas/{meta_name} |
//! | PutProjectsByProjectIdMetadatasByMetaName | PUT | /projects/{project_id}/metadatas/{meta_name} |
//! | DeleteProjectsByProjectIdMetadatasByMetaName | DELETE | /projects/{project_id}/metadatas/{meta_name} |
//! | GetProjectsByProjectIdMembers | GET | /projects/{project_id}/members/ |
//! | PostProjectsByProjectIdMembers | POST | /projects/{project_id}/members/ |
//! | GetProjectsByProjectIdMembersByUserId | GET | /projects/{project_id}/members/{user_id} |
//! | PutProjectsByProjectIdMembersByUserId | PUT | /projects/{project_id}/members/{user_id} |
//! | DeleteProjectsByProjectIdMembersByUserId | DELETE | /projects/{project_id}/members/{user_id} |
//!
//! The project access log endpoint lives in the `logs` module.

use harbor_define::{Endpoint, Param, ParamKind, RestMethod};

use super::{endpoint, page, page_size, project_id, user_id};

fn meta_name() -> Param {
    Param::path("metaName", "meta_name", ParamKind::String, "The name of metadata.")
}

pub(super) fn endpoints() -> Vec<Endpoint> {
    vec![
        // =====================================================================
        // Projects
        // =====================================================================
        endpoint(
            "GetProjects",
            RestMethod::Get,
            "/projects",
            "List projects created by Harbor, optionally filtered by project name.",
            vec![
                Param::query("name", "name", ParamKind::String, "The name of project."),
                Param::query(
                    "public",
                    "public",
                    ParamKind::Boolean,
                    "The project is public or private.",
                ),
                Param::query("owner", "owner", ParamKind::String, "The name of project owner."),
                page(),
                page_size(),
            ],
        ),
        endpoint(
            "HeadProjects",
            RestMethod::Head,
            "/projects",
            "Check whether a project name is already taken.",
            vec![
                Param::query(
                    "projectName",
                    "project_name",
                    ParamKind::String,
                    "Project name for checking exists.",
                )
                .required(),
            ],
        ),
        endpoint(
            "PostProjects",
            RestMethod::Post,
            "/projects",
            "Create a new project.",
            vec![Param::body("project", "New created project.").required()],
        ),
        endpoint(
            "GetProjectsByProjectId",
            RestMethod::Get,
            "/projects/{project_id}",
            "Return a project by project ID.",
            vec![project_id("Project ID for filtering results.")],
        ),
        endpoint(
            "PutProjectsByProjectId",
            RestMethod::Put,
            "/projects/{project_id}",
            "Update the properties of a project.",
            vec![
                project_id("Selected project ID."),
                Param::body("project", "Updates of project.").required(),
            ],
        ),
        endpoint(
            "DeleteProjectsByProjectId",
            RestMethod::Delete,
            "/projects/{project_id}",
            "Delete a project by project ID.",
            vec![project_id("Project ID of project which will be deleted.")],
        ),
        // =====================================================================
        // Metadata
        // =====================================================================
        endpoint(
            "GetProjectsByProjectIdMetadatas",
            RestMethod::Get,
            "/projects/{project_id}/metadatas",
            "Return the metadata of a project.",
            vec![project_id("The ID of project.")],
        ),
        endpoint(
            "PostProjectsByProjectIdMetadatas",
            RestMethod::Post,
            "/projects/{project_id}/metadatas",
            "Add metadata to a project.",
            vec![
                project_id("Selected project ID."),
                Param::body("metadata", "The metadata of project.").required(),
            ],
        ),
        endpoint(
            "GetProjectsByProjectIdMetadatasByMetaName",
            RestMethod::Get,
            "/projects/{project_id}/metadatas/{meta_name}",
            "Return one metadata entry of a project.",
            vec![project_id("Project ID for filtering results."), meta_name()],
        ),
        endpoint(
            "PutProjectsByProjectIdMetadatasByMetaName",
            RestMethod::Put,
            "/projects/{project_id}/metadatas/{meta_name}",
            "Update one metadata entry of a project.",
            vec![project_id("The ID of project."), meta_name()],
        ),
        endpoint(
            "DeleteProjectsByProjectIdMetadatasByMetaName",
            RestMethod::Delete,
            "/projects/{project_id}/metadatas/{meta_name}",
            "Delete one metadata entry of a project.",
            vec![project_id("The ID of project."), meta_name()],
        ),
        // =====================================================================
        // Members
        // =====================================================================
        endpoint(
            "GetProjectsByProjectIdMembers",
            RestMethod::Get,
            "/projects/{project_id}/members/",
            "List the role members of a project.",
            vec![project_id("Relevant project ID.")],
        ),
        endpoint(
            "PostProjectsByProjectIdMembers",
            RestMethod::Post,
            "/projects/{project_id}/members/",
            "Add a role member to a project.",
            vec![
                project_id("Relevant project ID."),
                Param::body("roles", "Role members for adding to relevant project."),
            ],
        ),
        endpoint(
            "GetProjectsByProjectIdMembersByUserId",
            RestMethod::Get,
            "/projects/{project_id}/members/{user_id}",
            "Return the roles a user holds in a project.",
            vec![
                project_id("Relevant project ID."),
                user_id("Relevant user ID."),
            ],
        ),
        endpoint(
            "PutProjectsByProjectIdMembersByUserId",
            RestMethod::Put,
            "/projects/{project_id}/members/{user_id}",
            "Update the roles a user holds in a project.",
            vec![
                project_id("Relevant project ID."),
                user_id("Relevant user ID."),
                Param::body("roles", "Updates of roles to current member."),
            ],
        ),
        endpoint(
            "DeleteProjectsByProjectIdMembersByUserId",
            RestMethod::Delete,
            "/projects/{project_id}/members/{user_id}",
            "Remove a user from a project.",
            vec![
                project_id("Relevant project ID."),
                user_id("Relevant user ID."),
            ],
        ),
    ]
}
