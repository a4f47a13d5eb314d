//! User account endpoints.

use harbor_define::{Endpoint, Param, ParamKind, RestMethod};

use super::{endpoint, page, page_size, user_id};

pub(super) fn endpoints() -> Vec<Endpoint> {
    vec![
        endpoint(
            "GetUsers",
            RestMethod::Get,
            "/users",
            "Search registered users. Administrator only.",
            vec![
                Param::query(
                    "username",
                    "username",
                    ParamKind::String,
                    "Username for filtering results.",
                ),
                Param::query("email", "email", ParamKind::String, "Email for filtering results."),
                page(),
                page_size(),
            ],
        ),
        endpoint(
            "PostUsers",
            RestMethod::Post,
            "/users",
            "Create a user if it does not already exist.",
            vec![Param::body("user", "New created user.").required()],
        ),
        endpoint(
            "GetUsersCurrent",
            RestMethod::Get,
            "/users/current",
            "Return the user of the current session.",
            vec![],
        ),
        endpoint(
            "GetUsersByUserId",
            RestMethod::Get,
            "/users/{user_id}",
            "Return a user's profile.",
            vec![user_id("Registered user ID")],
        ),
        endpoint(
            "PutUsersByUserId",
            RestMethod::Put,
            "/users/{user_id}",
            "Update a user's profile.",
            vec![
                user_id("Registered user ID"),
                Param::body("profile", "Only email, realname and comment can be modified.")
                    .required(),
            ],
        ),
        endpoint(
            "DeleteUsersByUserId",
            RestMethod::Delete,
            "/users/{user_id}",
            "Mark a user as removed. The record stays in the database.",
            vec![user_id("User ID for marking as to be removed.")],
        ),
        endpoint(
            "PutUsersByUserIdPassword",
            RestMethod::Put,
            "/users/{user_id}/password",
            "Change a user's password. Non-admins may only change their own.",
            vec![
                user_id("Registered user ID."),
                Param::body("password", "Password to be updated.").required(),
            ],
        ),
        endpoint(
            "PutUsersByUserIdSysadmin",
            RestMethod::Put,
            "/users/{user_id}/sysadmin",
            "Grant or revoke the administrator role.",
            vec![
                user_id("Registered user ID"),
                Param::body("hasAdminRole", "Toggle a user to admin or not.").required(),
            ],
        ),
    ]
}
