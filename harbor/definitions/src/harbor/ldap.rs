use harbor_define::{Endpoint, Param, ParamKind, RestMethod};

use super::endpoint;

pub(super) fn endpoints() -> Vec<Endpoint> {
    vec![
        endpoint(
            "PostLdapPing",
            RestMethod::Post,
            "/ldap/ping",
            "Ping the LDAP service with the given or stored configuration.",
            vec![Param::body("ldapconf", "LDAP configuration to test.")],
        ),
        endpoint(
            "PostLdapUsersSearch",
            RestMethod::Post,
            "/ldap/users/search",
            "Search LDAP users with the given or stored configuration.",
            vec![
                Param::query("username", "username", ParamKind::String, "Username filter."),
                Param::body("ldapConf", "LDAP configuration to search with."),
            ],
        ),
        endpoint(
            "PostLdapUsersImport",
            RestMethod::Post,
            "/ldap/users/import",
            "Import the selected LDAP users into Harbor.",
            vec![Param::body("uidList", "The uid list of users to import.").required()],
        ),
    ]
}
