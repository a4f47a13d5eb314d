//! Cookie-based session handshake.
//!
//! Harbor's UI endpoints hand out a `beegosessionID` cookie on `/login`.
//! A [`Session`] is an explicit value: attach it to a client with
//! [`HarborClient::with_session`] and end it with [`HarborClient::logout`].

use std::fmt;

use bytes::Bytes;
use harbor_define::RestMethod;
use tracing::{debug, instrument};
use url::form_urlencoded;

use crate::client::HarborClient;
use crate::error::{ConfigError, HarborError, SessionError};
use crate::transport::{HttpRequest, HttpTransport};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "beegosessionID";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Login credentials. The password never appears in `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    /// Username or email.
    pub principal: String,
    /// Password.
    pub password: String,
}

impl Credentials {
    /// Creates credentials.
    pub fn new(principal: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            principal: principal.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("principal", &self.principal)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// An authenticated session id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Session {
    id: String,
}

impl Session {
    /// Wraps a session id captured earlier.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The raw cookie value.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// `beegosessionID=<id>`, ready for a `Cookie` header.
    pub fn cookie(&self) -> String {
        format!("{SESSION_COOKIE}={}", self.id)
    }
}

/// Extracts the session id from one `Set-Cookie` header value.
fn session_id_from_set_cookie(header: &str) -> Option<&str> {
    let pair = header.split(';').next()?.trim();
    let (name, value) = pair.split_once('=')?;
    (name == SESSION_COOKIE && !value.is_empty()).then_some(value)
}

impl<T: HttpTransport> HarborClient<T> {
    /// Logs in and returns the session the server issued.
    ///
    /// ## Errors
    ///
    /// - [`SessionError::LoginRejected`] on any status but 200.
    /// - [`SessionError::MissingCookie`] if no `beegosessionID` cookie is set.
    /// - [`HarborError::Http`] on transport failure.
    #[instrument(name = "harbor_login", skip_all, fields(principal = %credentials.principal))]
    pub async fn login(&self, credentials: &Credentials) -> Result<Session, HarborError> {
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair("principal", &credentials.principal)
            .append_pair("password", &credentials.password)
            .append_pair("verify", "false")
            .finish();

        let request = HttpRequest {
            method: RestMethod::Post,
            url: self.session_base().join("login").map_err(ConfigError::from)?,
            headers: vec![("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string())],
            body: Some(Bytes::from(body)),
        };

        let response = self.transport().execute(request).await?;
        if response.status != 200 {
            return Err(SessionError::LoginRejected {
                status: response.status,
            }
            .into());
        }

        let id = response
            .header_values("set-cookie")
            .find_map(session_id_from_set_cookie)
            .ok_or(SessionError::MissingCookie)?;

        debug!("Session established");
        Ok(Session::new(id))
    }

    /// Ends a session on the server.
    ///
    /// ## Errors
    ///
    /// - [`SessionError::LogoutRejected`] on any status but 200.
    /// - [`HarborError::Http`] on transport failure.
    #[instrument(name = "harbor_logout", skip_all)]
    pub async fn logout(&self, session: &Session) -> Result<(), HarborError> {
        let body = form_urlencoded::Serializer::new(String::new())
            .append_pair(SESSION_COOKIE, session.id())
            .finish();

        let request = HttpRequest {
            method: RestMethod::Get,
            url: self.session_base().join("log_out").map_err(ConfigError::from)?,
            headers: vec![
                ("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string()),
                ("Cookie".to_string(), session.cookie()),
            ],
            body: Some(Bytes::from(body)),
        };

        let response = self.transport().execute(request).await?;
        if response.status != 200 {
            return Err(SessionError::LogoutRejected {
                status: response.status,
            }
            .into());
        }

        debug!("Session ended");
        Ok(())
    }

    /// Returns a copy of this client whose calls carry the session cookie.
    pub fn with_session(&self, session: &Session) -> Self
    where
        T: Clone,
    {
        self.attach_session(session.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::Params;
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> HarborClient {
        HarborClient::new(Some(&format!("{}/api", server.uri()))).unwrap()
    }

    #[test]
    fn credentials_debug_hides_password() {
        let creds = Credentials::new("admin", "Harbor12345");
        let debug = format!("{creds:?}");
        assert!(debug.contains("admin"));
        assert!(!debug.contains("Harbor12345"));
    }

    #[test]
    fn cookie_parsing() {
        assert_eq!(
            session_id_from_set_cookie("beegosessionID=abc123; Path=/; HttpOnly"),
            Some("abc123")
        );
        assert_eq!(session_id_from_set_cookie("beegosessionID=xyz"), Some("xyz"));
        assert_eq!(session_id_from_set_cookie("_xsrf=abc; Path=/"), None);
        assert_eq!(session_id_from_set_cookie("beegosessionID=; Path=/"), None);
    }

    #[test]
    fn session_cookie_header() {
        assert_eq!(Session::new("abc").cookie(), "beegosessionID=abc");
    }

    #[tokio::test]
    async fn login_posts_form_and_captures_cookie() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .and(body_string("principal=admin&password=p%40ss+word&verify=false"))
            .respond_with(
                ResponseTemplate::new(200)
                    .append_header("Set-Cookie", "_xsrf=token; Path=/")
                    .append_header("Set-Cookie", "beegosessionID=s3ss10n; Path=/; HttpOnly"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let session = client_for(&server)
            .login(&Credentials::new("admin", "p@ss word"))
            .await
            .unwrap();
        assert_eq!(session.id(), "s3ss10n");

        let received = server.received_requests().await.unwrap();
        let content_type = received[0].headers.get("content-type").unwrap();
        assert_eq!(content_type.to_str().unwrap(), FORM_CONTENT_TYPE);
    }

    #[tokio::test]
    async fn login_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .login(&Credentials::new("admin", "wrong"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            HarborError::Session(SessionError::LoginRejected { status: 401 })
        ));
    }

    #[tokio::test]
    async fn login_without_cookie() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/login"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .login(&Credentials::new("admin", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(err, HarborError::Session(SessionError::MissingCookie)));
    }

    #[tokio::test]
    async fn logout_sends_session() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/log_out"))
            .and(body_string("beegosessionID=s3ss10n"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server)
            .logout(&Session::new("s3ss10n"))
            .await
            .unwrap();

        let received = server.received_requests().await.unwrap();
        let cookie = received[0].headers.get("cookie").unwrap();
        assert_eq!(cookie.to_str().unwrap(), "beegosessionID=s3ss10n");
    }

    #[tokio::test]
    async fn logout_rejected() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/log_out"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .logout(&Session::new("gone"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), Some(500));
    }

    #[tokio::test]
    async fn with_session_attaches_cookie_to_calls() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/users/current"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"username":"admin"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let authed = client.with_session(&Session::new("abc"));
        assert!(client.session().is_none());
        assert_eq!(authed.session().map(Session::id), Some("abc"));

        let body = authed.get_users_current(Params::new()).await.unwrap();
        assert_eq!(body["username"], "admin");

        let received = server.received_requests().await.unwrap();
        let cookie = received[0].headers.get("cookie").unwrap();
        assert_eq!(cookie.to_str().unwrap(), "beegosessionID=abc");
    }
}
