/// Opaque bearer token issued at login. The client never inspects it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Explicit session context passed to every remote call.
///
/// Created anonymous before login, authorized with the token the server
/// issues, and cleared again at logout. Nothing here is ambient or global;
/// whoever owns the session decides its lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    base_url: String,
    token: Option<AuthToken>,
}

impl Session {
    /// A session with no credentials, for login/register calls.
    pub fn anonymous(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            token: None,
        }
    }

    /// Attaches the token issued at login.
    pub fn authorize(&mut self, token: AuthToken) {
        self.token = Some(token);
    }

    /// Drops the token; the logout action in the portal.
    pub fn clear(&mut self) {
        self.token = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    /// Absolute URL for an API path (`path` starts with `/`).
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}
