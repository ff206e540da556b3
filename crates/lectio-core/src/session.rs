//! Caller identity, as resolved by the surrounding service.
//!
//! Session persistence lives outside the core; callers look up both
//! identities and pass them in as a single `SessionContext` value.

use serde::{Deserialize, Serialize};

/// An authenticated user stored server-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// The user's e-mail address or login.
    pub email_address: String,
    /// Display name.
    pub name: String,
    /// Preferred interface language, e.g. `"de"`.
    pub language: String,
}

/// Ephemeral session supplied by the client on each request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSession {
    /// Language the client is currently displaying, e.g. `"en"`.
    pub language: String,
}

/// Both identity sources available for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    /// The authenticated user, if any.
    pub user: Option<User>,
    /// The client-side session.
    pub client_session: ClientSession,
}

impl SessionContext {
    /// Context for an anonymous caller.
    #[must_use]
    pub fn anonymous(client_session: ClientSession) -> Self {
        Self {
            user: None,
            client_session,
        }
    }

    /// Context for an authenticated caller.
    #[must_use]
    pub fn authenticated(user: User, client_session: ClientSession) -> Self {
        Self {
            user: Some(user),
            client_session,
        }
    }
}
