use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity used when a login form is submitted without an email.
pub const DEMO_LOGIN_EMAIL: &str = "user@example.com";
/// Identity used when a sign-up form is submitted without an email.
pub const DEMO_SIGNUP_EMAIL: &str = "newuser@example.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuthState {
    LoggedOut,
    /// A token is present but the user must re-enter the local unlock code.
    Locked,
    LoggedIn,
}

/// Entry screen shown while logged out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AuthScreen {
    #[default]
    Login,
    SignUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthAction {
    Login,
    SignUp,
    Unlock,
}

impl fmt::Display for AuthAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AuthAction::Login => "login",
            AuthAction::SignUp => "sign up",
            AuthAction::Unlock => "unlock",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AuthError {
    #[error("cannot {action} while {from:?}")]
    InvalidTransition { from: AuthState, action: AuthAction },
}

/// The persisted session token: the user's identifying email.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    #[must_use]
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    #[must_use]
    pub fn identity(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthToken({})", self.0)
    }
}

/// Three-state access gate in front of the app.
///
/// Credentials are simulated: login, sign-up and unlock always succeed when
/// the gate is in the matching state. A rejected credential would be a new
/// edge next to these, not a variant of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthGate {
    state: AuthState,
    screen: AuthScreen,
    identity: Option<AuthToken>,
}

impl AuthGate {
    /// Initial gate for the token found in persistence, if any.
    #[must_use]
    pub fn from_persisted(token: Option<AuthToken>) -> Self {
        let state = if token.is_some() {
            AuthState::Locked
        } else {
            AuthState::LoggedOut
        };
        Self {
            state,
            screen: AuthScreen::Login,
            identity: token,
        }
    }

    #[must_use]
    pub fn state(&self) -> AuthState {
        self.state
    }

    #[must_use]
    pub fn screen(&self) -> AuthScreen {
        self.screen
    }

    #[must_use]
    pub fn identity(&self) -> Option<&AuthToken> {
        self.identity.as_ref()
    }

    pub fn show_screen(&mut self, screen: AuthScreen) {
        self.screen = screen;
    }

    /// Log in and return the token the caller must persist.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidTransition` unless logged out.
    pub fn login(&mut self, email: &str) -> Result<AuthToken, AuthError> {
        self.enter(AuthAction::Login, email, DEMO_LOGIN_EMAIL)
    }

    /// Create an account and return the token the caller must persist.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidTransition` unless logged out.
    pub fn sign_up(&mut self, email: &str) -> Result<AuthToken, AuthError> {
        self.enter(AuthAction::SignUp, email, DEMO_SIGNUP_EMAIL)
    }

    /// Unlock a locked session. Any code is accepted.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidTransition` unless locked.
    pub fn unlock(&mut self, _code: &str) -> Result<(), AuthError> {
        if self.state != AuthState::Locked {
            return Err(AuthError::InvalidTransition {
                from: self.state,
                action: AuthAction::Unlock,
            });
        }
        self.state = AuthState::LoggedIn;
        Ok(())
    }

    /// Drop the session from any state. The caller removes the token.
    pub fn logout(&mut self) {
        self.state = AuthState::LoggedOut;
        self.identity = None;
    }

    fn enter(
        &mut self,
        action: AuthAction,
        email: &str,
        fallback: &str,
    ) -> Result<AuthToken, AuthError> {
        if self.state != AuthState::LoggedOut {
            return Err(AuthError::InvalidTransition {
                from: self.state,
                action,
            });
        }
        let email = email.trim();
        let token = AuthToken::new(if email.is_empty() { fallback } else { email });
        self.state = AuthState::LoggedIn;
        self.screen = AuthScreen::Login;
        self.identity = Some(token.clone());
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_logged_out_without_token() {
        let gate = AuthGate::from_persisted(None);
        assert_eq!(gate.state(), AuthState::LoggedOut);
        assert!(gate.identity().is_none());
    }

    #[test]
    fn starts_locked_with_token() {
        let gate = AuthGate::from_persisted(Some(AuthToken::new("a@b.c")));
        assert_eq!(gate.state(), AuthState::Locked);
        assert_eq!(gate.identity().map(AuthToken::identity), Some("a@b.c"));
    }

    #[test]
    fn login_with_blank_email_uses_demo_identity() {
        let mut gate = AuthGate::from_persisted(None);
        gate.show_screen(AuthScreen::SignUp);
        let token = gate.sign_up("   ").unwrap();
        assert_eq!(token.identity(), DEMO_SIGNUP_EMAIL);
        assert_eq!(gate.state(), AuthState::LoggedIn);
        assert_eq!(gate.screen(), AuthScreen::Login);
    }

    #[test]
    fn unlock_accepts_any_code() {
        let mut gate = AuthGate::from_persisted(Some(AuthToken::new("a@b.c")));
        gate.unlock("").unwrap();
        assert_eq!(gate.state(), AuthState::LoggedIn);
    }

    #[test]
    fn unlock_while_logged_out_is_rejected() {
        let mut gate = AuthGate::from_persisted(None);
        let err = gate.unlock("1234").unwrap_err();
        assert_eq!(
            err,
            AuthError::InvalidTransition {
                from: AuthState::LoggedOut,
                action: AuthAction::Unlock,
            }
        );
        assert_eq!(gate.state(), AuthState::LoggedOut);
    }

    #[test]
    fn login_while_locked_is_rejected() {
        let mut gate = AuthGate::from_persisted(Some(AuthToken::new("a@b.c")));
        assert!(gate.login("x@y.z").is_err());
        assert_eq!(gate.identity().map(AuthToken::identity), Some("a@b.c"));
    }

    #[test]
    fn logout_clears_identity_from_any_state() {
        let mut gate = AuthGate::from_persisted(Some(AuthToken::new("a@b.c")));
        gate.logout();
        assert_eq!(gate.state(), AuthState::LoggedOut);
        assert!(gate.identity().is_none());
    }
}
