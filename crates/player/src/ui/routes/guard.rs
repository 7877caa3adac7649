//! Navigation guard
//!
//! Two gates, checked in order on every render of a guarded route: a
//! credential must be present, and GM-only routes additionally need the GM
//! role. Nothing is cached between evaluations.

use crate::application::services::SessionSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    GmOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    /// Signed in, but not allowed here.
    RedirectToCharacters,
}

pub fn evaluate(access: Access, session: &SessionSnapshot) -> GuardDecision {
    match access {
        Access::Public => GuardDecision::Allow,
        _ if !session.authenticated => GuardDecision::RedirectToLogin,
        Access::Authenticated => GuardDecision::Allow,
        Access::GmOnly if session.is_gm() => GuardDecision::Allow,
        Access::GmOnly => GuardDecision::RedirectToCharacters,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_domain::Role;

    fn signed_in(role: Option<Role>) -> SessionSnapshot {
        SessionSnapshot {
            authenticated: true,
            role,
        }
    }

    #[test]
    fn public_routes_always_pass() {
        assert_eq!(
            evaluate(Access::Public, &SessionSnapshot::default()),
            GuardDecision::Allow
        );
    }

    #[test]
    fn missing_credential_goes_to_login() {
        let anonymous = SessionSnapshot::default();
        assert_eq!(
            evaluate(Access::Authenticated, &anonymous),
            GuardDecision::RedirectToLogin
        );
        assert_eq!(
            evaluate(Access::GmOnly, &anonymous),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn gm_gate() {
        assert_eq!(
            evaluate(Access::GmOnly, &signed_in(Some(Role::Gm))),
            GuardDecision::Allow
        );
        assert_eq!(
            evaluate(Access::GmOnly, &signed_in(Some(Role::Player))),
            GuardDecision::RedirectToCharacters
        );
        // Role not resolved yet: treated as not GM.
        assert_eq!(
            evaluate(Access::GmOnly, &signed_in(None)),
            GuardDecision::RedirectToCharacters
        );
        assert_eq!(
            evaluate(Access::Authenticated, &signed_in(Some(Role::Player))),
            GuardDecision::Allow
        );
    }
}
