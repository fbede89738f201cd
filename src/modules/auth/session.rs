/// Session state for one interactive context. Starts anonymous, becomes
/// authenticated after a successful login, and is never persisted.
#[derive(Debug, Clone, PartialEq)]
pub enum Session {
    Anonymous,
    Authenticated { name: String, phone: String },
}

impl Session {
    /// Every interactive context starts out anonymous
    pub fn new() -> Self {
        Session::Anonymous
    }

    /// Transition to the authenticated state after the auth service has
    /// confirmed the credentials. A failed login must not call this.
    pub fn authenticate(&mut self, name: String, phone: String) {
        *self = Session::Authenticated { name, phone };
    }

    /// Unconditional logout, clearing all session fields
    pub fn logout(&mut self) {
        *self = Session::Anonymous;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    pub fn member_name(&self) -> Option<&str> {
        match self {
            Session::Authenticated { name, .. } => Some(name),
            Session::Anonymous => None,
        }
    }

    pub fn member_phone(&self) -> Option<&str> {
        match self {
            Session::Authenticated { phone, .. } => Some(phone),
            Session::Anonymous => None,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_anonymous() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.member_name(), None);
        assert_eq!(session.member_phone(), None);
    }

    #[test]
    fn test_login_transition() {
        let mut session = Session::new();
        session.authenticate("Asha".to_string(), "9000000001".to_string());

        assert!(session.is_authenticated());
        assert_eq!(session.member_name(), Some("Asha"));
        assert_eq!(session.member_phone(), Some("9000000001"));
    }

    #[test]
    fn test_logout_clears_everything() {
        let mut session = Session::new();
        session.authenticate("Asha".to_string(), "9000000001".to_string());
        session.logout();

        assert_eq!(session, Session::Anonymous);
        assert_eq!(session.member_name(), None);
    }

    #[test]
    fn test_logout_from_anonymous_is_harmless() {
        let mut session = Session::new();
        session.logout();
        assert!(!session.is_authenticated());
    }
}
