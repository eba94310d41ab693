//! Session state machine
//!
//! `LoggedOut --accept--> LoggedIn(Dashboard)`,
//! `LoggedIn(x) --select(y)--> LoggedIn(y)`,
//! `LoggedIn(x) --logout--> LoggedOut`.

use sacco_core::Destination;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn(Destination),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::LoggedIn(_))
    }

    /// Currently mounted destination, `None` while logged out.
    pub fn destination(&self) -> Option<Destination> {
        match self {
            SessionState::LoggedOut => None,
            SessionState::LoggedIn(destination) => Some(*destination),
        }
    }

    /// Apply an accepted credential check. Always lands on the dashboard.
    pub fn accept(&mut self) {
        *self = SessionState::LoggedIn(Destination::Dashboard);
    }

    /// Switch destination. Ignored while logged out.
    ///
    /// Returns `true` if the destination changed.
    pub fn select(&mut self, destination: Destination) -> bool {
        match self {
            SessionState::LoggedIn(current) if *current != destination => {
                *current = destination;
                true
            }
            _ => false,
        }
    }

    pub fn logout(&mut self) {
        *self = SessionState::LoggedOut;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_logged_out() {
        let session = SessionState::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.destination(), None);
    }

    #[test]
    fn test_accept_lands_on_dashboard() {
        let mut session = SessionState::default();
        session.accept();
        assert_eq!(session, SessionState::LoggedIn(Destination::Dashboard));
    }

    #[test]
    fn test_select_only_when_logged_in() {
        let mut session = SessionState::default();
        assert!(!session.select(Destination::LoanManagement));
        assert_eq!(session, SessionState::LoggedOut);

        session.accept();
        assert!(session.select(Destination::LoanManagement));
        assert!(!session.select(Destination::LoanManagement));
        assert_eq!(session.destination(), Some(Destination::LoanManagement));
    }

    #[test]
    fn test_logout_from_any_destination_then_login_lands_on_dashboard() {
        for destination in Destination::ALL {
            let mut session = SessionState::default();
            session.accept();
            session.select(destination);
            session.logout();
            assert_eq!(session, SessionState::LoggedOut);

            session.accept();
            assert_eq!(session.destination(), Some(Destination::Dashboard));
        }
    }
}
