//! Route history and route resolution
//!
//! Every destination change is recorded as a route so the current location
//! is observable (the header shows it) and back navigation works.

use sacco_core::{Destination, Route};

use crate::session::SessionState;

/// What the shell renders for a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Dashboard,
    LoanManagement,
    ProfileManagement,
}

impl From<Destination> for Screen {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Dashboard => Screen::Dashboard,
            Destination::LoanManagement => Screen::LoanManagement,
            Destination::ProfileManagement => Screen::ProfileManagement,
        }
    }
}

/// Resolve a route against the session.
///
/// Logged out, every route resolves to the login surface. Logged in, the root
/// route resolves to the dashboard.
pub fn resolve(route: Route, session: &SessionState) -> Screen {
    if !session.is_authenticated() {
        return Screen::Login;
    }
    match route {
        Route::Root => Screen::Dashboard,
        Route::To(destination) => destination.into(),
    }
}

/// Routes kept for back navigation. Older entries are forgotten.
pub const MAX_HISTORY: usize = 32;

/// Linear route history. The last entry is the current route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Router {
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self {
            history: vec![Route::Root],
        }
    }
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Route {
        self.history.last().copied().unwrap_or(Route::Root)
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    /// Push `route` unless it is already current. Returns `true` if pushed.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.current() == route {
            return false;
        }
        tracing::debug!("route {} -> {}", self.current(), route);
        self.history.push(route);
        if self.history.len() > MAX_HISTORY {
            let excess = self.history.len() - MAX_HISTORY;
            self.history.drain(..excess);
        }
        true
    }

    /// Step back one entry. The first entry is never popped.
    pub fn back(&mut self) -> Option<Route> {
        if self.history.len() <= 1 {
            return None;
        }
        self.history.pop();
        Some(self.current())
    }

    pub fn can_go_back(&self) -> bool {
        self.history.len() > 1
    }

    /// Drop all history and start over at `route`.
    pub fn reset(&mut self, route: Route) {
        self.history.clear();
        self.history.push(route);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_logged_out_is_always_login() {
        let session = SessionState::LoggedOut;
        assert_eq!(resolve(Route::Root, &session), Screen::Login);
        for destination in Destination::ALL {
            assert_eq!(resolve(Route::To(destination), &session), Screen::Login);
        }
    }

    #[test]
    fn test_resolve_logged_in() {
        let session = SessionState::LoggedIn(Destination::LoanManagement);
        assert_eq!(
            resolve(Route::To(Destination::LoanManagement), &session),
            Screen::LoanManagement
        );
        assert_eq!(resolve(Route::Root, &session), Screen::Dashboard);
    }

    #[test]
    fn test_navigate_skips_duplicates() {
        let mut router = Router::new();
        assert!(router.navigate(Route::To(Destination::Dashboard)));
        assert!(!router.navigate(Route::To(Destination::Dashboard)));
        assert_eq!(router.history().len(), 2);
    }

    #[test]
    fn test_back() {
        let mut router = Router::new();
        router.reset(Route::To(Destination::Dashboard));
        router.navigate(Route::To(Destination::LoanManagement));
        router.navigate(Route::To(Destination::ProfileManagement));

        assert_eq!(
            router.back(),
            Some(Route::To(Destination::LoanManagement))
        );
        assert_eq!(router.back(), Some(Route::To(Destination::Dashboard)));
        assert_eq!(router.back(), None);
        assert_eq!(router.current(), Route::To(Destination::Dashboard));
    }

    #[test]
    fn test_history_is_bounded() {
        let mut router = Router::new();
        router.reset(Route::To(Destination::Dashboard));
        for i in 0..(MAX_HISTORY * 3) {
            let destination = if i % 2 == 0 {
                Destination::LoanManagement
            } else {
                Destination::ProfileManagement
            };
            router.navigate(Route::To(destination));
        }

        assert_eq!(router.history().len(), MAX_HISTORY);
        assert_eq!(router.current(), Route::To(Destination::ProfileManagement));
        assert_eq!(router.back(), Some(Route::To(Destination::LoanManagement)));

        while router.back().is_some() {}
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn test_reset() {
        let mut router = Router::new();
        router.navigate(Route::To(Destination::ProfileManagement));
        router.reset(Route::Root);
        assert_eq!(router.history(), &[Route::Root]);
        assert!(!router.can_go_back());
    }
}
