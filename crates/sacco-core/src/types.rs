//! Navigation and member types shared by every portal crate

use serde::{Deserialize, Serialize};

/// A named top-level screen reachable from the navigation shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Dashboard,
    LoanManagement,
    ProfileManagement,
}

impl Destination {
    /// Menu order of the routed destinations.
    pub const ALL: [Destination; 3] = [
        Destination::Dashboard,
        Destination::LoanManagement,
        Destination::ProfileManagement,
    ];

    /// Route path for this destination
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Dashboard => "/dashboard",
            Destination::LoanManagement => "/loan-management",
            Destination::ProfileManagement => "/profile-management",
        }
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            Destination::Dashboard => "Dashboard",
            Destination::LoanManagement => "Loan Management",
            Destination::ProfileManagement => "Profile Management",
        }
    }

    /// Sidebar menu key ('1'..='3')
    pub fn menu_key(&self) -> char {
        match self {
            Destination::Dashboard => '1',
            Destination::LoanManagement => '2',
            Destination::ProfileManagement => '3',
        }
    }

    pub fn from_menu_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.menu_key() == key)
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let trimmed = path.trim_end_matches('/');
        Self::ALL.into_iter().find(|d| d.path() == trimmed)
    }
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A location in the route table.
///
/// `Root` is the credential surface; every other route is a [`Destination`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Root,
    To(Destination),
}

impl Route {
    /// Parse a route path such as `/loan-management`.
    ///
    /// Returns `None` for paths that are not in the route table.
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.trim();
        if path.is_empty() || path == "/" {
            return Some(Route::Root);
        }
        Destination::from_path(path).map(Route::To)
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Root => "/",
            Route::To(destination) => destination.path(),
        }
    }

    pub fn destination(&self) -> Option<Destination> {
        match self {
            Route::Root => None,
            Route::To(destination) => Some(*destination),
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// The signed-in member shown on the dashboard greeting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberProfile {
    pub name: String,
    pub member_number: String,
}

impl Default for MemberProfile {
    fn default() -> Self {
        Self {
            name: "John Doe".to_string(),
            member_number: "12345".to_string(),
        }
    }
}
