//! Application state (the Model in TEA)

use sacco_core::{
    financial_distribution, ChartData, Credentials, DashboardStats, Destination, LoanRecord,
    MemberProfile, Route,
};
use sacco_store::DashboardSnapshot;

use crate::config::Settings;
use crate::form::{FormState, LOAN_APPLICATION_FIELDS, LOGIN_FIELDS, PROFILE_FIELDS, UPLOAD_FIELDS};
use crate::notifications::Notifications;
use crate::router::{resolve, Router, Screen};
use crate::selection::DetailSelector;
use crate::session::SessionState;
use crate::table::{loan_columns, RecordTable};

/// Current UI mode, derived from the rest of the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Logged out: only the credential surface
    Login,

    /// Navigation frame with the current destination mounted
    Shell,

    /// Loan detail modal over Loan Management
    LoanDetails,

    /// "Apply for a New Loan" modal form
    LoanApplication,

    /// Profile image upload modal
    ImageUpload,
}

/// Which pane receives navigation keys in the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Sidebar,
    Content,
}

/// An entry of the sidebar menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Destination(Destination),
    Logout,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 4] = [
        MenuEntry::Destination(Destination::Dashboard),
        MenuEntry::Destination(Destination::LoanManagement),
        MenuEntry::Destination(Destination::ProfileManagement),
        MenuEntry::Logout,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Destination(destination) => destination.label(),
            MenuEntry::Logout => "Logout",
        }
    }

    pub fn key(&self) -> char {
        match self {
            MenuEntry::Destination(destination) => destination.menu_key(),
            MenuEntry::Logout => '4',
        }
    }
}

/// Sidebar layout state. Collapsing never affects routing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub collapsed: bool,
    pub cursor: usize,
}

impl SidebarState {
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1).min(MenuEntry::ALL.len() - 1);
    }

    pub fn highlighted(&self) -> MenuEntry {
        MenuEntry::ALL[self.cursor.min(MenuEntry::ALL.len() - 1)]
    }

    /// Move the cursor onto `destination`'s entry
    pub fn highlight(&mut self, destination: Destination) {
        if let Some(index) = MenuEntry::ALL
            .iter()
            .position(|entry| *entry == MenuEntry::Destination(destination))
        {
            self.cursor = index;
        }
    }
}

/// Dashboard data and its loading flag
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// True from load request until the complete snapshot arrives
    pub loading: bool,
    pub snapshot: Option<DashboardSnapshot>,
    pub stats: DashboardStats,
    pub error: Option<String>,
    /// Highlighted entry of the active loan list
    pub cursor: usize,
}

impl DashboardState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Install a complete snapshot and recompute the stats from it.
    pub fn apply(&mut self, snapshot: DashboardSnapshot) {
        self.stats = snapshot.stats();
        self.cursor = self.cursor.min(snapshot.loans.len().saturating_sub(1));
        self.snapshot = Some(snapshot);
        self.loading = false;
    }

    pub fn fail(&mut self, error: String) {
        self.error = Some(error);
        self.loading = false;
    }

    pub fn active_loans(&self) -> &[LoanRecord] {
        self.snapshot
            .as_ref()
            .map(|s| s.loans.as_slice())
            .unwrap_or_default()
    }

    pub fn trend_chart(&self) -> ChartData {
        self.snapshot
            .as_ref()
            .map(|s| s.trend.to_chart())
            .unwrap_or_default()
    }

    pub fn distribution_chart(&self, credit_limit: u64) -> ChartData {
        financial_distribution(&self.stats, credit_limit)
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.active_loans().len() {
            self.cursor += 1;
        }
    }
}

/// Loan Management screen: table, detail selection and application form
#[derive(Debug)]
pub struct LoanScreenState {
    pub loading: bool,
    pub table: RecordTable<LoanRecord>,
    pub detail: DetailSelector<LoanRecord>,
    /// Open application form, `None` when the modal is closed
    pub application: Option<FormState>,
    pub error: Option<String>,
}

impl Default for LoanScreenState {
    fn default() -> Self {
        Self {
            loading: false,
            table: RecordTable::new(loan_columns()),
            detail: DetailSelector::new(),
            application: None,
            error: None,
        }
    }
}

impl LoanScreenState {
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn apply(&mut self, loans: Vec<LoanRecord>) {
        self.table.set_rows(loans);
        self.loading = false;
    }

    pub fn fail(&mut self, error: String) {
        self.error = Some(error);
        self.loading = false;
    }
}

/// Profile form and avatar
#[derive(Debug, Clone)]
pub struct ProfileState {
    pub form: FormState,
    /// Name of the current profile image
    pub avatar: Option<String>,
    /// Open upload form, `None` when the modal is closed
    pub upload: Option<FormState>,
    /// An upload is in flight
    pub uploading: bool,
}

impl Default for ProfileState {
    fn default() -> Self {
        Self {
            form: FormState::new(PROFILE_FIELDS),
            avatar: None,
            upload: None,
            uploading: false,
        }
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Application settings from config file
    pub settings: Settings,

    pub credentials: Credentials,
    pub member: MemberProfile,

    /// The single writer of authentication state is the update function
    pub session: SessionState,
    pub router: Router,
    /// Bumped on every login and logout. Background results carry the epoch
    /// they were started in and are dropped once it has moved on.
    pub session_epoch: u64,

    pub sidebar: SidebarState,
    pub focus: Focus,

    pub login_form: FormState,
    pub dashboard: DashboardState,
    pub loans: LoanScreenState,
    pub profile: ProfileState,

    pub notifications: Notifications,

    /// Frame counter for spinners
    pub tick_count: u64,

    quitting: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            credentials: settings.auth.credentials(),
            member: settings.member.profile(),
            session: SessionState::default(),
            router: Router::new(),
            session_epoch: 0,
            sidebar: SidebarState {
                collapsed: settings.ui.sidebar_collapsed,
                cursor: 0,
            },
            focus: Focus::default(),
            login_form: FormState::new(LOGIN_FIELDS),
            dashboard: DashboardState::default(),
            loans: LoanScreenState::default(),
            profile: ProfileState::default(),
            notifications: Notifications::new(settings.ui.notification_ttl()),
            tick_count: 0,
            quitting: false,
            settings,
        }
    }

    pub fn ui_mode(&self) -> UiMode {
        match self.session.destination() {
            None => UiMode::Login,
            Some(Destination::LoanManagement) if self.loans.detail.is_open() => {
                UiMode::LoanDetails
            }
            Some(Destination::LoanManagement) if self.loans.application.is_some() => {
                UiMode::LoanApplication
            }
            Some(Destination::ProfileManagement) if self.profile.upload.is_some() => {
                UiMode::ImageUpload
            }
            Some(_) => UiMode::Shell,
        }
    }

    /// Screen the current route resolves to
    pub fn screen(&self) -> Screen {
        resolve(self.router.current(), &self.session)
    }

    pub fn current_route(&self) -> Route {
        self.router.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Start a new session epoch, orphaning every in-flight action
    pub fn next_session_epoch(&mut self) {
        self.session_epoch = self.session_epoch.wrapping_add(1);
    }

    /// True if a result started in `epoch` belongs to the live session
    pub fn is_current_session(&self, epoch: u64) -> bool {
        self.is_authenticated() && epoch == self.session_epoch
    }

    pub fn credit_limit(&self) -> u64 {
        self.settings.dashboard.credit_limit
    }

    pub fn request_quit(&mut self) {
        self.quitting = true;
    }

    pub fn should_quit(&self) -> bool {
        self.quitting
    }

    pub fn open_loan_application(&mut self) {
        self.loans.application = Some(FormState::new(LOAN_APPLICATION_FIELDS));
    }

    pub fn open_image_upload(&mut self) {
        self.profile.upload = Some(FormState::new(UPLOAD_FIELDS));
    }

    /// Drop every per-screen state. Used on logout.
    pub fn reset_screens(&mut self) {
        self.login_form.reset();
        self.dashboard = DashboardState::default();
        self.loans = LoanScreenState::default();
        self.profile = ProfileState::default();
        self.sidebar.cursor = 0;
        self.focus = Focus::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sacco_store::FixtureSet;

    fn fixture_snapshot() -> DashboardSnapshot {
        let fixtures = FixtureSet::default();
        DashboardSnapshot {
            loans: fixtures.active_loans,
            applications: fixtures.applications,
            trend: fixtures.balance_trend,
        }
    }

    #[test]
    fn test_new_state_is_logged_out_at_root() {
        let state = AppState::new();
        assert_eq!(state.ui_mode(), UiMode::Login);
        assert_eq!(state.screen(), Screen::Login);
        assert_eq!(state.current_route(), Route::Root);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_settings_flow_into_state() {
        let mut settings = Settings::default();
        settings.ui.sidebar_collapsed = true;
        settings.member.name = "Jane Smith".into();

        let state = AppState::with_settings(settings);
        assert!(state.sidebar.collapsed);
        assert_eq!(state.member.name, "Jane Smith");
    }

    #[test]
    fn test_ui_mode_follows_modals() {
        let mut state = AppState::new();
        state.session = SessionState::LoggedIn(Destination::LoanManagement);
        assert_eq!(state.ui_mode(), UiMode::Shell);

        state.open_loan_application();
        assert_eq!(state.ui_mode(), UiMode::LoanApplication);

        state.session = SessionState::LoggedIn(Destination::ProfileManagement);
        state.open_image_upload();
        assert_eq!(state.ui_mode(), UiMode::ImageUpload);
    }

    #[test]
    fn test_dashboard_apply_clears_loading() {
        let mut dashboard = DashboardState::default();
        dashboard.begin_load();
        assert!(dashboard.loading);

        dashboard.apply(fixture_snapshot());
        assert!(!dashboard.loading);
        assert_eq!(dashboard.stats.total_loan_amount, 25_000);
        assert_eq!(dashboard.active_loans().len(), 3);
        assert_eq!(dashboard.trend_chart().labels.len(), 6);
        assert_eq!(
            dashboard.distribution_chart(50_000).datasets[0].data,
            vec![25_000, 18_000, 7_000]
        );
    }

    #[test]
    fn test_dashboard_cursor_bounds() {
        let mut dashboard = DashboardState::default();
        dashboard.cursor_down();
        assert_eq!(dashboard.cursor, 0);

        dashboard.apply(fixture_snapshot());
        dashboard.cursor_down();
        dashboard.cursor_down();
        dashboard.cursor_down();
        assert_eq!(dashboard.cursor, 2);
    }

    #[test]
    fn test_sidebar_cursor() {
        let mut sidebar = SidebarState::default();
        sidebar.cursor_up();
        assert_eq!(sidebar.highlighted(), MenuEntry::ALL[0]);
        for _ in 0..10 {
            sidebar.cursor_down();
        }
        assert_eq!(sidebar.highlighted(), MenuEntry::Logout);

        sidebar.highlight(Destination::LoanManagement);
        assert_eq!(sidebar.cursor, 1);
    }

    #[test]
    fn test_menu_entry_keys() {
        let keys: Vec<_> = MenuEntry::ALL.iter().map(|e| e.key()).collect();
        assert_eq!(keys, ['1', '2', '3', '4']);
        assert_eq!(MenuEntry::Logout.label(), "Logout");
    }
}
