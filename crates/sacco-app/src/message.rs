//! Message types for the application (TEA pattern)

use sacco_core::{Destination, LoanRecord};
use sacco_store::{DashboardSnapshot, UploadReceipt};

use crate::input_key::InputKey;

/// The forms hosted by the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormId {
    Login,
    LoanApplication,
    Profile,
    ImageUpload,
}

/// An edit applied to the focused field of a form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEdit {
    Insert(char),
    Backspace,
    Clear,
    NextField,
    PrevField,
    ChoiceNext,
    ChoicePrev,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Periodic tick (notification expiry, spinner frames)
    Tick,

    /// Leave the application
    Quit,

    // ─────────────────────────────────────────────────────────
    // Session / Navigation Shell
    // ─────────────────────────────────────────────────────────
    /// Logout from any destination
    Logout,

    /// Mount a destination (sidebar menu or shortcut)
    SelectMenu(Destination),

    /// Return to the previous route
    NavigateBack,

    /// Collapse or expand the sidebar
    ToggleSidebar,

    FocusSidebar,
    FocusContent,

    MenuUp,
    MenuDown,
    /// Activate the highlighted sidebar entry
    MenuActivate,

    // ─────────────────────────────────────────────────────────
    // Forms
    // ─────────────────────────────────────────────────────────
    FormInput { form: FormId, edit: FormEdit },
    FormSubmit(FormId),
    FormCancel(FormId),

    // ─────────────────────────────────────────────────────────
    // Dashboard
    // ─────────────────────────────────────────────────────────
    RefreshDashboard,

    /// Every dashboard collection finished loading
    DashboardLoaded {
        epoch: u64,
        snapshot: Box<DashboardSnapshot>,
    },

    DashboardLoadFailed { epoch: u64, error: String },

    DashboardCursorUp,
    DashboardCursorDown,

    /// Follow the highlighted active loan to Loan Management
    OpenActiveLoan,

    // ─────────────────────────────────────────────────────────
    // Loan Management
    // ─────────────────────────────────────────────────────────
    RefreshLoans,

    LoansLoaded { epoch: u64, loans: Vec<LoanRecord> },

    LoansLoadFailed { epoch: u64, error: String },

    LoanCursorUp,
    LoanCursorDown,

    /// Row action of the loan table
    ViewLoanDetails,
    CloseLoanDetails,

    OpenLoanApplication,

    // ─────────────────────────────────────────────────────────
    // Profile
    // ─────────────────────────────────────────────────────────
    OpenImageUpload,

    ImageUploaded { epoch: u64, receipt: UploadReceipt },

    ImageUploadFailed {
        epoch: u64,
        file: String,
        reason: String,
    },
}
