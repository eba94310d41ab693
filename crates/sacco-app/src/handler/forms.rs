//! Form edits, submits and cancels
//!
//! Every form goes through the same engine; only the handling of the
//! captured values differs per [`FormId`].

use sacco_core::prelude::*;

use crate::form::{FormOutcome, FormState};
use crate::message::{FormEdit, FormId};
use crate::state::AppState;

use super::{loans, navigation, profile, UpdateResult};

fn form_mut(state: &mut AppState, id: FormId) -> Option<&mut FormState> {
    match id {
        FormId::Login => Some(&mut state.login_form),
        FormId::LoanApplication => state.loans.application.as_mut(),
        FormId::Profile => Some(&mut state.profile.form),
        FormId::ImageUpload => state.profile.upload.as_mut(),
    }
}

pub(crate) fn handle_form_input(state: &mut AppState, id: FormId, edit: FormEdit) -> UpdateResult {
    let Some(form) = form_mut(state, id) else {
        return UpdateResult::none();
    };

    match edit {
        FormEdit::Insert(c) => form.insert_char(c),
        FormEdit::Backspace => form.backspace(),
        FormEdit::Clear => form.clear_field(),
        FormEdit::NextField => form.next_field(),
        FormEdit::PrevField => form.prev_field(),
        FormEdit::ChoiceNext => form.cycle_choice(true),
        FormEdit::ChoicePrev => form.cycle_choice(false),
    }
    UpdateResult::none()
}

pub(crate) fn handle_form_submit(state: &mut AppState, id: FormId) -> UpdateResult {
    let Some(form) = form_mut(state, id) else {
        return UpdateResult::none();
    };

    match form.submit() {
        FormOutcome::Valid(values) => match id {
            FormId::Login => navigation::handle_login(state, values),
            FormId::LoanApplication => loans::handle_application_submitted(state, values),
            FormId::Profile => profile::handle_profile_submitted(state, values),
            FormId::ImageUpload => profile::handle_upload_requested(state, values),
        },
        FormOutcome::Invalid(errors) => {
            debug!("{:?} form rejected with {} field error(s)", id, errors.len());
            let notice = match id {
                FormId::Profile => Some("Failed to update profile".to_string()),
                _ => errors.into_iter().next().map(|e| Error::from(e).to_string()),
            };
            if let Some(notice) = notice {
                state.notifications.error(notice);
            }
            UpdateResult::none()
        }
    }
}

pub(crate) fn handle_form_cancel(state: &mut AppState, id: FormId) -> UpdateResult {
    match id {
        FormId::Login => {
            state.login_form.reset();
            UpdateResult::none()
        }
        FormId::LoanApplication => {
            state.loans.application = None;
            UpdateResult::none()
        }
        FormId::Profile => profile::handle_profile_canceled(state),
        FormId::ImageUpload => {
            state.profile.upload = None;
            UpdateResult::none()
        }
    }
}
