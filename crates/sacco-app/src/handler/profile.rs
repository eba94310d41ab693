//! Profile form and profile image upload

use std::path::PathBuf;

use sacco_core::prelude::*;
use sacco_core::Destination;
use sacco_store::UploadReceipt;

use crate::form::FormValues;
use crate::state::AppState;

use super::{navigation, UpdateAction, UpdateResult};

pub(crate) fn handle_profile_submitted(state: &mut AppState, values: FormValues) -> UpdateResult {
    info!(
        "Profile updated for {}",
        values.get("fullName").unwrap_or_default()
    );
    state.notifications.success("Profile updated successfully!");
    UpdateResult::none()
}

/// Cancel discards the edits and returns to the dashboard
pub(crate) fn handle_profile_canceled(state: &mut AppState) -> UpdateResult {
    state.profile.form.reset();
    state.notifications.info("Profile update canceled");
    navigation::navigate_to(state, Destination::Dashboard)
}

pub(crate) fn handle_open_upload(state: &mut AppState) -> UpdateResult {
    if state.session.destination() == Some(Destination::ProfileManagement)
        && !state.profile.uploading
    {
        state.open_image_upload();
    }
    UpdateResult::none()
}

pub(crate) fn handle_upload_requested(state: &mut AppState, values: FormValues) -> UpdateResult {
    let Some(path) = values.get("path").map(PathBuf::from) else {
        return UpdateResult::none();
    };
    state.profile.upload = None;
    state.profile.uploading = true;
    debug!("Uploading profile image {:?}", path);
    UpdateResult::action(UpdateAction::UploadProfileImage { path })
}

pub(crate) fn handle_uploaded(state: &mut AppState, epoch: u64, receipt: UploadReceipt) -> UpdateResult {
    if !state.is_current_session(epoch) {
        debug!("Dropping upload of {} from session epoch {}", receipt.file_name, epoch);
        return UpdateResult::none();
    }
    state.profile.uploading = false;
    info!("Profile image uploaded: {} ({} bytes)", receipt.file_name, receipt.bytes);
    state
        .notifications
        .success(format!("{} file uploaded successfully", receipt.file_name));
    state.profile.avatar = Some(receipt.file_name);
    UpdateResult::none()
}

/// The previous avatar is kept on failure
pub(crate) fn handle_upload_failed(
    state: &mut AppState,
    epoch: u64,
    file: String,
    reason: String,
) -> UpdateResult {
    if !state.is_current_session(epoch) {
        debug!("Dropping failed upload of {} from session epoch {}", file, epoch);
        return UpdateResult::none();
    }
    state.profile.uploading = false;
    warn!("Profile image upload failed for {}: {}", file, reason);
    state
        .notifications
        .error(format!("{} file upload failed.", file));
    UpdateResult::none()
}
