//! # Registration Command
//!
//! Submit handler of the "create account" dialog.
//!
//! ## Registration Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    register_user                                        │
//! │                                                                         │
//! │  form.validate() ──── errors ──► ApiError { fields } (inline, no toast) │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  uploader.upload(avatar_files) ─── fail ──┐                             │
//! │        │ locations[0]                     │                             │
//! │        ▼                                  │                             │
//! │  users.create_user(UserRegister) ── fail ─┼──► error toast,             │
//! │        │                                  │    session unchanged        │
//! │        ▼                                  ▼                             │
//! │  session.login(user)                 ApiError                           │
//! │  success toast "Congratulations, {name}! ..."                           │
//! │  close dialog after `close_after`                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use shopfront_core::{RegistrationForm, User};
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{ApiError, ApiResult, ServiceError};
use crate::services::{FileUploader, Notification, Notifier, UserDirectory};
use crate::state::SessionStore;

/// Toast shown when upload or account creation fails.
pub const REGISTRATION_FAILED_MESSAGE: &str =
    "Please fill in all the required fields and upload an avatar.";

/// Success toast text for `name`.
pub fn welcome_message(name: &str) -> String {
    format!(
        "Congratulations, {}! Your account has been successfully created.",
        name
    )
}

/// Result of a successful registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationOutcome {
    pub user: User,
    /// How long the dialog stays open showing the success state.
    pub close_after: Duration,
}

/// Validates the form, uploads the avatar, creates the account and signs the
/// new user in.
pub async fn register_user(
    form: RegistrationForm,
    uploader: &dyn FileUploader,
    users: &dyn UserDirectory,
    session: &SessionStore,
    notifier: &dyn Notifier,
    close_after: Duration,
) -> ApiResult<RegistrationOutcome> {
    debug!(?form, "register_user command");
    form.validate()?;

    let locations = uploader
        .upload(&form.avatar_files)
        .await
        .map_err(|e| failed(notifier, ApiError::upload(&e)))?;

    let avatar = locations
        .into_iter()
        .next()
        .ok_or_else(|| failed(notifier, ApiError::upload(&ServiceError::EmptyUpload)))?;

    let user = users
        .create_user(form.into_register(avatar))
        .await
        .map_err(|e| failed(notifier, ApiError::registration(&e)))?;

    session.login(user.clone());
    notifier.notify(Notification::success(welcome_message(&user.name)));
    info!(user_id = user.id, "Registration complete");

    Ok(RegistrationOutcome { user, close_after })
}

fn failed(notifier: &dyn Notifier, err: ApiError) -> ApiError {
    notifier.notify(Notification::error(REGISTRATION_FAILED_MESSAGE));
    err
}
