use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::database::activity_directory::{ActivityDirectory, ActivityListing};

pub type SharedDirectory = Arc<RwLock<ActivityDirectory>>;

pub fn shared(directory: ActivityDirectory) -> SharedDirectory {
    Arc::new(RwLock::new(directory))
}

// Display strings double as the `detail` field of error responses.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Activity not found")]
    NotFound,
    #[error("Student not signed up")]
    NotEnrolled,
    #[error("Email is required")]
    MissingEmail,
}

fn require_email(email: &str) -> Result<&str, DirectoryError> {
    if email.is_empty() {
        return Err(DirectoryError::MissingEmail);
    }
    Ok(email)
}

/// Appends `email` to the roster of `activity_name`.
///
/// There is no duplicate guard and no capacity check: enrolling the same
/// email twice yields two roster entries, and rosters may grow past
/// `max_participants`.
pub fn enroll(
    directory: &mut ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    let email = require_email(email)?;
    let activity = directory
        .get_mut(activity_name)
        .ok_or(DirectoryError::NotFound)?;

    activity.participants.push(email.to_string());
    info!(
        activity = %activity_name,
        email = %email,
        roster_size = activity.participants.len(),
        spots_left = activity.spots_left(),
        "participant signed up"
    );
    Ok(format!("Signed up {} for {}", email, activity_name))
}

/// Removes the first roster entry equal to `email`.
pub fn withdraw(
    directory: &mut ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    let email = require_email(email)?;
    let activity = directory
        .get_mut(activity_name)
        .ok_or(DirectoryError::NotFound)?;

    let Some(pos) = activity.participants.iter().position(|p| p == email) else {
        return Err(DirectoryError::NotEnrolled);
    };
    activity.participants.remove(pos);
    info!(
        activity = %activity_name,
        email = %email,
        roster_size = activity.participants.len(),
        "participant removed"
    );
    Ok(format!("Removed {} from {}", email, activity_name))
}

pub async fn list_activities(directory: &SharedDirectory) -> ActivityListing {
    let listing = directory.read().await.list();
    debug!(count = listing.0.len(), "listing activities");
    listing
}

pub async fn signup(
    directory: &SharedDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    let mut guard = directory.write().await;
    enroll(&mut guard, activity_name, email).inspect_err(|e| {
        warn!(activity = %activity_name, email = %email, error = %e, "signup rejected");
    })
}

pub async fn unregister(
    directory: &SharedDirectory,
    activity_name: &str,
    email: &str,
) -> Result<String, DirectoryError> {
    let mut guard = directory.write().await;
    withdraw(&mut guard, activity_name, email).inspect_err(|e| {
        warn!(activity = %activity_name, email = %email, error = %e, "unregister rejected");
    })
}
