//! Sign-in session context.
//!
//! Replaces the browser-storage session of the original app with an explicit
//! value: components that need the user get a [`Session`] passed in, and
//! sign-out is simply dropping it. Identity is the name/id stub the store
//! understands -- there is no credential here, and `verify` only checks that
//! the name matches the one registered for the id.

use crate::sync::SyncAdapter;
use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::info;

/// Smallest accepted daily saving target, in PKR.
pub const MIN_DAILY_SAVING_PKR: f64 = 50.0;
/// Largest accepted daily saving target, in PKR.
pub const MAX_DAILY_SAVING_PKR: f64 = 10_000.0;

/// Why a sign-in attempt was rejected. Shown to the user inline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("please enter your name")]
    EmptyName,
    #[error("please enter your unique ID")]
    EmptyUserId,
    #[error("minimum daily saving is {MIN_DAILY_SAVING_PKR} PKR")]
    RateTooLow,
    #[error("maximum daily saving is {MAX_DAILY_SAVING_PKR} PKR")]
    RateTooHigh,
    #[error("could not verify credentials: {0}")]
    Verification(String),
}

/// One signed-in user: who they are and what they intend to save per day.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub display_name: String,
    /// Store identifier, `SS-` plus six digits for generated ids.
    pub user_id: String,
    /// Declared savings target in PKR per day; used only for projection.
    pub daily_rate: f64,
    /// When this user started tracking.
    pub started_at: DateTime<Utc>,
}

impl Session {
    /// Validate and build a session. The daily rate must sit inside the
    /// portal's 50-10 000 PKR bounds and the name must be non-blank.
    pub fn new(display_name: &str, user_id: String, daily_rate: f64) -> Result<Self, SessionError> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(SessionError::EmptyName);
        }
        if daily_rate < MIN_DAILY_SAVING_PKR {
            return Err(SessionError::RateTooLow);
        }
        if daily_rate > MAX_DAILY_SAVING_PKR {
            return Err(SessionError::RateTooHigh);
        }
        Ok(Self {
            display_name: display_name.to_string(),
            user_id,
            daily_rate,
            started_at: Utc::now(),
        })
    }

    /// Fresh `SS-dddddd` user id.
    pub fn generate_user_id() -> String {
        let bytes = uuid::Uuid::new_v4().into_bytes();
        let n = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        format!("SS-{}", 100_000 + n % 900_000)
    }
}

/// Create an account for a new user: generate an id, announce it to the
/// store (best-effort, like saves) and hand back the live session.
pub async fn sign_up(
    sync: &SyncAdapter,
    display_name: &str,
    daily_rate: f64,
) -> Result<Session, SessionError> {
    let session = Session::new(display_name, Session::generate_user_id(), daily_rate)?;
    sync.register(&session.user_id, &session.display_name).await;
    info!("signed up {} as {}", session.display_name, session.user_id);
    Ok(session)
}

/// Sign a returning user in. The store must confirm the id/name pair;
/// a rejected or unreachable verify blocks the sign-in.
pub async fn sign_in(
    sync: &SyncAdapter,
    display_name: &str,
    user_id: &str,
    daily_rate: f64,
) -> Result<Session, SessionError> {
    let user_id = user_id.trim();
    if user_id.is_empty() {
        return Err(SessionError::EmptyUserId);
    }
    let session = Session::new(display_name, user_id.to_string(), daily_rate)?;
    let response = sync
        .verify(&session.user_id, &session.display_name)
        .await
        .map_err(|err| SessionError::Verification(format!("{:#}", err)))?;
    if !response.success {
        return Err(SessionError::Verification(response.message));
    }
    info!("signed in {} as {}", session.display_name, session.user_id);
    Ok(session)
}
