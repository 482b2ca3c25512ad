//! Best-effort sync against the remote savings store.
//!
//! Failure semantics are deliberately lossy, matching the low stakes of a
//! self-reported savings diary: a failed load degrades to an empty ledger,
//! a failed save is logged and forgotten, and nothing is ever retried. The
//! one exception is [`SyncAdapter::verify`], whose outcome gates returning
//! users at sign-in and is therefore surfaced to the caller.

use anyhow::{Context, Result};
use reqwest::{Client, Url};
use serde::Serialize;
use shared::{Ledger, RegisterRequest, SavingsPayload, VerifyRequest, VerifyResponse};
use tracing::{debug, warn};

/// Serializes a borrowed ledger as the `{"savings": ...}` wire body.
#[derive(Serialize)]
struct SavingsPayloadRef<'a> {
    savings: &'a Ledger,
}

/// HTTP client for the savings store, keyed by user id.
#[derive(Debug, Clone)]
pub struct SyncAdapter {
    http: Client,
    base_url: Url,
}

impl SyncAdapter {
    /// Build an adapter for a store at `base_url`, e.g. `http://localhost:8000`.
    pub fn new(base_url: &str) -> Result<Self> {
        // Url::join drops the last path segment without a trailing slash
        let mut normalized = base_url.trim_end_matches('/').to_string();
        normalized.push('/');
        let base_url = Url::parse(&normalized)
            .with_context(|| format!("invalid savings store URL '{}'", base_url))?;
        let http = Client::builder()
            .build()
            .context("failed to build HTTP client")?;
        Ok(Self { http, base_url })
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .with_context(|| format!("failed to build URL for '{}'", path))
    }

    /// Fetch the full ledger for a user.
    ///
    /// Never fails: any network error or non-success response is logged and
    /// swallowed, and the caller proceeds with a blank slate.
    pub async fn load(&self, user_id: &str) -> Ledger {
        match self.try_load(user_id).await {
            Ok(ledger) => {
                debug!("loaded {} month(s) of savings for {}", ledger.months.len(), user_id);
                ledger
            }
            Err(err) => {
                warn!("could not load savings for {}, starting empty: {:#}", user_id, err);
                Ledger::default()
            }
        }
    }

    async fn try_load(&self, user_id: &str) -> Result<Ledger> {
        let url = self.endpoint(&format!("api/savings/{}", user_id))?;
        let payload: SavingsPayload = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(payload.savings)
    }

    /// Persist the full ledger for a user, overwriting what the store holds.
    ///
    /// Fire-and-forget: failures are logged, never surfaced and never
    /// retried. Overlapping saves are allowed; the store is last-write-wins.
    pub async fn save(&self, user_id: &str, ledger: &Ledger) {
        if let Err(err) = self.try_save(user_id, ledger).await {
            warn!("could not save savings for {}: {:#}", user_id, err);
        }
    }

    async fn try_save(&self, user_id: &str, ledger: &Ledger) -> Result<()> {
        let url = self.endpoint(&format!("api/savings/{}", user_id))?;
        self.http
            .post(url)
            .json(&SavingsPayloadRef { savings: ledger })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Announce a freshly generated user id at sign-up. Best-effort, like
    /// saves: a new user can start tracking while offline.
    pub async fn register(&self, user_id: &str, full_name: &str) {
        if let Err(err) = self.try_register(user_id, full_name).await {
            warn!("could not register {}: {:#}", user_id, err);
        }
    }

    async fn try_register(&self, user_id: &str, full_name: &str) -> Result<()> {
        let url = self.endpoint("api/register")?;
        let request = RegisterRequest {
            unique_id: user_id.to_string(),
            full_name: full_name.to_string(),
        };
        self.http
            .post(url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// Check a returning user's id/name pair against the store. Unlike the
    /// ledger calls this one reports failure: sign-in must not proceed on a
    /// rejected or unreachable verify.
    pub async fn verify(&self, user_id: &str, full_name: &str) -> Result<VerifyResponse> {
        let url = self.endpoint("api/verify")?;
        let request = VerifyRequest {
            unique_id: user_id.to_string(),
            full_name: full_name.to_string(),
        };
        let response = self
            .http
            .post(url)
            .json(&request)
            .send()
            .await
            .context("could not reach the savings store")?
            .error_for_status()?
            .json()
            .await
            .context("malformed verify response")?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::MonthKey;

    // Nothing listens here; connections are refused immediately.
    const DEAD_STORE: &str = "http://127.0.0.1:9";

    #[test]
    fn test_new_rejects_garbage_urls() {
        assert!(SyncAdapter::new("not a url").is_err());
        assert!(SyncAdapter::new("http://localhost:8000").is_ok());
        assert!(SyncAdapter::new("http://localhost:8000/").is_ok());
    }

    #[tokio::test]
    async fn test_load_failure_degrades_to_empty_ledger() {
        let sync = SyncAdapter::new(DEAD_STORE).unwrap();
        let ledger = sync.load("SS-123456").await;
        assert!(ledger.is_empty());
    }

    #[tokio::test]
    async fn test_save_failure_is_swallowed() {
        let sync = SyncAdapter::new(DEAD_STORE).unwrap();
        let mut ledger = Ledger::default();
        ledger
            .months
            .entry(MonthKey::new(2025, 2).unwrap())
            .or_default()
            .insert(10, 800.0);
        // Must return normally despite the refused connection
        sync.save("SS-123456", &ledger).await;
    }

    #[tokio::test]
    async fn test_verify_failure_is_surfaced() {
        let sync = SyncAdapter::new(DEAD_STORE).unwrap();
        assert!(sync.verify("SS-123456", "Ayesha Khan").await.is_err());
    }
}
