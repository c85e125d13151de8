//! Retrying transport for the REST backend
//!
//! Idempotent requests (GET, PUT, DELETE, HEAD) are re-sent on a 5xx status
//! or on a connect or timeout failure. Everything else, POST in particular,
//! is sent exactly once: the backend may have stored the record before
//! failing, and a second attempt would create a duplicate.
//!
//! Each attempt is bounded by its own timeout, and a whole call, retries and
//! pauses included, by a deadline derived from the policy.

use std::time::Duration;

use meetnotify_domain::MeetNotifyError;
use reqwest::{Client, Method, Request, RequestBuilder, Response};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use crate::errors::InfraError;

/// Pause before the first retry; doubled for each one after it.
const RETRY_PAUSE: Duration = Duration::from_millis(200);
/// Pauses stop doubling after this many retries.
const MAX_PAUSE_DOUBLINGS: u32 = 5;

/// How often, and for which methods, a request may be sent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: u32,
    pause: Duration,
}

impl RetryPolicy {
    /// `attempts` counts the first try; zero is treated as one.
    pub fn new(attempts: usize) -> Self {
        let attempts = u32::try_from(attempts).unwrap_or(u32::MAX).max(1);
        Self { attempts, pause: RETRY_PAUSE }
    }

    pub fn with_pause(self, pause: Duration) -> Self {
        Self { pause, ..self }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Attempts allowed for `method`.
    pub fn attempts_for(&self, method: &Method) -> u32 {
        if method.is_idempotent() {
            self.attempts
        } else {
            1
        }
    }

    /// Pause before retry number `retry` (1-based).
    pub fn pause_before(&self, retry: u32) -> Duration {
        let doublings = retry.saturating_sub(1).min(MAX_PAUSE_DOUBLINGS);
        self.pause.saturating_mul(1 << doublings)
    }

    /// Longest a call with `method` may take when every attempt runs to
    /// `per_attempt`.
    pub fn deadline(&self, method: &Method, per_attempt: Duration) -> Duration {
        let attempts = self.attempts_for(method);
        let retries = attempts - 1;
        // In units of the first pause: 1 + 2 + 4 + ... then flat once doubling stops.
        let doubling = retries.min(MAX_PAUSE_DOUBLINGS + 1);
        let units = ((1u32 << doubling) - 1)
            .saturating_add((retries - doubling).saturating_mul(1 << MAX_PAUSE_DOUBLINGS));
        per_attempt.saturating_mul(attempts).saturating_add(self.pause.saturating_mul(units))
    }
}

/// Why a call produced no response
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("no response within {0:?}")]
    Deadline(Duration),

    #[error("{0}")]
    Failed(MeetNotifyError),
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::Failed(InfraError::from(err).into())
    }
}

/// reqwest client plus the retry policy every call goes through
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    per_attempt: Duration,
    retry: RetryPolicy,
}

impl HttpClient {
    /// # Errors
    /// `Config` when the TLS backend cannot be initialised.
    pub fn new(per_attempt: Duration, retry: RetryPolicy) -> Result<Self, MeetNotifyError> {
        let inner = Client::builder()
            .timeout(per_attempt)
            .user_agent(concat!("meetnotify/", env!("CARGO_PKG_VERSION")))
            .no_proxy()
            .build()
            .map_err(|err| MeetNotifyError::from(InfraError::from(err)))?;
        Ok(Self { inner, per_attempt, retry })
    }

    pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.inner.request(method, url)
    }

    /// Send with retries, giving up at the policy deadline.
    ///
    /// A final 5xx is returned as a response, not an error; status mapping
    /// belongs to the caller.
    pub async fn send(&self, builder: RequestBuilder) -> Result<Response, TransportError> {
        let request = builder.build()?;
        let deadline = self.retry.deadline(request.method(), self.per_attempt);
        let url = request.url().clone();

        match tokio::time::timeout(deadline, self.send_with_retries(request)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                warn!(%url, ?deadline, "HTTP call exceeded its deadline");
                Err(TransportError::Deadline(deadline))
            }
        }
    }

    async fn send_with_retries(&self, request: Request) -> Result<Response, TransportError> {
        let method = request.method().clone();
        let url = request.url().clone();
        let attempts = self.retry.attempts_for(&method);

        let mut attempt = 1;
        loop {
            let current = request.try_clone().ok_or_else(|| {
                TransportError::Failed(MeetNotifyError::Internal(
                    "streaming request bodies are not supported".into(),
                ))
            })?;
            let outcome = self.inner.execute(current).await;

            let retryable = match &outcome {
                Ok(response) => response.status().is_server_error(),
                Err(err) => err.is_timeout() || err.is_connect(),
            };
            if !retryable || attempt >= attempts {
                if retryable && !method.is_idempotent() {
                    debug!(%method, %url, "not retrying non-idempotent request");
                }
                return outcome.map_err(TransportError::from);
            }

            let pause = self.retry.pause_before(attempt);
            match &outcome {
                Ok(response) => {
                    debug!(attempt, %method, %url, status = %response.status(), ?pause, "retrying")
                }
                Err(err) => debug!(attempt, %method, %url, error = %err, ?pause, "retrying"),
            }
            tokio::time::sleep(pause).await;
            attempt += 1;
        }
    }
}
