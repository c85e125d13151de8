//! Conversions from external infrastructure errors into domain errors.

use meetnotify_domain::MeetNotifyError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub MeetNotifyError);

impl From<InfraError> for MeetNotifyError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<MeetNotifyError> for InfraError {
    fn from(value: MeetNotifyError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoMeetNotifyError {
    fn into_meetnotify(self) -> MeetNotifyError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → MeetNotifyError */
/* -------------------------------------------------------------------------- */

impl IntoMeetNotifyError for HttpError {
    fn into_meetnotify(self) -> MeetNotifyError {
        if self.is_timeout() {
            return MeetNotifyError::Network("HTTP request timed out".into());
        }

        if self.is_connect() {
            return MeetNotifyError::Network("HTTP connection failure".into());
        }

        if self.is_decode() {
            return MeetNotifyError::Internal(format!("HTTP response could not be decoded: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));

            return match code {
                401 | 403 => MeetNotifyError::Auth(message),
                404 => MeetNotifyError::NotFound(message),
                409 => MeetNotifyError::Conflict(message),
                429 => MeetNotifyError::Network(message),
                400..=499 => MeetNotifyError::InvalidInput(message),
                500..=599 => MeetNotifyError::Server(message),
                _ => MeetNotifyError::Network(message),
            };
        }

        if self.is_builder() {
            return MeetNotifyError::Config(format!("invalid HTTP request: {self}"));
        }

        MeetNotifyError::Network(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_meetnotify())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → MeetNotifyError */
/* -------------------------------------------------------------------------- */

impl IntoMeetNotifyError for JsonError {
    fn into_meetnotify(self) -> MeetNotifyError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Data => {
                MeetNotifyError::Internal(format!("unexpected JSON shape from API: {self}"))
            }
            Category::Syntax | Category::Eof => {
                MeetNotifyError::Internal(format!("malformed JSON from API: {self}"))
            }
            Category::Io => MeetNotifyError::Network(format!("I/O error reading JSON: {self}")),
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_meetnotify())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
