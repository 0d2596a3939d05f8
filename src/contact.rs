//! Contact form submission through a transactional-mail relay.
//!
//! The form forwards its three named fields to the relay using three
//! credentials (service id, template id, public key) read from the
//! environment. A submission is at most one relay call per press:
//!
//! ```text
//! Idle ──begin──▶ InFlight ──complete──▶ Idle
//!                    │
//!                    ├─ credentials missing → configuration error, no call
//!                    ├─ relay accepted      → success, fields cleared
//!                    └─ relay failed        → failure, fields kept
//! ```
//!
//! [`ContactForm::begin`] flips to `InFlight` before any network work starts
//! and refuses a second submission until [`ContactForm::complete`] runs, so
//! re-entrant or programmatic double submits cannot issue two calls.

use crate::config::ContactConfig;
use crate::view::toast::Notification;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

pub const SERVICE_ID_VAR: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_VAR: &str = "EMAILJS_TEMPLATE_ID";
pub const PUBLIC_KEY_VAR: &str = "EMAILJS_PUBLIC_KEY";

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again or email me directly.";
pub const CONFIG_ERROR_MESSAGE: &str = "Configuration error. Please contact the administrator.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("missing relay credential: {0} is not set")]
pub struct MissingCredential(pub &'static str);

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("relay transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitError {
    #[error("a message is already being sent")]
    InFlight,
}

/// Relay credentials. All three are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelayCredentials {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayCredentials {
    /// Read the credentials from the process environment.
    pub fn from_env() -> Result<Self, MissingCredential> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the credentials through `lookup`. Blank values count as missing.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, MissingCredential> {
        let get = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(MissingCredential(name))
        };
        Ok(Self {
            service_id: get(SERVICE_ID_VAR)?,
            template_id: get(TEMPLATE_ID_VAR)?,
            public_key: get(PUBLIC_KEY_VAR)?,
        })
    }
}

/// The form's named fields, serialized under the names the relay template
/// refers to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    #[serde(rename = "full-name")]
    pub full_name: String,
    pub email: String,
    pub message: String,
}

impl ContactFields {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Anything that can deliver a contact message.
pub trait MailRelay {
    fn send(
        &self,
        credentials: &RelayCredentials,
        fields: &ContactFields,
    ) -> Result<(), RelayError>;
}

/// EmailJS REST relay.
pub struct EmailJsRelay {
    client: reqwest::blocking::Client,
    endpoint: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactFields,
}

impl EmailJsRelay {
    pub fn new(config: &ContactConfig) -> Result<Self, RelayError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }
}

impl MailRelay for EmailJsRelay {
    fn send(
        &self,
        credentials: &RelayCredentials,
        fields: &ContactFields,
    ) -> Result<(), RelayError> {
        let request = SendRequest {
            service_id: &credentials.service_id,
            template_id: &credentials.template_id,
            user_id: &credentials.public_key,
            template_params: fields,
        };
        tracing::debug!(endpoint = %self.endpoint, "sending contact message");
        let response = self.client.post(&self.endpoint).json(&request).send()?;
        let status = response.status();
        if status.is_success() {
            tracing::info!(status = status.as_u16(), "relay accepted contact message");
            Ok(())
        } else {
            let body = response.text().unwrap_or_default();
            Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            })
        }
    }
}

/// How a submission ended.
#[derive(Debug)]
pub enum SubmitOutcome {
    Sent,
    MissingConfiguration(MissingCredential),
    Failed(RelayError),
}

impl SubmitOutcome {
    /// The notification shown for this outcome.
    pub fn notification(&self) -> Notification {
        match self {
            SubmitOutcome::Sent => Notification::success(SENT_MESSAGE),
            SubmitOutcome::MissingConfiguration(_) => Notification::error(CONFIG_ERROR_MESSAGE),
            SubmitOutcome::Failed(_) => Notification::error(FAILED_MESSAGE),
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self, SubmitOutcome::Sent)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    InFlight,
}

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactFields,
    state: SubmitState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut ContactFields {
        &mut self.fields
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Whether the submit button accepts presses.
    pub fn submit_enabled(&self) -> bool {
        self.state == SubmitState::Idle
    }

    /// Disable submission and snapshot the fields to send.
    pub fn begin(&mut self) -> Result<ContactFields, SubmitError> {
        if self.state == SubmitState::InFlight {
            return Err(SubmitError::InFlight);
        }
        self.state = SubmitState::InFlight;
        Ok(self.fields.clone())
    }

    /// Re-enable submission; a successful send clears the fields.
    pub fn complete(&mut self, outcome: &SubmitOutcome) {
        if outcome.is_sent() {
            self.fields.clear();
        }
        self.state = SubmitState::Idle;
    }

    /// Run a whole submission: begin, send (unless credentials are
    /// missing), complete.
    pub fn submit(
        &mut self,
        relay: &dyn MailRelay,
        credentials: Result<RelayCredentials, MissingCredential>,
    ) -> Result<SubmitOutcome, SubmitError> {
        let fields = self.begin()?;
        let outcome = match credentials {
            Err(missing) => {
                tracing::error!(%missing, "relay credentials are missing");
                SubmitOutcome::MissingConfiguration(missing)
            }
            Ok(credentials) => match relay.send(&credentials, &fields) {
                Ok(()) => SubmitOutcome::Sent,
                Err(err) => {
                    tracing::error!(error = %err, "relay call failed");
                    SubmitOutcome::Failed(err)
                }
            },
        };
        self.complete(&outcome);
        Ok(outcome)
    }
}
