//! Handling of one contact form submission, independent of the HTTP stack.

use chrono::{DateTime, Utc};
use folio_config::ContactConfig;
use folio_schema::{Schema, validate_with_details};
use serde::Serialize;
use serde_json::Value;

use crate::error::ContactError;
use crate::form::{ContactForm, ContactMessage, ContactSubmission, friendly_message};
use crate::limiter::{RateDecision, RateLimitSettings, RateLimiter, client_ip, client_key};
use crate::mailer::Mailer;
use crate::store::{MemoryStore, RateLimitStore};

const THANK_YOU: &str = "Thank you for your message! I'll get back to you soon.";

/// Request metadata the transport layer passes through.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientInfo {
    /// Raw `X-Forwarded-For` header value.
    pub forwarded_for: Option<String>,
    /// Raw `User-Agent` header value.
    pub user_agent: Option<String>,
}

impl ClientInfo {
    #[must_use]
    pub fn new(forwarded_for: Option<&str>, user_agent: Option<&str>) -> Self {
        Self {
            forwarded_for: forwarded_for.map(str::to_string),
            user_agent: user_agent.map(str::to_string),
        }
    }

    #[must_use]
    pub fn rate_limit_key(&self) -> String {
        client_key(self.forwarded_for.as_deref(), self.user_agent.as_deref())
    }

    #[must_use]
    pub fn ip(&self) -> String {
        client_ip(self.forwarded_for.as_deref())
    }

    #[must_use]
    pub fn user_agent(&self) -> &str {
        self.user_agent.as_deref().unwrap_or("unknown")
    }
}

/// One field problem reported back to the visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDetail {
    pub field: String,
    pub message: String,
}

/// JSON body of a reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ReplyBody {
    Success {
        success: bool,
        message: String,
        /// Milliseconds since the Unix epoch.
        timestamp: i64,
    },
    Failure {
        success: bool,
        error: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<Vec<FieldDetail>>,
    },
    MethodNotAllowed {
        error: String,
    },
}

/// Status code and JSON body to answer a submission with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactReply {
    pub status: u16,
    pub body: ReplyBody,
}

impl ContactReply {
    fn success(at: DateTime<Utc>) -> Self {
        Self {
            status: 200,
            body: ReplyBody::Success {
                success: true,
                message: THANK_YOU.to_string(),
                timestamp: at.timestamp_millis(),
            },
        }
    }

    fn failure(status: u16, error: impl Into<String>, details: Option<Vec<FieldDetail>>) -> Self {
        Self {
            status,
            body: ReplyBody::Failure {
                success: false,
                error: error.into(),
                details,
            },
        }
    }

    /// Reply for any method other than `POST`.
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self {
            status: 405,
            body: ReplyBody::MethodNotAllowed {
                error: "Method not allowed".to_string(),
            },
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == 200
    }

    /// # Errors
    ///
    /// Fails only if the body cannot be serialized.
    pub fn body_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.body)
    }
}

/// Validates, rate limits, and delivers contact submissions.
pub struct ContactService<M, S = MemoryStore> {
    schema: Schema<ContactForm>,
    limiter: RateLimiter<S>,
    mailer: Option<M>,
    to_email: String,
    from_email: String,
}

impl<M: Mailer> ContactService<M, MemoryStore> {
    /// Service with an in-memory rate-limit store.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::Schema` if the form schema fails to compile.
    pub fn new(config: &ContactConfig, mailer: Option<M>) -> Result<Self, ContactError> {
        Self::with_store(config, mailer, MemoryStore::new())
    }
}

impl<M: Mailer, S: RateLimitStore> ContactService<M, S> {
    /// # Errors
    ///
    /// Returns `ContactError::Schema` if the form schema fails to compile.
    pub fn with_store(
        config: &ContactConfig,
        mailer: Option<M>,
        store: S,
    ) -> Result<Self, ContactError> {
        Ok(Self {
            schema: Schema::compile()?,
            limiter: RateLimiter::new(RateLimitSettings::from_config(config), store),
            mailer,
            to_email: config.to_email.clone(),
            from_email: config.from_email.clone(),
        })
    }

    #[must_use]
    pub const fn limiter(&self) -> &RateLimiter<S> {
        &self.limiter
    }

    /// Handle a `POST` with raw JSON `body`.
    pub async fn submit(&self, client: &ClientInfo, body: &str) -> ContactReply {
        self.submit_at(client, body, Utc::now()).await
    }

    /// Handle a `POST` received at `now`.
    pub async fn submit_at(&self, client: &ClientInfo, body: &str, now: DateTime<Utc>) -> ContactReply {
        let key = client.rate_limit_key();
        if let RateDecision::Limited { retry_at } = self.limiter.check_at(&key, now) {
            tracing::info!(key = %key, %retry_at, "contact submission rate limited");
            return ContactReply::failure(429, "Too many requests. Please try again later.", None);
        }

        let data: Value = match serde_json::from_str(body) {
            Ok(data) => data,
            Err(error) => {
                tracing::debug!(%error, "contact body is not JSON");
                return ContactReply::failure(400, "Invalid request body", None);
            }
        };

        if is_honeypot_filled(&data) {
            tracing::info!(ip = %client.ip(), "honeypot filled; dropping submission");
            return ContactReply::success(now);
        }

        let form = match validate_with_details(&data, &self.schema) {
            Ok(form) => form,
            Err(errors) => {
                let details = errors
                    .iter()
                    .map(|error| FieldDetail {
                        field: error.field.clone(),
                        message: friendly_message(error),
                    })
                    .collect();
                return ContactReply::failure(400, "Validation failed", Some(details));
            }
        };

        let submission = ContactSubmission {
            form,
            ip: client.ip(),
            user_agent: client.user_agent().to_string(),
            received_at: now,
        };

        match self.deliver(&submission).await {
            Ok(()) => {
                tracing::info!(
                    name = %submission.form.name,
                    email = %submission.form.email,
                    ip = %submission.ip,
                    "contact submission delivered"
                );
                ContactReply::success(now)
            }
            Err(error) => {
                tracing::error!(%error, "contact submission not delivered");
                let message = match error {
                    ContactError::Delivery(_) => "Could not send email at this time.",
                    _ => "Email service is not configured.",
                };
                ContactReply::failure(error.status(), message, None)
            }
        }
    }

    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        let mailer = self
            .mailer
            .as_ref()
            .ok_or(ContactError::NotConfigured("no mailer"))?;
        if self.to_email.is_empty() {
            return Err(ContactError::NotConfigured("no recipient address"));
        }
        let from = if self.from_email.is_empty() {
            &self.to_email
        } else {
            &self.from_email
        };

        let message = ContactMessage::compose(submission, from, &self.to_email);
        mailer.send(&message).await
    }
}

fn is_honeypot_filled(data: &Value) -> bool {
    data.get("honeypot")
        .and_then(Value::as_str)
        .is_some_and(|value| !value.is_empty())
}
