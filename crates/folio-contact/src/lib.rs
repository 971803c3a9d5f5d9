//! # folio-contact
//!
//! Server side of the portfolio's contact form.
//!
//! [`ContactService::submit`] takes the raw request body plus the client's
//! forwarded-for and user-agent headers and returns a [`ContactReply`]
//! (status code and JSON body) for whatever HTTP layer hosts it. Each
//! submission is rate limited per client, checked against the honeypot,
//! validated, and handed to a [`Mailer`].

mod error;
mod form;
mod limiter;
mod mailer;
mod service;
mod store;

use folio_schema::SchemaRegistry;

pub use error::ContactError;
pub use form::{ContactForm, ContactMessage, ContactSubmission, friendly_message};
pub use limiter::{RateDecision, RateLimitSettings, RateLimiter, client_ip, client_key};
pub use mailer::{Mailer, TracingMailer};
pub use service::{ClientInfo, ContactReply, ContactService, FieldDetail, ReplyBody};
pub use store::{MemoryStore, RateLimitRecord, RateLimitStore};

/// Add the contact form schema to `registry` as `contact_form`.
pub fn register_schemas(registry: &mut SchemaRegistry) {
    registry.register::<ContactForm>("contact_form");
}
