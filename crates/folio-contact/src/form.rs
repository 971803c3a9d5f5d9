//! The contact form and the message composed from it.

use chrono::{DateTime, SecondsFormat, Utc};
use folio_schema::{ContentRules, ErrorKind, ValidationError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Fields a visitor submits through the contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ContactForm {
    #[schemars(length(min = 2, max = 100), regex(pattern = r"^[a-zA-Z\s'-]+$"))]
    pub name: String,
    #[schemars(email, length(max = 255))]
    pub email: String,
    /// Optional; an empty string counts as not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(length(max = 100))]
    pub company: Option<String>,
    #[schemars(length(min = 10, max = 2000))]
    pub message: String,
    /// Hidden field that only bots fill in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honeypot: Option<String>,
}

impl ContentRules for ContactForm {}

impl ContactForm {
    /// Company, unless blank.
    #[must_use]
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref().filter(|c| !c.trim().is_empty())
    }
}

/// Visitor-facing wording for a form field error.
#[must_use]
pub fn friendly_message(error: &ValidationError) -> String {
    let message = match (error.field.as_str(), error.code) {
        ("name", ErrorKind::Required | ErrorKind::TooSmall) => "Name must be at least 2 characters",
        ("name", ErrorKind::TooBig) => "Name must be less than 100 characters",
        ("name", ErrorKind::InvalidString) => {
            "Name can only contain letters, spaces, hyphens, and apostrophes"
        }
        ("email", ErrorKind::TooBig) => "Email must be less than 255 characters",
        ("email", _) => "Please enter a valid email address",
        ("company", ErrorKind::TooBig) => "Company name must be less than 100 characters",
        ("message", ErrorKind::Required | ErrorKind::TooSmall) => {
            "Message must be at least 10 characters"
        }
        ("message", ErrorKind::TooBig) => "Message must be less than 2000 characters",
        _ => return error.message.clone(),
    };
    message.to_string()
}

/// A validated submission with the server-side details attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub form: ContactForm,
    pub ip: String,
    pub user_agent: String,
    pub received_at: DateTime<Utc>,
}

/// An outgoing email carrying one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub from: String,
    pub to: String,
    /// The visitor's address, so a reply goes straight back to them.
    pub reply_to: String,
    pub subject: String,
    pub text: String,
}

impl ContactMessage {
    #[must_use]
    pub fn compose(submission: &ContactSubmission, from: &str, to: &str) -> Self {
        let form = &submission.form;
        let mut lines = vec![
            format!("Name: {}", form.name),
            format!("Email: {}", form.email),
        ];
        if let Some(company) = form.company() {
            lines.push(format!("Company: {company}"));
        }
        lines.extend([
            format!("IP: {}", submission.ip),
            format!("User-Agent: {}", submission.user_agent),
            format!(
                "When: {}",
                submission
                    .received_at
                    .to_rfc3339_opts(SecondsFormat::Millis, true)
            ),
            String::new(),
            "Message:".to_string(),
            form.message.clone(),
        ]);

        Self {
            from: from.to_string(),
            to: to.to_string(),
            reply_to: form.email.clone(),
            subject: format!("New contact from {}", form.name),
            text: lines.join("\n"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn form(company: Option<&str>) -> ContactForm {
        ContactForm {
            name: "Ada Example".into(),
            email: "ada@example.com".into(),
            company: company.map(Into::into),
            message: "Hello there, let's talk.".into(),
            honeypot: None,
        }
    }

    #[test]
    fn blank_company_is_not_given() {
        assert_eq!(form(Some("")).company(), None);
        assert_eq!(form(Some("Acme")).company(), Some("Acme"));
    }

    #[test]
    fn composes_plain_text_email() {
        let submission = ContactSubmission {
            form: form(Some("Acme")),
            ip: "203.0.113.7".into(),
            user_agent: "curl/8".into(),
            received_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        };
        let message = ContactMessage::compose(&submission, "site@example.com", "me@example.com");

        assert_eq!(message.subject, "New contact from Ada Example");
        assert_eq!(message.reply_to, "ada@example.com");
        assert_eq!(
            message.text,
            "Name: Ada Example\nEmail: ada@example.com\nCompany: Acme\nIP: 203.0.113.7\n\
             User-Agent: curl/8\nWhen: 2024-05-01T12:00:00.000Z\n\nMessage:\nHello there, let's talk."
        );
    }

    #[test]
    fn friendly_messages_fall_back_to_original() {
        let short = ValidationError::new("message", "too short", ErrorKind::TooSmall);
        assert_eq!(friendly_message(&short), "Message must be at least 10 characters");
        let other = ValidationError::new("root", "bad shape", ErrorKind::InvalidType);
        assert_eq!(friendly_message(&other), "bad shape");
    }
}
