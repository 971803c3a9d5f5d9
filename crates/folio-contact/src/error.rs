use folio_schema::SchemaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    /// Delivery is impossible with the current configuration.
    #[error("contact delivery is not configured: {0}")]
    NotConfigured(&'static str),

    /// The mail transport rejected or failed to send the message.
    #[error("failed to deliver contact message: {0}")]
    Delivery(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

impl ContactError {
    /// HTTP status a submission failing with this error is answered with.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotConfigured(_) | Self::Schema(_) => 500,
            Self::Delivery(_) => 502,
        }
    }
}
