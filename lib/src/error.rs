use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchErrorKind {
    Validation,
    Deserialization,
    ProviderUnacknowledged,
    ProviderTransport,
    QueueTransport,
}

impl DispatchErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DispatchErrorKind::Validation => "ValidationError",
            DispatchErrorKind::Deserialization => "DeserializationError",
            DispatchErrorKind::ProviderUnacknowledged => "ProviderUnacknowledged",
            DispatchErrorKind::ProviderTransport => "ProviderTransportError",
            DispatchErrorKind::QueueTransport => "QueueTransportError",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DispatchError {
    pub kind: DispatchErrorKind,
    pub cause: String,
    pub message: Option<String>,
    pub field_errors: Option<HashMap<String, String>>,
}

impl DispatchError {
    pub fn validation(field_errors: HashMap<String, String>) -> Self {
        let mut details = field_errors.iter().map(|(field, rule)| format!("{field}: {rule}")).collect::<Vec<String>>();
        details.sort();

        Self {
            kind: DispatchErrorKind::Validation,
            cause: details.join("; "),
            message: Some("Validation failed".to_string()),
            field_errors: Some(field_errors),
        }
    }

    pub fn deserialization(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            kind: DispatchErrorKind::Deserialization,
            cause: cause.to_string(),
            message: Some(message.to_string()),
            field_errors: None,
        }
    }

    pub fn provider_unacknowledged(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            kind: DispatchErrorKind::ProviderUnacknowledged,
            cause: cause.to_string(),
            message: Some(message.to_string()),
            field_errors: None,
        }
    }

    pub fn provider_transport(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            kind: DispatchErrorKind::ProviderTransport,
            cause: cause.to_string(),
            message: Some(message.to_string()),
            field_errors: None,
        }
    }

    pub fn queue_transport(
        cause: &str,
        message: &str,
    ) -> Self {
        Self {
            kind: DispatchErrorKind::QueueTransport,
            cause: cause.to_string(),
            message: Some(message.to_string()),
            field_errors: None,
        }
    }
}

impl std::error::Error for DispatchError {}

impl fmt::Display for DispatchError {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.kind.as_str(), self.cause)
    }
}
