#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipientRole {
    Primary,
    Cc,
    Bcc,
}

impl RecipientRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipientRole::Primary => "PRIMARY",
            RecipientRole::Cc => "CC",
            RecipientRole::Bcc => "BCC",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DispatchTarget {
    pub recipient: String,
    pub role: RecipientRole,
}

impl DispatchTarget {
    pub fn new(
        recipient: &str,
        role: RecipientRole,
    ) -> Self {
        Self {
            recipient: recipient.to_string(),
            role,
        }
    }
}
