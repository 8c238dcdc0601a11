use crate::email_request::EmailRequest;
use crate::error::DispatchError;
use regex::Regex;
use std::collections::HashMap;

pub(crate) const EMAIL_PATTERN: &str = "^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\\.[A-Za-z]{2,}$";

pub struct EmailRequestValidator;

impl EmailRequestValidator {
    pub fn validate(request: &EmailRequest) -> Result<(), DispatchError> {
        let email_regex = Regex::new(EMAIL_PATTERN).ok();
        let mut field_errors = HashMap::new();

        if request.to.trim().is_empty() {
            field_errors.insert("to".to_string(), "To email address cannot be empty.".to_string());
        } else if !is_valid_email(&email_regex, &request.to) {
            field_errors.insert("to".to_string(), "Invalid 'to' email address format.".to_string());
        }

        if let Some(cc) = &request.cc {
            for (index, recipient) in cc.iter().enumerate() {
                if !is_valid_email(&email_regex, recipient) {
                    field_errors.insert(format!("cc[{index}]"), "Invalid 'cc' email address format.".to_string());
                }
            }
        }

        if let Some(bcc) = &request.bcc {
            for (index, recipient) in bcc.iter().enumerate() {
                if !is_valid_email(&email_regex, recipient) {
                    field_errors.insert(format!("bcc[{index}]"), "Invalid 'bcc' email address format.".to_string());
                }
            }
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::validation(field_errors))
        }
    }
}

pub(crate) fn is_valid_email(
    email_regex: &Option<Regex>,
    recipient: &str,
) -> bool {
    email_regex.as_ref().map(|regex| regex.is_match(recipient)).unwrap_or(false)
}
