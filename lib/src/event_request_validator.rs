use crate::email_request_validator::{is_valid_email, EMAIL_PATTERN};
use crate::error::DispatchError;
use crate::event_request::EventRequest;
use regex::Regex;
use std::collections::HashMap;

pub struct EventRequestValidator;

impl EventRequestValidator {
    pub fn validate(request: &EventRequest) -> Result<(), DispatchError> {
        let email_regex = Regex::new(EMAIL_PATTERN).ok();
        let mut field_errors = HashMap::new();

        if request.name.trim().is_empty() {
            field_errors.insert("name".to_string(), "Event name is required".to_string());
        }

        if request.subscriber_id.trim().is_empty() {
            field_errors.insert("subscriberId".to_string(), "Subscriber ID is required".to_string());
        }

        if request.email.trim().is_empty() {
            field_errors.insert("email".to_string(), "Email is required".to_string());
        } else if !is_valid_email(&email_regex, &request.email) {
            field_errors.insert("email".to_string(), "Email should be valid".to_string());
        }

        if field_errors.is_empty() {
            Ok(())
        } else {
            Err(DispatchError::validation(field_errors))
        }
    }
}
