pub mod app_state;
pub mod aws;
pub mod dispatch_result;
pub mod dispatch_target;
pub mod email_dispatcher;
pub mod email_request;
pub mod email_request_validator;
pub mod environment;
pub mod error;
pub mod event_dispatcher;
pub mod event_request;
pub mod event_request_validator;
pub mod http_gateway;
pub mod listener_resources;
pub mod sqs_listener;
pub mod trigger_ack;
pub mod trigger_gateway;
