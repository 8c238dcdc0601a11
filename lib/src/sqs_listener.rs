use crate::app_state::AppState;
use crate::dispatch_result::DispatchResult;
use crate::email_dispatcher::EmailDispatcher;
use crate::email_request::EmailRequest;
use crate::email_request_validator::EmailRequestValidator;
use crate::error::DispatchError;
use crate::listener_resources::SqsListenerResources;
use aws_sdk_sqs::types::MessageSystemAttributeName;
use std::future::Future;
use std::time::Duration;
use tracing::instrument;
use tracing::log::{error, info};

pub struct SqsListener {
    resources: SqsListenerResources,
    signal: Option<Box<dyn Future<Output = ()> + Send>>,
}

impl SqsListener {
    pub fn new(resources: SqsListenerResources) -> Self {
        Self { resources, signal: None }
    }

    pub fn with_graceful_shutdown(
        &self,
        signal: impl Future<Output = ()> + Send + 'static,
    ) -> Self {
        Self {
            resources: self.resources.clone(),
            signal: Some(Box::new(signal)),
        }
    }

    pub async fn init(self) -> Result<(), DispatchError> {
        info!("Starting sqs listener...");

        if let Some(box_signal) = self.signal {
            let mut shutdown_signal = Box::into_pin(box_signal);

            info!("Running sqs listener...");
            loop {
                tokio::select! {
                    result = SqsListener::one_shot(&self.resources) => {
                        match result {
                            Ok(received_len) => {
                                if received_len == 0 {
                                    tokio::time::sleep(Duration::from_secs(self.resources.poll_interval_in_seconds.unwrap_or(5))).await;
                                }
                            }
                            Err(error) => {
                                error!("Sqs listener failed with error: {}", error.to_string());
                                tokio::time::sleep(Duration::from_secs(self.resources.poll_interval_in_seconds.unwrap_or(5))).await;
                            }
                        }
                    }
                    _ = &mut shutdown_signal => {
                        break;
                    }
                }
            }
        } else {
            loop {
                let result = SqsListener::one_shot(&self.resources).await;
                match result {
                    Ok(received_len) => {
                        if received_len == 0 {
                            tokio::time::sleep(Duration::from_secs(self.resources.poll_interval_in_seconds.unwrap_or(5))).await;
                        }
                    },
                    Err(error) => {
                        error!("Sqs listener failed with error: {}", error.to_string());
                        tokio::time::sleep(Duration::from_secs(self.resources.poll_interval_in_seconds.unwrap_or(5))).await;
                    },
                }
            }
        }

        info!("Sqs listener stopped!");

        Ok(())
    }

    pub async fn one_shot(resources: &SqsListenerResources) -> Result<usize, DispatchError> {
        let app_state = resources.to_app_state();

        let receive_output = app_state
            .sqs_client
            .client
            .receive_message()
            .queue_url(&app_state.queue_url)
            .max_number_of_messages(resources.receive_max_messages.unwrap_or(10))
            .wait_time_seconds(resources.receive_wait_time_in_seconds.unwrap_or(20))
            .message_system_attribute_names(MessageSystemAttributeName::ApproximateFirstReceiveTimestamp)
            .send()
            .await
            .map_err(|error| DispatchError::queue_transport(&error.to_string(), "Failed to receive messages from queue"))?;

        let messages = receive_output.messages.unwrap_or_default();
        let messages_len = messages.len();

        for message in messages {
            let message_id = message.message_id.clone().unwrap_or("unknown".to_string());
            let first_receive_timestamp = message
                .attributes
                .as_ref()
                .and_then(|attributes| attributes.get(&MessageSystemAttributeName::ApproximateFirstReceiveTimestamp))
                .cloned();
            let body = message.body.clone().unwrap_or_default();

            match Self::handle_message(&app_state, &message_id, first_receive_timestamp.as_deref(), &body).await {
                Ok(_) => {
                    if let Some(receipt_handle) = message.receipt_handle {
                        let delete_result = app_state
                            .sqs_client
                            .client
                            .delete_message()
                            .queue_url(&app_state.queue_url)
                            .receipt_handle(&receipt_handle)
                            .send()
                            .await;

                        if let Err(error) = delete_result {
                            error!("Failed to delete message {} after dispatch, it will be redelivered: {}", message_id, error.to_string());
                        }
                    }
                },
                Err(error) => {
                    error!("Failed to process message {}, it will be redelivered: {}", message_id, error.to_string());
                },
            }
        }

        Ok(messages_len)
    }

    #[instrument(skip_all, name = "handle_sqs_message")]
    pub async fn handle_message(
        app_state: &AppState,
        message_id: &str,
        first_receive_timestamp: Option<&str>,
        body: &str,
    ) -> Result<DispatchResult, DispatchError> {
        info!("Received email request message {} first received at {}", message_id, first_receive_timestamp.unwrap_or("unknown"));

        let request = serde_json::from_str::<EmailRequest>(body)
            .map_err(|error| DispatchError::deserialization(&error.to_string(), &format!("Failed to deserialize email request message {message_id}")))?;

        if let Err(error) = EmailRequestValidator::validate(&request) {
            error!("Email request message {} failed validation: {}", message_id, error.cause);
            return Err(error);
        }

        let dispatch_result = EmailDispatcher::dispatch(app_state, &request).await?;

        info!(
            "Email request message {} dispatched with {} triggered and {} failed targets",
            message_id,
            dispatch_result.triggered().len(),
            dispatch_result.failed().len()
        );

        Ok(dispatch_result)
    }
}
