use crate::app_state::AppState;
use crate::aws::SqsClient;
use crate::trigger_gateway::TriggerGateway;

#[derive(Clone)]
pub struct SqsListenerResources {
    pub sqs_client: SqsClient,
    pub trigger_gateway: TriggerGateway,
    pub queue_url: String,
    pub receive_max_messages: Option<i32>,
    pub receive_wait_time_in_seconds: Option<i32>,
    pub poll_interval_in_seconds: Option<u64>,
}

impl SqsListenerResources {
    pub fn new(
        sqs_client: SqsClient,
        trigger_gateway: TriggerGateway,
        queue_url: &str,
    ) -> Self {
        Self {
            sqs_client,
            trigger_gateway,
            queue_url: queue_url.to_string(),
            receive_max_messages: None,
            receive_wait_time_in_seconds: None,
            poll_interval_in_seconds: None,
        }
    }

    pub fn with_receive_max_messages(
        self,
        receive_max_messages: i32,
    ) -> Self {
        Self {
            sqs_client: self.sqs_client,
            trigger_gateway: self.trigger_gateway,
            queue_url: self.queue_url,
            receive_max_messages: Some(receive_max_messages),
            receive_wait_time_in_seconds: self.receive_wait_time_in_seconds,
            poll_interval_in_seconds: self.poll_interval_in_seconds,
        }
    }

    pub fn with_receive_wait_time_in_seconds(
        self,
        receive_wait_time_in_seconds: i32,
    ) -> Self {
        Self {
            sqs_client: self.sqs_client,
            trigger_gateway: self.trigger_gateway,
            queue_url: self.queue_url,
            receive_max_messages: self.receive_max_messages,
            receive_wait_time_in_seconds: Some(receive_wait_time_in_seconds),
            poll_interval_in_seconds: self.poll_interval_in_seconds,
        }
    }

    pub fn with_poll_interval_in_seconds(
        self,
        poll_interval_in_seconds: u64,
    ) -> Self {
        Self {
            sqs_client: self.sqs_client,
            trigger_gateway: self.trigger_gateway,
            queue_url: self.queue_url,
            receive_max_messages: self.receive_max_messages,
            receive_wait_time_in_seconds: self.receive_wait_time_in_seconds,
            poll_interval_in_seconds: Some(poll_interval_in_seconds),
        }
    }

    pub fn to_app_state(&self) -> AppState {
        AppState {
            sqs_client: self.sqs_client.clone(),
            trigger_gateway: self.trigger_gateway.clone(),
            queue_url: self.queue_url.clone(),
        }
    }
}
