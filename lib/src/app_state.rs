use crate::aws::SqsClient;
use crate::trigger_gateway::TriggerGateway;

#[derive(Clone)]
pub struct AppState {
    pub sqs_client: SqsClient,
    pub trigger_gateway: TriggerGateway,
    pub queue_url: String,
}
