use notification_fanout_dispatcher::environment::Environment;
use notification_fanout_dispatcher::error::DispatchError;
use notification_fanout_dispatcher::trigger_gateway::TriggerGateway;

pub struct Provider;

impl Provider {
    pub fn trigger_gateway_from_env() -> Result<TriggerGateway, DispatchError> {
        let api_url = Environment::string("PROVIDER_API_URL", "https://api.novu.co/v1");
        let api_key = Environment::string("PROVIDER_API_KEY", "");
        if api_key.is_empty() {
            panic!("Environment variable PROVIDER_API_KEY is required");
        }
        let email_workflow_id = Environment::string("PROVIDER_WORKFLOW_ID", "default-email-workflow");
        let http_timeout_in_millis = Environment::u64("PROVIDER_HTTP_TIMEOUT_IN_MILLIS", 3000);

        TriggerGateway::new(&api_url, &api_key, &email_workflow_id, http_timeout_in_millis)
    }
}
