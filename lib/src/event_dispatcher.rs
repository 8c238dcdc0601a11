use crate::app_state::AppState;
use crate::dispatch_result::{DispatchResult, TriggerOutcome};
use crate::dispatch_target::{DispatchTarget, RecipientRole};
use crate::error::DispatchError;
use crate::event_request::EventRequest;
use crate::trigger_ack::TriggerDisposition;
use crate::trigger_gateway::TriggerSubscriber;
use serde_json::Map;
use tracing::instrument;
use tracing::log::error;

pub struct EventDispatcher;

impl EventDispatcher {
    #[instrument(skip_all, name = "dispatch_event")]
    pub async fn dispatch(
        app_state: &AppState,
        request: &EventRequest,
    ) -> Result<DispatchResult, DispatchError> {
        let mut payload = Map::new();
        if let Some(variables) = &request.payload {
            for (key, value) in variables {
                payload.insert(key.clone(), value.clone());
            }
        }

        let subscriber = TriggerSubscriber {
            subscriber_id: request.subscriber_id.clone(),
            email: request.email.clone(),
            phone: request.phone.clone(),
        };
        let target = DispatchTarget::new(&request.email, RecipientRole::Primary);

        let ack = app_state.trigger_gateway.trigger(&request.name, &subscriber, &payload).await.map_err(|error| {
            error!("Failed to trigger event {} for subscriber {} cause {}", request.name, request.subscriber_id, error.cause);
            DispatchError::provider_transport(&error.cause, &format!("Failed to trigger event {} for subscriber {}", request.name, request.subscriber_id))
        })?;

        if ack.disposition != TriggerDisposition::Success {
            error!(
                "Provider did not acknowledge event {} for subscriber {} with status {} and acknowledged {}",
                request.name, request.subscriber_id, ack.status, ack.acknowledged
            );

            return Err(DispatchError::provider_unacknowledged(
                &format!("Provider returned status {} and acknowledged {}", ack.status, ack.acknowledged),
                &format!("Failed to trigger event {} for subscriber {}", request.name, request.subscriber_id),
            ));
        }

        let mut dispatch_result = DispatchResult::default();
        dispatch_result.outcomes.push(TriggerOutcome::from_ack(&target, &ack));

        Ok(dispatch_result)
    }
}
