use crate::app_state::AppState;
use crate::dispatch_result::{DispatchResult, TriggerOutcome};
use crate::dispatch_target::{DispatchTarget, RecipientRole};
use crate::email_request::EmailRequest;
use crate::error::DispatchError;
use crate::trigger_ack::TriggerDisposition;
use crate::trigger_gateway::TriggerSubscriber;
use serde_json::{Map, Value};
use tracing::instrument;
use tracing::log::error;

pub struct EmailDispatcher;

impl EmailDispatcher {
    #[instrument(skip_all, name = "dispatch_email")]
    pub async fn dispatch(
        app_state: &AppState,
        request: &EmailRequest,
    ) -> Result<DispatchResult, DispatchError> {
        let payload = Self::build_payload(request);
        let trigger_name = app_state.trigger_gateway.email_workflow_id.clone();

        let mut dispatch_result = DispatchResult::default();

        let primary_target = DispatchTarget::new(&request.to, RecipientRole::Primary);
        let primary_ack = app_state
            .trigger_gateway
            .trigger(&trigger_name, &TriggerSubscriber::from_email(&primary_target.recipient), &payload)
            .await
            .map_err(|error| {
                error!("Failed to trigger email to {} recipient {} cause {}", primary_target.role.as_str(), primary_target.recipient, error.cause);
                DispatchError::provider_transport(&error.cause, &format!("Failed to trigger email to primary recipient {}", primary_target.recipient))
            })?;

        if primary_ack.disposition != TriggerDisposition::Success {
            error!(
                "Provider did not acknowledge email to {} recipient {} with status {} and acknowledged {}",
                primary_target.role.as_str(),
                primary_target.recipient,
                primary_ack.status,
                primary_ack.acknowledged
            );

            return Err(DispatchError::provider_unacknowledged(
                &format!("Provider returned status {} and acknowledged {}", primary_ack.status, primary_ack.acknowledged),
                &format!("Failed to trigger email to primary recipient {}", primary_target.recipient),
            ));
        }

        dispatch_result.outcomes.push(TriggerOutcome::from_ack(&primary_target, &primary_ack));

        for target in Self::secondary_targets(request) {
            let ack_result = app_state
                .trigger_gateway
                .trigger(&trigger_name, &TriggerSubscriber::from_email(&target.recipient), &payload)
                .await;

            match ack_result {
                Ok(ack) => {
                    if ack.disposition != TriggerDisposition::Success {
                        error!(
                            "Provider did not acknowledge email to {} recipient {} with status {} and acknowledged {}",
                            target.role.as_str(),
                            target.recipient,
                            ack.status,
                            ack.acknowledged
                        );
                    }
                    dispatch_result.outcomes.push(TriggerOutcome::from_ack(&target, &ack));
                },
                Err(error) => {
                    error!("Failed to trigger email to {} recipient {} cause {}", target.role.as_str(), target.recipient, error.cause);
                    dispatch_result.outcomes.push(TriggerOutcome::from_error(&target, &error));
                },
            }
        }

        Ok(dispatch_result)
    }

    fn secondary_targets(request: &EmailRequest) -> Vec<DispatchTarget> {
        let mut targets = vec![];

        if let Some(cc) = &request.cc {
            targets.extend(cc.iter().map(|recipient| DispatchTarget::new(recipient, RecipientRole::Cc)));
        }

        if let Some(bcc) = &request.bcc {
            targets.extend(bcc.iter().map(|recipient| DispatchTarget::new(recipient, RecipientRole::Bcc)));
        }

        targets
    }

    fn build_payload(request: &EmailRequest) -> Map<String, Value> {
        let mut payload = Map::new();

        if let Some(email_variables) = &request.email_variables {
            for (key, value) in email_variables {
                payload.insert(key.clone(), value.clone());
            }
        }

        payload.insert("emailSubject".to_string(), request.subject.clone().map(Value::String).unwrap_or(Value::Null));
        payload.insert("emailBody".to_string(), request.body.clone().map(Value::String).unwrap_or(Value::Null));
        payload.insert("emailSignature".to_string(), request.signature.clone().map(Value::String).unwrap_or(Value::Null));

        payload
    }
}
