use crate::error::DispatchError;
use crate::http_gateway::HttpGateway;
use crate::trigger_ack::TriggerAck;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::instrument;
use tracing::log::error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerSubscriber {
    pub subscriber_id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl TriggerSubscriber {
    pub fn from_email(email: &str) -> Self {
        Self {
            subscriber_id: email.to_string(),
            email: email.to_string(),
            phone: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerEventRequest {
    pub name: String,
    pub to: Vec<TriggerSubscriber>,
    pub payload: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerEventResponse {
    pub data: Option<TriggerEventResponseData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerEventResponseData {
    #[serde(default)]
    pub acknowledged: bool,
    pub status: Option<String>,
    pub transaction_id: Option<String>,
}

#[derive(Clone)]
pub struct TriggerGateway {
    pub http_gateway: HttpGateway,
    pub api_url: String,
    pub api_key: String,
    pub email_workflow_id: String,
}

impl TriggerGateway {
    pub fn new(
        api_url: &str,
        api_key: &str,
        email_workflow_id: &str,
        http_timeout_in_millis: u64,
    ) -> Result<Self, DispatchError> {
        Ok(Self {
            http_gateway: HttpGateway::new(http_timeout_in_millis)?,
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            email_workflow_id: email_workflow_id.to_string(),
        })
    }

    #[instrument(skip_all, name = "trigger_event")]
    pub async fn trigger(
        &self,
        trigger_name: &str,
        subscriber: &TriggerSubscriber,
        payload: &Map<String, Value>,
    ) -> Result<TriggerAck, DispatchError> {
        let trigger_request = TriggerEventRequest {
            name: trigger_name.to_string(),
            to: vec![subscriber.clone()],
            payload: payload.clone(),
        };

        let result = self
            .http_gateway
            .client
            .post(format!("{}/events/trigger", self.api_url))
            .header("Authorization", format!("ApiKey {}", self.api_key))
            .json(&trigger_request)
            .send()
            .await;

        match result {
            Ok(response) => {
                if response.status().is_success() {
                    let trigger_response = response
                        .json::<TriggerEventResponse>()
                        .await
                        .map_err(|error| DispatchError::provider_transport(&error.to_string(), "Failed to parse provider trigger response"))?;

                    let ack = match trigger_response.data {
                        Some(data) => TriggerAck::from_response(data.acknowledged, data.status.as_deref().unwrap_or("N/A"), data.transaction_id),
                        None => TriggerAck::from_response(false, "N/A", None),
                    };

                    Ok(ack)
                } else {
                    let status = response.status();
                    let body = response.text().await.unwrap_or("unknown".to_string());
                    error!("Provider trigger request failed with status {} and body {}", status, body);

                    Err(DispatchError::provider_transport(
                        &format!("Provider responded with status {status} and body {body}"),
                        "Failed to trigger provider event",
                    ))
                }
            },
            Err(error) => Err(DispatchError::provider_transport(&error.to_string(), "Failed to send provider trigger request")),
        }
    }
}
