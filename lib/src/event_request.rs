use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subscriber_id: String,
    #[serde(default)]
    pub email: String,
    pub phone: Option<String>,
    pub payload: Option<HashMap<String, Value>>,
}
