use crate::dispatch_target::DispatchTarget;
use crate::error::DispatchError;
use crate::trigger_ack::{TriggerAck, TriggerDisposition};

#[derive(Debug, Clone)]
pub struct TriggerOutcome {
    pub target: DispatchTarget,
    pub disposition: TriggerDisposition,
    pub acknowledged: bool,
    pub status: String,
    pub transaction_id: Option<String>,
    pub error_cause: Option<String>,
}

impl TriggerOutcome {
    pub fn from_ack(
        target: &DispatchTarget,
        ack: &TriggerAck,
    ) -> Self {
        Self {
            target: target.clone(),
            disposition: ack.disposition,
            acknowledged: ack.acknowledged,
            status: ack.status.clone(),
            transaction_id: ack.transaction_id.clone(),
            error_cause: None,
        }
    }

    pub fn from_error(
        target: &DispatchTarget,
        error: &DispatchError,
    ) -> Self {
        Self {
            target: target.clone(),
            disposition: TriggerDisposition::Failure,
            acknowledged: false,
            status: "N/A".to_string(),
            transaction_id: None,
            error_cause: Some(error.to_string()),
        }
    }

    pub fn triggered(&self) -> bool {
        self.disposition == TriggerDisposition::Success
    }
}

#[derive(Debug, Clone, Default)]
pub struct DispatchResult {
    pub outcomes: Vec<TriggerOutcome>,
}

impl DispatchResult {
    pub fn triggered(&self) -> Vec<&TriggerOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.triggered()).collect()
    }

    pub fn failed(&self) -> Vec<&TriggerOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.triggered()).collect()
    }
}
