#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerDisposition {
    Success,
    Failure,
}

#[derive(Debug, Clone)]
pub struct TriggerAck {
    pub disposition: TriggerDisposition,
    pub acknowledged: bool,
    pub status: String,
    pub transaction_id: Option<String>,
}

impl TriggerAck {
    pub fn from_response(
        acknowledged: bool,
        status: &str,
        transaction_id: Option<String>,
    ) -> Self {
        let disposition = if acknowledged && status.eq_ignore_ascii_case("triggered") {
            TriggerDisposition::Success
        } else {
            TriggerDisposition::Failure
        };

        Self {
            disposition,
            acknowledged,
            status: status.to_string(),
            transaction_id,
        }
    }
}
