use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use notification_fanout_dispatcher::app_state::AppState;
use notification_fanout_dispatcher::email_dispatcher::EmailDispatcher;
use notification_fanout_dispatcher::email_request::EmailRequest;
use notification_fanout_dispatcher::email_request_validator::EmailRequestValidator;
use notification_fanout_dispatcher::event_dispatcher::EventDispatcher;
use notification_fanout_dispatcher::event_request::EventRequest;
use notification_fanout_dispatcher::event_request_validator::EventRequestValidator;
use tracing::info;

use crate::infra::axum::AppJson;
use crate::infra::error::ApiError;

pub struct NotificationRoutes;

impl NotificationRoutes {
    pub fn routes(app_state: &AppState) -> Router {
        Router::new()
            .route("/email", post(send_email_handler))
            .route("/event", post(send_event_handler))
            .with_state(app_state.clone())
    }
}

async fn send_email_handler(
    State(app_state): State<AppState>,
    AppJson(request): AppJson<EmailRequest>,
) -> Result<(StatusCode, String), ApiError> {
    info!("POST /notifications/email");

    EmailRequestValidator::validate(&request)?;
    let dispatch_result = EmailDispatcher::dispatch(&app_state, &request).await?;

    info!("Email request dispatched with {} triggered and {} failed targets", dispatch_result.triggered().len(), dispatch_result.failed().len());

    Ok((StatusCode::ACCEPTED, "Email request accepted for processing.".to_string()))
}

async fn send_event_handler(
    State(app_state): State<AppState>,
    AppJson(request): AppJson<EventRequest>,
) -> Result<(StatusCode, String), ApiError> {
    info!("POST /notifications/event");

    EventRequestValidator::validate(&request)?;
    let dispatch_result = EventDispatcher::dispatch(&app_state, &request).await?;

    info!("Notification event {} dispatched with transaction {}", request.name, dispatch_result.outcomes.first().and_then(|outcome| outcome.transaction_id.as_deref()).unwrap_or("N/A"));

    Ok((StatusCode::ACCEPTED, "Notification event accepted for processing.".to_string()))
}
