use crate::controller::health::routes::HealthRoutes;
use crate::controller::notification::routes::NotificationRoutes;
use axum::Router;
use axum_tracing_opentelemetry::middleware::OtelAxumLayer;
use notification_fanout_dispatcher::app_state::AppState;
use tower_http::catch_panic::CatchPanicLayer;

pub struct Routes;

impl Routes {
    pub async fn routes(app_state: &AppState) -> Router {
        Router::new()
            .nest("/health", HealthRoutes::routes())
            .nest("/notifications", NotificationRoutes::routes(app_state))
            .layer(OtelAxumLayer::default())
            .layer(CatchPanicLayer::new())
    }
}
