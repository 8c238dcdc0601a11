use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use aws_config::BehaviorVersion;
use notification_fanout_dispatcher::app_state::AppState;
use notification_fanout_dispatcher::aws::SqsClient;
use notification_fanout_dispatcher::listener_resources::SqsListenerResources;
use notification_fanout_dispatcher::trigger_gateway::TriggerGateway;
use notification_fanout_dispatcher_worker::infra::provider::Provider;
use notification_fanout_dispatcher_worker::routes::Routes;
use serde_json::{json, Value};
use serial_test::serial;
use std::env;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn test_app_state(provider_uri: &str) -> AppState {
    env::set_var("AWS_ACCESS_KEY_ID", "notification-fanout-dispatcher");
    env::set_var("AWS_SECRET_ACCESS_KEY", "notification-fanout-dispatcher");
    env::set_var("AWS_REGION", "us-east-1");

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let sqs_client = SqsClient::new(&aws_config).await;

    let trigger_gateway = TriggerGateway::new(provider_uri, "test-api-key", "default-email-workflow", 3000).unwrap();

    SqsListenerResources::new(sqs_client, trigger_gateway, "https://sqs.us-east-1.amazonaws.com/000000000000/notifications").to_app_state()
}

async fn mock_triggered(mock_server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/events/trigger"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": {
                "acknowledged": true,
                "status": "triggered",
                "transactionId": "7f0b2c3e",
            },
        })))
        .mount(mock_server)
        .await;
}

fn post_json(
    uri: &str,
    body: Value,
) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[serial]
#[tokio::test]
async fn should_accept_valid_email_request() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mock_server = MockServer::start().await;
    mock_triggered(&mock_server).await;

    let app_state = test_app_state(&mock_server.uri()).await;
    let routes = Routes::routes(&app_state).await;

    let request = post_json(
        "/notifications/email",
        json!({
            "to": "ana@example.com",
            "cc": ["bruno@example.com"],
            "subject": "Monthly statement",
            "body": "Your statement is ready.",
        }),
    );

    let response = routes.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    assert_eq!(String::from_utf8(body.to_vec())?, "Email request accepted for processing.");

    let provider_requests = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(provider_requests.len(), 2);

    Ok(())
}

#[serial]
#[tokio::test]
async fn should_reject_invalid_email_request_with_field_errors() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mock_server = MockServer::start().await;
    mock_triggered(&mock_server).await;

    let app_state = test_app_state(&mock_server.uri()).await;
    let routes = Routes::routes(&app_state).await;

    let request = post_json(
        "/notifications/email",
        json!({
            "to": "",
            "cc": ["nope"],
        }),
    );

    let response = routes.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let response_json = serde_json::from_slice::<Value>(&body)?;

    assert_eq!(response_json["message"], "Validation failed");
    assert_eq!(response_json["fieldErrors"]["to"], "To email address cannot be empty.");
    assert_eq!(response_json["fieldErrors"]["cc[0]"], "Invalid 'cc' email address format.");

    let provider_requests = mock_server.received_requests().await.unwrap_or_default();
    assert!(provider_requests.is_empty());

    Ok(())
}

#[serial]
#[tokio::test]
async fn should_fail_email_request_when_provider_is_not_acknowledged() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/events/trigger"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "acknowledged": false,
                "status": "error",
                "transactionId": "7f0b2c3e",
            },
        })))
        .mount(&mock_server)
        .await;

    let app_state = test_app_state(&mock_server.uri()).await;
    let routes = Routes::routes(&app_state).await;

    let request = post_json(
        "/notifications/email",
        json!({
            "to": "ana@example.com",
            "subject": "Monthly statement",
        }),
    );

    let response = routes.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let response_json = serde_json::from_slice::<Value>(&body)?;

    assert_eq!(response_json["message"], "Error occurred while sending email.");
    assert_eq!(response_json["error"], "ProviderUnacknowledged");

    Ok(())
}

#[serial]
#[tokio::test]
async fn should_reject_malformed_email_request_body() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mock_server = MockServer::start().await;
    mock_triggered(&mock_server).await;

    let app_state = test_app_state(&mock_server.uri()).await;
    let routes = Routes::routes(&app_state).await;

    let request = Request::builder()
        .method("POST")
        .uri("/notifications/email")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{"))
        .unwrap();

    let response = routes.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let response_json = serde_json::from_slice::<Value>(&body)?;

    assert_eq!(response_json["error"], "DeserializationError");

    let provider_requests = mock_server.received_requests().await.unwrap_or_default();
    assert!(provider_requests.is_empty());

    Ok(())
}

#[serial]
#[tokio::test]
async fn should_accept_valid_event_request() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mock_server = MockServer::start().await;
    mock_triggered(&mock_server).await;

    let app_state = test_app_state(&mock_server.uri()).await;
    let routes = Routes::routes(&app_state).await;

    let request = post_json(
        "/notifications/event",
        json!({
            "name": "order-created",
            "subscriberId": "customer-42",
            "email": "ana@example.com",
            "phone": "+5511999990000",
            "payload": {
                "orderId": 42,
            },
        }),
    );

    let response = routes.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::ACCEPTED);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    assert_eq!(String::from_utf8(body.to_vec())?, "Notification event accepted for processing.");

    let provider_requests = mock_server.received_requests().await.unwrap_or_default();
    assert_eq!(provider_requests.len(), 1);

    let trigger_body = serde_json::from_slice::<Value>(&provider_requests[0].body)?;
    assert_eq!(trigger_body["name"], "order-created");
    assert_eq!(trigger_body["to"][0]["subscriberId"], "customer-42");
    assert_eq!(trigger_body["to"][0]["email"], "ana@example.com");
    assert_eq!(trigger_body["to"][0]["phone"], "+5511999990000");
    assert_eq!(trigger_body["payload"]["orderId"], 42);

    Ok(())
}

#[serial]
#[tokio::test]
async fn should_reject_event_request_missing_required_fields() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mock_server = MockServer::start().await;
    mock_triggered(&mock_server).await;

    let app_state = test_app_state(&mock_server.uri()).await;
    let routes = Routes::routes(&app_state).await;

    let request = post_json("/notifications/event", json!({}));

    let response = routes.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let response_json = serde_json::from_slice::<Value>(&body)?;

    assert_eq!(response_json["message"], "Validation failed");
    assert_eq!(response_json["fieldErrors"]["name"], "Event name is required");
    assert_eq!(response_json["fieldErrors"]["subscriberId"], "Subscriber ID is required");
    assert_eq!(response_json["fieldErrors"]["email"], "Email is required");

    let provider_requests = mock_server.received_requests().await.unwrap_or_default();
    assert!(provider_requests.is_empty());

    Ok(())
}

#[serial]
#[test]
fn should_build_trigger_gateway_from_environment() {
    env::set_var("PROVIDER_API_KEY", "test-api-key");
    env::set_var("PROVIDER_WORKFLOW_ID", "statement-email-workflow");

    let trigger_gateway = Provider::trigger_gateway_from_env().unwrap();

    assert_eq!("test-api-key", trigger_gateway.api_key);
    assert_eq!("statement-email-workflow", trigger_gateway.email_workflow_id);

    env::remove_var("PROVIDER_API_KEY");
    env::remove_var("PROVIDER_WORKFLOW_ID");
}

#[serial]
#[test]
#[should_panic(expected = "PROVIDER_API_KEY")]
fn should_fail_fast_when_provider_api_key_is_missing() {
    env::remove_var("PROVIDER_API_KEY");

    let _ = Provider::trigger_gateway_from_env();
}

#[serial]
#[tokio::test]
async fn should_report_health() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mock_server = MockServer::start().await;

    let app_state = test_app_state(&mock_server.uri()).await;
    let routes = Routes::routes(&app_state).await;

    let request = Request::builder().method("GET").uri("/health").body(Body::empty()).unwrap();

    let response = routes.oneshot(request).await?;

    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
    let response_json = serde_json::from_slice::<Value>(&body)?;

    assert_eq!(response_json["status"], "up");

    Ok(())
}
