use aws_config::BehaviorVersion;
use notification_fanout_dispatcher::app_state::AppState;
use notification_fanout_dispatcher::aws::SqsClient;
use notification_fanout_dispatcher::environment::Environment;
use notification_fanout_dispatcher::listener_resources::SqsListenerResources;
use notification_fanout_dispatcher::sqs_listener::SqsListener;
use notification_fanout_dispatcher_worker::infra::provider::Provider;
use notification_fanout_dispatcher_worker::routes::Routes;
use std::env;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::log::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use wg::WaitGroup;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (non_blocking, _guard) = tracing_appender::non_blocking(std::io::stdout());

    let rust_log = Environment::string("RUST_LOG", "INFO");
    env::set_var("RUST_LOG", rust_log);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(Box::new(tracing_subscriber::fmt::layer().with_writer(non_blocking)))
        .init();

    info!("Starting...");

    let wait_group = WaitGroup::new();

    let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;
    let sqs_client = SqsClient::new(&aws_config).await;

    let trigger_gateway = Provider::trigger_gateway_from_env()?;
    let queue_url = Environment::string("SQS_QUEUE_URL", "");

    let resources = SqsListenerResources::new(sqs_client, trigger_gateway, &queue_url);
    let app_state = resources.to_app_state();

    tokio::spawn(init_http_server(app_state, wait_group.add(1)));
    tokio::spawn(init_sqs_listener(resources, wait_group.add(1)));

    wait_group.wait();

    info!("Stopped!");

    Ok(())
}

async fn init_http_server(
    app_state: AppState,
    wait_group: WaitGroup,
) {
    info!("Starting http server...");
    let routes = Routes::routes(&app_state).await;

    let port = Environment::u16("HTTP_PORT", 9095);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    if let Ok(listener) = TcpListener::bind(addr).await {
        info!("Running http server...");
        let _ = axum::serve(listener, routes).with_graceful_shutdown(shutdown_signal("Stopping http server...")).await;
    }

    wait_group.done();

    info!("Http server stopped!");
}

async fn init_sqs_listener(
    resources: SqsListenerResources,
    wait_group: WaitGroup,
) {
    let _ = SqsListener::new(resources)
        .with_graceful_shutdown(shutdown_signal("Stopping sqs listener..."))
        .init()
        .await;

    wait_group.done();
}

async fn shutdown_signal(message: &str) {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Failed to install Ctrl+C handler");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("{message}");
}
