use calculator_service::config;
use calculator_service::domain::EventSink;
use calculator_service::infrastructure::logging::{self, TracingEventSink};
use calculator_service::server;
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    let _log_guards = logging::init(&config)?;

    let sink: Arc<dyn EventSink> = Arc::new(TracingEventSink::new(config.service_name.as_str()));
    config.print_summary(sink.as_ref());

    server::run(config, sink).await
}
