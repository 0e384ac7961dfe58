use commenthub::configuration::get_config;
use commenthub::startup::Application;
use commenthub::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("commenthub".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_config()?;
    let application = Application::build(config).await?;
    application.run_until_stopped().await
}
