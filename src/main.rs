use alias_shortener::{config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    logging::init(&config);
    config.print_summary();

    if let Err(e) = server::run(config).await {
        tracing::error!("{:#}", e);
        return Err(e);
    }

    Ok(())
}
