// src/main.rs

use dotenvy::dotenv;
use social_model::config::Config;
use social_model::db;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "social-model.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    if let Err(e) = run(&config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: &Config) -> Result<(), social_model::AppError> {
    let pool = db::connect(config).await?;
    tracing::info!("Database connected...");

    db::migrate(&pool).await?;

    for (table, count) in db::table_counts(&pool).await? {
        tracing::info!(table, count, "table ready");
    }

    pool.close().await;
    Ok(())
}
