use anyhow::Result;
use blogcore::application::{
    ports::{calendar::CalendarFormatter, time::Clock, util::SlugGenerator},
    services::{ApplicationServices, Repositories},
};
use blogcore::config::AppConfig;
use blogcore::infrastructure::{
    calendar::JalaliCalendarFormatter,
    database,
    repositories::{
        SqliteArticleReadRepository, SqliteArticleWriteRepository, SqliteCategoryReadRepository,
        SqliteCategoryWriteRepository, SqliteUserRepository,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use blogcore::presentation::{
    admin::ArticleAdmin,
    http::{routes::build_router, state::HttpState},
};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.db_max_connections()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!(max_connections = config.db_max_connections(), "database ready");

    let repos = Repositories {
        users: Arc::new(SqliteUserRepository::new(pool.clone())),
        article_write: Arc::new(SqliteArticleWriteRepository::new(pool.clone())),
        article_read: Arc::new(SqliteArticleReadRepository::new(pool.clone())),
        category_write: Arc::new(SqliteCategoryWriteRepository::new(pool.clone())),
        category_read: Arc::new(SqliteCategoryReadRepository::new(pool)),
    };

    let calendar: Arc<dyn CalendarFormatter> = Arc::new(
        JalaliCalendarFormatter::from_offset_seconds(config.display_offset_seconds()),
    );
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let services = Arc::new(ApplicationServices::new(repos, calendar, clock, slugger));
    let admin = Arc::new(ArticleAdmin::new(config.media_url(), services.calendar()));

    let state = HttpState {
        services: Arc::clone(&services),
        admin,
    };

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for CTRL+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
