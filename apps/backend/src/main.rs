use actix_web::{web, App, HttpServer};
use bowling_backend::config::server::ServerConfig;
use bowling_backend::infra::state::build_state;
use bowling_backend::middleware::cors::cors_middleware;
use bowling_backend::middleware::request_trace::RequestTrace;
use bowling_backend::middleware::structured_logger::StructuredLogger;
use bowling_backend::middleware::trace_span::TraceSpan;
use bowling_backend::routes;
use bowling_backend::telemetry;
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: via docker-compose env_file or docker run --env-file
    // - Local dev: source env files manually (e.g., set -a; . ./.env; set +a)
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    let app_state = match build_state().with_db(config.db_kind).build().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, db_kind = %config.db_kind, "Failed to build application state");
            std::process::exit(1);
        }
    };

    info!(
        host = %config.host,
        port = config.port,
        db_kind = %config.db_kind,
        "Starting bowling backend"
    );

    let data = web::Data::new(app_state);
    let cors_origins = config.cors_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&cors_origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
