use actix_web::web;

pub mod games;
pub mod health;

/// Register every route. Shared by `main.rs` and the integration tests so
/// both exercise the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Root greeting and /health
    cfg.configure(health::configure_routes);

    // Games routes: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
