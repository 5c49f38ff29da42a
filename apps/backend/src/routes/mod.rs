use actix_web::web;

use crate::middleware::no_store;

pub mod games;
pub mod health;

/// Register every route. Used by `main.rs` and by tests, so both see the
/// same paths and scope-level middleware.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));

    // Health check routes: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Games routes: /api/games/**
    cfg.service(
        web::scope("/api/games")
            .wrap(no_store())
            .configure(games::configure_routes),
    );
}
