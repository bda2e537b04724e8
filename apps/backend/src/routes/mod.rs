use actix_web::web;

pub mod authors;
pub mod books;
pub mod health;
pub mod root;

/// Register every API route.
///
/// Shared by `main.rs` (wrapped in middleware) and the test app builder.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Service descriptor: /
    cfg.configure(root::configure_routes);

    // Liveness and DB connectivity: /health
    cfg.configure(health::configure_routes);

    // Author routes: /author/**
    cfg.service(web::scope("/author").configure(authors::configure_routes));

    // Book routes: /book/**
    cfg.service(web::scope("/book").configure(books::configure_routes));
}
