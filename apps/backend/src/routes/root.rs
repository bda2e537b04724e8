use actix_web::{web, HttpResponse};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ServiceDescriptor {
    description: &'static str,
    version: &'static str,
}

async fn root() -> HttpResponse {
    HttpResponse::Ok().json(ServiceDescriptor {
        description: "Library Management API",
        version: "1.0",
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root));
}
