//! Shared helpers: a throwaway upstream knowledge service on an ephemeral port.

#![allow(dead_code)]

use actix_web::{web, App, HttpResponse, HttpServer};
use serde_json::{json, Value};
use std::net::TcpListener;

/// Start an upstream with the given routes and return its base URL.
pub fn spawn_upstream(routes: fn(&mut web::ServiceConfig)) -> String {
    let server = HttpServer::new(move || App::new().configure(routes))
        .workers(1)
        .bind(("127.0.0.1", 0))
        .expect("bind upstream");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}")
}

/// A base URL nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind probe");
    let addr = listener.local_addr().expect("probe addr");
    drop(listener);
    format!("http://{addr}")
}

pub fn sample_entries() -> Value {
    json!([
        {
            "id": 1,
            "title": "Machine Maintenance",
            "description": "Regular maintenance procedures",
            "tags": ["maintenance", "machines"],
            "createdAt": "2023-01-01T00:00:00",
            "updatedAt": "2023-01-01T00:00:00"
        },
        {
            "id": 2,
            "title": "Safety Protocols",
            "description": "Safety guidelines",
            "tags": ["safety", "protocols"],
            "createdAt": "2023-01-01T00:00:00",
            "updatedAt": "2023-01-01T00:00:00"
        },
        {
            "id": 3,
            "title": "Lockout procedure",
            "description": "Isolate machine energy before service",
            "tags": ["safety"],
            "createdAt": "2024-03-05T08:30:00Z",
            "updatedAt": "2024-03-06T09:00:00Z"
        }
    ])
}

pub fn healthy_upstream(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/api/entries",
        web::get().to(|| async { HttpResponse::Ok().json(sample_entries()) }),
    );
}
