//! Health probes
//!
//! Both probes report constant success and never touch the datastore. They
//! answer "is the process serving requests", nothing more.

use axum::Json;

pub async fn readiness() -> Json<&'static str> {
    Json("Ready")
}

pub async fn liveness() -> Json<&'static str> {
    Json("Alive")
}
