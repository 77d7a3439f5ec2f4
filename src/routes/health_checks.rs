use actix_web::{get, web, Responder};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    timestamp: String,
}

#[get("/health")]
pub async fn health_check() -> impl Responder {
    web::Json(Health {
        status: "OK",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
