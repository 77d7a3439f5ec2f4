use crate::db;
use crate::helpers::JsonResponse;
use crate::models;
use crate::routes::conversation::INTERNAL_ERROR;
use actix_web::{get, web, Responder, Result};
use sqlx::SqlitePool;

#[tracing::instrument(name = "Conversation stats.", skip(pool))]
#[get("/stats")]
pub async fn stats_handler(pool: web::Data<SqlitePool>) -> Result<impl Responder> {
    db::stats::collect(pool.get_ref())
        .await
        .map(|stats| JsonResponse::build().set_item(stats).ok())
        .map_err(|err| {
            tracing::error!("Failed to collect stats: {:?}", err);
            JsonResponse::<models::Stats>::build().internal_server_error(INTERNAL_ERROR)
        })
}
