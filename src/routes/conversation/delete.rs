use super::{INTERNAL_ERROR, NOT_FOUND};
use crate::db;
use crate::helpers::JsonResponse;
use actix_web::{delete, web, Responder, Result};
use sqlx::SqlitePool;

#[tracing::instrument(name = "Delete conversation.", skip(pool))]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(i64,)>,
    pool: web::Data<SqlitePool>,
) -> Result<impl Responder> {
    let id = path.0;
    let deleted = db::conversation::delete(pool.get_ref(), id)
        .await
        .map_err(|err| {
            tracing::error!("Failed to delete conversation {}: {:?}", id, err);
            JsonResponse::<()>::build().internal_server_error(INTERNAL_ERROR)
        })?;

    if deleted == 0 {
        return Err(JsonResponse::<()>::build().not_found(NOT_FOUND));
    }

    tracing::info!("Conversation {} has been deleted", id);
    Ok(JsonResponse::<()>::build().set_message("Conversation deleted").ok())
}
