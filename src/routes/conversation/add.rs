use super::INTERNAL_ERROR;
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::models;
use crate::views;
use actix_web::{post, web, HttpResponse, Result};
use sqlx::SqlitePool;

#[tracing::instrument(name = "Add conversation.", skip(form, pool))]
#[post("")]
pub async fn add_handler(
    form: web::Json<forms::Add>,
    pool: web::Data<SqlitePool>,
) -> Result<HttpResponse> {
    let conversation: models::NewConversation = form
        .into_inner()
        .try_into()
        .map_err(|msg| JsonResponse::<views::Conversation>::build().bad_request(msg))?;

    let id = db::conversation::insert(pool.get_ref(), conversation)
        .await
        .map_err(|err| {
            tracing::error!("Failed to insert conversation: {:?}", err);
            JsonResponse::<views::Conversation>::build().internal_server_error(INTERNAL_ERROR)
        })?;

    let conversation = db::conversation::fetch(pool.get_ref(), id)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch conversation {}: {:?}", id, err);
            JsonResponse::<views::Conversation>::build().internal_server_error(INTERNAL_ERROR)
        })
        .and_then(|conversation| match conversation {
            Some(conversation) => Ok(conversation),
            None => {
                tracing::error!("Conversation {} vanished right after insert", id);
                Err(JsonResponse::<views::Conversation>::build().internal_server_error(INTERNAL_ERROR))
            }
        })?;

    Ok(JsonResponse::build()
        .set_item(Into::<views::Conversation>::into(conversation))
        .created())
}
