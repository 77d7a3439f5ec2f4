use super::{INTERNAL_ERROR, NOT_FOUND};
use crate::db;
use crate::forms;
use crate::helpers::JsonResponse;
use crate::views;
use actix_web::{get, web, Responder, Result};
use serde_valid::Validate;
use sqlx::SqlitePool;

#[tracing::instrument(name = "Get conversation.", skip(pool))]
#[get("/{id}")]
pub async fn item_handler(
    path: web::Path<(i64,)>,
    pool: web::Data<SqlitePool>,
) -> Result<impl Responder> {
    let id = path.0;
    let conversation = db::conversation::fetch(pool.get_ref(), id)
        .await
        .map_err(|err| {
            tracing::error!("Failed to fetch conversation {}: {:?}", id, err);
            JsonResponse::<views::Conversation>::build().internal_server_error(INTERNAL_ERROR)
        })
        .and_then(|conversation| match conversation {
            Some(conversation) => Ok(conversation),
            None => Err(JsonResponse::<views::Conversation>::build().not_found(NOT_FOUND)),
        })?;

    Ok(JsonResponse::build()
        .set_item(Into::<views::Conversation>::into(conversation))
        .ok())
}

#[tracing::instrument(name = "List conversations.", skip(pool))]
#[get("")]
pub async fn list_handler(
    query: web::Query<forms::ListQuery>,
    pool: web::Data<SqlitePool>,
) -> Result<impl Responder> {
    if let Err(errors) = query.validate() {
        tracing::info!("Rejected list query: {}", errors);
        return Err(JsonResponse::<Vec<views::Conversation>>::build()
            .bad_request("page and limit must be positive integers"));
    }

    let filter = query.filter();
    let pagination = query.pagination();

    let conversations = db::conversation::list(pool.get_ref(), &filter, &pagination)
        .await
        .map_err(|err| {
            tracing::error!("Failed to list conversations: {:?}", err);
            JsonResponse::<Vec<views::Conversation>>::build().internal_server_error(INTERNAL_ERROR)
        })?;

    let total = db::conversation::count(pool.get_ref(), &filter)
        .await
        .map_err(|err| {
            tracing::error!("Failed to count conversations: {:?}", err);
            JsonResponse::<Vec<views::Conversation>>::build().internal_server_error(INTERNAL_ERROR)
        })?;

    let conversations = conversations
        .into_iter()
        .map(Into::into)
        .collect::<Vec<views::Conversation>>();

    Ok(JsonResponse::build()
        .set_item(conversations)
        .set_pagination(views::Pagination::new(&pagination, total))
        .ok())
}
