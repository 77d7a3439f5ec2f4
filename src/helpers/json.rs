use crate::views::Pagination;
use actix_web::error::InternalError;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use serde::Serialize;

/// Envelope of every successful API response.
#[derive(Serialize)]
pub(crate) struct JsonResponse<T> {
    pub(crate) success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) pagination: Option<Pagination>,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

pub(crate) struct JsonResponseBuilder<T>
where
    T: Serialize,
{
    message: Option<String>,
    data: Option<T>,
    pagination: Option<Pagination>,
}

impl<T> JsonResponse<T>
where
    T: Serialize,
{
    pub(crate) fn build() -> JsonResponseBuilder<T> {
        JsonResponseBuilder {
            message: None,
            data: None,
            pagination: None,
        }
    }
}

impl<T> JsonResponseBuilder<T>
where
    T: Serialize,
{
    pub(crate) fn set_item(mut self, item: T) -> Self {
        self.data = Some(item);
        self
    }

    pub(crate) fn set_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub(crate) fn set_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }

    fn into_body(self) -> JsonResponse<T> {
        JsonResponse {
            success: true,
            message: self.message,
            data: self.data,
            pagination: self.pagination,
        }
    }

    pub(crate) fn ok(self) -> web::Json<JsonResponse<T>> {
        web::Json(self.into_body())
    }

    pub(crate) fn created(self) -> HttpResponse {
        HttpResponse::Created().json(self.into_body())
    }

    pub(crate) fn bad_request(self, message: &str) -> actix_web::Error {
        error(StatusCode::BAD_REQUEST, message)
    }

    pub(crate) fn not_found(self, message: &str) -> actix_web::Error {
        error(StatusCode::NOT_FOUND, message)
    }

    /// The cause is expected to be logged by the caller; clients only ever see `message`.
    pub(crate) fn internal_server_error(self, message: &str) -> actix_web::Error {
        error(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

/// `{"error": message}` with the given status, usable as an `actix_web::Error`.
pub(crate) fn error(status: StatusCode, message: &str) -> actix_web::Error {
    let response = HttpResponse::build(status).json(ErrorBody { error: message });
    InternalError::from_response(message.to_string(), response).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use serde_json::{json, Value};

    #[test]
    fn empty_fields_are_skipped() {
        let body = JsonResponse::<i64>::build().set_message("done").into_body();

        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"success": true, "message": "done"})
        );
    }

    #[test]
    fn item_and_pagination_are_serialized() {
        let body = JsonResponse::build()
            .set_item(vec![1, 2])
            .set_pagination(Pagination { page: 1, limit: 2, total: 5, pages: 3 })
            .into_body();

        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({
                "success": true,
                "data": [1, 2],
                "pagination": {"page": 1, "limit": 2, "total": 5, "pages": 3}
            })
        );
    }

    #[actix_web::test]
    async fn errors_render_status_and_message() {
        let err = JsonResponse::<i64>::build().not_found("Conversation not found");
        let response = err.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body()).await.unwrap();
        let value: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, json!({"error": "Conversation not found"}));
    }
}
