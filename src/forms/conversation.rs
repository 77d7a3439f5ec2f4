use crate::db::query::{Filter, Pagination, DEFAULT_LIMIT, DEFAULT_PAGE};
use crate::models;
use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};
use serde_valid::Validate;

pub const MISSING_FIELDS: &str = "Missing required fields: platform, user_message, ai_response";

/// JSON scalars accepted for text columns; numeric ids (e.g. Telegram's) are stored as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Number(Number),
}

fn scalar_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Number(number) => number.to_string(),
    }))
}

/// Body of `POST /api/conversations`. Every field is optional at the serde level so that
/// missing required fields are reported with [`MISSING_FIELDS`] rather than a parse error.
#[derive(Debug, Default, Deserialize)]
pub struct AddConversation {
    #[serde(default, deserialize_with = "scalar_text")]
    pub platform: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub user_message: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub ai_response: Option<String>,
    #[serde(default)]
    pub metadata: Option<Value>,
}

fn required(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

impl TryFrom<AddConversation> for models::NewConversation {
    type Error = &'static str;

    fn try_from(form: AddConversation) -> Result<Self, Self::Error> {
        match (
            required(form.platform),
            required(form.user_message),
            required(form.ai_response),
        ) {
            (Some(platform), Some(user_message), Some(ai_response)) => Ok(Self {
                platform,
                user_id: form.user_id.filter(|user_id| !user_id.is_empty()),
                user_message,
                ai_response,
                metadata: form.metadata,
            }),
            _ => Err(MISSING_FIELDS),
        }
    }
}

/// Query string of `GET /api/conversations`.
///
/// * `page`: 1-based page number, defaults to 1
/// * `limit`: page size, defaults to 50, no upper bound
/// * `platform`, `user_id`: optional exact-match filters
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListQuery {
    #[validate(minimum = 1)]
    pub page: Option<i64>,
    #[validate(minimum = 1)]
    pub limit: Option<i64>,
    pub platform: Option<String>,
    pub user_id: Option<String>,
}

impl ListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page.unwrap_or(DEFAULT_PAGE),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
        }
    }

    pub fn filter(&self) -> Filter {
        Filter::new(self.platform.clone(), self.user_id.clone())
    }
}
