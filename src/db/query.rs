use sqlx::{QueryBuilder, Sqlite};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 50;

const SELECT_COLUMNS: &str =
    "SELECT id, platform, user_id, user_message, ai_response, metadata, created_at FROM conversations";

/// Equality filters for the conversation listing. `None` leaves the column unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    pub platform: Option<String>,
    pub user_id: Option<String>,
}

impl Filter {
    /// Empty strings are treated the same as a missing filter.
    pub fn new(platform: Option<String>, user_id: Option<String>) -> Self {
        Self {
            platform: platform.filter(|value| !value.is_empty()),
            user_id: user_id.filter(|value| !value.is_empty()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    pub fn offset(&self) -> i64 {
        (self.page - 1).max(0).saturating_mul(self.limit)
    }

    /// Number of pages needed for `total` rows, `ceil(total / limit)`.
    pub fn pages(&self, total: i64) -> i64 {
        if self.limit <= 0 {
            return 0;
        }
        total / self.limit + i64::from(total % self.limit != 0)
    }
}

// Both the page query and the count query go through here so they always
// see the same predicate and bound values.
fn push_filter(builder: &mut QueryBuilder<'static, Sqlite>, filter: &Filter) {
    let mut separator = " WHERE ";

    if let Some(platform) = &filter.platform {
        builder.push(separator).push("platform = ").push_bind(platform.clone());
        separator = " AND ";
    }

    if let Some(user_id) = &filter.user_id {
        builder.push(separator).push("user_id = ").push_bind(user_id.clone());
    }
}

pub fn select(filter: &Filter, pagination: &Pagination) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new(SELECT_COLUMNS);
    push_filter(&mut builder, filter);
    builder
        .push(" ORDER BY created_at DESC, id DESC LIMIT ")
        .push_bind(pagination.limit)
        .push(" OFFSET ")
        .push_bind(pagination.offset());
    builder
}

pub fn count(filter: &Filter) -> QueryBuilder<'static, Sqlite> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM conversations");
    push_filter(&mut builder, filter);
    builder
}
