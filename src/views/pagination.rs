use crate::db::query;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

impl Pagination {
    pub fn new(pagination: &query::Pagination, total: i64) -> Self {
        Self {
            page: pagination.page,
            limit: pagination.limit,
            total,
            pages: pagination.pages(total),
        }
    }
}
