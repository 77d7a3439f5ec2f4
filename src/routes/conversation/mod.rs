mod add;
mod delete;
mod get;

pub use add::*;
pub use delete::*;
pub use get::*;

pub(crate) const NOT_FOUND: &str = "Conversation not found";
pub(crate) const INTERNAL_ERROR: &str = "Internal server error";
