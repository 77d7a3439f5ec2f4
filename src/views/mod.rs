mod conversation;
mod pagination;

pub use conversation::Conversation;
pub use pagination::Pagination;
