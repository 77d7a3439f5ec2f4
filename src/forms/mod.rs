pub mod conversation;

pub use conversation::AddConversation as Add;
pub use conversation::ListQuery;
