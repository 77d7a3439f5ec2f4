mod conversation;
mod stats;

pub use conversation::*;
pub use stats::*;
