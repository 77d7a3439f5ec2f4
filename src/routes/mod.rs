pub(crate) mod conversation;
pub mod download;
pub mod health_checks;
pub mod stats;

pub use download::*;
pub use health_checks::*;
pub use stats::*;
