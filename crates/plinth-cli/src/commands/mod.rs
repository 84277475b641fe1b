//! Command implementations.

mod extract;
mod query;
mod sentiment;
mod stories;
mod summarize;

pub use extract::execute_extract;
pub use query::execute_query;
pub use sentiment::execute_sentiment;
pub use stories::execute_stories;
pub use summarize::execute_summarize;
