//! CLI command handlers. Each command is in its own file.

mod check;
mod classify;
mod rewrite;
mod url;

pub use check::run_check;
pub use classify::run_classify;
pub use rewrite::run_rewrite;
pub use url::run_url;
