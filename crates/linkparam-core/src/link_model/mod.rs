//! Link URL modeling: classification and query-parameter merging.
//!
//! Both link classes go through the same `head?query#fragment` split; only
//! how the head is obtained differs (parsed by `url` for external links,
//! taken verbatim for internal ones).

mod classify;
mod merge;
mod split;

pub use classify::{classify, LinkClass};
pub use merge::merge;
