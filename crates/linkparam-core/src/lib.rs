pub mod config;
pub mod logging;

pub mod context;
pub mod link_model;
pub mod markdown;
pub mod param;
pub mod resolve;
pub mod rewriter;

pub use context::{LinkContext, SourceFile};
pub use link_model::{classify, merge, LinkClass};
pub use param::{ParamError, ParameterSpec, ResolvedParameter, StaticParam};
pub use resolve::{resolve, ResolveError};
pub use rewriter::{ConfigError, LinkRewriter, ParamsConfig, Rewrite};
