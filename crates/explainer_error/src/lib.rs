//! Error types for the Explainer pipeline.
//!
//! This crate provides the error types shared by every Explainer crate.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Every error maps onto an [`ErrorCategory`], which in turn maps onto a
//! distinct process exit code.
//!
//! # Examples
//!
//! ```
//! use explainer_error::{ErrorCategory, ExplainerResult, ResponseError, ResponseErrorKind};
//!
//! fn parse() -> ExplainerResult<()> {
//!     Err(ResponseError::new(ResponseErrorKind::Empty))?
//! }
//!
//! let err = parse().unwrap_err();
//! assert_eq!(err.category(), ErrorCategory::ResponseEmpty);
//! assert_eq!(err.exit_code(), 5);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod config;
mod error;
mod json;
mod provider;
mod response;
mod schema;
mod storage;

pub use category::{ErrorCategory, USAGE_EXIT_CODE};
pub use config::ConfigError;
pub use error::{ExplainerError, ExplainerErrorKind, ExplainerResult};
pub use json::JsonError;
pub use provider::{ProviderError, ProviderErrorKind, ProviderResult};
pub use response::{ResponseError, ResponseErrorKind};
pub use schema::{SchemaError, SchemaErrorKind};
pub use storage::{StorageError, StorageErrorKind};
