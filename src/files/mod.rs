//! File helpers: source path parsing and policy-driven copying.

pub mod copy;
mod error;
pub mod parsed;

pub use copy::{copy_if_newer, copy_with_policy, source_is_newer, CopyOutcome};
pub use error::CopyError;
pub use parsed::ParsedPath;
