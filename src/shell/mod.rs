//! Shell string helpers used when synthesizing terminal command lines.
//!
//! Provides:
//! - Bourne shell double-quote escaping ([`quote`])
//! - Extraction of leading `NAME="value"` environment assignments ([`split_env`])

mod env;
mod quote;

pub use env::{EnvSplit, split_env};
pub use quote::quote;
