use once_cell::sync::Lazy;
use regex::Regex;

// Each assignment must be followed by at least one space to count as part of the prefix.
static ENV_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^(?:[A-Za-z0-9_]+="(?:\\"|[^"])*" +)*"#).expect("valid env prefix regex"));

/// Result of splitting a connection string into its environment prefix and the remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnvSplit<'a> {
    /// Leading `NAME="value" ` assignments, verbatim including trailing spaces.
    pub env: &'a str,
    /// Everything after the prefix.
    pub rest: &'a str,
}

/// Splits the leading run of `NAME="value"` assignments off `params`.
///
/// All consecutive assignments are captured, and a value may contain escaped
/// double quotes (`\"`). When nothing matches, `env` is empty and `rest` is
/// `params` unchanged.
pub fn split_env(params: &str) -> EnvSplit<'_> {
    let prefix_len = ENV_PREFIX.find(params).map(|found| found.end()).unwrap_or(0);
    let (env, rest) = params.split_at(prefix_len);
    EnvSplit { env, rest }
}

#[cfg(test)]
#[path = "../test/shell/env.rs"]
mod tests;
