//! Environment-driven tuning for property suites.
//!
//! CI raises the case count for nightly runs and can fork each case into a
//! subprocess; local runs fall back to the per-suite defaults.

use std::env;

use thiserror::Error;

/// Overrides the number of cases per property.
pub const CASES_ENV: &str = "DENCLUSTER_PROPTEST_CASES";
/// Enables forking each proptest case into a subprocess.
pub const FORK_ENV: &str = "DENCLUSTER_PROPTEST_FORK";

/// Reason an override was ignored.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OverrideError {
    /// The case count did not parse as an unsigned integer.
    #[error("`{raw}` is not a case count")]
    NotANumber {
        /// The rejected value.
        raw: String,
    },
    /// The case count was zero.
    #[error("case count must be positive")]
    ZeroCases,
    /// The fork flag was not a recognised boolean spelling.
    #[error("`{raw}` is not a boolean; use true/false, 1/0, yes/no, or on/off")]
    NotABool {
        /// The rejected value.
        raw: String,
    },
}

/// Case count and fork mode for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestProfile {
    cases: u32,
    fork: bool,
}

impl ProptestProfile {
    /// Reads [`CASES_ENV`] and [`FORK_ENV`], keeping `default_cases` and no
    /// forking when a variable is absent or malformed.
    ///
    /// # Examples
    /// ```
    /// use dencluster_test_support::ci::proptest_profile::ProptestProfile;
    ///
    /// let profile = ProptestProfile::from_env(32);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn from_env(default_cases: u32) -> Self {
        Self::from_lookup(default_cases, |key| env::var(key).ok())
    }

    /// Resolves the profile through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(default_cases: u32, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let cases = resolve(CASES_ENV, lookup(CASES_ENV), default_cases, parse_cases);
        let fork = resolve(FORK_ENV, lookup(FORK_ENV), false, parse_flag);
        Self { cases, fork }
    }

    /// Number of cases per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether cases run in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T>(
    key: &str,
    raw: Option<String>,
    default: T,
    parse: fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Some(raw) = raw else {
        return default;
    };
    parse(&raw).unwrap_or_else(|error| {
        ::tracing::warn!(env = key, %error, "ignoring property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(_) => Err(OverrideError::NotANumber {
            raw: raw.to_owned(),
        }),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool {
            raw: raw.to_owned(),
        }),
    }
}
