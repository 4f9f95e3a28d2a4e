//! Environment-driven sizing for property-test suites.
//!
//! `PROGTEST_CASES` sets the number of cases per property and
//! `KSPACING_PBT_FORK` runs each case in a forked process. Unusable values
//! are reported through `tracing` and replaced by the suite default.

use std::{env, num::NonZeroU32};

use thiserror::Error;

/// Environment variable overriding the number of cases per property.
pub const CASES_ENV: &str = "PROGTEST_CASES";
/// Environment variable switching forked case execution on or off.
pub const FORK_ENV: &str = "KSPACING_PBT_FORK";

/// Reasons an override value is ignored.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum OverrideError {
    /// The case count was not a positive integer.
    #[error("`{raw}` is not a positive case count")]
    InvalidCases {
        /// Value as read from the environment.
        raw: String,
    },
    /// The fork switch was not a recognised boolean spelling.
    #[error("`{raw}` is not one of true/false/1/0/yes/no/on/off")]
    InvalidSwitch {
        /// Value as read from the environment.
        raw: String,
    },
}

/// Case count and fork setting resolved for one property suite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: NonZeroU32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Resolves the profile from the process environment.
    ///
    /// A `default_cases` of zero is treated as one.
    ///
    /// # Examples
    ///
    /// ```
    /// use kspacing_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Resolves the profile from `lookup`, which maps a variable name to its
    /// raw value.
    ///
    /// # Examples
    ///
    /// ```
    /// use kspacing_test_support::ci::property_test_profile::{CASES_ENV, ProptestRunProfile};
    ///
    /// let profile = ProptestRunProfile::from_lookup(64, false, |key| {
    ///     (key == CASES_ENV).then(|| "512".to_owned())
    /// });
    /// assert_eq!(profile.cases(), 512);
    /// assert!(!profile.fork());
    /// ```
    #[must_use]
    pub fn from_lookup(
        default_cases: u32,
        default_fork: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let fallback = NonZeroU32::new(default_cases).unwrap_or(NonZeroU32::MIN);
        Self {
            cases: resolve(CASES_ENV, lookup(CASES_ENV), fallback, parse_cases),
            fork: resolve(FORK_ENV, lookup(FORK_ENV), default_fork, parse_switch),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases.get()
    }

    /// Whether each case runs in a forked subprocess.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn resolve<T>(
    key: &'static str,
    raw: Option<String>,
    default: T,
    parse: fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Some(raw) = raw else {
        return default;
    };
    parse(&raw).unwrap_or_else(|err| {
        tracing::warn!(env = key, error = %err, "ignoring property-test override");
        default
    })
}

fn parse_cases(raw: &str) -> Result<NonZeroU32, OverrideError> {
    raw.trim()
        .parse::<NonZeroU32>()
        .map_err(|_| OverrideError::InvalidCases {
            raw: raw.to_owned(),
        })
}

fn parse_switch(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::InvalidSwitch {
            raw: raw.to_owned(),
        }),
    }
}
