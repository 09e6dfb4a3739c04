use std::fmt;

use crate::{
    filters, CharSet, CharSetError, FromLimit, SanitizeObserver, SanitizerConfig, TracingObserver,
};

/// Value returned by [`Sanitizer::anything`] when nothing survives filtering.
pub const NULL_SENTINEL: &str = "NULL";

/// String sanitizer with a configured fallback limit and an injected observer.
///
/// Every operation is a stateless transform of its arguments. The observer
/// only sees what happens; it never changes a returned value.
///
/// # Examples
///
/// ```
/// use destroy_invalids::{Sanitizer, SanitizerConfig};
///
/// let sanitizer = Sanitizer::new(SanitizerConfig::new(-1));
///
/// let names = sanitizer.alphanumeric_only(["Luke Skywalker", "R2-D2"], "main", "").unwrap();
/// assert_eq!(names, vec!["Luke_Skywalker", "R2D2"]);
///
/// assert_eq!(sanitizer.numeric_only("1,600 m", str::parse::<f64>), 1600.0);
/// assert_eq!(sanitizer.numeric_only("unknown", str::parse::<i64>), -1);
///
/// assert_eq!(sanitizer.anything("Hello, World!", "a-zA-Z").unwrap(), "HelloWorld");
/// assert_eq!(sanitizer.anything("123", "a-z").unwrap(), "NULL");
/// ```
#[derive(Debug, Clone)]
pub struct Sanitizer<O = TracingObserver> {
    config: SanitizerConfig,
    observer: O,
}

impl Sanitizer {
    /// Creates a sanitizer that logs through `tracing`.
    pub fn new(config: SanitizerConfig) -> Self {
        Self::with_observer(config, TracingObserver)
    }
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self::new(SanitizerConfig::default())
    }
}

impl<O: SanitizeObserver> Sanitizer<O> {
    /// Creates a sanitizer that reports to `observer`.
    pub fn with_observer(config: SanitizerConfig, observer: O) -> Self {
        Self { config, observer }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &SanitizerConfig {
        &self.config
    }

    /// Returns the observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Filters each input down to `[A-Za-z0-9_]` plus `extras`.
    ///
    /// Spaces become `_` before filtering, and matching is case-insensitive.
    /// Output order follows input order; an input with nothing left maps to
    /// an empty string. Pass a single string as a one-element array.
    ///
    /// `origin` names the calling function and is only used for logging.
    ///
    /// # Errors
    ///
    /// Returns [`CharSetError`] if `extras` is not a valid specification.
    pub fn alphanumeric_only<I, S>(
        &self,
        data: I,
        origin: &str,
        extras: &str,
    ) -> Result<Vec<String>, CharSetError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let data: Vec<S> = data.into_iter().collect();
        let args: Vec<&str> = data.iter().map(|s| s.as_ref()).collect();
        self.observer.was_called("alphanumeric_only", origin, &args);

        let extras = CharSet::parse(extras)?;

        Ok(args
            .iter()
            .map(|input| {
                let filtered = filters::alphanumeric(input, &extras);
                self.observer
                    .value_was_set(&input.replace(' ', "_"), &filtered, origin);
                filtered
            })
            .collect())
    }

    /// Parses the digits and dots of `input` with `convert`.
    ///
    /// Returns the configured fallback limit when no digits remain or when
    /// `convert` fails (for example on `"1.2.3"`). Never fails itself.
    pub fn numeric_only<T, E, F>(&self, input: &str, convert: F) -> T
    where
        T: FromLimit,
        E: fmt::Display,
        F: FnOnce(&str) -> Result<T, E>,
    {
        self.observer.was_called("numeric_only", module_path!(), &input);

        let digits = filters::numeric_chars(input);
        if digits.is_empty() {
            return T::from_limit(self.config.limit());
        }

        match convert(&digits) {
            Ok(value) => value,
            Err(e) => {
                self.observer.unexpected_error("handling", &digits);
                self.observer
                    .debug(format_args!("conversion of '{}' failed: {}", digits, e));
                T::from_limit(self.config.limit())
            }
        }
    }

    /// Keeps only the characters of `value` that appear in `remove`.
    ///
    /// Despite its name, `remove` lists the characters to *keep*. Matching is
    /// case-sensitive. Returns [`NULL_SENTINEL`] if nothing is left.
    ///
    /// # Errors
    ///
    /// Returns [`CharSetError`] if `remove` is not a valid specification.
    pub fn anything(&self, value: &str, remove: &str) -> Result<String, CharSetError> {
        self.observer.was_called("anything", module_path!(), &value);
        let allowed = CharSet::parse(remove)?;
        Ok(self.whitelist(value, &allowed, remove))
    }

    /// Like [`anything`](Self::anything) with an already parsed set.
    pub fn anything_in(&self, value: &str, allowed: &CharSet) -> String {
        self.observer.was_called("anything_in", module_path!(), &value);
        self.whitelist(value, allowed, allowed.as_str())
    }

    fn whitelist(&self, value: &str, allowed: &CharSet, spec: &str) -> String {
        let filtered = filters::retain_allowed(value, allowed);
        if filtered.is_empty() {
            self.observer.warn(format_args!(
                "The returned value for '{}' is empty. It was filtered using: '[^{}]'.",
                value, spec
            ));
            return NULL_SENTINEL.to_string();
        }
        filtered
    }
}
