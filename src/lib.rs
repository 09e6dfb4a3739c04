//! String sanitizers for command-line input and API data.
//!
//! This crate provides a handful of small, stateless string filters:
//! - **Alphanumeric filtering**: keep `[A-Za-z0-9_]` plus extras, spaces become `_`
//! - **Flag partitioning**: split argument lists on a `/` or `.` prefix
//! - **Numeric coercion**: parse the digits of a string, falling back to a configured limit
//! - **Whitelisting**: keep only allowed characters, or the `"NULL"` sentinel
//!
//! # Core Types
//!
//! - [`Sanitizer`]: Runs the filters and reports to an observer
//! - [`SanitizerConfig`]: Holds the numeric fallback limit
//! - [`CharSet`]: Parsed allowed-character specification (`a-zA-Z`, `\-`)
//! - [`SanitizeObserver`]: Logging hooks, implemented by [`TracingObserver`] and [`RecordingObserver`]
//! - [`Language`] and [`Report`]: Localized report rendering
//!
//! # Examples
//!
//! ```
//! use destroy_invalids::{flags_only, Sanitizer, SanitizerConfig};
//!
//! let sanitizer = Sanitizer::new(SanitizerConfig::new(0));
//!
//! let cleaned = sanitizer
//!     .alphanumeric_only(["Obi-Wan Kenobi"], "main", "-")
//!     .expect("valid extras");
//! assert_eq!(cleaned, vec!["Obi-Wan_Kenobi"]);
//!
//! let length = sanitizer.numeric_only("1,600", str::parse::<f64>);
//! assert_eq!(length, 1600.0);
//!
//! let mut args = vec!["/verbose", "planets"];
//! flags_only(&mut args);
//! assert_eq!(args, vec!["planets"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod charset;
mod config;
mod error;
pub mod filters;
mod flags;
mod lang;
mod numeric;
mod observer;
pub mod report;
mod sanitizer;

#[cfg(test)]
mod test_utils;

pub use charset::{CharSet, CharSetError, CharSetErrorKind};
pub use config::SanitizerConfig;
pub use error::Error;
pub use flags::{flags_only, is_flag_like, non_flags_only};
pub use lang::{Language, LanguageError};
pub use numeric::FromLimit;
pub use observer::{Level, ObservedEvent, RecordingObserver, SanitizeObserver, TracingObserver};
pub use report::{load_template, Report};
pub use sanitizer::{Sanitizer, NULL_SENTINEL};
