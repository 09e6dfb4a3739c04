//! Logging hooks invoked by the sanitizer.
//!
//! The sanitizer reports what it does through a [`SanitizeObserver`] instead
//! of calling a logger directly. [`TracingObserver`] forwards everything to
//! `tracing`; [`RecordingObserver`] keeps events in memory for inspection.

use std::cell::RefCell;
use std::fmt;

/// Receives sanitizer events.
///
/// Every method is fire-and-forget: implementations must not panic and
/// cannot influence the value the sanitizer returns.
pub trait SanitizeObserver {
    /// A sanitizer function was invoked on behalf of `origin`.
    fn was_called(&self, function: &str, origin: &str, args: &dyn fmt::Debug);

    /// A filtered value was produced for the input named `name`.
    fn value_was_set(&self, name: &str, value: &str, origin: &str);

    /// Something failed that the sanitizer recovered from.
    fn unexpected_error(&self, error_type: &str, item: &str);

    /// Logs a debug-level message.
    fn debug(&self, args: fmt::Arguments<'_>);

    /// Logs an info-level message.
    fn info(&self, args: fmt::Arguments<'_>);

    /// Logs a warning-level message.
    fn warn(&self, args: fmt::Arguments<'_>);

    /// Logs an error-level message.
    fn error(&self, args: fmt::Arguments<'_>);
}

impl<O: SanitizeObserver + ?Sized> SanitizeObserver for &O {
    fn was_called(&self, function: &str, origin: &str, args: &dyn fmt::Debug) {
        (**self).was_called(function, origin, args)
    }

    fn value_was_set(&self, name: &str, value: &str, origin: &str) {
        (**self).value_was_set(name, value, origin)
    }

    fn unexpected_error(&self, error_type: &str, item: &str) {
        (**self).unexpected_error(error_type, item)
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        (**self).debug(args)
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        (**self).info(args)
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        (**self).warn(args)
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        (**self).error(args)
    }
}

/// Observer that emits structured `tracing` events.
///
/// Call traces and value assignments are logged at debug level, recovered
/// errors at error level. All events use the `destroy_invalids` target.
///
/// # Examples
///
/// ```
/// use destroy_invalids::{Sanitizer, SanitizerConfig, TracingObserver};
///
/// let sanitizer = Sanitizer::with_observer(SanitizerConfig::default(), TracingObserver);
/// let cleaned = sanitizer.anything("v1.2", "0-9").expect("valid spec");
/// assert_eq!(cleaned, "12");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SanitizeObserver for TracingObserver {
    fn was_called(&self, function: &str, origin: &str, args: &dyn fmt::Debug) {
        tracing::debug!(
            target: "destroy_invalids",
            function = %function,
            origin = %origin,
            args = ?args,
            "function was called"
        );
    }

    fn value_was_set(&self, name: &str, value: &str, origin: &str) {
        tracing::debug!(
            target: "destroy_invalids",
            input = %name,
            value = %value,
            origin = %origin,
            "value was set"
        );
    }

    fn unexpected_error(&self, error_type: &str, item: &str) {
        tracing::error!(
            target: "destroy_invalids",
            error_type = %error_type,
            item = %item,
            "unexpected error while {}",
            error_type
        );
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(target: "destroy_invalids", "{}", args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        tracing::info!(target: "destroy_invalids", "{}", args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        tracing::warn!(target: "destroy_invalids", "{}", args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        tracing::error!(target: "destroy_invalids", "{}", args);
    }
}

/// Severity of a plain log message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Debug
    Debug,
    /// Info
    Info,
    /// Warning
    Warn,
    /// Error
    Error,
}

/// An event captured by [`RecordingObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObservedEvent {
    /// See [`SanitizeObserver::was_called`].
    Called {
        /// Sanitizer function name
        function: String,
        /// Caller name
        origin: String,
        /// Debug rendering of the arguments
        args: String,
    },
    /// See [`SanitizeObserver::value_was_set`].
    ValueSet {
        /// Input the value was derived from
        name: String,
        /// Filtered value
        value: String,
        /// Caller name
        origin: String,
    },
    /// See [`SanitizeObserver::unexpected_error`].
    UnexpectedError {
        /// What was being attempted
        error_type: String,
        /// The offending item
        item: String,
    },
    /// A leveled log message.
    Message {
        /// Severity
        level: Level,
        /// Formatted text
        text: String,
    },
}

/// In-memory recorder for sanitizer events.
///
/// Events are stored in the order they are observed.
///
/// # Example
///
/// ```
/// use destroy_invalids::{ObservedEvent, RecordingObserver, Sanitizer, SanitizerConfig};
///
/// let recorder = RecordingObserver::new();
/// let sanitizer = Sanitizer::with_observer(SanitizerConfig::default(), &recorder);
///
/// sanitizer.anything("123", "a-z").expect("valid spec");
///
/// assert_eq!(recorder.warnings().len(), 1);
/// assert!(matches!(recorder.events()[0], ObservedEvent::Called { .. }));
/// ```
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: RefCell<Vec<ObservedEvent>>,
}

impl RecordingObserver {
    /// Creates a new empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all recorded events.
    pub fn events(&self) -> Vec<ObservedEvent> {
        self.events.borrow().clone()
    }

    /// Returns the text of every warning-level message.
    pub fn warnings(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ObservedEvent::Message {
                    level: Level::Warn,
                    text,
                } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    /// Returns the number of recorded events.
    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    /// Returns true if no events have been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Clears all recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    fn record(&self, event: ObservedEvent) {
        self.events.borrow_mut().push(event);
    }

    fn message(&self, level: Level, args: fmt::Arguments<'_>) {
        self.record(ObservedEvent::Message {
            level,
            text: args.to_string(),
        });
    }
}

impl SanitizeObserver for RecordingObserver {
    fn was_called(&self, function: &str, origin: &str, args: &dyn fmt::Debug) {
        self.record(ObservedEvent::Called {
            function: function.to_string(),
            origin: origin.to_string(),
            args: format!("{:?}", args),
        });
    }

    fn value_was_set(&self, name: &str, value: &str, origin: &str) {
        self.record(ObservedEvent::ValueSet {
            name: name.to_string(),
            value: value.to_string(),
            origin: origin.to_string(),
        });
    }

    fn unexpected_error(&self, error_type: &str, item: &str) {
        self.record(ObservedEvent::UnexpectedError {
            error_type: error_type.to_string(),
            item: item.to_string(),
        });
    }

    fn debug(&self, args: fmt::Arguments<'_>) {
        self.message(Level::Debug, args);
    }

    fn info(&self, args: fmt::Arguments<'_>) {
        self.message(Level::Info, args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        self.message(Level::Warn, args);
    }

    fn error(&self, args: fmt::Arguments<'_>) {
        self.message(Level::Error, args);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_starts_empty() {
        let recorder = RecordingObserver::new();
        assert!(recorder.is_empty());
        assert_eq!(recorder.len(), 0);
    }

    #[test]
    fn recorder_keeps_order() {
        let recorder = RecordingObserver::new();

        recorder.was_called("anything", "main", &("x", "a-z"));
        recorder.value_was_set("a b", "a_b", "main");
        recorder.unexpected_error("handling", "1.2.3");

        let events = recorder.events();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            ObservedEvent::Called {
                function: "anything".to_string(),
                origin: "main".to_string(),
                args: r#"("x", "a-z")"#.to_string(),
            }
        );
        assert!(matches!(events[1], ObservedEvent::ValueSet { .. }));
        assert!(matches!(events[2], ObservedEvent::UnexpectedError { .. }));
    }

    #[test]
    fn recorder_collects_warnings() {
        let recorder = RecordingObserver::new();

        recorder.info(format_args!("loaded"));
        recorder.warn(format_args!("value {} is empty", "x"));
        recorder.error(format_args!("boom"));

        assert_eq!(recorder.warnings(), vec!["value x is empty".to_string()]);
    }

    #[test]
    fn recorder_can_be_cleared() {
        let recorder = RecordingObserver::new();
        recorder.debug(format_args!("trace"));
        assert_eq!(recorder.len(), 1);

        recorder.clear();
        assert!(recorder.is_empty());
    }

    #[test]
    fn reference_forwards_to_observer() {
        let recorder = RecordingObserver::new();
        let by_ref = &recorder;

        by_ref.warn(format_args!("forwarded"));

        assert_eq!(recorder.warnings(), vec!["forwarded".to_string()]);
    }

    #[test]
    fn tracing_observer_does_not_panic_without_subscriber() {
        let observer = TracingObserver;
        observer.was_called("numeric_only", "tests", &"12a");
        observer.value_was_set("a", "a", "tests");
        observer.unexpected_error("handling", "1.2.3");
        observer.warn(format_args!("nothing listens"));
    }
}
