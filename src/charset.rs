//! Allowed-character specifications.
//!
//! A [`CharSet`] is parsed from the same shorthand a regex character class
//! accepts between its brackets (`a-zA-Z`, `\-`, `\d`), but membership is a
//! plain range lookup.

use std::fmt;

/// Error returned when an allowed-character specification cannot be parsed.
///
/// # Examples
///
/// ```
/// use destroy_invalids::{CharSet, CharSetErrorKind};
///
/// let err = CharSet::parse("z-a").unwrap_err();
/// assert_eq!(err.kind(), CharSetErrorKind::InvalidRange);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharSetError {
    kind: CharSetErrorKind,
    message: String,
}

impl CharSetError {
    /// Creates a new character set error.
    pub fn new(kind: CharSetErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> CharSetErrorKind {
        self.kind
    }

    /// Returns the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CharSetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid character set ({}): {}", self.kind, self.message)
    }
}

impl std::error::Error for CharSetError {}

/// Kind of character set error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharSetErrorKind {
    /// A range whose start is greater than its end, or whose endpoint is a class.
    InvalidRange,
    /// An escape sequence that has no meaning (`\q`, `\1`).
    BadEscape,
    /// A `\` with nothing after it.
    DanglingEscape,
    /// An unescaped `]`.
    UnbalancedBracket,
}

impl fmt::Display for CharSetErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange => write!(f, "invalid range"),
            Self::BadEscape => write!(f, "bad escape"),
            Self::DanglingEscape => write!(f, "dangling escape"),
            Self::UnbalancedBracket => write!(f, "unbalanced bracket"),
        }
    }
}

/// One parsed element of a specification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Atom {
    Char(char),
    Class(Class),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Digit,
    Word,
    Space,
}

impl Class {
    fn matches(self, c: char) -> bool {
        match self {
            Class::Digit => c.is_numeric(),
            Class::Word => c.is_alphanumeric() || c == '_',
            Class::Space => c.is_whitespace(),
        }
    }
}

/// A set of allowed characters.
///
/// # Examples
///
/// ```
/// use destroy_invalids::CharSet;
///
/// let set = CharSet::parse("a-f0-9_").expect("valid spec");
/// assert!(set.contains('c'));
/// assert!(set.contains('_'));
/// assert!(!set.contains('g'));
///
/// // Ranges and escapes behave as inside a regex class
/// let set = CharSet::parse(r"\-.").expect("valid spec");
/// assert!(set.contains('-'));
/// assert!(set.contains('.'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    source: String,
    ranges: Vec<(char, char)>,
    classes: Vec<Class>,
}

impl CharSet {
    /// Creates a set that matches nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses an allowed-character specification.
    ///
    /// # Errors
    ///
    /// Returns [`CharSetError`] for reversed ranges, unknown escapes, a
    /// trailing `\`, or an unescaped `]`.
    pub fn parse(spec: &str) -> Result<Self, CharSetError> {
        let atoms = tokenize(spec)?;
        let mut set = Self {
            source: spec.to_string(),
            ..Self::empty()
        };
        let mut i = 0;

        while i < atoms.len() {
            let (atom, _) = atoms[i];
            let dash_follows = matches!(atoms.get(i + 1), Some((Atom::Char('-'), false)));

            if dash_follows && i + 2 < atoms.len() {
                let (end, _) = atoms[i + 2];
                match (atom, end) {
                    (Atom::Char(lo), Atom::Char(hi)) if lo <= hi => set.ranges.push((lo, hi)),
                    (Atom::Char(lo), Atom::Char(hi)) => {
                        return Err(CharSetError::new(
                            CharSetErrorKind::InvalidRange,
                            format!("range '{}-{}' is reversed", lo, hi),
                        ));
                    }
                    _ => {
                        return Err(CharSetError::new(
                            CharSetErrorKind::InvalidRange,
                            "a character class cannot be a range endpoint",
                        ));
                    }
                }
                i += 3;
                continue;
            }

            match atom {
                Atom::Char(c) => set.ranges.push((c, c)),
                Atom::Class(class) => set.classes.push(class),
            }
            i += 1;
        }

        Ok(set)
    }

    /// Returns the specification this set was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns `true` if the set matches nothing.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty() && self.classes.is_empty()
    }

    /// Returns `true` if `c` is in the set.
    pub fn contains(&self, c: char) -> bool {
        self.ranges.iter().any(|&(lo, hi)| lo <= c && c <= hi)
            || self.classes.iter().any(|class| class.matches(c))
    }

    /// Returns `true` if `c`, its lowercase or its uppercase form is in the set.
    pub fn contains_ignore_case(&self, c: char) -> bool {
        self.contains(c)
            || c.to_lowercase().any(|l| self.contains(l))
            || c.to_uppercase().any(|u| self.contains(u))
    }
}

impl std::str::FromStr for CharSet {
    type Err = CharSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Splits a specification into atoms. The flag marks escaped characters,
/// which never act as a range dash.
fn tokenize(spec: &str) -> Result<Vec<(Atom, bool)>, CharSetError> {
    let mut atoms = Vec::with_capacity(spec.len());
    let mut chars = spec.chars();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                let escaped = chars.next().ok_or_else(|| {
                    CharSetError::new(
                        CharSetErrorKind::DanglingEscape,
                        "specification ends with '\\'",
                    )
                })?;
                atoms.push((unescape(escaped)?, true));
            }
            ']' => {
                return Err(CharSetError::new(
                    CharSetErrorKind::UnbalancedBracket,
                    "unescaped ']' in specification",
                ));
            }
            c => atoms.push((Atom::Char(c), false)),
        }
    }

    Ok(atoms)
}

fn unescape(c: char) -> Result<Atom, CharSetError> {
    let atom = match c {
        'n' => Atom::Char('\n'),
        't' => Atom::Char('\t'),
        'r' => Atom::Char('\r'),
        'd' => Atom::Class(Class::Digit),
        'w' => Atom::Class(Class::Word),
        's' => Atom::Class(Class::Space),
        c if c.is_ascii_alphanumeric() => {
            return Err(CharSetError::new(
                CharSetErrorKind::BadEscape,
                format!("unknown escape '\\{}'", c),
            ));
        }
        c => Atom::Char(c),
    };
    Ok(atom)
}
