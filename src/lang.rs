use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Error returned when the report language cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    /// The language was left at its unset `"null"` value
    Unspecified,
    /// A language code other than `en` or `es`
    UnknownCode(String),
    /// A command-line argument other than `-EN` or `-ES`
    UnrecognizedArgument(String),
}

impl fmt::Display for LanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LanguageError::Unspecified => write!(
                f,
                "language setting is not specified or is set to 'null'; please provide a valid language setting"
            ),
            LanguageError::UnknownCode(code) => write!(f, "unknown language code '{}'", code),
            LanguageError::UnrecognizedArgument(arg) => {
                write!(f, "unrecognized argument '{}' (expected -EN or -ES)", arg)
            }
        }
    }
}

impl std::error::Error for LanguageError {}

/// Language of the printed report.
///
/// # Examples
///
/// ```
/// use destroy_invalids::Language;
///
/// assert_eq!(Language::from_args(Vec::<String>::new()).unwrap(), Language::English);
/// assert_eq!(Language::from_args(["-ES"]).unwrap(), Language::Spanish);
/// assert_eq!("es".parse::<Language>().unwrap().code(), "es");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English (`-EN`, the default)
    #[default]
    English,
    /// Spanish (`-ES`)
    Spanish,
}

impl Language {
    /// Switch selecting English.
    pub const ENGLISH_FLAG: &'static str = "-EN";
    /// Switch selecting Spanish.
    pub const SPANISH_FLAG: &'static str = "-ES";

    /// Resolves the language from command-line arguments (program name excluded).
    ///
    /// `-EN` wins when both switches are present; neither means English.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageError::UnrecognizedArgument`] for any other argument.
    pub fn from_args<I, S>(args: I) -> Result<Self, LanguageError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut english = false;
        let mut spanish = false;

        for arg in args {
            match arg.as_ref() {
                Self::ENGLISH_FLAG => english = true,
                Self::SPANISH_FLAG => spanish = true,
                other => return Err(LanguageError::UnrecognizedArgument(other.to_string())),
            }
        }

        let language = if english || !spanish {
            Language::English
        } else {
            Language::Spanish
        };
        tracing::debug!(language = %language, "resolved report language");
        Ok(language)
    }

    /// Resolves a two-letter language code, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`LanguageError::Unspecified`] for `"null"` and
    /// [`LanguageError::UnknownCode`] for anything else unrecognized.
    pub fn from_code(code: &str) -> Result<Self, LanguageError> {
        match code.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::English),
            "es" => Ok(Language::Spanish),
            "null" => Err(LanguageError::Unspecified),
            _ => Err(LanguageError::UnknownCode(code.to_string())),
        }
    }

    /// Returns the two-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// Returns the path of this language's template inside `dir`.
    pub fn template_path(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(format!("{}.txt", self.code()))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = LanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
