//! Localized report rendering.
//!
//! A template is plain text with `<ans.1>`, `<ans.2>` and `<ans.3>`
//! placeholders, one file per [`Language`] in a template directory.

use std::fs;
use std::path::Path;

use crate::{Error, Language};

/// Placeholder for the number of films featuring arid planets.
pub const ARID_FILMS_PLACEHOLDER: &str = "<ans.1>";
/// Placeholder for the species count.
pub const SPECIES_COUNT_PLACEHOLDER: &str = "<ans.2>";
/// Placeholder for the smallest starship's name.
pub const STARSHIP_PLACEHOLDER: &str = "<ans.3>";

/// The computed answers of a report.
///
/// # Examples
///
/// ```
/// use destroy_invalids::Report;
///
/// let report = Report {
///     arid_films: 6,
///     wookiee_count: 2,
///     smallest_starship: Some("Millennium Falcon".to_string()),
/// };
///
/// let text = report.render("Films: <ans.1>\nWookiees: <ans.2>\nShip: <ans.3>");
/// assert_eq!(text, "Films: 6\nWookiees: 2\nShip: Millennium Falcon");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    /// Distinct films featuring a planet with an arid climate
    pub arid_films: usize,
    /// Characters of the counted species
    pub wookiee_count: usize,
    /// Smallest starship in the selected film, if any was found
    pub smallest_starship: Option<String>,
}

impl Report {
    /// Substitutes every placeholder in `template`.
    ///
    /// A missing starship renders as `None`.
    pub fn render(&self, template: &str) -> String {
        let starship = self.smallest_starship.as_deref().unwrap_or("None");
        let rendered = template
            .replace(ARID_FILMS_PLACEHOLDER, &self.arid_films.to_string())
            .replace(SPECIES_COUNT_PLACEHOLDER, &self.wookiee_count.to_string())
            .replace(STARSHIP_PLACEHOLDER, starship);
        tracing::debug!(report = %rendered, "report rendered");
        rendered
    }
}

/// Loads the template for `language` from `dir`.
///
/// # Errors
///
/// Returns [`Error::Io`] naming the template path if it cannot be read.
pub fn load_template(language: Language, dir: impl AsRef<Path>) -> Result<String, Error> {
    let path = language.template_path(dir);
    match fs::read_to_string(&path) {
        Ok(content) => {
            tracing::debug!(path = %path.display(), "template loaded");
            Ok(content)
        }
        Err(source) => {
            tracing::error!(path = %path.display(), error = %source, "template not found");
            Err(Error::Io { path, source })
        }
    }
}
