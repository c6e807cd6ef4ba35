//! Dark-only theme compliance. Hits are advisory.

use std::path::Path;

use super::regexes::light_theme_rules;
use crate::types::Finding;

/// One Warning per matching rule; a rule hit several times still warns once.
pub fn check_light_theme(content: &str, file: &Path) -> Vec<Finding> {
    light_theme_rules()
        .iter()
        .filter(|rule| rule.regex.is_match(content))
        .map(|rule| {
            Finding::Warning(format!(
                "Potential light theme color in {}: {}",
                file.display(),
                rule.description
            ))
        })
        .collect()
}
