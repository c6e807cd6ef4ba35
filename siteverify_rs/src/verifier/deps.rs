//! External dependency check. The suite must be fully self-hosted, so any
//! off-site URL or CDN mention is an Error.

use std::path::Path;

use super::regexes::{regex_absolute_url, third_party_asset_rules};
use crate::config::DepsConfig;
use crate::types::Finding;

pub struct DependencyChecker {
    allowed_hosts: Vec<String>,
    url_rule: String,
}

impl DependencyChecker {
    pub fn new(config: &DepsConfig) -> Self {
        let allowed_hosts: Vec<String> = config
            .allowed_hosts
            .iter()
            .map(|h| h.to_ascii_lowercase())
            .collect();
        let escaped: Vec<String> = allowed_hosts.iter().map(|h| regex::escape(h)).collect();
        Self {
            url_rule: format!(r"https?:\/\/(?!{})", escaped.join("|")),
            allowed_hosts,
        }
    }

    /// True if some absolute URL in `content` does not start with an allowed host.
    fn has_foreign_url(&self, content: &str) -> bool {
        regex_absolute_url().find_iter(content).any(|m| {
            let rest = &content[m.end()..];
            !self.allowed_hosts.iter().any(|host| {
                rest.get(..host.len())
                    .is_some_and(|head| head.eq_ignore_ascii_case(host))
            })
        })
    }

    pub fn check(&self, content: &str, file: &Path) -> Vec<Finding> {
        let mut hits: Vec<&str> = Vec::new();
        if self.has_foreign_url(content) {
            hits.push(&self.url_rule);
        }
        hits.extend(
            third_party_asset_rules()
                .iter()
                .filter(|rule| rule.regex.is_match(content))
                .map(|rule| rule.description),
        );

        hits.into_iter()
            .map(|rule| {
                Finding::Error(format!(
                    "External dependency found in {}: {}",
                    file.display(),
                    rule
                ))
            })
            .collect()
    }
}
