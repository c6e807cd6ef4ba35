use std::sync::OnceLock;

use regex::Regex;

fn regex(pattern: &str) -> Regex {
    Regex::new(pattern).expect("valid regex literal")
}

/// A fixed content rule: the pattern as shown in reports plus its compiled form.
pub(crate) struct Rule {
    pub description: &'static str,
    pub regex: Regex,
}

fn rule(description: &'static str) -> Rule {
    Rule {
        description,
        regex: regex(&format!("(?i){description}")),
    }
}

pub(crate) fn regex_href_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"href=["']([^"']+)["']"#))
}

pub(crate) fn regex_src_attr() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r#"src=["']([^"']+)["']"#))
}

pub(crate) fn light_theme_rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES
        .get_or_init(|| {
            vec![
                rule(r"color:\s*white"),
                rule(r"background-color:\s*white"),
                rule(r"background:\s*white"),
                rule(r"color:\s*#fff"),
                rule(r"background-color:\s*#fff"),
                rule(r"background:\s*#fff"),
            ]
        })
        .as_slice()
}

/// Start of an absolute URL. The host allow-list is applied to the text that
/// follows, since `regex` has no lookahead.
pub(crate) fn regex_absolute_url() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| regex(r"(?i)https?://"))
}

pub(crate) fn third_party_asset_rules() -> &'static [Rule] {
    static RULES: OnceLock<Vec<Rule>> = OnceLock::new();
    RULES
        .get_or_init(|| {
            vec![
                rule(r"cdn\."),
                rule(r"googleapis\.com"),
                rule(r"bootstrapcdn\.com"),
                rule(r"jquery\.com"),
                rule(r"cdnjs\.com"),
            ]
        })
        .as_slice()
}
