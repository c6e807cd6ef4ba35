//! Reference extraction.
//!
//! A plain left-to-right attribute scan, not an HTML parse: attribute text
//! inside comments, scripts or `data-src=` still counts. All `href` matches
//! come before all `src` matches.

use std::path::Path;

use super::regexes::{regex_href_attr, regex_src_attr};
use crate::types::{RefKind, Reference};

/// Lazily yield every `href="..."` / `src="..."` reference in `content`.
pub fn extract_references<'a>(
    content: &'a str,
    source_file: &'a Path,
) -> impl Iterator<Item = Reference> + 'a {
    let scan = move |kind: RefKind| {
        let re = match kind {
            RefKind::Href => regex_href_attr(),
            RefKind::Src => regex_src_attr(),
        };
        re.captures_iter(content).filter_map(move |caps| {
            let whole = caps.get(0)?;
            let target = caps.get(1)?;
            Some(Reference {
                target: target.as_str().to_string(),
                source_file: source_file.to_path_buf(),
                line: line_number(content, whole.start()),
                kind,
            })
        })
    };
    scan(RefKind::Href).chain(scan(RefKind::Src))
}

/// 1-based line containing byte offset `offset`.
pub fn line_number(content: &str, offset: usize) -> usize {
    content.as_bytes()[..offset.min(content.len())]
        .iter()
        .filter(|&&b| b == b'\n')
        .count()
        + 1
}
