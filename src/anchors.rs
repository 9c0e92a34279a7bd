//! Fragment-link parsing and target resolution, kept separate from the DOM
//! so both outcomes of a click are testable on the host.

/// Element identifier named by a fragment hyperlink, without the `#`.
///
/// Returns `Some("")` for a bare `#`; callers treat that as malformed.
pub fn fragment_id(href: &str) -> Option<&str> {
    href.strip_prefix('#')
}

/// Resolves a fragment hyperlink against an identifier lookup.
///
/// Malformed (`#`) and dangling links are errors; the caller surfaces them
/// instead of swallowing the click.
pub fn resolve<F>(href: &str, mut exists: F) -> Result<&str, String>
where
    F: FnMut(&str) -> bool,
{
    let Some(id) = fragment_id(href) else {
        return Err(format!("anchor: not a fragment link: {href:?}"));
    };
    if id.is_empty() {
        return Err(format!("anchor: malformed fragment link: {href:?}"));
    }
    if !exists(id) {
        return Err(format!("anchor: no element for {href:?}"));
    }
    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_id_strips_the_hash() {
        assert_eq!(fragment_id("#features"), Some("features"));
        assert_eq!(fragment_id("#"), Some(""));
        assert_eq!(fragment_id("/docs.html"), None);
        assert_eq!(fragment_id(""), None);
    }

    #[test]
    fn resolve_finds_a_known_target() {
        let id = resolve("#pricing-table", |id| id == "pricing-table");
        assert_eq!(id, Ok("pricing-table"));
    }

    #[test]
    fn resolve_rejects_a_dangling_link() {
        let err = resolve("#removed-section", |_| false).unwrap_err();
        assert!(err.contains("no element"));
        assert!(err.contains("#removed-section"));
    }

    #[test]
    fn resolve_rejects_a_bare_hash() {
        let err = resolve("#", |_| true).unwrap_err();
        assert!(err.contains("malformed"));
    }

    #[test]
    fn resolve_rejects_non_fragment_hrefs() {
        assert!(resolve("https://example.com/#x", |_| true).is_err());
        assert!(resolve("docs.html", |_| true).is_err());
    }
}
