//! Bundler entry-point manifest.
//!
//! The site ships one HTML document per page and locale; the bundler consumes
//! this list, it is never executed in the browser. Keeping it out of the
//! wasm-only `web` module lets us unit-test the page inventory on the host.

use serde::Serialize;

/// Locale of the translated page set the site ships alongside the base one.
pub const SECONDARY_LOCALE: &str = "en";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Docs,
    Pricing,
    Contact,
}

impl Page {
    /// Bundler entry name for the base locale.
    pub fn entry_name(self) -> &'static str {
        match self {
            Page::Home => "main",
            Page::Docs => "docs",
            Page::Pricing => "pricing",
            Page::Contact => "contact",
        }
    }

    /// Source document, relative to the locale root.
    pub fn source_file(self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::Docs => "docs.html",
            Page::Pricing => "pricing.html",
            Page::Contact => "contact.html",
        }
    }

    pub fn all() -> &'static [Page] {
        &[Page::Home, Page::Docs, Page::Pricing, Page::Contact]
    }
}

/// One named bundler input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryPoint {
    pub name: String,
    pub source: String,
}

impl EntryPoint {
    fn base(page: Page) -> Self {
        Self {
            name: page.entry_name().to_string(),
            source: page.source_file().to_string(),
        }
    }

    fn localized(page: Page, locale: &str) -> Self {
        Self {
            name: format!("{locale}_{}", page.entry_name()),
            source: format!("{locale}/{}", page.source_file()),
        }
    }
}

/// Full entry list in declaration order: the base pages, then the secondary
/// locale's pages when one is shipped.
pub fn entry_points(secondary_locale: Option<&str>) -> Vec<EntryPoint> {
    let mut entries: Vec<EntryPoint> = Page::all().iter().copied().map(EntryPoint::base).collect();
    if let Some(locale) = secondary_locale {
        entries.extend(
            Page::all()
                .iter()
                .copied()
                .map(|page| EntryPoint::localized(page, locale)),
        );
    }
    entries
}

/// Serialized form for the build integration: a JSON array of
/// `{name, source}` records, in declaration order.
pub fn to_json(entries: &[EntryPoint]) -> Result<String, String> {
    serde_json::to_string_pretty(entries).map_err(|e| format!("serialize failed: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_inventory_is_stable() {
        let all = Page::all();
        assert_eq!(all.len(), 4);

        let mut names: Vec<&'static str> = all.iter().copied().map(Page::entry_name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 4);

        for page in all {
            assert!(!page.entry_name().trim().is_empty());
            assert!(page.source_file().ends_with(".html"));
        }
    }

    #[test]
    fn base_entries_match_the_site_layout() {
        let entries = entry_points(None);
        let pairs: Vec<(&str, &str)> = entries
            .iter()
            .map(|e| (e.name.as_str(), e.source.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("main", "index.html"),
                ("docs", "docs.html"),
                ("pricing", "pricing.html"),
                ("contact", "contact.html"),
            ]
        );
    }

    #[test]
    fn secondary_locale_doubles_the_set() {
        let entries = entry_points(Some(SECONDARY_LOCALE));
        assert_eq!(entries.len(), 8);

        let pairs: Vec<(&str, &str)> = entries
            .iter()
            .skip(4)
            .map(|e| (e.name.as_str(), e.source.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("en_main", "en/index.html"),
                ("en_docs", "en/docs.html"),
                ("en_pricing", "en/pricing.html"),
                ("en_contact", "en/contact.html"),
            ]
        );
    }

    #[test]
    fn entry_names_stay_unique_across_locales() {
        let entries = entry_points(Some(SECONDARY_LOCALE));
        let mut names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), entries.len());
    }

    #[test]
    fn json_form_is_an_ordered_array_of_records() {
        let json = to_json(&entry_points(Some("en"))).expect("manifest serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("manifest parses back");

        let array = value.as_array().expect("manifest is an array");
        assert_eq!(array.len(), 8);
        assert_eq!(array[0]["name"], "main");
        assert_eq!(array[0]["source"], "index.html");
        assert_eq!(array[7]["name"], "en_contact");
        assert_eq!(array[7]["source"], "en/contact.html");
    }
}
