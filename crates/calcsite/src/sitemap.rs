// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! `sitemap.xml` for the home page and every calculator page.

use crate::catalog::{Catalog, CalculatorRecord};
use crate::config::SiteConfig;
use chrono::NaiveDate;
use maud::{PreEscaped, html};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// One `<url>` element.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub priority: f64,
}

/// Home page first, then calculators in catalog order, all stamped `lastmod`.
pub fn build_entries(catalog: &Catalog, config: &SiteConfig, lastmod: NaiveDate) -> Vec<SitemapEntry> {
    let home = SitemapEntry {
        loc: config.home_url(),
        lastmod,
        priority: config.home_priority,
    };
    std::iter::once(home)
        .chain(catalog.iter().map(|record| SitemapEntry {
            loc: config.page_url(&record.slug),
            lastmod,
            priority: priority_for(record, config),
        }))
        .collect()
}

/// Record's own priority, else the configured table, else the default.
pub fn priority_for(record: &CalculatorRecord, config: &SiteConfig) -> f64 {
    record
        .priority
        .or_else(|| config.priorities.get(&record.slug).copied())
        .unwrap_or(config.default_priority)
}

/// Clamp to 0.0–1.0 and print with one or two decimals: `1.0`, `0.9`, `0.85`.
pub fn format_priority(priority: f64) -> String {
    let clamped = if priority.is_nan() {
        0.0
    } else {
        priority.clamp(0.0, 1.0)
    };
    let mut text = format!("{:.2}", clamped);
    while text.ends_with('0') && !text.ends_with(".0") {
        text.pop();
    }
    text
}

/// Serialize entries as a sitemap document. Values are XML-escaped.
pub fn render_sitemap(entries: &[SitemapEntry]) -> String {
    let body = html! {
        urlset xmlns=(SITEMAP_NS) {
            @for entry in entries {
                (PreEscaped("\n  "))
                url {
                    loc { (entry.loc) }
                    lastmod { (entry.lastmod.format("%Y-%m-%d").to_string()) }
                    priority { (format_priority(entry.priority)) }
                }
            }
            (PreEscaped("\n"))
        }
    };
    format!("{}{}\n", XML_DECLARATION, body.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::UiSchema;

    fn record(slug: &str) -> CalculatorRecord {
        CalculatorRecord {
            slug: slug.to_string(),
            name: slug.to_string(),
            description: String::new(),
            canonical: String::new(),
            category: "Misc".to_string(),
            formula: None,
            faq: vec![],
            howto: vec![],
            ui: UiSchema::default(),
            priority: None,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).expect("valid date")
    }

    #[test]
    fn priority_table_and_default() {
        let config = SiteConfig::default();
        assert_eq!(priority_for(&record("molarity-calculator"), &config), 0.9);
        assert_eq!(priority_for(&record("quadratic-calculator"), &config), 0.85);
        assert_eq!(priority_for(&record("tip-calculator"), &config), 0.8);
    }

    #[test]
    fn record_priority_wins() {
        let mut rec = record("molarity-calculator");
        rec.priority = Some(0.3);
        assert_eq!(priority_for(&rec, &SiteConfig::default()), 0.3);
    }

    #[test]
    fn entries_start_with_home() {
        let catalog = Catalog::new(vec![record("ohms-law"), record("tip-calculator")]);
        let mut config = SiteConfig::default();
        config.default_priority = 0.5;
        let entries = build_entries(&catalog, &config, date());

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].loc, "https://calculatorchoice.com/");
        assert_eq!(entries[0].priority, 1.0);
        assert_eq!(entries[1].loc, "https://calculatorchoice.com/calculators/ohms-law/");
        assert_eq!(entries[1].priority, 0.8);
        assert_eq!(entries[2].priority, 0.5);
        assert!(entries.iter().all(|e| e.lastmod == date()));
    }

    #[test]
    fn priority_formatting() {
        assert_eq!(format_priority(1.0), "1.0");
        assert_eq!(format_priority(0.9), "0.9");
        assert_eq!(format_priority(0.85), "0.85");
        assert_eq!(format_priority(0.0), "0.0");
        assert_eq!(format_priority(1.7), "1.0");
        assert_eq!(format_priority(-0.2), "0.0");
        assert_eq!(format_priority(f64::NAN), "0.0");
    }

    #[test]
    fn render_document() {
        let catalog = Catalog::new(vec![record("molarity-calculator")]);
        let entries = build_entries(&catalog, &SiteConfig::default(), date());
        let xml = render_sitemap(&entries);

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns="));
        assert_eq!(xml.matches("<url>").count(), 2);
        assert!(xml.contains(
            "<url><loc>https://calculatorchoice.com/</loc><lastmod>2025-03-14</lastmod><priority>1.0</priority></url>"
        ));
        assert!(xml.contains(
            "<loc>https://calculatorchoice.com/calculators/molarity-calculator/</loc>\
             <lastmod>2025-03-14</lastmod><priority>0.9</priority>"
        ));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn locations_are_escaped() {
        let entries = vec![SitemapEntry {
            loc: "https://example.org/?a=1&b=2".to_string(),
            lastmod: date(),
            priority: 0.8,
        }];
        let xml = render_sitemap(&entries);
        assert!(xml.contains("<loc>https://example.org/?a=1&amp;b=2</loc>"));
    }
}
