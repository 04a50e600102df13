// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Site assembly: render every calculator page, write the pages, then write
//! the sitemap.
//!
//! 1. Renders every page into memory, so a render failure writes nothing
//! 2. Writes `<root>/<pages_dir>/<slug>/index.html` per calculator
//! 3. Writes `<root>/<sitemap>`
//!
//! Any failure aborts the run.

use crate::catalog::Catalog;
use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::render;
use crate::sitemap;
use chrono::NaiveDate;
use log::{debug, info, warn};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Files produced by one run.
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Page files in catalog order
    pub pages: Vec<PathBuf>,
    pub sitemap: PathBuf,
}

/// Load the catalog named by `config` and generate the site.
pub fn build(config: &SiteConfig, run_date: NaiveDate) -> Result<GenerationReport> {
    let catalog = Catalog::load(&config.catalog_path())?;
    generate_site(&catalog, config, run_date)
}

/// Generate every page and the sitemap for `catalog`.
pub fn generate_site(
    catalog: &Catalog,
    config: &SiteConfig,
    run_date: NaiveDate,
) -> Result<GenerationReport> {
    warn_duplicate_slugs(catalog);

    let pages = catalog
        .iter()
        .map(|record| -> Result<(PathBuf, String)> {
            let html = render::render_page(record, config)?;
            Ok((config.page_path(&record.slug), html))
        })
        .collect::<Result<Vec<_>>>()?;
    info!("Rendered {} calculator pages", pages.len());

    let mut report = GenerationReport::default();
    for (path, html) in &pages {
        write_file(path, html)?;
        debug!("wrote {:?}", path);
        report.pages.push(path.clone());
    }

    let entries = sitemap::build_entries(catalog, config, run_date);
    let sitemap_path = config.sitemap_path();
    write_file(&sitemap_path, &sitemap::render_sitemap(&entries))?;
    debug!("wrote {:?} with {} urls", sitemap_path, entries.len());
    report.sitemap = sitemap_path;

    info!(
        "Site generation complete: {} pages and {:?}",
        report.pages.len(),
        report.sitemap
    );
    Ok(report)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    std::fs::write(path, contents.as_bytes()).map_err(|e| Error::io(path, e))
}

fn warn_duplicate_slugs(catalog: &Catalog) {
    let mut seen = BTreeSet::new();
    for record in catalog {
        if !seen.insert(record.slug.as_str()) {
            warn!("slug '{}' appears more than once; the last page wins", record.slug);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CalculatorRecord, UiSchema};
    use tempfile::TempDir;

    fn record(slug: &str, compute_key: Option<&str>) -> CalculatorRecord {
        CalculatorRecord {
            slug: slug.to_string(),
            name: slug.to_string(),
            description: "d".to_string(),
            canonical: format!("https://calculatorchoice.com/calculators/{slug}/"),
            category: "Misc".to_string(),
            formula: None,
            faq: vec![],
            howto: vec![],
            ui: UiSchema {
                compute_key: compute_key.map(str::to_string),
                fields: Some(vec![]),
            },
            priority: None,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 2).expect("valid date")
    }

    #[test]
    fn writes_pages_and_sitemap() {
        let tmp = TempDir::new().expect("tempdir");
        let config = SiteConfig::with_root(tmp.path());
        let catalog = Catalog::new(vec![record("a", Some("a")), record("b", Some("b"))]);

        let report = generate_site(&catalog, &config, date()).expect("generate");
        assert_eq!(report.pages.len(), 2);
        assert_eq!(report.pages[0], tmp.path().join("calculators/a/index.html"));
        assert!(report.pages.iter().all(|p| p.is_file()));
        assert_eq!(report.sitemap, tmp.path().join("sitemap.xml"));

        let xml = std::fs::read_to_string(&report.sitemap).expect("read sitemap");
        assert_eq!(xml.matches("<url>").count(), 3);
    }

    #[test]
    fn render_error_writes_nothing() {
        let tmp = TempDir::new().expect("tempdir");
        let config = SiteConfig::with_root(tmp.path());
        let catalog = Catalog::new(vec![record("good", Some("g")), record("bad", None)]);

        let err = generate_site(&catalog, &config, date()).expect_err("bad record");
        assert!(matches!(err, Error::Render { ref slug, .. } if slug == "bad"));
        assert!(!tmp.path().join("calculators").exists());
        assert!(!tmp.path().join("sitemap.xml").exists());
    }

    #[test]
    fn unwritable_root_is_io_error() {
        let tmp = TempDir::new().expect("tempdir");
        let blocker = tmp.path().join("calculators");
        std::fs::write(&blocker, "not a directory").expect("write blocker");

        let config = SiteConfig::with_root(tmp.path());
        let catalog = Catalog::new(vec![record("a", Some("a"))]);
        let err = generate_site(&catalog, &config, date()).expect_err("blocked");
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn build_reads_catalog_from_root() {
        let tmp = TempDir::new().expect("tempdir");
        let catalog = serde_json::to_string(&vec![record("ohms-law", Some("ohms"))])
            .expect("serialize catalog");
        std::fs::write(tmp.path().join("calculators.json"), catalog).expect("write catalog");

        let report = build(&SiteConfig::with_root(tmp.path()), date()).expect("build");
        assert_eq!(report.pages, vec![tmp.path().join("calculators/ohms-law/index.html")]);
    }
}
