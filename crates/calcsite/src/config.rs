// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Site configuration — optionally parsed from `site.yaml` in the site root.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Site-wide settings for one generation run.
///
/// Every YAML key is optional; omitted keys keep the built-in defaults.
///
/// ```yaml
/// domain: "https://calculatorchoice.com"
/// brand: "CalculatorChoice"
/// default_priority: 0.8
/// priorities:
///   molarity-calculator: 0.9
///   ohms-law: 0.8
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding the catalog and receiving all output.
    /// Set by the caller, never read from YAML.
    #[serde(skip)]
    pub root: PathBuf,
    /// Absolute site origin without trailing slash
    pub domain: String,
    /// Site name used in page titles and the footer
    pub brand: String,
    /// Catalog file name, relative to `root`
    pub catalog: String,
    /// Directory under `root` that holds one folder per calculator
    pub pages_dir: String,
    /// Sitemap file name, relative to `root`
    pub sitemap: String,
    /// Stylesheet URL referenced by every page
    pub stylesheet: String,
    /// Client module exporting `calculators`
    pub client_module: String,
    /// Social preview image path, appended to `domain`
    pub og_image: String,
    pub theme_color: String,
    pub home_priority: f64,
    pub default_priority: f64,
    /// Slug → sitemap priority
    pub priorities: BTreeMap<String, f64>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let priorities = [
            ("molarity-calculator", 0.9),
            ("dilution-calculator", 0.9),
            ("molality-calculator", 0.85),
            ("quadratic-calculator", 0.85),
            ("ohms-law", 0.8),
        ]
        .into_iter()
        .map(|(slug, p)| (slug.to_string(), p))
        .collect();

        Self {
            root: PathBuf::from("."),
            domain: "https://calculatorchoice.com".to_string(),
            brand: "CalculatorChoice".to_string(),
            catalog: "calculators.json".to_string(),
            pages_dir: "calculators".to_string(),
            sitemap: "sitemap.xml".to_string(),
            stylesheet: "/style.css".to_string(),
            client_module: "/calc-lib.js".to_string(),
            og_image: "/og-default.png".to_string(),
            theme_color: "#0b0b0d".to_string(),
            home_priority: 1.0,
            default_priority: 0.8,
            priorities,
        }
    }
}

impl SiteConfig {
    /// Defaults rooted at `root`.
    pub fn with_root<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            ..Self::default()
        }
    }

    /// Parse YAML overrides on top of the defaults.
    pub fn from_yaml_str<P: Into<PathBuf>>(root: P, yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty map
        let mut config: SiteConfig = if yaml.trim().is_empty() {
            SiteConfig::default()
        } else {
            serde_yaml_ng::from_str(yaml)?
        };
        config.root = root.into();
        config.domain = config.domain.trim_end_matches('/').to_string();
        Ok(config)
    }

    /// Load `path` as YAML overrides for a site rooted at `root`.
    pub fn load<P: Into<PathBuf>>(root: P, path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_yaml_str(root, &yaml)
    }

    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(&self.catalog)
    }

    pub fn sitemap_path(&self) -> PathBuf {
        self.root.join(&self.sitemap)
    }

    /// `<root>/<pages_dir>/<slug>/index.html`
    pub fn page_path(&self, slug: &str) -> PathBuf {
        self.root.join(&self.pages_dir).join(slug).join("index.html")
    }

    pub fn home_url(&self) -> String {
        format!("{}/", self.domain)
    }

    pub fn page_url(&self, slug: &str) -> String {
        format!("{}/{}/{}/", self.domain, self.pages_dir, slug)
    }
}
