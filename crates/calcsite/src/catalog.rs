// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Calculator catalog — the JSON list of calculator definitions.
//!
//! ```json
//! [{
//!   "slug": "molarity-calculator",
//!   "name": "Molarity Calculator",
//!   "description": "Compute molarity from moles and volume.",
//!   "canonical": "https://calculatorchoice.com/calculators/molarity-calculator/",
//!   "category": "Chemistry",
//!   "formula": "M = n / V",
//!   "faq": [{"q": "What is molarity?", "a": "Moles of solute per liter."}],
//!   "howto": ["Enter moles", "Enter volume"],
//!   "ui": {
//!     "computeKey": "molarity",
//!     "fields": [{"id": "moles", "label": "Moles (mol)", "kind": "number"}]
//!   }
//! }]
//! ```

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One calculator definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorRecord {
    pub slug: String,
    pub name: String,
    pub description: String,
    pub canonical: String,
    pub category: String,
    #[serde(default)]
    pub formula: Option<String>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
    /// How-to steps, plain text
    #[serde(default)]
    pub howto: Vec<String>,
    pub ui: UiSchema,
    /// Sitemap weight for this page; takes precedence over the site table
    #[serde(default)]
    pub priority: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqEntry {
    #[serde(rename = "q")]
    pub question: String,
    #[serde(rename = "a")]
    pub answer: String,
}

/// Form layout and the client-side routine that computes the result.
///
/// Both members are optional at the serde level so the loader can report
/// which one is missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UiSchema {
    #[serde(rename = "computeKey", default)]
    pub compute_key: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<FieldSpec>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    /// Conditional visibility rule, `otherFieldId=value`
    #[serde(rename = "showIf", default, skip_serializing_if = "Option::is_none")]
    pub show_if: Option<String>,
    /// Choices for select and radio fields
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
}

/// Input widget kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Number,
    Select,
    Radio,
    /// Any kind this generator does not know; renders nothing
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub checked: bool,
}

/// Ordered list of calculator records, as read from the catalog file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<CalculatorRecord>,
}

impl Catalog {
    pub fn new(records: Vec<CalculatorRecord>) -> Self {
        Self { records }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_slice(json.as_bytes())
    }

    /// Parse catalog JSON and check that every record carries its UI schema.
    pub fn from_slice(json: &[u8]) -> Result<Self> {
        let raw: Vec<serde_json::Value> = serde_json::from_slice(json)?;
        let records = raw
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value::<CalculatorRecord>(value)
                    .map_err(|source| Error::InvalidRecord { index, source })
            })
            .collect::<Result<Vec<_>>>()?;
        for (index, record) in records.iter().enumerate() {
            if record.ui.compute_key.is_none() {
                return Err(Error::MissingField {
                    index,
                    field: "ui.computeKey",
                });
            }
            if record.ui.fields.is_none() {
                return Err(Error::MissingField {
                    index,
                    field: "ui.fields",
                });
            }
        }
        Ok(Self { records })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;
        let catalog = Self::from_slice(&bytes)?;
        log::debug!("loaded {} calculators from {:?}", catalog.len(), path);
        Ok(catalog)
    }

    pub fn records(&self) -> &[CalculatorRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CalculatorRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a CalculatorRecord;
    type IntoIter = std::slice::Iter<'a, CalculatorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
