// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! # Calcsite — static site generator for calculator pages
//!
//! Reads a JSON catalog of calculator definitions and writes one
//! self-contained HTML page per calculator plus `sitemap.xml`. Pages are laid
//! out with Maud and carry schema.org JSON-LD and a small module script that
//! hands form values to the shared client-side `calculators` table.
//!
//! ## Usage
//!
//! ```bash
//! calcsite build --root ./public
//! ```

pub mod catalog;
pub mod client;
mod config;
mod error;
pub mod fields;
pub mod jsonld;
mod render;
pub mod site;
pub mod sitemap;

pub use catalog::{CalculatorRecord, Catalog, FieldKind, FieldSpec};
pub use config::SiteConfig;
pub use error::{Error, Result};
pub use render::render_page;
pub use site::{GenerationReport, build, generate_site};
