// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Maud layout for calculator pages.
//!
//! One record in, one complete HTML document out. Output depends only on the
//! record and the site config, so re-rendering is byte-identical.

use crate::catalog::{CalculatorRecord, FieldSpec};
use crate::client;
use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::fields;
use crate::jsonld;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Render the page for `record`.
///
/// Fails only when the record has no compute key or no field list.
pub fn render_page(record: &CalculatorRecord, config: &SiteConfig) -> Result<String> {
    let compute_key = match record.ui.compute_key.as_deref() {
        Some(key) if !key.trim().is_empty() => key,
        Some(_) => return Err(Error::render(&record.slug, "ui.computeKey is empty")),
        None => return Err(Error::render(&record.slug, "ui.computeKey is missing")),
    };
    let fields = record
        .ui
        .fields
        .as_deref()
        .ok_or_else(|| Error::render(&record.slug, "ui.fields is missing"))?;

    let graph = jsonld::build_graph(record, config);
    let ctx = PageContext {
        record,
        config,
        fields,
        structured_data: jsonld::to_script_json(&graph),
        script: client::module_script(&config.client_module, compute_key),
    };
    Ok(calculator_layout(&ctx).into_string())
}

struct PageContext<'a> {
    record: &'a CalculatorRecord,
    config: &'a SiteConfig,
    fields: &'a [FieldSpec],
    /// Pre-serialized JSON-LD, safe inside `<script>`
    structured_data: String,
    /// Pre-built module script, safe inside `<script>`
    script: String,
}

fn calculator_layout(ctx: &PageContext) -> Markup {
    let record = ctx.record;
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(ctx))
            body {
                header class="header" {
                    div class="wrap" {
                        h1 { (record.name) }
                        p class="muted" { (record.description) }
                    }
                }
                main class="wrap" {
                    section class="card" {
                        @if let Some(formula) = record.formula.as_deref().filter(|f| !f.is_empty()) {
                            p { strong { "Formula:" } " " (formula) }
                        }
                        div class="grid" id="inputs" {
                            (fields::render_fields(&record.slug, ctx.fields))
                        }
                        div class="actions" style="margin-top:10px" {
                            button id="calcBtn" type="button" { "Calculate" }
                            button id="clearBtn" type="button" { "Clear" }
                        }
                        div id="result" class="result" { "Result: —" }
                        p id="work" class="muted" aria-live="polite" {}
                    }
                    aside class="card" {
                        h2 { "Related" }
                        p class="muted" {
                            a href=(ctx.config.home_url()) { "Back to all calculators" }
                        }
                    }
                }
                footer class="footer" {
                    div class="wrap" {
                        p class="muted" { "© " (ctx.config.brand) }
                    }
                }
                script type="module" { (PreEscaped(&ctx.script)) }
            }
        }
    }
}

/// Title, search metadata, social previews, and structured data.
fn head(ctx: &PageContext) -> Markup {
    let record = ctx.record;
    let config = ctx.config;
    let keywords = format!(
        "{}, calculator, {}",
        record.name.to_lowercase(),
        record.category.to_lowercase()
    );
    html! {
        head {
            meta charset="utf-8";
            title { (record.name) " — " (config.brand) }
            meta name="description" content=(record.description);
            meta name="keywords" content=(keywords);
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="theme-color" content=(config.theme_color);
            meta name="robots" content="index, follow, max-snippet:-1, max-image-preview:large, max-video-preview:-1";
            link rel="canonical" href=(record.canonical);
            link rel="stylesheet" href=(config.stylesheet);
            meta property="og:title" content=(record.name);
            meta property="og:description" content=(record.description);
            meta property="og:type" content="website";
            meta property="og:url" content=(record.canonical);
            meta property="og:image" content=(format!("{}{}", config.domain, config.og_image));
            meta name="twitter:card" content="summary_large_image";
            meta name="twitter:title" content=(record.name);
            meta name="twitter:description" content=(record.description);
            script type="application/ld+json" { (PreEscaped(&ctx.structured_data)) }
        }
    }
}
