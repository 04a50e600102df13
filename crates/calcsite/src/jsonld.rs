// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! schema.org structured data embedded in each calculator page.
//!
//! The graph always holds a BreadcrumbList and a WebApplication. FAQPage and
//! HowTo entities follow only when the record supplies that content.

use crate::catalog::CalculatorRecord;
use crate::config::SiteConfig;
use serde_json::{Value, json};

/// Build the `@graph` document for one calculator.
pub fn build_graph(record: &CalculatorRecord, config: &SiteConfig) -> Value {
    let mut graph = vec![breadcrumb(record, config), web_application(record)];
    graph.extend(faq_page(record));
    graph.extend(how_to(record));

    json!({
        "@context": "https://schema.org",
        "@graph": graph,
    })
}

/// Home → Category → this calculator.
fn breadcrumb(record: &CalculatorRecord, config: &SiteConfig) -> Value {
    let home = config.home_url();
    json!({
        "@type": "BreadcrumbList",
        "itemListElement": [
            {"@type": "ListItem", "position": 1, "name": "Home", "item": home},
            {
                "@type": "ListItem",
                "position": 2,
                "name": record.category,
                "item": format!("{}#{}", home, record.category.to_lowercase()),
            },
            {"@type": "ListItem", "position": 3, "name": record.name, "item": record.canonical},
        ]
    })
}

fn web_application(record: &CalculatorRecord) -> Value {
    json!({
        "@type": "WebApplication",
        "name": record.name,
        "url": record.canonical,
        "applicationCategory": "EducationalApplication",
        "operatingSystem": "Any",
        "description": record.description,
    })
}

fn faq_page(record: &CalculatorRecord) -> Option<Value> {
    if record.faq.is_empty() {
        return None;
    }
    let questions: Vec<Value> = record
        .faq
        .iter()
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": {"@type": "Answer", "text": entry.answer},
            })
        })
        .collect();
    Some(json!({"@type": "FAQPage", "mainEntity": questions}))
}

fn how_to(record: &CalculatorRecord) -> Option<Value> {
    if record.howto.is_empty() {
        return None;
    }
    let steps: Vec<Value> = record
        .howto
        .iter()
        .map(|text| json!({"@type": "HowToStep", "text": text}))
        .collect();
    Some(json!({
        "@type": "HowTo",
        "name": format!("How to use {}", record.name),
        "step": steps,
    }))
}

/// Serialize for a `<script type="application/ld+json">` element.
pub fn to_script_json(graph: &Value) -> String {
    escape_for_script(&graph.to_string())
}

/// Write `<`, `>` and `&` in serialized JSON as `\u` escapes.
///
/// These characters only occur inside JSON strings, where the escapes read
/// back as the same text. With no `<` left, the HTML tokenizer cannot see a
/// closing tag or a `<!--` that would change how the script element ends.
pub(crate) fn escape_for_script(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            _ => out.push(c),
        }
    }
    out
}
