// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Form field markup and the `showIf` visibility rules.
//!
//! Each field becomes one labeled control inside the page's `#inputs` grid.
//! The element ids here are what the embedded client script reads.

use crate::catalog::{FieldKind, FieldSpec};
use maud::{Markup, html};
use std::collections::BTreeMap;
use std::fmt;

/// Current value of every field, keyed by field id.
pub type FieldValues = BTreeMap<String, String>;

/// A parsed `fieldId=expectedValue` rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShowIf {
    pub field: String,
    pub expected: String,
}

impl ShowIf {
    /// Split at the first `=`. Returns `None` without an `=` or a field id.
    pub fn parse(rule: &str) -> Option<Self> {
        let (field, expected) = rule.split_once('=')?;
        if field.is_empty() {
            return None;
        }
        Some(Self {
            field: field.to_string(),
            expected: expected.to_string(),
        })
    }

    /// Exact string match; a field with no value reads as `""`.
    pub fn is_satisfied(&self, values: &FieldValues) -> bool {
        let current = values.get(&self.field).map(String::as_str).unwrap_or("");
        current == self.expected
    }
}

impl fmt::Display for ShowIf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.field, self.expected)
    }
}

/// The value a field holds right after page load or Clear.
///
/// Radio: the checked option, else empty. Select: the first option, as a
/// browser would pick it. Number: empty.
pub fn default_value(field: &FieldSpec) -> Option<String> {
    match field.kind {
        FieldKind::Number => Some(String::new()),
        FieldKind::Select => Some(
            field
                .options
                .first()
                .map(|o| o.value.clone())
                .unwrap_or_default(),
        ),
        FieldKind::Radio => Some(
            field
                .options
                .iter()
                .find(|o| o.checked)
                .map(|o| o.value.clone())
                .unwrap_or_default(),
        ),
        FieldKind::Unknown => None,
    }
}

pub fn default_values(fields: &[FieldSpec]) -> FieldValues {
    fields
        .iter()
        .filter_map(|f| default_value(f).map(|v| (f.id.clone(), v)))
        .collect()
}

/// Render every field in order.
pub fn render_fields(slug: &str, fields: &[FieldSpec]) -> Markup {
    check_fields(slug, fields);
    let defaults = default_values(fields);
    html! {
        @for field in fields {
            (render_field(field, &defaults))
        }
    }
}

/// Render one field, hidden at first paint when its rule fails under `defaults`.
pub fn render_field(field: &FieldSpec, defaults: &FieldValues) -> Markup {
    let visibility = Visibility::of(field, defaults);
    match field.kind {
        FieldKind::Number => render_number(field, &visibility),
        FieldKind::Select => render_select(field, &visibility),
        FieldKind::Radio => render_radio(field, &visibility),
        FieldKind::Unknown => {
            log::debug!("skipping field '{}' of unknown kind", field.id);
            html! {}
        }
    }
}

/// The `data-show` and `style` attributes shared by every kind.
struct Visibility<'a> {
    rule: Option<&'a str>,
    hidden: bool,
}

impl<'a> Visibility<'a> {
    fn of(field: &'a FieldSpec, defaults: &FieldValues) -> Self {
        let rule = field.show_if.as_deref().filter(|r| !r.is_empty());
        let hidden = match rule.map(|r| (r, ShowIf::parse(r))) {
            Some((_, Some(show_if))) => !show_if.is_satisfied(defaults),
            Some((raw, None)) => {
                log::warn!("field '{}' has unparseable showIf '{}'", field.id, raw);
                false
            }
            None => false,
        };
        Self { rule, hidden }
    }

    fn style(&self) -> Option<&'static str> {
        self.hidden.then_some("display:none")
    }
}

fn render_number(field: &FieldSpec, vis: &Visibility) -> Markup {
    html! {
        label data-show=[vis.rule] style=[vis.style()] {
            span { (field.label) }
            input type="number" id=(field.id) inputmode="decimal" step="any";
        }
    }
}

fn render_select(field: &FieldSpec, vis: &Visibility) -> Markup {
    html! {
        label data-show=[vis.rule] style=[vis.style()] {
            span { (field.label) }
            select id=(field.id) {
                @for opt in &field.options {
                    option value=(opt.value) { (opt.label) }
                }
            }
        }
    }
}

fn render_radio(field: &FieldSpec, vis: &Visibility) -> Markup {
    html! {
        fieldset id=(field.id) data-show=[vis.rule] style=[vis.style()] {
            legend { (field.label) }
            div class="rad" {
                @for opt in &field.options {
                    label class="opt" {
                        input type="radio" name=(field.id) value=(opt.value) checked[opt.checked];
                        " " (opt.label)
                    }
                }
            }
        }
    }
}

/// Log catalog mistakes that still render.
fn check_fields(slug: &str, fields: &[FieldSpec]) {
    for field in fields {
        if let Some(show_if) = field.show_if.as_deref().and_then(ShowIf::parse) {
            if !fields.iter().any(|f| f.id == show_if.field) {
                log::warn!(
                    "'{}': field '{}' depends on unknown field '{}'",
                    slug,
                    field.id,
                    show_if.field
                );
            }
        }
        if field.kind == FieldKind::Radio {
            let checked = field.options.iter().filter(|o| o.checked).count();
            if checked > 1 {
                log::warn!(
                    "'{}': radio group '{}' has {} default options",
                    slug,
                    field.id,
                    checked
                );
            }
        }
    }
}
