// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Embedded module script that wires a page's form to the shared
//! `calculators` table in the client module.
//!
//! The script relies on these ids from the page layout: `#inputs` (every
//! field), `#calcBtn`, `#clearBtn`, `#result`, `#work`. Radio groups are a
//! `<fieldset id=…>`; every other field is the control element itself.

/// Static body of the script. Expects `calculators` and `kind` in scope.
const WIRING: &str = r#"
const byId = (id) => document.getElementById(id);
const inputs = byId("inputs");
function fieldValue(id) {
  const el = byId(id);
  if (!el) return "";
  if (el.tagName === "FIELDSET") {
    const picked = el.querySelector("input[type=radio]:checked");
    return picked ? picked.value : "";
  }
  return el.value;
}
function readValues() {
  const data = {};
  inputs.querySelectorAll("input[id], select[id], fieldset[id]").forEach((el) => {
    data[el.id] = fieldValue(el.id);
  });
  return data;
}
function syncShow() {
  inputs.querySelectorAll("[data-show]").forEach((el) => {
    const rule = el.getAttribute("data-show");
    const at = rule.indexOf("=");
    if (at > 0) {
      const shown = fieldValue(rule.slice(0, at)) === rule.slice(at + 1);
      el.style.display = shown ? "" : "none";
    }
  });
}
function showResult(text, work) {
  byId("result").textContent = text;
  byId("work").textContent = work || "";
}
function clearValues() {
  inputs.querySelectorAll("input[type=number]").forEach((el) => { el.value = ""; });
  inputs.querySelectorAll("select").forEach((el) => { el.selectedIndex = 0; });
  inputs.querySelectorAll("input[type=radio]").forEach((el) => { el.checked = el.hasAttribute("checked"); });
  showResult("Result: —", "");
  syncShow();
}
byId("calcBtn").addEventListener("click", () => {
  const calc = calculators[kind];
  if (!calc) {
    showResult("This calculator is unavailable.", "");
    return;
  }
  const out = calc.compute(readValues());
  if (out.ok) {
    showResult("Result: " + out.value, out.work);
  } else {
    showResult(out.msg || "Check your inputs.", "");
  }
});
byId("clearBtn").addEventListener("click", clearValues);
inputs.addEventListener("change", syncShow);
inputs.addEventListener("input", syncShow);
syncShow();
"#;

/// Build the module script for `compute_key`, importing from `module_path`.
///
/// Both values are written as JSON string literals, which are valid
/// JavaScript strings.
pub fn module_script(module_path: &str, compute_key: &str) -> String {
    let module = js_string(module_path);
    let kind = js_string(compute_key);
    format!("\nimport {{ calculators }} from {module};\nconst kind = {kind};{WIRING}")
}

fn js_string(value: &str) -> String {
    crate::jsonld::escape_for_script(&serde_json::Value::from(value).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binds_compute_key() {
        let script = module_script("/calc-lib.js", "molarity");
        assert!(script.contains("import { calculators } from \"/calc-lib.js\";"));
        assert!(script.contains("const kind = \"molarity\";"));
        assert!(script.contains("calculators[kind]"));
    }

    #[test]
    fn exposes_page_hooks() {
        let script = module_script("/calc-lib.js", "ohms");
        for hook in ["\"inputs\"", "\"calcBtn\"", "\"clearBtn\"", "\"result\"", "\"work\"", "data-show"] {
            assert!(script.contains(hook), "missing {hook}");
        }
    }

    #[test]
    fn compute_key_cannot_break_out() {
        let script = module_script("/calc-lib.js", "x\";alert(1)</script>");
        assert!(script.contains(r#"const kind = "x\";alert(1)\u003c/script\u003e";"#));
        assert!(!script.contains("</script>"));
    }
}
