//! Opaque property bags: custom styles and text props.
//!
//! The layout engine never interprets these. They are forwarded to renderers
//! untouched, except for the `viewAfterList` style which the engine attaches
//! to separator nodes.

use compact_str::CompactString;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Style name used for separator nodes.
pub const VIEW_AFTER_LIST: &str = "viewAfterList";

// =============================================================================
// Props
// =============================================================================

/// A JSON object of properties (`{"marginBottom": 8, "color": "#333"}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(Map<String, Value>);

/// A single named style.
pub type Style = Props;

/// Text styling bag forwarded to every renderer.
pub type TextProps = Props;

impl Props {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Insert or replace a property.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as an inline CSS declaration list.
    ///
    /// Names go from camelCase to kebab-case, bare numbers get a `px` unit,
    /// objects, arrays and nulls are skipped.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (name, value) in self.iter() {
            let value = match value {
                Value::Number(n) => format!("{n}px"),
                Value::String(s) => s.clone(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => continue,
            };
            if !css.is_empty() {
                css.push_str("; ");
            }
            css.push_str(&kebab_case(name));
            css.push_str(": ");
            css.push_str(&value);
        }
        css
    }

    /// Scalar properties as string attribute pairs (`numberOfLines` → `number-of-lines`).
    pub fn to_attrs(&self) -> Vec<(String, String)> {
        self.iter()
            .filter_map(|(name, value)| {
                let value = match value {
                    Value::Number(n) => n.to_string(),
                    Value::String(s) => s.clone(),
                    Value::Bool(b) => b.to_string(),
                    _ => return None,
                };
                Some((kebab_case(name), value))
            })
            .collect()
    }
}

impl FromIterator<(String, Value)> for Props {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

// =============================================================================
// CustomStyles
// =============================================================================

/// Named styles supplied by the caller (`{"viewAfterList": {...}, "paragraph": {...}}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomStyles(FxHashMap<CompactString, Style>);

impl CustomStyles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a named style.
    pub fn with(mut self, name: impl Into<CompactString>, style: Style) -> Self {
        self.0.insert(name.into(), style);
        self
    }

    pub fn insert(&mut self, name: impl Into<CompactString>, style: Style) {
        self.0.insert(name.into(), style);
    }

    pub fn get(&self, name: &str) -> Option<&Style> {
        self.0.get(name)
    }

    /// Style applied to separator nodes.
    pub fn view_after_list(&self) -> Option<&Style> {
        self.get(VIEW_AFTER_LIST)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
