//! Attribute list construction for DOT statements.

use std::fmt;

use crate::dot::escape_label;

/// Builds a DOT attribute list such as `[style="dotted",color="grey"]`.
///
/// Attributes keep the order in which they were set. Setting the same key
/// twice replaces the earlier value in place. An empty builder renders as
/// an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeBuilder {
    attributes: Vec<(&'static str, String)>,
}

impl AttributeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(self, label: impl Into<String>) -> Self {
        self.add("label", label)
    }

    pub fn style(self, style: impl Into<String>) -> Self {
        self.add("style", style)
    }

    pub fn color(self, color: impl Into<String>) -> Self {
        self.add("color", color)
    }

    pub fn shape(self, shape: impl Into<String>) -> Self {
        self.add("shape", shape)
    }

    pub fn font_name(self, font_name: impl Into<String>) -> Self {
        self.add("fontname", font_name)
    }

    pub fn font_size(self, font_size: u32) -> Self {
        self.add("fontsize", font_size.to_string())
    }

    pub fn font_color(self, font_color: impl Into<String>) -> Self {
        self.add("fontcolor", font_color)
    }

    /// Set an arbitrary attribute.
    pub fn add(mut self, key: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.attributes.push((key, value)),
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl fmt::Display for AttributeBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attributes.is_empty() {
            return Ok(());
        }

        f.write_str("[")?;
        for (i, (key, value)) in self.attributes.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}=\"{}\"", key, escape_label(value))?;
        }
        f.write_str("]")
    }
}
