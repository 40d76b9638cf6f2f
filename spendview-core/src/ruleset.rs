//! Keyword ruleset: an ordered category -> keyword mapping loaded from JSON.
//!
//! Rule order is semantic: the first category with a matching keyword wins,
//! so the config document's key order is preserved verbatim.

use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{Result, SpendError};

/// Fallback category for descriptions no rule matches.
pub const OTHER_CATEGORY: &str = "Other";

/// One category and its match keywords.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRule {
    pub name: String,
    /// Lowercased at load time; matching is case-insensitive substring.
    pub keywords: Vec<String>,
}

/// Ordered set of category rules. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Ruleset {
    rules: Vec<CategoryRule>,
}

impl Ruleset {
    /// Load a JSON object document, e.g. `{"Groceries": ["walmart", "heb"]}`.
    ///
    /// A missing or malformed file is a `Config` error; nothing downstream
    /// runs without a valid ruleset.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| SpendError::Config(format!("read {}: {e}", path.display())))?;
        Self::from_json_str(&raw)
    }

    /// Parse a ruleset from JSON text. Key order becomes rule order.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let doc: serde_json::Map<String, Value> = serde_json::from_str(raw)
            .map_err(|e| SpendError::Config(format!("parse ruleset: {e}")))?;

        let mut rules = Vec::with_capacity(doc.len());
        for (name, value) in doc {
            if name.trim().is_empty() {
                return Err(SpendError::Config("empty category name".to_string()));
            }
            let Value::Array(items) = value else {
                return Err(SpendError::Config(format!(
                    "category {name:?}: expected an array of keywords"
                )));
            };
            let mut keywords = Vec::with_capacity(items.len());
            for item in items {
                let Value::String(kw) = item else {
                    return Err(SpendError::Config(format!(
                        "category {name:?}: keywords must be strings"
                    )));
                };
                if kw.trim().is_empty() {
                    return Err(SpendError::Config(format!(
                        "category {name:?}: empty keyword"
                    )));
                }
                keywords.push(kw.to_lowercase());
            }
            rules.push(CategoryRule { name, keywords });
        }

        Ok(Ruleset { rules })
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// First category (in rule order) with a keyword occurring as a
    /// case-insensitive substring of `description`; `OTHER_CATEGORY` when
    /// nothing matches. Never fails, including on empty descriptions.
    pub fn categorize(&self, description: &str) -> &str {
        let desc = description.to_lowercase();
        for rule in &self.rules {
            if rule.keywords.iter().any(|kw| desc.contains(kw.as_str())) {
                return &rule.name;
            }
        }
        OTHER_CATEGORY
    }
}
