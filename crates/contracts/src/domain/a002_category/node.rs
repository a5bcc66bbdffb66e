use serde::{Deserialize, Serialize};

/// One node of the flat category set.
///
/// Categories are keyed by slug (e.g. "makeup", "oral-care") and carry an
/// ordered list of subcategory labels. There is no nesting beyond this one
/// level. The same shape serves both the product catalog and the service
/// catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryNode {
    /// Slug identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Ordered subcategory labels, unique within the node
    #[serde(default)]
    pub subcategories: Vec<String>,
}

impl CategoryNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, subcategories: &[&str]) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn has_subcategory(&self, label: &str) -> bool {
        self.subcategories.iter().any(|s| s == label)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Category id cannot be empty".into());
        }
        if self.name.trim().is_empty() {
            return Err("Category name cannot be empty".into());
        }
        for (i, sub) in self.subcategories.iter().enumerate() {
            if sub.trim().is_empty() {
                return Err("Subcategory label cannot be empty".into());
            }
            if self.subcategories[..i].contains(sub) {
                return Err(format!("Duplicate subcategory '{}'", sub));
            }
        }
        Ok(())
    }
}
