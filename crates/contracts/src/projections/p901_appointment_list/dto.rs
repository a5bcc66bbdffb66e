use serde::{Deserialize, Serialize};

/// Mapping from service-category slug to the service labels appointments
/// carry (e.g. "makeup" -> ["Make Up"]).
///
/// Kept as configuration data supplied by the caller rather than a table
/// baked into the derivation itself, so the category set can change without
/// touching the engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceNameMap {
    entries: Vec<ServiceNameEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceNameEntry {
    #[serde(rename = "categoryId")]
    pub category_id: String,
    /// Service labels belonging to the category
    pub labels: Vec<String>,
}

impl ServiceNameMap {
    pub fn new(entries: Vec<ServiceNameEntry>) -> Self {
        Self { entries }
    }

    /// Labels mapped to a category, empty for unknown categories
    pub fn labels_for(&self, category_id: &str) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.category_id == category_id)
            .map(|e| e.labels.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, category_id: &str, label: &str) -> bool {
        self.labels_for(category_id).iter().any(|l| l == label)
    }
}

impl Default for ServiceNameMap {
    /// The fixed production table of the booking calendar
    fn default() -> Self {
        Self::new(vec![
            ServiceNameEntry {
                category_id: "makeup".to_string(),
                labels: vec!["Make Up".to_string()],
            },
            ServiceNameEntry {
                category_id: "nails".to_string(),
                labels: vec!["Nails".to_string()],
            },
            ServiceNameEntry {
                category_id: "hair".to_string(),
                labels: vec!["Hair".to_string()],
            },
        ])
    }
}

/// Parameter set of one appointment list derivation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppointmentListParams {
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
    /// Accepted but currently ignored: subcategory filtering of appointments
    /// is a known functional gap in the product (the selector exists in the
    /// UI, the rule was never specified). Kept as a pass-through until the
    /// intended behavior is confirmed.
    pub subcategory: Option<String>,
    #[serde(default)]
    pub search: String,
}
