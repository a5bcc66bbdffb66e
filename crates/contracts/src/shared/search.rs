//! Free-text search over list data.
//!
//! Each searchable aggregate decides which of its fields take part in the
//! match; the rule is always a trimmed, case-insensitive substring test.

/// Trait for list item types that support free-text search
pub trait Searchable {
    /// Whether the item matches the query.
    ///
    /// An empty (or whitespace-only) query matches every item.
    fn matches_query(&self, query: &str) -> bool;
}

/// Filter a list by a search query, preserving input order.
///
/// A blank query returns the input unchanged.
pub fn filter_by_query<T: Searchable + Clone>(items: &[T], query: &str) -> Vec<T> {
    if query.trim().is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_query(query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Named(&'static str);

    impl Searchable for Named {
        fn matches_query(&self, query: &str) -> bool {
            self.0.to_lowercase().contains(&query.trim().to_lowercase())
        }
    }

    #[test]
    fn blank_query_keeps_everything() {
        let items = vec![Named("HD Foundation"), Named("Lip Balm")];
        assert_eq!(filter_by_query(&items, "   ").len(), 2);
    }

    #[test]
    fn filter_preserves_input_order() {
        let items = vec![Named("Lip Balm"), Named("Matte Lipstick"), Named("Mascara")];
        let hits = filter_by_query(&items, "lip");
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].0, "Lip Balm");
        assert_eq!(hits[1].0, "Matte Lipstick");
    }
}
