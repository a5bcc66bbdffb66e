use super::{EntityMetadata, Origin};

/// Trait for aggregate roots.
///
/// Defines the instance accessors and class-level metadata every aggregate
/// in the system carries.
pub trait AggregateRoot {
    /// Identifier type of the aggregate
    type Id;

    // ============================================================================
    // Instance accessors
    // ============================================================================

    /// Record ID
    fn id(&self) -> Self::Id;

    /// Human-readable name of the record for lists and log lines
    fn display_name(&self) -> &str;

    /// Lifecycle metadata
    fn metadata(&self) -> &EntityMetadata;

    /// Mutable lifecycle metadata
    fn metadata_mut(&mut self) -> &mut EntityMetadata;

    // ============================================================================
    // Class-level metadata
    // ============================================================================

    /// Aggregate index in the system (e.g. "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (e.g. "product")
    fn collection_name() -> &'static str;

    /// Singular UI name (e.g. "Product")
    fn element_name() -> &'static str;

    /// Plural UI name (e.g. "Products")
    fn list_name() -> &'static str;

    /// Data source backing the aggregate
    fn origin() -> Origin;

    // ============================================================================
    // Default implementations
    // ============================================================================

    /// Full system name of the aggregate (e.g. "a001_product")
    fn full_name() -> String {
        format!("{}_{}", Self::aggregate_index(), Self::collection_name())
    }
}
