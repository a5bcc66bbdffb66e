use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata, Origin};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ServiceId(pub Uuid);

impl ServiceId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for ServiceId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ServiceId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Bookable beauty service (e.g. "Bridal Makeup Package")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: ServiceId,

    pub name: String,

    #[serde(rename = "categoryId")]
    pub category_id: String,

    pub subcategory: Option<String>,

    pub description: String,

    #[serde(rename = "durationMinutes")]
    pub duration_minutes: u32,

    #[serde(rename = "basePrice")]
    pub base_price: i64,

    #[serde(rename = "isActive", default)]
    pub is_active: bool,

    pub metadata: EntityMetadata,
}

impl Service {
    pub fn new_for_insert(dto: &ServiceDto) -> Self {
        Self::new_with_id(ServiceId::new_v4(), dto)
    }

    pub fn new_with_id(id: ServiceId, dto: &ServiceDto) -> Self {
        Self {
            id,
            name: dto.name.clone(),
            category_id: dto.category_id.clone(),
            subcategory: dto.subcategory.clone(),
            description: dto.description.clone(),
            duration_minutes: dto.duration_minutes,
            base_price: dto.base_price,
            is_active: true,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn update(&mut self, dto: &ServiceDto) {
        self.name = dto.name.clone();
        self.category_id = dto.category_id.clone();
        self.subcategory = dto.subcategory.clone();
        self.description = dto.description.clone();
        self.duration_minutes = dto.duration_minutes;
        self.base_price = dto.base_price;
        if let Some(is_active) = dto.is_active {
            self.is_active = is_active;
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Service name cannot be empty".into());
        }
        if self.category_id.trim().is_empty() {
            return Err("Category is required".into());
        }
        if self.duration_minutes == 0 {
            return Err("Duration must be positive".into());
        }
        if self.base_price < 0 {
            return Err("Base price cannot be negative".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}

impl AggregateRoot for Service {
    type Id = ServiceId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "service"
    }

    fn element_name() -> &'static str {
        "Service"
    }

    fn list_name() -> &'static str {
        "Services"
    }

    fn origin() -> Origin {
        Origin::Mock
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceDto {
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    pub subcategory: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "durationMinutes")]
    pub duration_minutes: u32,
    #[serde(rename = "basePrice")]
    pub base_price: i64,
    #[serde(rename = "isActive")]
    pub is_active: Option<bool>,
}
