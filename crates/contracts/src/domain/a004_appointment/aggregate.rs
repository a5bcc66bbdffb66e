use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata, Origin};
use crate::enums::AppointmentStatus;
use crate::shared::search::Searchable;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppointmentId(pub Uuid);

impl AppointmentId {
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

impl AggregateId for AppointmentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AppointmentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
/// Booking record bound to a calendar date and a local time range.
///
/// `start_time`/`end_time` are "HH:MM" local clock strings used for display
/// only; calendar bucketing goes exclusively by `date`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,

    pub date: NaiveDate,

    #[serde(rename = "startTime")]
    pub start_time: String,

    #[serde(rename = "endTime")]
    pub end_time: String,

    /// Service label as shown in the calendar (e.g. "Make Up")
    pub service: String,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    #[serde(rename = "customerAvatar")]
    pub customer_avatar: Option<String>,

    pub status: AppointmentStatus,

    pub metadata: EntityMetadata,
}

impl Appointment {
    pub fn new_for_insert(dto: &AppointmentDto) -> Self {
        Self::new_with_id(AppointmentId::new_v4(), dto)
    }

    pub fn new_with_id(id: AppointmentId, dto: &AppointmentDto) -> Self {
        Self {
            id,
            date: dto.date,
            start_time: dto.start_time.clone(),
            end_time: dto.end_time.clone(),
            service: dto.service.clone(),
            customer_name: dto.customer_name.clone(),
            customer_avatar: dto.customer_avatar.clone(),
            status: dto.status.unwrap_or(AppointmentStatus::Pending),
            metadata: EntityMetadata::new(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn update(&mut self, dto: &AppointmentDto) {
        self.date = dto.date;
        self.start_time = dto.start_time.clone();
        self.end_time = dto.end_time.clone();
        self.service = dto.service.clone();
        self.customer_name = dto.customer_name.clone();
        self.customer_avatar = dto.customer_avatar.clone();
        if let Some(status) = dto.status {
            self.status = status;
        }
    }

    pub fn cancel(&mut self) {
        self.status = AppointmentStatus::Cancelled;
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.customer_name.trim().is_empty() {
            return Err("Customer name cannot be empty".into());
        }
        if self.service.trim().is_empty() {
            return Err("Service is required".into());
        }
        let start = parse_clock(&self.start_time)?;
        let end = parse_clock(&self.end_time)?;
        if end <= start {
            return Err("End time must be after start time".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}

/// Parse an "HH:MM" local clock string
fn parse_clock(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .map_err(|_| format!("Invalid time '{}', expected HH:MM", value))
}

impl AggregateRoot for Appointment {
    type Id = AppointmentId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn display_name(&self) -> &str {
        &self.customer_name
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "appointment"
    }

    fn element_name() -> &'static str {
        "Appointment"
    }

    fn list_name() -> &'static str {
        "Appointments"
    }

    fn origin() -> Origin {
        Origin::Mock
    }
}

impl Searchable for Appointment {
    /// Case-insensitive substring match on customer name or service label
    fn matches_query(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.customer_name.to_lowercase().contains(&q) || self.service.to_lowercase().contains(&q)
    }
}

// ============================================================================
// DTO
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppointmentDto {
    pub id: Option<String>,
    pub date: NaiveDate,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    pub service: String,
    #[serde(rename = "customerName")]
    pub customer_name: String,
    #[serde(rename = "customerAvatar")]
    pub customer_avatar: Option<String>,
    pub status: Option<AppointmentStatus>,
}
