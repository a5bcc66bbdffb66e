use serde::{Deserialize, Serialize};

/// Headline figures of the service dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceStats {
    #[serde(rename = "mostBookedService")]
    pub most_booked_service: ServiceCount,
    #[serde(rename = "totalOrders")]
    pub total_orders: TotalOrders,
    #[serde(rename = "mostBookedDay")]
    pub most_booked_day: MostBookedDay,
    /// The service with the fewest bookings, surfaced for attention
    #[serde(rename = "lowestOrders")]
    pub lowest_orders: ServiceCount,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceCount {
    pub name: String,
    pub orders: u64,
    pub change: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TotalOrders {
    pub count: u64,
    pub change: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MostBookedDay {
    pub day: String,
    pub orders: u64,
    pub change: i32,
}
