//! Appointment list derivation.
//!
//! The appointment list supports a reduced filter set compared to the
//! catalog: a service-category scope resolved through a configurable
//! category-to-label map, and free-text search over customer name and
//! service label. Input order is preserved (the seeded source is already
//! chronological).

pub mod dto;

pub use dto::{AppointmentListParams, ServiceNameEntry, ServiceNameMap};

use crate::domain::a004_appointment::Appointment;
use crate::shared::search::Searchable;

/// Derive the visible appointment subset for the given parameters.
///
/// A category that is missing from the map matches nothing (fail soft to an
/// empty list). The subcategory parameter is a documented no-op, see
/// [`AppointmentListParams::subcategory`].
pub fn derive(
    items: &[Appointment],
    params: &AppointmentListParams,
    service_names: &ServiceNameMap,
) -> Vec<Appointment> {
    items
        .iter()
        .filter(|item| match &params.category_id {
            Some(category_id) => service_names.contains(category_id, &item.service),
            None => true,
        })
        .filter(|item| item.matches_query(&params.search))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a004_appointment::AppointmentDto;
    use chrono::NaiveDate;

    fn appointment(customer: &str, service: &str, day: u32) -> Appointment {
        Appointment::new_for_insert(&AppointmentDto {
            id: None,
            date: NaiveDate::from_ymd_opt(2026, 3, day).unwrap(),
            start_time: "10:00".to_string(),
            end_time: "11:00".to_string(),
            service: service.to_string(),
            customer_name: customer.to_string(),
            customer_avatar: None,
            status: None,
        })
    }

    fn bookings() -> Vec<Appointment> {
        vec![
            appointment("Sarah Johnson", "Hair", 2),
            appointment("Emily Davis", "Make Up", 4),
            appointment("Jessica Wilson", "Nails", 6),
            appointment("Jennifer White", "Nails", 2),
        ]
    }

    #[test]
    fn no_params_keeps_source_order() {
        let items = bookings();
        let result = derive(&items, &AppointmentListParams::default(), &ServiceNameMap::default());
        assert_eq!(result.len(), 4);
        assert_eq!(result[0].customer_name, "Sarah Johnson");
        assert_eq!(result[3].customer_name, "Jennifer White");
    }

    #[test]
    fn category_maps_to_service_label() {
        let params = AppointmentListParams {
            category_id: Some("nails".to_string()),
            ..Default::default()
        };
        let result = derive(&bookings(), &params, &ServiceNameMap::default());
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|a| a.service == "Nails"));
    }

    #[test]
    fn unknown_category_yields_empty() {
        let params = AppointmentListParams {
            category_id: Some("massage".to_string()),
            ..Default::default()
        };
        assert!(derive(&bookings(), &params, &ServiceNameMap::default()).is_empty());
    }

    #[test]
    fn subcategory_is_a_pass_through() {
        let params = AppointmentListParams {
            subcategory: Some("Bridal Make Up".to_string()),
            ..Default::default()
        };
        // Deliberately does not narrow anything
        assert_eq!(
            derive(&bookings(), &params, &ServiceNameMap::default()).len(),
            4
        );
    }

    #[test]
    fn search_covers_customer_and_service() {
        let params = AppointmentListParams {
            search: "jessica".to_string(),
            ..Default::default()
        };
        let result = derive(&bookings(), &params, &ServiceNameMap::default());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].service, "Nails");

        let params = AppointmentListParams {
            search: "make".to_string(),
            ..Default::default()
        };
        assert_eq!(derive(&bookings(), &params, &ServiceNameMap::default()).len(), 1);
    }

    #[test]
    fn custom_map_is_honored() {
        let map = ServiceNameMap::new(vec![ServiceNameEntry {
            category_id: "grooming".to_string(),
            labels: vec!["Hair".to_string(), "Nails".to_string()],
        }]);
        let params = AppointmentListParams {
            category_id: Some("grooming".to_string()),
            ..Default::default()
        };
        assert_eq!(derive(&bookings(), &params, &map).len(), 3);
    }
}
