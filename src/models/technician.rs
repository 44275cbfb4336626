//! Technician model and the aggregated hours supplied for each technician.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A technician whose accumulated hours determine a computed payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Technician {
    /// Unique identifier for the technician.
    pub id: u64,
    /// The technician's first name, if recorded.
    #[serde(default)]
    pub first_name: Option<String>,
    /// The technician's last name, if recorded.
    #[serde(default)]
    pub last_name: Option<String>,
}

impl Technician {
    /// Returns the first and last name joined by a single space.
    ///
    /// Missing parts are treated as empty strings, so the separator is
    /// always present.
    ///
    /// # Examples
    ///
    /// ```
    /// use technician_payments::models::Technician;
    ///
    /// let technician = Technician {
    ///     id: 1,
    ///     first_name: Some("Juan".to_string()),
    ///     last_name: Some("Perez".to_string()),
    /// };
    /// assert_eq!(technician.full_name(), "Juan Perez");
    /// ```
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or(""),
            self.last_name.as_deref().unwrap_or("")
        )
    }

    /// Returns true if `filter` occurs in the first or last name, ignoring case.
    ///
    /// An empty filter matches every technician.
    pub fn matches_name(&self, filter: &str) -> bool {
        let needle = filter.to_lowercase();
        needle.is_empty()
            || [&self.first_name, &self.last_name]
                .into_iter()
                .flatten()
                .any(|name| name.to_lowercase().contains(&needle))
    }
}

/// A technician together with the hours aggregated from their orders.
///
/// Produced by the data layer; `total_hours` is `None` when the technician
/// has no orders, which counts as zero hours. On the wire the technician's
/// fields sit alongside the totals in a single flat object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TechnicianHoursFields", into = "TechnicianHoursFields")]
pub struct TechnicianHours {
    /// The technician the hours belong to.
    pub technician: Technician,
    /// Total hours worked across the technician's orders.
    pub total_hours: Option<Decimal>,
    /// Number of orders the hours were aggregated from.
    pub total_orders: u64,
}

/// Flat JSON form of [`TechnicianHours`].
///
/// Hours keep the exact digits written in the request, so a value such as
/// `15.0000000000000001` is still seen as fractional.
#[derive(Serialize, Deserialize)]
struct TechnicianHoursFields {
    id: u64,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default, with = "rust_decimal::serde::arbitrary_precision_option")]
    total_hours: Option<Decimal>,
    #[serde(default)]
    total_orders: u64,
}

impl From<TechnicianHoursFields> for TechnicianHours {
    fn from(fields: TechnicianHoursFields) -> Self {
        Self {
            technician: Technician {
                id: fields.id,
                first_name: fields.first_name,
                last_name: fields.last_name,
            },
            total_hours: fields.total_hours,
            total_orders: fields.total_orders,
        }
    }
}

impl From<TechnicianHours> for TechnicianHoursFields {
    fn from(hours: TechnicianHours) -> Self {
        Self {
            id: hours.technician.id,
            first_name: hours.technician.first_name,
            last_name: hours.technician.last_name,
            total_hours: hours.total_hours,
            total_orders: hours.total_orders,
        }
    }
}

impl TechnicianHours {
    /// Returns the worked hours, treating a missing total as zero.
    pub fn hours_or_zero(&self) -> Decimal {
        self.total_hours.unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn technician(first: Option<&str>, last: Option<&str>) -> Technician {
        Technician {
            id: 1,
            first_name: first.map(str::to_string),
            last_name: last.map(str::to_string),
        }
    }

    #[test]
    fn test_full_name_joins_with_single_space() {
        assert_eq!(
            technician(Some("Maria"), Some("Lopez")).full_name(),
            "Maria Lopez"
        );
    }

    #[test]
    fn test_full_name_uses_empty_string_for_missing_parts() {
        assert_eq!(technician(Some("Maria"), None).full_name(), "Maria ");
        assert_eq!(technician(None, Some("Lopez")).full_name(), " Lopez");
        assert_eq!(technician(None, None).full_name(), " ");
    }

    #[test]
    fn test_matches_name_is_case_insensitive_on_either_name() {
        let carlos = technician(Some("Carlos"), Some("Juan"));
        assert!(carlos.matches_name("juan"));
        assert!(carlos.matches_name("CARL"));
        assert!(!carlos.matches_name("maria"));
    }

    #[test]
    fn test_matches_name_does_not_span_first_and_last() {
        let juan = technician(Some("Juan"), Some("Perez"));
        assert!(!juan.matches_name("juan perez"));
    }

    #[test]
    fn test_empty_filter_matches_everyone() {
        assert!(technician(None, None).matches_name(""));
        assert!(technician(Some("Ana"), None).matches_name(""));
    }

    #[test]
    fn test_deserialize_technician_hours() {
        let json = r#"{
            "id": 7,
            "first_name": "Juan",
            "last_name": "Perez",
            "total_hours": 15,
            "total_orders": 2
        }"#;

        let hours: TechnicianHours = serde_json::from_str(json).unwrap();
        assert_eq!(hours.technician.id, 7);
        assert_eq!(hours.technician.full_name(), "Juan Perez");
        assert_eq!(hours.total_hours, Some(Decimal::new(15, 0)));
        assert_eq!(hours.total_orders, 2);
    }

    #[test]
    fn test_deserialize_technician_without_orders() {
        let json = r#"{"id": 2, "first_name": "Maria", "total_hours": null}"#;

        let hours: TechnicianHours = serde_json::from_str(json).unwrap();
        assert_eq!(hours.technician.last_name, None);
        assert_eq!(hours.total_hours, None);
        assert_eq!(hours.hours_or_zero(), Decimal::ZERO);
        assert_eq!(hours.total_orders, 0);
    }

    #[test]
    fn test_deserialize_keeps_exact_hour_digits() {
        let json = r#"{"id": 1, "total_hours": 15.0000000000000001}"#;

        let hours: TechnicianHours = serde_json::from_str(json).unwrap();
        let total = hours.total_hours.unwrap();
        assert_eq!(total.to_string(), "15.0000000000000001");
        assert!(!total.fract().is_zero());
    }

    #[test]
    fn test_technician_hours_serializes_flat() {
        let hours = TechnicianHours {
            technician: technician(Some("Ana"), None),
            total_hours: Some(Decimal::new(8, 0)),
            total_orders: 1,
        };

        let json = serde_json::to_value(&hours).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["first_name"], "Ana");
        assert!(json["last_name"].is_null());
        assert_eq!(json["total_hours"].as_u64(), Some(8));
        assert_eq!(json["total_orders"], 1);

        let round_tripped: TechnicianHours = serde_json::from_value(json).unwrap();
        assert_eq!(round_tripped, hours);
    }
}
