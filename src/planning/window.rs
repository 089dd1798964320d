//! Delivery-date windows a plan covers

use crate::core::error::ValidationError;
use crate::entities::Order;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// An inclusive range of delivery dates
///
/// Deserializing goes through [`ProductionWindow::new`], so a reversed
/// range is rejected the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "WindowBounds")]
pub struct ProductionWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Deserialize)]
struct WindowBounds {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<WindowBounds> for ProductionWindow {
    type Error = ValidationError;

    fn try_from(bounds: WindowBounds) -> Result<Self, Self::Error> {
        Self::new(bounds.start, bounds.end)
    }
}

impl ProductionWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::InvalidWindow {
                from: start,
                to: end,
            });
        }
        Ok(Self { start, end })
    }

    /// The seven-day week containing `day`, beginning on `week_start`
    pub fn week_containing(day: NaiveDate, week_start: Weekday) -> Self {
        let offset =
            (day.weekday().num_days_from_monday() + 7 - week_start.num_days_from_monday()) % 7;
        let start = day - Days::new(u64::from(offset));
        Self {
            start,
            end: start + Days::new(6),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Keep the orders delivered inside the window, preserving their order.
    ///
    /// Fails on the first order whose delivery date does not parse.
    pub fn select(&self, orders: Vec<Order>) -> Result<Vec<Order>, ValidationError> {
        let mut selected = Vec::with_capacity(orders.len());
        for order in orders {
            if self.contains(order.delivery_date()?) {
                selected.push(order);
            }
        }
        Ok(selected)
    }
}

impl fmt::Display for ProductionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_week_containing_monday_start() {
        // 2024-06-14 is a Friday
        let week = ProductionWindow::week_containing(date(2024, 6, 14), Weekday::Mon);
        assert_eq!(week.start, date(2024, 6, 10));
        assert_eq!(week.end, date(2024, 6, 16));
    }

    #[test]
    fn test_week_containing_start_day_itself() {
        let week = ProductionWindow::week_containing(date(2024, 6, 10), Weekday::Mon);
        assert_eq!(week.start, date(2024, 6, 10));
    }

    #[test]
    fn test_week_containing_sunday_start() {
        let week = ProductionWindow::week_containing(date(2024, 6, 14), Weekday::Sun);
        assert_eq!(week.start, date(2024, 6, 9));
        assert_eq!(week.end, date(2024, 6, 15));
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let window = ProductionWindow::new(date(2024, 6, 10), date(2024, 6, 16)).unwrap();
        assert!(window.contains(date(2024, 6, 10)));
        assert!(window.contains(date(2024, 6, 16)));
        assert!(!window.contains(date(2024, 6, 17)));
        assert_eq!(window.to_string(), "2024-06-10..=2024-06-16");
    }

    #[test]
    fn test_reversed_window_rejected() {
        let err = ProductionWindow::new(date(2024, 6, 16), date(2024, 6, 10)).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_WINDOW");
    }

    #[test]
    fn test_deserialize_checks_bounds() {
        let window: ProductionWindow =
            serde_json::from_str(r#"{"start": "2024-06-10", "end": "2024-06-16"}"#).unwrap();
        assert_eq!(window.end, date(2024, 6, 16));

        let err = serde_json::from_str::<ProductionWindow>(r#"{"start": "2024-06-16", "end": "2024-06-10"}"#)
            .unwrap_err();
        assert!(err.to_string().contains("before it starts"));
    }

    #[test]
    fn test_select_keeps_input_order() {
        let window = ProductionWindow::new(date(2024, 6, 10), date(2024, 6, 16)).unwrap();
        let late = Order::new("Late", date(2024, 6, 15));
        let outside = Order::new("Outside", date(2024, 6, 20));
        let early = Order::new("Early", date(2024, 6, 11));

        let selected = window.select(vec![late.clone(), outside, early.clone()]).unwrap();
        assert_eq!(selected, vec![late, early]);
    }

    #[test]
    fn test_select_fails_on_malformed_date() {
        let window = ProductionWindow::new(date(2024, 6, 10), date(2024, 6, 16)).unwrap();
        let mut broken = Order::new("Broken", date(2024, 6, 11));
        broken.delivery_date = "amanhã".to_string();

        assert!(matches!(
            window.select(vec![broken]),
            Err(ValidationError::InvalidDeliveryDate { .. })
        ));
    }
}
