use chrono::{Days, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::locale::{format_date_label, AppLocale};

// ============================================================================
// Order Value Objects
// ============================================================================

/// Number of pickup days offered, today included
pub const PICKUP_OPTION_COUNT: usize = 4;

/// The observable fields of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderField {
    Quantity,
    Flavor,
    PickupDate,
    Price,
}

/// Pickup date labels offered to the customer, today first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickupDateOptions([String; PICKUP_OPTION_COUNT]);

impl PickupDateOptions {
    /// Labels for `now` and the following days, one calendar day apart.
    ///
    /// Saturates at the last date chrono can represent.
    pub fn generate(now: NaiveDateTime, locale: AppLocale) -> Self {
        let mut day = now;
        Self(std::array::from_fn(|_| {
            let label = format_date_label(day, locale);
            day = day.checked_add_days(Days::new(1)).unwrap_or(day);
            label
        }))
    }

    /// The same-day option
    pub fn today(&self) -> &str {
        &self.0[0]
    }

    pub fn is_today(&self, label: &str) -> bool {
        self.today() == label
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|option| option == label)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
