use crate::config::PricingConfig;

use super::value_objects::PickupDateOptions;

/// Total price for `quantity` units picked up on `selected_date`.
///
/// Quantity is not clamped: a negative quantity yields a negative unit total.
/// The same-day surcharge applies even when nothing is ordered.
pub fn compute_price(
    quantity: i32,
    selected_date: &str,
    options: &PickupDateOptions,
    pricing: &PricingConfig,
) -> f64 {
    let mut price = f64::from(quantity) * pricing.price_per_unit;
    if options.is_today(selected_date) {
        price += pricing.same_day_surcharge;
    }
    price
}
