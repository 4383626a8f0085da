// ============================================================================
// Order Domain - Business Logic for the Cupcake Order
// ============================================================================
//
// This module contains ALL order-specific code:
// - Value objects (PickupDateOptions, OrderField)
// - Pricing (compute_price)
// - Events (QuantityChanged, PriceChanged, etc.)
// - Commands (SetQuantity, SetFlavor, SetDate, Reset)
// - Aggregate (OrderState)
// - Summary (OrderSummary)
//
// ============================================================================

pub mod value_objects;
pub mod pricing;
pub mod events;
pub mod commands;
pub mod aggregate;
pub mod summary;

// Re-export for convenience
pub use value_objects::*;
pub use pricing::*;
pub use events::*;
pub use commands::*;
pub use aggregate::*;
pub use summary::*;
