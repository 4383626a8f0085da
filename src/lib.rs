//! Order state for a cupcake-ordering screen: quantity, flavor, pickup date
//! and the derived price, with synchronous change notification for the view
//! layer.

pub mod clock;
pub mod config;
pub mod domain;
pub mod events;
pub mod locale;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, OrderConfig, PricingConfig};
pub use domain::order::{OrderCommand, OrderEvent, OrderField, OrderState, OrderSummary};
pub use events::{EventEnvelope, SubscriptionId};
pub use locale::AppLocale;
