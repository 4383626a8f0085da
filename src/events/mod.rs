// ============================================================================
// Change Events - Generic Infrastructure
// ============================================================================
//
// Command handling, event envelopes and observer delivery. Nothing in here
// knows about cupcakes; the order aggregate lives in src/domain/.
//
// ============================================================================

pub mod aggregate;
pub mod envelope;
pub mod observer;

pub use aggregate::Aggregate;
pub use envelope::{DomainEvent, EventEnvelope};
pub use observer::{FieldEvent, Observer, ObserverRegistry, SubscriptionId};
