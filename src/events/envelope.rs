use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Event Envelope - change metadata
// ============================================================================
//
// Wraps a change event with the order it belongs to, its position in the
// stream of changes, and the clock time it happened at.
//
// ============================================================================

/// Generic Event Envelope - wraps any domain event with metadata
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct EventEnvelope<E> {
    // Event Identity
    pub event_id: Uuid,
    pub order_id: Uuid,
    pub sequence_number: u64,

    // Event Type Information
    pub event_type: String,

    // Event Payload
    pub event_data: E,

    // Timing
    pub occurred_at: NaiveDateTime,
}

impl<E: DomainEvent> EventEnvelope<E> {
    pub fn new(order_id: Uuid, sequence_number: u64, event_data: E, occurred_at: NaiveDateTime) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            order_id,
            sequence_number,
            event_type: event_data.event_type().to_string(),
            event_data,
            occurred_at,
        }
    }
}

// ============================================================================
// Domain Event Trait
// ============================================================================

pub trait DomainEvent: Serialize + for<'de> Deserialize<'de> + Clone {
    fn event_type(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
    struct TestEvent {
        data: String,
    }

    impl DomainEvent for TestEvent {
        fn event_type(&self) -> &'static str { "TestEvent" }
    }

    fn moment() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(9, 0, 0).unwrap()
    }

    #[test]
    fn test_event_envelope_creation() {
        let order_id = Uuid::new_v4();
        let envelope = EventEnvelope::new(
            order_id,
            7,
            TestEvent { data: "test".to_string() },
            moment(),
        );

        assert_eq!(envelope.order_id, order_id);
        assert_eq!(envelope.sequence_number, 7);
        assert_eq!(envelope.event_type, "TestEvent");
        assert_eq!(envelope.occurred_at, moment());
    }

    #[test]
    fn test_envelope_ids_are_unique() {
        let order_id = Uuid::new_v4();
        let a = EventEnvelope::new(order_id, 1, TestEvent { data: "a".into() }, moment());
        let b = EventEnvelope::new(order_id, 2, TestEvent { data: "b".into() }, moment());
        assert_ne!(a.event_id, b.event_id);
    }

    #[test]
    fn test_envelope_json() {
        let envelope = EventEnvelope::new(
            Uuid::new_v4(),
            1,
            TestEvent { data: "payload".to_string() },
            moment(),
        );

        let json = serde_json::to_string(&envelope).unwrap();
        assert!(json.contains("\"event_type\":\"TestEvent\""));

        let parsed: EventEnvelope<TestEvent> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, envelope);
    }
}
