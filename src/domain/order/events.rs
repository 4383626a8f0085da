use serde::{Deserialize, Serialize};

use crate::events::{DomainEvent, FieldEvent};
use super::value_objects::OrderField;

// ============================================================================
// Order Events - one per changed field
// ============================================================================
//
// Each event carries the field's new value, so observers can re-render
// without reading back from the order.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    QuantityChanged(QuantityChanged),
    FlavorChanged(FlavorChanged),
    PickupDateChanged(PickupDateChanged),
    PriceChanged(PriceChanged),
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::QuantityChanged(_) => "QuantityChanged",
            OrderEvent::FlavorChanged(_) => "FlavorChanged",
            OrderEvent::PickupDateChanged(_) => "PickupDateChanged",
            OrderEvent::PriceChanged(_) => "PriceChanged",
        }
    }
}

impl FieldEvent for OrderEvent {
    type Field = OrderField;

    fn field(&self) -> OrderField {
        match self {
            OrderEvent::QuantityChanged(_) => OrderField::Quantity,
            OrderEvent::FlavorChanged(_) => OrderField::Flavor,
            OrderEvent::PickupDateChanged(_) => OrderField::PickupDate,
            OrderEvent::PriceChanged(_) => OrderField::Price,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantityChanged {
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorChanged {
    pub flavor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PickupDateChanged {
    pub pickup_date: String,
}

/// New total, raw and rendered in the order's currency format
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceChanged {
    pub price: f64,
    pub formatted: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_fields() {
        let events = [
            (OrderEvent::QuantityChanged(QuantityChanged { quantity: 1 }), OrderField::Quantity),
            (OrderEvent::FlavorChanged(FlavorChanged { flavor: "Vanilla".into() }), OrderField::Flavor),
            (
                OrderEvent::PickupDateChanged(PickupDateChanged { pickup_date: "Wed Jan 3".into() }),
                OrderField::PickupDate,
            ),
            (
                OrderEvent::PriceChanged(PriceChanged { price: 0.0, formatted: "$0.00".into() }),
                OrderField::Price,
            ),
        ];

        for (event, field) in events {
            assert_eq!(event.field(), field);
        }
    }

    #[test]
    fn test_tagged_serialization() {
        let event = OrderEvent::PriceChanged(PriceChanged {
            price: 215000.0,
            formatted: "$215,000.00".into(),
        });

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "PriceChanged");
        assert_eq!(json["data"]["price"], 215000.0);
        assert_eq!(json["data"]["formatted"], "$215,000.00");

        let parsed: OrderEvent = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, event);
        assert_eq!(parsed.event_type(), "PriceChanged");
    }
}
