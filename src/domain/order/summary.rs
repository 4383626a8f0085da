use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Snapshot of an order, handed to whatever submits it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub order_id: Uuid,
    pub quantity: i32,
    pub flavor: String,
    pub pickup_date: String,
    pub same_day_pickup: bool,
    pub price: f64,
    pub formatted_price: String,
}

impl OrderSummary {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_json_fields() {
        let summary = OrderSummary {
            order_id: Uuid::new_v4(),
            quantity: 6,
            flavor: "Vanilla".to_string(),
            pickup_date: "Tue Jan 2".to_string(),
            same_day_pickup: true,
            price: 215000.0,
            formatted_price: "$215,000.00".to_string(),
        };

        let json = summary.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["quantity"], 6);
        assert_eq!(value["flavor"], "Vanilla");
        assert_eq!(value["pickup_date"], "Tue Jan 2");
        assert_eq!(value["same_day_pickup"], true);
        assert_eq!(value["formatted_price"], "$215,000.00");
        assert_eq!(value["order_id"], summary.order_id.to_string());
    }
}
