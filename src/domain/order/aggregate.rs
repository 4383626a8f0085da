use std::fmt;

use uuid::Uuid;

use crate::clock::{Clock, SystemClock};
use crate::config::{OrderConfig, PricingConfig};
use crate::events::{Aggregate, EventEnvelope, Observer, ObserverRegistry, SubscriptionId};
use crate::locale::{format_currency, AppLocale, CurrencyFormat};
use super::commands::OrderCommand;
use super::events::*;
use super::pricing::compute_price;
use super::summary::OrderSummary;
use super::value_objects::{OrderField, PickupDateOptions};

// ============================================================================
// Order State - the in-progress order behind the ordering screen
// ============================================================================

pub struct OrderState {
    // Identity
    order_id: Uuid,
    next_sequence: u64,

    // Current State
    quantity: i32,
    flavor: String,
    selected_date: String,
    price: f64,

    // Fixed at construction
    pickup_date_options: PickupDateOptions,
    pricing: PricingConfig,
    locale: AppLocale,
    currency_format: CurrencyFormat,

    clock: Box<dyn Clock>,
    observers: ObserverRegistry<OrderEvent>,
}

impl OrderState {
    /// Build an empty order, generating pickup options from `clock`
    pub fn new(config: OrderConfig, clock: impl Clock + 'static) -> Self {
        let pickup_date_options = PickupDateOptions::generate(clock.now(), config.locale);
        let mut state = Self {
            order_id: Uuid::new_v4(),
            next_sequence: 1,
            quantity: 0,
            flavor: String::new(),
            selected_date: pickup_date_options.today().to_string(),
            price: 0.0,
            pickup_date_options,
            pricing: config.pricing,
            locale: config.locale,
            currency_format: config.locale.currency_format(),
            clock: Box::new(clock),
            observers: ObserverRegistry::new(),
        };
        // Nobody can be subscribed yet, so the defaults go in without envelopes
        state.execute(&OrderCommand::Reset);

        tracing::info!(
            order_id = %state.order_id,
            locale = %state.locale,
            options = ?state.pickup_date_options.as_slice(),
            "Order state created"
        );
        state
    }

    pub fn with_system_clock(config: OrderConfig) -> Self {
        Self::new(config, SystemClock)
    }

    // --- Mutators ---

    pub fn set_quantity(&mut self, quantity: i32) {
        self.dispatch(OrderCommand::SetQuantity(quantity));
    }

    pub fn set_flavor(&mut self, flavor: impl Into<String>) {
        self.dispatch(OrderCommand::SetFlavor(flavor.into()));
    }

    /// Select a pickup date. The label is trusted to be one of
    /// [`OrderState::pickup_date_options`].
    pub fn set_date(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.pickup_date_options.contains(&label) {
            tracing::warn!(
                order_id = %self.order_id,
                pickup_date = %label,
                "Pickup date is not one of the offered options"
            );
        }
        self.dispatch(OrderCommand::SetDate(label));
    }

    pub fn reset(&mut self) {
        self.dispatch(OrderCommand::Reset);
    }

    /// Apply a command, then notify observers of every field it changed.
    ///
    /// Returns the envelopes that were delivered.
    pub fn dispatch(&mut self, command: OrderCommand) -> Vec<EventEnvelope<OrderEvent>> {
        let events = self.execute(&command);

        let occurred_at = self.clock.now();
        let envelopes: Vec<_> = events
            .into_iter()
            .map(|event| {
                let envelope = EventEnvelope::new(self.order_id, self.next_sequence, event, occurred_at);
                self.next_sequence += 1;
                envelope
            })
            .collect();

        tracing::debug!(
            order_id = %self.order_id,
            ?command,
            quantity = self.quantity,
            flavor = %self.flavor,
            pickup_date = %self.selected_date,
            price = self.price,
            changes = envelopes.len(),
            "Order updated"
        );

        self.observers.publish(&envelopes);
        envelopes
    }

    // --- Observation ---

    pub fn subscribe(&mut self, observer: impl Observer<OrderEvent> + 'static) -> SubscriptionId {
        self.observers.subscribe(observer)
    }

    pub fn subscribe_field(
        &mut self,
        field: OrderField,
        observer: impl Observer<OrderEvent> + 'static,
    ) -> SubscriptionId {
        self.observers.subscribe_field(field, observer)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    // --- Accessors ---

    pub fn order_id(&self) -> Uuid {
        self.order_id
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    pub fn flavor(&self) -> &str {
        &self.flavor
    }

    pub fn selected_date(&self) -> &str {
        &self.selected_date
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn pickup_date_options(&self) -> &PickupDateOptions {
        &self.pickup_date_options
    }

    pub fn pricing(&self) -> &PricingConfig {
        &self.pricing
    }

    pub fn locale(&self) -> AppLocale {
        self.locale
    }

    pub fn has_no_flavor_set(&self) -> bool {
        self.flavor.is_empty()
    }

    pub fn is_same_day_pickup(&self) -> bool {
        self.pickup_date_options.is_today(&self.selected_date)
    }

    /// Price in the locale's currency format, e.g. `$215,000.00`
    pub fn formatted_price(&self) -> String {
        format_currency(self.price, &self.currency_format)
    }

    pub fn summary(&self) -> OrderSummary {
        OrderSummary {
            order_id: self.order_id,
            quantity: self.quantity,
            flavor: self.flavor.clone(),
            pickup_date: self.selected_date.clone(),
            same_day_pickup: self.is_same_day_pickup(),
            price: self.price,
            formatted_price: self.formatted_price(),
        }
    }

    fn price_changed(&self, price: f64) -> OrderEvent {
        OrderEvent::PriceChanged(PriceChanged {
            price,
            formatted: format_currency(price, &self.currency_format),
        })
    }
}

impl fmt::Debug for OrderState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderState")
            .field("order_id", &self.order_id)
            .field("quantity", &self.quantity)
            .field("flavor", &self.flavor)
            .field("selected_date", &self.selected_date)
            .field("price", &self.price)
            .field("pickup_date_options", &self.pickup_date_options)
            .field("locale", &self.locale)
            .field("observers", &self.observers)
            .finish()
    }
}

// ============================================================================
// Aggregate Trait Implementation
// ============================================================================

impl Aggregate for OrderState {
    type Event = OrderEvent;
    type Command = OrderCommand;

    fn handle_command(&self, command: &OrderCommand) -> Vec<OrderEvent> {
        match command {
            OrderCommand::SetQuantity(quantity) => {
                let price = compute_price(
                    *quantity,
                    &self.selected_date,
                    &self.pickup_date_options,
                    &self.pricing,
                );
                vec![
                    OrderEvent::QuantityChanged(QuantityChanged { quantity: *quantity }),
                    self.price_changed(price),
                ]
            }

            OrderCommand::SetFlavor(flavor) => {
                vec![OrderEvent::FlavorChanged(FlavorChanged { flavor: flavor.clone() })]
            }

            OrderCommand::SetDate(label) => {
                let price = compute_price(
                    self.quantity,
                    label,
                    &self.pickup_date_options,
                    &self.pricing,
                );
                vec![
                    OrderEvent::PickupDateChanged(PickupDateChanged { pickup_date: label.clone() }),
                    self.price_changed(price),
                ]
            }

            // Price goes to zero rather than being recomputed
            OrderCommand::Reset => vec![
                OrderEvent::QuantityChanged(QuantityChanged { quantity: 0 }),
                OrderEvent::FlavorChanged(FlavorChanged { flavor: String::new() }),
                OrderEvent::PickupDateChanged(PickupDateChanged {
                    pickup_date: self.pickup_date_options.today().to_string(),
                }),
                self.price_changed(0.0),
            ],
        }
    }

    fn apply_event(&mut self, event: &OrderEvent) {
        match event {
            OrderEvent::QuantityChanged(e) => self.quantity = e.quantity,
            OrderEvent::FlavorChanged(e) => self.flavor = e.flavor.clone(),
            OrderEvent::PickupDateChanged(e) => self.selected_date = e.pickup_date.clone(),
            OrderEvent::PriceChanged(e) => self.price = e.price,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
