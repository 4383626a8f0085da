use std::fmt;

use uuid::Uuid;

use super::envelope::EventEnvelope;

// ============================================================================
// Observer Registry - synchronous change notification
// ============================================================================
//
// Observers subscribe either to every change or to a single field. Delivery
// happens on the caller's thread, in subscription order, once the state has
// finished changing.
//
// ============================================================================

/// Events that describe a change to exactly one field
pub trait FieldEvent {
    type Field: Copy + PartialEq + fmt::Debug;

    fn field(&self) -> Self::Field;
}

/// Receives change envelopes
pub trait Observer<E> {
    fn on_change(&mut self, envelope: &EventEnvelope<E>);
}

impl<E, F> Observer<E> for F
where
    F: FnMut(&EventEnvelope<E>),
{
    fn on_change(&mut self, envelope: &EventEnvelope<E>) {
        self(envelope)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

struct Subscription<E: FieldEvent> {
    id: SubscriptionId,
    field: Option<E::Field>,
    observer: Box<dyn Observer<E>>,
}

pub struct ObserverRegistry<E: FieldEvent> {
    subscriptions: Vec<Subscription<E>>,
}

impl<E: FieldEvent> Default for ObserverRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: FieldEvent> fmt::Debug for ObserverRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("subscriptions", &self.subscriptions.len())
            .finish()
    }
}

impl<E: FieldEvent> ObserverRegistry<E> {
    pub fn new() -> Self {
        Self { subscriptions: Vec::new() }
    }

    /// Subscribe to changes of every field
    pub fn subscribe(&mut self, observer: impl Observer<E> + 'static) -> SubscriptionId {
        self.insert(None, Box::new(observer))
    }

    /// Subscribe to changes of one field only
    pub fn subscribe_field(
        &mut self,
        field: E::Field,
        observer: impl Observer<E> + 'static,
    ) -> SubscriptionId {
        self.insert(Some(field), Box::new(observer))
    }

    fn insert(&mut self, field: Option<E::Field>, observer: Box<dyn Observer<E>>) -> SubscriptionId {
        let id = SubscriptionId(Uuid::new_v4());
        self.subscriptions.push(Subscription { id, field, observer });
        tracing::trace!(subscription_id = %id, ?field, "Observer subscribed");
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| s.id != id);
        let removed = self.subscriptions.len() != before;
        if removed {
            tracing::trace!(subscription_id = %id, "Observer unsubscribed");
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    /// Deliver each envelope, in order, to every matching observer
    pub fn publish(&mut self, envelopes: &[EventEnvelope<E>]) {
        for envelope in envelopes {
            let field = envelope.event_data.field();
            for subscription in &mut self.subscriptions {
                if subscription.field.map_or(true, |f| f == field) {
                    subscription.observer.on_change(envelope);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::envelope::DomainEvent;
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Field {
        Left,
        Right,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    enum Moved {
        Left(i32),
        Right(i32),
    }

    impl DomainEvent for Moved {
        fn event_type(&self) -> &'static str {
            match self {
                Moved::Left(_) => "Left",
                Moved::Right(_) => "Right",
            }
        }
    }

    impl FieldEvent for Moved {
        type Field = Field;

        fn field(&self) -> Field {
            match self {
                Moved::Left(_) => Field::Left,
                Moved::Right(_) => Field::Right,
            }
        }
    }

    fn envelopes(events: Vec<Moved>) -> Vec<EventEnvelope<Moved>> {
        let order_id = Uuid::new_v4();
        let at = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
        events
            .into_iter()
            .enumerate()
            .map(|(i, e)| EventEnvelope::new(order_id, i as u64 + 1, e, at))
            .collect()
    }

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&EventEnvelope<Moved>)) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |env: &EventEnvelope<Moved>| sink.borrow_mut().push(env.event_type.clone()))
    }

    #[test]
    fn test_subscribe_all_receives_everything_in_order() {
        let mut registry: ObserverRegistry<Moved> = ObserverRegistry::new();
        let (seen, observer) = recorder();
        registry.subscribe(observer);

        registry.publish(&envelopes(vec![Moved::Left(1), Moved::Right(2), Moved::Left(3)]));

        assert_eq!(*seen.borrow(), vec!["Left", "Right", "Left"]);
    }

    #[test]
    fn test_field_subscription_filters() {
        let mut registry: ObserverRegistry<Moved> = ObserverRegistry::new();
        let (seen, observer) = recorder();
        registry.subscribe_field(Field::Right, observer);

        registry.publish(&envelopes(vec![Moved::Left(1), Moved::Right(2)]));

        assert_eq!(*seen.borrow(), vec!["Right"]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut registry: ObserverRegistry<Moved> = ObserverRegistry::new();
        let (seen, observer) = recorder();
        let id = registry.subscribe(observer);
        assert_eq!(registry.len(), 1);

        assert!(registry.unsubscribe(id));
        assert!(!registry.unsubscribe(id));
        assert!(registry.is_empty());

        registry.publish(&envelopes(vec![Moved::Left(1)]));
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_delivery_follows_subscription_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut registry: ObserverRegistry<Moved> = ObserverRegistry::new();

        let first = log.clone();
        registry.subscribe(move |_: &EventEnvelope<Moved>| first.borrow_mut().push("first"));
        let second = log.clone();
        registry.subscribe(move |_: &EventEnvelope<Moved>| second.borrow_mut().push("second"));

        registry.publish(&envelopes(vec![Moved::Left(1)]));
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    struct Tally(Rc<RefCell<i32>>);

    impl Observer<Moved> for Tally {
        fn on_change(&mut self, envelope: &EventEnvelope<Moved>) {
            let delta = match envelope.event_data {
                Moved::Left(n) => -n,
                Moved::Right(n) => n,
            };
            *self.0.borrow_mut() += delta;
        }
    }

    #[test]
    fn test_struct_observer() {
        let total = Rc::new(RefCell::new(0));
        let mut registry: ObserverRegistry<Moved> = ObserverRegistry::new();
        registry.subscribe(Tally(total.clone()));

        registry.publish(&envelopes(vec![Moved::Right(5), Moved::Left(2)]));
        assert_eq!(*total.borrow(), 3);
    }
}
