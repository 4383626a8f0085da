use cupcake_order::{EventEnvelope, OrderConfig, OrderEvent, OrderState};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=trace cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,cupcake_order=debug"))
        )
        .init();

    let config = OrderConfig::from_env()?;
    tracing::info!(locale = %config.locale, pricing = ?config.pricing, "Loaded order configuration");

    let mut order = OrderState::with_system_clock(config);
    for (index, label) in order.pickup_date_options().iter().enumerate() {
        tracing::info!(index, label, "Pickup option");
    }

    // Stand-in for the view layer: log every change it would re-render
    order.subscribe(|envelope: &EventEnvelope<OrderEvent>| {
        tracing::info!(
            seq = envelope.sequence_number,
            event = %envelope.event_type,
            data = ?envelope.event_data,
            "Order field changed"
        );
    });

    order.set_quantity(6);
    order.set_flavor("Vanilla");
    tracing::info!(price = %order.formatted_price(), "Same-day pickup");

    if let Some(tomorrow) = order.pickup_date_options().get(1).map(str::to_string) {
        order.set_date(tomorrow);
    }
    tracing::info!(price = %order.formatted_price(), "Next-day pickup");

    if order.has_no_flavor_set() {
        tracing::warn!("No flavor chosen, order cannot be submitted");
    } else {
        tracing::info!(summary = %order.summary().to_json()?, "Order ready for submission");
    }

    order.reset();
    tracing::info!(price = %order.formatted_price(), "Order reset");

    Ok(())
}
