use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use restaurant_ease::domain::menu::MenuItemPatch;
use restaurant_ease::domain::order::{OrderLineRequest, OrderStatus};
use restaurant_ease::metrics::Metrics;
use restaurant_ease::{Restaurant, RestaurantConfig};

fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Default to INFO level, can be overridden with RUST_LOG env var
    // Example: RUST_LOG=trace cargo run
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,restaurant_ease=debug"))
        )
        .init();

    tracing::info!("🍽️  Starting RestaurantEase demo");

    // === 1. Metrics and seeded restaurant ===
    let metrics = Metrics::new()?;
    let mut restaurant = Restaurant::new(RestaurantConfig::default(), metrics)?;
    tracing::info!(
        menu_items = restaurant.menu().len(),
        accounts = restaurant.accounts().len(),
        "Restaurant ready"
    );

    println!("===== MENU =====");
    for item in restaurant.menu().list() {
        println!("{}", item.borrow());
    }
    println!();

    // === 2. Customer logs in and orders ===
    let customer = restaurant
        .login("customer", "customer123")
        .map(|account| account.username().to_string())
        .ok_or_else(|| anyhow::anyhow!("sample customer account is missing"))?;

    let order_id = restaurant.place_order(
        &customer,
        "T1",
        &[
            OrderLineRequest::new("03", 2),
            OrderLineRequest::new("03", 1),
            OrderLineRequest::new("05", 1),
        ],
    )?;

    // === 3. Admin runs the kitchen ===
    let admin = restaurant
        .login("admin", "admin123")
        .map(|account| account.username().to_string())
        .ok_or_else(|| anyhow::anyhow!("sample admin account is missing"))?;

    restaurant.update_order_status(&admin, &order_id, OrderStatus::Processing)?;
    restaurant.update_order_status(&admin, &order_id, OrderStatus::Done)?;
    if let Err(e) = restaurant.update_order_status(&admin, &order_id, OrderStatus::Processing) {
        tracing::info!(error = %e, "Completed orders stay completed");
    }

    // Beverage availability changes are announced
    let patch = MenuItemPatch {
        available: Some(false),
        ..Default::default()
    };
    restaurant.edit_menu_item(&admin, "08", &patch)?;

    // === 4. Output ===
    if let Some(receipt) = restaurant.receipt(&order_id) {
        println!("{receipt}");
    }
    if let Some(total) = restaurant.discounted_total(&order_id, &customer) {
        println!("Total after loyalty discount: Rp {total:.2}");
    }
    if let Some(account) = restaurant.accounts().find(&customer) {
        println!("{}", account.info());
    }
    println!();
    println!("{}", restaurant.sales_report(&admin)?);
    println!();
    print!("{}", restaurant.metrics().render()?);

    tracing::info!(
        order_events = restaurant.orders().journal().len(),
        menu_events = restaurant.menu().journal().len(),
        account_events = restaurant.accounts().journal().len(),
        "🎉 Demo complete!"
    );

    Ok(())
}
