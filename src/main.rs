use std::sync::Arc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shop_events::config::AppConfig;
use shop_events::domain::customer::{
    Address, Customer, CustomerAddressChangedLogHandler, FirstCustomerCreatedLogHandler,
    SecondCustomerCreatedLogHandler,
};
use shop_events::domain::order::{OrderItem, OrderService};
use shop_events::domain::product::{Product, SendEmailWhenProductIsCreatedHandler};
use shop_events::domain::{Repository, ShopEventDispatcher, ShopEventName};
use shop_events::events::EventName;
use shop_events::infrastructure::{
    Database, SqliteCustomerRepository, SqliteOrderRepository, SqliteProductRepository,
};
use shop_events::metrics::Metrics;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    // RUST_LOG overrides the configured filter
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .init();

    tracing::info!("Starting shop event demo");

    // === 1. Database ===
    let db = Database::connect(&config.database_url, config.max_connections).await?;
    db.migrate().await?;

    // === 2. Dispatcher wiring ===
    let metrics = Metrics::new()?;
    let counter = Arc::new(metrics.event_counter());

    let mut dispatcher = ShopEventDispatcher::new();
    dispatcher.register(
        ShopEventName::ProductCreated,
        Arc::new(SendEmailWhenProductIsCreatedHandler::new(&config.notification_sender)),
    );
    dispatcher.register(ShopEventName::CustomerCreated, Arc::new(FirstCustomerCreatedLogHandler));
    dispatcher.register(ShopEventName::CustomerCreated, Arc::new(SecondCustomerCreatedLogHandler));
    dispatcher.register(
        ShopEventName::CustomerAddressChanged,
        Arc::new(CustomerAddressChangedLogHandler),
    );
    for name in ShopEventName::ALL {
        dispatcher.register(name, counter.clone());
    }
    let dispatcher = Arc::new(dispatcher);

    let customers = SqliteCustomerRepository::new(db.pool().clone()).with_dispatcher(dispatcher.clone());
    let products = SqliteProductRepository::new(db.pool().clone()).with_dispatcher(dispatcher.clone());
    let orders = SqliteOrderRepository::new(db.pool().clone()).with_dispatcher(dispatcher.clone());

    // === 3. Customer lifecycle ===
    let mut customer = Customer::new("c1", "Customer 1")?;
    customer.change_address(Address::new("Street 1", 1, "13330-250", "São Paulo")?);
    customer.activate()?;
    customers.create(&customer).await?;

    customer.change_address(Address::new("Rua Quadrada", 36, "00000-000", "Qualquer lugar")?);
    customers.update(&customer).await?;

    // === 4. Catalogue ===
    let product = Product::new("p1", "Product 1", 10.0)?;
    products.create(&product).await?;

    // === 5. Order ===
    let item = OrderItem::new("i1", product.name(), product.price(), product.id(), 2)?;
    let order = OrderService::place_order(&mut customer, vec![item])?;
    orders.create(&order).await?;
    customers.update(&customer).await?;

    tracing::info!(
        order_id = %order.id(),
        total = order.total(),
        reward_points = customer.reward_points(),
        "Order stored"
    );

    for name in ShopEventName::ALL {
        tracing::info!(event = %name, count = metrics.events_seen(name.as_str()), "Events dispatched");
    }

    tracing::info!("Demo complete");
    Ok(())
}
