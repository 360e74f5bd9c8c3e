use crate::domain::menu::SharedMenuItem;
use crate::domain::order::{
    Order, OrderError, OrderEvent, OrderLineAdded, OrderLineRemoved, OrderOpened, OrderStatus,
    OrderStatusChanged,
};
use crate::event_sourcing::EventStore;
use super::id_allocator::IdAllocator;

// ============================================================================
// Order Book - Command Handler for Orders
// ============================================================================
//
// Orders hold live handles into the menu, so they are kept as state and each
// successful mutation is journaled as a snapshot event.
//
// Lookups by an unknown order id are soft failures (false / None); rule
// violations are errors.
//
// ============================================================================

#[derive(Debug)]
pub struct OrderBook {
    ids: IdAllocator,
    orders: Vec<Order>,
    journal: EventStore<OrderEvent>,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            ids: IdAllocator::new(1),
            orders: Vec::new(),
            journal: EventStore::new("Order"),
        }
    }

    /// Open an empty order and return its id
    pub fn open(
        &mut self,
        table_number: &str,
        customer_name: &str,
        actor: Option<&str>,
    ) -> Result<String, OrderError> {
        if table_number.trim().is_empty() {
            return Err(OrderError::EmptyTableNumber);
        }
        let order = Order::new(self.ids.next(), table_number, customer_name)?;
        let order_id = order.id().to_string();

        tracing::debug!(
            order_id = %order_id,
            table_number = order.table_number(),
            customer_name = order.customer_name(),
            "Order opened"
        );
        let event = OrderEvent::Opened(OrderOpened {
            table_number: order.table_number().to_string(),
            customer_name: order.customer_name().to_string(),
        });
        self.orders.push(order);
        self.record(&order_id, event, actor);

        Ok(order_id)
    }

    pub fn get(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|order| order.id() == order_id)
    }

    /// Orders in creation order
    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    pub fn by_customer<'a>(&'a self, customer_name: &'a str) -> impl Iterator<Item = &'a Order> + 'a {
        self.orders.iter().filter(move |order| order.customer_name() == customer_name)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// `Ok(false)` when the order does not exist.
    pub fn add_line(&mut self, order_id: &str, item: &SharedMenuItem, quantity: u32) -> Result<bool, OrderError> {
        let Some(order) = self.get_mut(order_id) else {
            return Ok(false);
        };

        let merged = order.add_line(item, quantity)?;
        let event = {
            let item = item.borrow();
            OrderEvent::LineAdded(OrderLineAdded {
                menu_item_id: item.id().to_string(),
                name: item.name().to_string(),
                unit_price: item.price(),
                quantity,
                merged,
            })
        };
        self.record(order_id, event, None);
        Ok(true)
    }

    pub fn remove_line(&mut self, order_id: &str, menu_item_id: &str) -> bool {
        let removed = self
            .get_mut(order_id)
            .is_some_and(|order| order.remove_line(menu_item_id));

        if removed {
            let event = OrderEvent::LineRemoved(OrderLineRemoved {
                menu_item_id: menu_item_id.to_string(),
            });
            self.record(order_id, event, None);
        }
        removed
    }

    /// `Ok(false)` when the order does not exist or already has `status`.
    pub fn set_status(
        &mut self,
        order_id: &str,
        status: OrderStatus,
        actor: Option<&str>,
    ) -> Result<bool, OrderError> {
        let Some(order) = self.get_mut(order_id) else {
            return Ok(false);
        };

        let from = order.status();
        if !order.set_status(status)? {
            return Ok(false);
        }

        tracing::info!(order_id, from = %from, to = %status, "Order status changed");
        self.record(order_id, OrderEvent::StatusChanged(OrderStatusChanged { from, to: status }), actor);
        Ok(true)
    }

    pub fn total(&self, order_id: &str) -> Option<f64> {
        self.get(order_id).map(Order::total)
    }

    pub fn render(&self, order_id: &str) -> Option<String> {
        self.get(order_id).map(Order::render)
    }

    pub fn journal(&self) -> &EventStore<OrderEvent> {
        &self.journal
    }

    fn get_mut(&mut self, order_id: &str) -> Option<&mut Order> {
        self.orders.iter_mut().find(|order| order.id() == order_id)
    }

    fn record(&mut self, order_id: &str, event: OrderEvent, actor: Option<&str>) {
        self.journal.append(order_id, event, actor);
    }
}
