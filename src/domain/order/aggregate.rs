use std::fmt::Write as _;

use chrono::{DateTime, Utc};

use crate::domain::menu::SharedMenuItem;
use super::errors::OrderError;
use super::value_objects::{OrderLine, OrderStatus};

// ============================================================================
// Order Aggregate - Domain Logic
// ============================================================================

const RECEIPT_RULE: &str = "----------------------------------------------------------";

#[derive(Debug, Clone)]
pub struct Order {
    // Identity
    id: String,

    // Current State
    table_number: String,
    customer_name: String,
    status: OrderStatus,
    lines: Vec<OrderLine>,

    // Audit Trail
    created_at: DateTime<Utc>,
}

impl Order {
    /// Open a new order. `customer_name` is a snapshot of the ordering
    /// account's display name, not a live reference.
    pub fn new(
        id: impl Into<String>,
        table_number: &str,
        customer_name: impl Into<String>,
    ) -> Result<Self, OrderError> {
        let table_number = table_number.trim();
        if table_number.is_empty() {
            return Err(OrderError::EmptyTableNumber);
        }

        Ok(Self {
            id: id.into(),
            table_number: table_number.to_string(),
            customer_name: customer_name.into(),
            status: OrderStatus::New,
            lines: Vec::new(),
            created_at: Utc::now(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn table_number(&self) -> &str {
        &self.table_number
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Lines in insertion order
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn find_line(&self, menu_item_id: &str) -> Option<&OrderLine> {
        self.lines.iter().find(|line| line.refers_to(menu_item_id))
    }

    /// Add `quantity` of `item`, merging into an existing line for the same
    /// item id. Returns true when the quantity was merged.
    pub fn add_line(&mut self, item: &SharedMenuItem, quantity: u32) -> Result<bool, OrderError> {
        if quantity == 0 {
            return Err(OrderError::InvalidQuantity(quantity));
        }

        let menu_item_id = item.borrow().id().to_string();
        if let Some(line) = self.lines.iter_mut().find(|line| line.refers_to(&menu_item_id)) {
            line.increase(quantity)?;
            return Ok(true);
        }

        self.lines.push(OrderLine::new(item.clone(), quantity));
        Ok(false)
    }

    /// Add a single unit of `item`
    pub fn add_item(&mut self, item: &SharedMenuItem) -> Result<bool, OrderError> {
        self.add_line(item, 1)
    }

    /// Remove the line for `menu_item_id`. Returns false if there is none.
    pub fn remove_line(&mut self, menu_item_id: &str) -> bool {
        match self.lines.iter().position(|line| line.refers_to(menu_item_id)) {
            Some(index) => {
                self.lines.remove(index);
                true
            }
            None => false,
        }
    }

    /// Sum of line subtotals at current catalog prices
    pub fn total(&self) -> f64 {
        self.lines.iter().map(OrderLine::subtotal).sum()
    }

    /// Move to `next` following the transition table.
    ///
    /// Re-setting the current status is a no-op and returns `Ok(false)`.
    pub fn set_status(&mut self, next: OrderStatus) -> Result<bool, OrderError> {
        if next == self.status {
            return Ok(false);
        }
        if !self.status.can_transition_to(next) {
            return Err(OrderError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }

        self.status = next;
        Ok(true)
    }

    /// Fixed-format receipt: header, lines, total
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "===== ORDER #{} =====", self.id);
        let _ = writeln!(out, "Table: {}", self.table_number);
        let _ = writeln!(out, "Customer: {}", self.customer_name);
        let _ = writeln!(out, "Time: {}", self.created_at.format("%d-%m-%Y %H:%M:%S"));
        let _ = writeln!(out, "Status: {}", self.status);
        out.push('\n');

        let _ = writeln!(out, "{:<20} | {} | {:<8} | {:<8}", "Item", "Qty", "Price", "Subtotal");
        let _ = writeln!(out, "{RECEIPT_RULE}");
        for line in &self.lines {
            let _ = writeln!(out, "{line}");
        }
        let _ = writeln!(out, "{RECEIPT_RULE}");
        let _ = writeln!(out, "TOTAL: Rp {:.2}", self.total());

        out
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;
    use crate::domain::menu::{MenuItem, NewMenuItem};

    fn shared(id: &str, name: &str, price: f64) -> SharedMenuItem {
        Rc::new(RefCell::new(
            MenuItem::new(
                id,
                NewMenuItem::Coffee {
                    name: name.into(),
                    price,
                    origin: "Arabica".into(),
                    roast: "Light".into(),
                },
            )
            .unwrap(),
        ))
    }

    fn create_test_order() -> Order {
        Order::new("1", "T1", "Alice").unwrap()
    }

    #[test]
    fn test_order_creation() {
        let order = Order::new("1", "  T1 ", "Alice").unwrap();

        assert_eq!(order.id(), "1");
        assert_eq!(order.table_number(), "T1");
        assert_eq!(order.customer_name(), "Alice");
        assert_eq!(order.status(), OrderStatus::New);
        assert!(order.is_empty());
        assert_eq!(order.total(), 0.0);
    }

    #[test]
    fn test_empty_table_number_fails() {
        let result = Order::new("1", "   ", "Alice");
        assert!(matches!(result, Err(OrderError::EmptyTableNumber)));
    }

    #[test]
    fn test_add_line_merges_same_item() {
        let latte = shared("03", "Latte", 23000.0);
        let mut order = create_test_order();

        assert!(!order.add_line(&latte, 2).unwrap());
        assert!(order.add_line(&latte, 1).unwrap());

        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].quantity(), 3);
        assert_eq!(order.total(), 69000.0);
    }

    #[test]
    fn test_add_item_defaults_to_one() {
        let latte = shared("03", "Latte", 23000.0);
        let mut order = create_test_order();

        order.add_item(&latte).unwrap();
        order.add_item(&latte).unwrap();

        assert_eq!(order.find_line("03").unwrap().quantity(), 2);
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let latte = shared("03", "Latte", 23000.0);
        let mut order = create_test_order();

        let result = order.add_line(&latte, 0);
        assert!(matches!(result, Err(OrderError::InvalidQuantity(0))));
        assert!(order.is_empty());
    }

    #[test]
    fn test_merge_overflow_keeps_line() {
        let latte = shared("03", "Latte", 23000.0);
        let mut order = create_test_order();
        order.add_line(&latte, u32::MAX).unwrap();

        let result = order.add_line(&latte, 1);
        assert_eq!(result.unwrap_err(), OrderError::QuantityOverflow("03".into()));
        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].quantity(), u32::MAX);
    }

    #[test]
    fn test_lines_keep_insertion_order() {
        let latte = shared("03", "Latte", 23000.0);
        let espresso = shared("01", "Espresso", 18000.0);
        let mut order = create_test_order();

        order.add_line(&latte, 1).unwrap();
        order.add_line(&espresso, 1).unwrap();
        order.add_line(&latte, 1).unwrap();

        let ids: Vec<String> = order.lines().iter().map(OrderLine::menu_item_id).collect();
        assert_eq!(ids, vec!["03", "01"]);
    }

    #[test]
    fn test_total_recomputed_after_changes() {
        let latte = shared("03", "Latte", 23000.0);
        let espresso = shared("01", "Espresso", 18000.0);
        let mut order = create_test_order();

        order.add_line(&latte, 2).unwrap();
        order.add_line(&espresso, 1).unwrap();
        assert_eq!(order.total(), 64000.0);

        assert!(order.remove_line("03"));
        assert_eq!(order.total(), 18000.0);
    }

    #[test]
    fn test_remove_missing_line_returns_false() {
        let latte = shared("03", "Latte", 23000.0);
        let mut order = create_test_order();
        order.add_line(&latte, 2).unwrap();

        assert!(!order.remove_line("42"));
        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.total(), 46000.0);
    }

    #[test]
    fn test_status_lifecycle() {
        let mut order = create_test_order();

        assert!(order.set_status(OrderStatus::Processing).unwrap());
        assert!(order.set_status(OrderStatus::Done).unwrap());
        assert_eq!(order.status(), OrderStatus::Done);
    }

    #[test]
    fn test_no_transition_out_of_done() {
        let mut order = create_test_order();
        order.set_status(OrderStatus::Done).unwrap();

        let result = order.set_status(OrderStatus::Processing);
        assert_eq!(
            result.unwrap_err(),
            OrderError::InvalidStatusTransition {
                from: OrderStatus::Done,
                to: OrderStatus::Processing,
            }
        );
        assert_eq!(order.status(), OrderStatus::Done);
    }

    #[test]
    fn test_no_transition_out_of_cancelled() {
        let mut order = create_test_order();
        order.set_status(OrderStatus::Cancelled).unwrap();

        assert!(order.set_status(OrderStatus::Done).is_err());
        assert!(order.set_status(OrderStatus::New).is_err());
        assert_eq!(order.status(), OrderStatus::Cancelled);
    }

    #[test]
    fn test_same_status_is_noop() {
        let mut order = create_test_order();
        order.set_status(OrderStatus::Done).unwrap();
        assert!(!order.set_status(OrderStatus::Done).unwrap());
    }

    #[test]
    fn test_render_receipt() {
        let latte = shared("03", "Latte", 23000.0);
        let mut order = create_test_order();
        order.add_line(&latte, 3).unwrap();

        let receipt = order.render();
        assert!(receipt.starts_with("===== ORDER #1 =====\n"));
        assert!(receipt.contains("Table: T1\n"));
        assert!(receipt.contains("Customer: Alice\n"));
        assert!(receipt.contains("Status: New\n"));
        assert!(receipt.contains("Latte                | 3 | Rp 23000.00 | Rp 69000.00\n"));
        assert!(receipt.ends_with("TOTAL: Rp 69000.00\n"));
    }
}
