use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::config::RestaurantConfig;
use crate::domain::account::{Account, AccountError, Capability, CustomerProfile, Role};
use crate::domain::menu::{MenuError, MenuItemPatch, NewMenuItem, SharedMenuItem};
use crate::domain::order::{Order, OrderError, OrderLineRequest, OrderStatus};
use crate::metrics::Metrics;
use crate::registry::{AccountRegistry, MenuCatalog, OrderBook};

// ============================================================================
// Restaurant - Policy layer over the registries
// ============================================================================
//
// Every operation that acts on behalf of someone takes the actor's username.
// Capability checks, order placement and loyalty accrual live here; the
// registries below stay policy free.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RestaurantError {
    #[error(transparent)]
    Menu(#[from] MenuError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Account(#[from] AccountError),

    #[error("Access denied: {username} lacks the {capability} capability")]
    AccessDenied { username: String, capability: Capability },

    #[error("Menu item not found: {0}")]
    UnknownMenuItem(String),

    #[error("Account not found: {0}")]
    UnknownAccount(String),

    #[error("Cannot remove the account you are logged in with: {0}")]
    SelfRemoval(String),
}

/// Order counts per status plus revenue from completed orders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalesReport {
    pub total_orders: usize,
    pub orders_by_status: Vec<(OrderStatus, usize)>,
    pub revenue: f64,
}

impl SalesReport {
    pub fn count(&self, status: OrderStatus) -> usize {
        self.orders_by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map_or(0, |(_, n)| *n)
    }
}

impl fmt::Display for SalesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== SALES REPORT =====")?;
        writeln!(f, "Total Orders: {}", self.total_orders)?;
        for (status, count) in &self.orders_by_status {
            writeln!(f, "{:<12}: {}", status.as_str(), count)?;
        }
        write!(f, "Revenue (Done): Rp {:.2}", self.revenue)
    }
}

#[derive(Debug)]
pub struct Restaurant {
    config: RestaurantConfig,
    menu: MenuCatalog,
    orders: OrderBook,
    accounts: AccountRegistry,
    metrics: Metrics,
}

impl Restaurant {
    pub fn new(config: RestaurantConfig, metrics: Metrics) -> Result<Self, RestaurantError> {
        let mut restaurant = Self {
            menu: MenuCatalog::new(config.menu_id_width),
            orders: OrderBook::new(),
            accounts: AccountRegistry::new(),
            metrics,
            config,
        };

        if restaurant.config.seed_sample_data {
            restaurant.seed_sample_data()?;
        }
        Ok(restaurant)
    }

    pub fn config(&self) -> &RestaurantConfig {
        &self.config
    }

    pub fn menu(&self) -> &MenuCatalog {
        &self.menu
    }

    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }

    pub fn accounts(&self) -> &AccountRegistry {
        &self.accounts
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    // ------------------------------------------------------------------------
    // Accounts
    // ------------------------------------------------------------------------

    pub fn login(&self, username: &str, password: &str) -> Option<&Account> {
        let account = self.accounts.authenticate(username, password);
        self.metrics.record_login(account.is_some());
        match account {
            Some(account) => tracing::info!(username, role = %account.role(), "Login succeeded"),
            None => tracing::warn!(username, "Login failed"),
        }
        account
    }

    /// Self-service registration, open to anyone
    pub fn register_customer(
        &mut self,
        username: &str,
        password: &str,
        display_name: &str,
        phone: &str,
    ) -> Result<&Account, RestaurantError> {
        match self.accounts.register_customer(username, password, display_name, phone) {
            Ok(account) => Ok(account),
            Err(e) => {
                self.metrics.record_validation_failure("account");
                Err(e.into())
            }
        }
    }

    pub fn add_admin(
        &mut self,
        actor: &str,
        username: &str,
        password: &str,
        display_name: &str,
        department: &str,
        access_level: i32,
    ) -> Result<&Account, RestaurantError> {
        self.authorize(actor, Capability::ManageUsers)?;

        match self
            .accounts
            .register_admin(username, password, display_name, department, access_level, Some(actor))
        {
            Ok(account) => Ok(account),
            Err(e) => {
                self.metrics.record_validation_failure("account");
                Err(e.into())
            }
        }
    }

    /// `Ok(false)` when `username` does not exist
    pub fn remove_account(&mut self, actor: &str, username: &str) -> Result<bool, RestaurantError> {
        self.authorize(actor, Capability::ManageUsers)?;
        if actor == username {
            return Err(RestaurantError::SelfRemoval(username.to_string()));
        }
        Ok(self.accounts.remove(username, Some(actor))?)
    }

    // ------------------------------------------------------------------------
    // Menu
    // ------------------------------------------------------------------------

    pub fn add_menu_item(&mut self, actor: &str, draft: NewMenuItem) -> Result<SharedMenuItem, RestaurantError> {
        self.authorize(actor, Capability::ManageMenu)?;
        self.menu.create(draft).map_err(|e| self.menu_failure(e))
    }

    /// `Ok(None)` when the id is unknown
    pub fn edit_menu_item(
        &mut self,
        actor: &str,
        id: &str,
        patch: &MenuItemPatch,
    ) -> Result<Option<SharedMenuItem>, RestaurantError> {
        self.authorize(actor, Capability::ManageMenu)?;
        self.menu.edit(id, patch).map_err(|e| self.menu_failure(e))
    }

    pub fn set_menu_item_available(&mut self, actor: &str, id: &str, available: bool) -> Result<bool, RestaurantError> {
        self.authorize(actor, Capability::ManageMenu)?;
        Ok(self.menu.set_available(id, available))
    }

    pub fn remove_menu_item(&mut self, actor: &str, id: &str) -> Result<bool, RestaurantError> {
        self.authorize(actor, Capability::ManageMenu)?;
        Ok(self.menu.remove(id))
    }

    // ------------------------------------------------------------------------
    // Orders
    // ------------------------------------------------------------------------

    /// Place an order for `actor` and return its id.
    ///
    /// Every line is checked before the order is opened, so a rejected order
    /// leaves no trace. Customers earn loyalty points on the total.
    pub fn place_order(
        &mut self,
        actor: &str,
        table_number: &str,
        requests: &[OrderLineRequest],
    ) -> Result<String, RestaurantError> {
        let (customer_name, role) = {
            let account = self.require_account(actor)?;
            (account.display_name().to_string(), account.role())
        };

        let lines = match self.resolve_lines(table_number, requests) {
            Ok(lines) => lines,
            Err(e) => {
                self.metrics.record_validation_failure("order");
                tracing::warn!(username = actor, error = %e, "Order rejected");
                return Err(e);
            }
        };

        let order_id = self.orders.open(table_number, &customer_name, Some(actor))?;
        for (item, quantity) in &lines {
            self.orders.add_line(&order_id, item, *quantity)?;
        }

        let total = self.orders.total(&order_id).unwrap_or_default();
        self.metrics.record_order_placed();
        tracing::info!(order_id = %order_id, username = actor, total, "Order placed");

        if role == Role::Customer {
            self.award_points(actor, total)?;
        }

        Ok(order_id)
    }

    /// `Ok(false)` when the order does not exist or already has `status`
    pub fn update_order_status(
        &mut self,
        actor: &str,
        order_id: &str,
        status: OrderStatus,
    ) -> Result<bool, RestaurantError> {
        self.authorize(actor, Capability::ManageOrders)?;

        let Some(from) = self.orders.get(order_id).map(Order::status) else {
            return Ok(false);
        };

        match self.orders.set_status(order_id, status, Some(actor)) {
            Ok(changed) => {
                if changed {
                    self.metrics.record_status_transition(from.as_str(), status.as_str(), true);
                }
                Ok(changed)
            }
            Err(e) => {
                self.metrics.record_status_transition(from.as_str(), status.as_str(), false);
                tracing::warn!(order_id, from = %from, to = %status, "Order status change rejected");
                Err(e.into())
            }
        }
    }

    /// Orders placed under the actor's display name
    pub fn orders_for(&self, actor: &str) -> Result<Vec<&Order>, RestaurantError> {
        let account = self.require_account(actor)?;
        Ok(self.orders.by_customer(account.display_name()).collect())
    }

    pub fn receipt(&self, order_id: &str) -> Option<String> {
        self.orders.render(order_id)
    }

    pub fn sales_report(&self, actor: &str) -> Result<SalesReport, RestaurantError> {
        self.authorize(actor, Capability::ViewReports)?;

        let orders = self.orders.list();
        let orders_by_status = OrderStatus::ALL
            .into_iter()
            .map(|status| (status, orders.iter().filter(|o| o.status() == status).count()))
            .collect();
        let revenue = orders
            .iter()
            .filter(|o| o.status() == OrderStatus::Done)
            .map(Order::total)
            .sum();

        Ok(SalesReport {
            total_orders: orders.len(),
            orders_by_status,
            revenue,
        })
    }

    /// Order total after the customer's tier discount. Admins pay full price.
    pub fn discounted_total(&self, order_id: &str, username: &str) -> Option<f64> {
        let total = self.orders.total(order_id)?;
        let account = self.accounts.find(username)?;
        let rate = account.as_customer().map_or(0.0, CustomerProfile::discount_rate);
        Some(total * (1.0 - rate))
    }

    // ------------------------------------------------------------------------
    // Sample data
    // ------------------------------------------------------------------------

    /// Default menu plus one admin and one customer account
    pub fn seed_sample_data(&mut self) -> Result<(), RestaurantError> {
        for draft in sample_menu() {
            self.menu.create(draft)?;
        }

        self.accounts
            .register_admin("admin", "admin123", "Administrator", "Management", 3, None)?;
        self.accounts
            .register_customer("customer", "customer123", "Regular Customer", "081234567890")?;

        tracing::debug!(
            menu_items = self.menu.len(),
            accounts = self.accounts.len(),
            "Sample data seeded"
        );
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    fn require_account(&self, username: &str) -> Result<&Account, RestaurantError> {
        self.accounts
            .find(username)
            .ok_or_else(|| RestaurantError::UnknownAccount(username.to_string()))
    }

    fn authorize(&self, actor: &str, capability: Capability) -> Result<&Account, RestaurantError> {
        let account = self.require_account(actor)?;
        if !account.has_capability(capability) {
            self.metrics.record_capability_denial(capability.as_str());
            tracing::warn!(username = actor, capability = %capability, "Capability denied");
            return Err(RestaurantError::AccessDenied {
                username: actor.to_string(),
                capability,
            });
        }
        Ok(account)
    }

    fn menu_failure(&self, error: MenuError) -> RestaurantError {
        self.metrics.record_validation_failure("menu_item");
        error.into()
    }

    fn resolve_lines(
        &self,
        table_number: &str,
        requests: &[OrderLineRequest],
    ) -> Result<Vec<(SharedMenuItem, u32)>, RestaurantError> {
        if table_number.trim().is_empty() {
            return Err(OrderError::EmptyTableNumber.into());
        }
        if requests.is_empty() {
            return Err(OrderError::EmptyOrder.into());
        }

        let lines = requests
            .iter()
            .map(|request| -> Result<_, RestaurantError> {
                if request.quantity == 0 {
                    return Err(OrderError::InvalidQuantity(request.quantity).into());
                }
                let item = self
                    .menu
                    .find(&request.menu_item_id)
                    .ok_or_else(|| RestaurantError::UnknownMenuItem(request.menu_item_id.clone()))?;
                if !item.borrow().is_available() {
                    let name = item.borrow().name().to_string();
                    return Err(OrderError::ItemUnavailable(name).into());
                }
                Ok((item, request.quantity))
            })
            .collect::<Result<Vec<_>, _>>()?;

        // Repeated ids merge into one line, whose quantity must still fit
        let mut merged: BTreeMap<&str, u32> = BTreeMap::new();
        for request in requests {
            let quantity = merged.entry(request.menu_item_id.as_str()).or_default();
            *quantity = quantity
                .checked_add(request.quantity)
                .ok_or_else(|| OrderError::QuantityOverflow(request.menu_item_id.clone()))?;
        }

        Ok(lines)
    }

    fn award_points(&mut self, username: &str, total: f64) -> Result<(), RestaurantError> {
        let points = self.config.points_for(total);
        if points == 0 {
            return Ok(());
        }

        let delta = i64::try_from(points).unwrap_or(i64::MAX);
        self.accounts.add_points(username, delta)?;
        self.metrics.record_points_awarded(points);
        tracing::info!(username, points, "Loyalty points awarded");
        Ok(())
    }
}

fn sample_menu() -> Vec<NewMenuItem> {
    let coffee = |name: &str, price: f64, origin: &str, roast: &str| NewMenuItem::Coffee {
        name: name.into(),
        price,
        origin: origin.into(),
        roast: roast.into(),
    };

    vec![
        coffee("Espresso", 18000.0, "Arabica", "Medium"),
        coffee("Cappuccino", 25000.0, "Blend", "Medium-Dark"),
        coffee("Latte", 23000.0, "Arabica", "Light"),
        coffee("Americano", 20000.0, "Robusta", "Dark"),
        NewMenuItem::Food {
            name: "Croissant".into(),
            price: 15000.0,
            vegetarian: false,
            topping: "No Topping".into(),
        },
        NewMenuItem::Food {
            name: "Cheesecake".into(),
            price: 28000.0,
            vegetarian: true,
            topping: "Fruit".into(),
        },
        NewMenuItem::Plain {
            name: "Mineral Water".into(),
            category: "Beverage".into(),
            price: 8000.0,
        },
        NewMenuItem::Beverage {
            name: "Iced Coffee".into(),
            price: 10000.0,
            cold: true,
            sweetness: 3,
        },
        NewMenuItem::Beverage {
            name: "Coffee Milk".into(),
            price: 15000.0,
            cold: false,
            sweetness: 2,
        },
    ]
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::LoyaltyTier;

    fn seeded() -> Restaurant {
        Restaurant::new(RestaurantConfig::default(), Metrics::new().unwrap()).unwrap()
    }

    fn line(id: &str, quantity: u32) -> OrderLineRequest {
        OrderLineRequest::new(id, quantity)
    }

    fn counter(restaurant: &Restaurant, name: &str) -> f64 {
        restaurant
            .metrics()
            .registry()
            .gather()
            .iter()
            .find(|m| m.name() == name)
            .map_or(0.0, |m| m.metric.iter().filter_map(|s| s.counter.value).sum())
    }

    #[test]
    fn test_seeded_sample_data() {
        let restaurant = seeded();
        assert_eq!(restaurant.menu().len(), 9);
        assert_eq!(restaurant.accounts().len(), 2);

        let latte = restaurant.menu().find("03").unwrap();
        assert_eq!(latte.borrow().name(), "Latte");
        assert_eq!(restaurant.menu().describe("09").unwrap(), "Coffee Milk (Hot, Sweetness: 2/5)");
    }

    #[test]
    fn test_unseeded_restaurant_is_empty() {
        let restaurant = Restaurant::new(RestaurantConfig::unseeded(), Metrics::new().unwrap()).unwrap();
        assert!(restaurant.menu().is_empty());
        assert!(restaurant.accounts().is_empty());
    }

    #[test]
    fn test_login() {
        let restaurant = seeded();
        assert_eq!(restaurant.login("admin", "admin123").unwrap().role(), Role::Admin);
        assert!(restaurant.login("admin", "wrong").is_none());
        assert!(restaurant.login("ghost", "admin123").is_none());
        assert_eq!(counter(&restaurant, "logins_total"), 3.0);
    }

    #[test]
    fn test_latte_order_scenario() {
        let mut restaurant = seeded();
        assert!(restaurant.menu().describe("03").unwrap().contains("Arabica"));

        let order_id = restaurant
            .place_order("customer", "T1", &[line("03", 2), line("03", 1)])
            .unwrap();

        let order = restaurant.orders().get(&order_id).unwrap();
        assert_eq!(order.customer_name(), "Regular Customer");
        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].quantity(), 3);
        assert_eq!(order.total(), 69000.0);

        assert_eq!(restaurant.update_order_status("admin", &order_id, OrderStatus::Done), Ok(true));
        assert_eq!(
            restaurant.update_order_status("admin", &order_id, OrderStatus::Processing),
            Err(RestaurantError::Order(OrderError::InvalidStatusTransition {
                from: OrderStatus::Done,
                to: OrderStatus::Processing,
            }))
        );
        assert_eq!(restaurant.orders().get(&order_id).unwrap().status(), OrderStatus::Done);
        assert_eq!(counter(&restaurant, "order_transitions_rejected_total"), 1.0);
    }

    #[test]
    fn test_customer_earns_points() {
        let mut restaurant = seeded();
        restaurant.place_order("customer", "T1", &[line("03", 3)]).unwrap();

        let customer = restaurant.accounts().find("customer").unwrap().as_customer().unwrap();
        assert_eq!(customer.points(), 6);
        assert_eq!(customer.tier(), LoyaltyTier::Bronze);
        assert_eq!(counter(&restaurant, "loyalty_points_awarded_total"), 6.0);
    }

    #[test]
    fn test_admin_orders_earn_nothing() {
        let mut restaurant = seeded();
        restaurant.place_order("admin", "T2", &[line("01", 1)]).unwrap();
        assert_eq!(counter(&restaurant, "loyalty_points_awarded_total"), 0.0);
        assert_eq!(counter(&restaurant, "orders_placed_total"), 1.0);
    }

    #[test]
    fn test_rejected_orders_leave_no_trace() {
        let mut restaurant = seeded();

        assert_eq!(
            restaurant.place_order("customer", "T1", &[]),
            Err(RestaurantError::Order(OrderError::EmptyOrder))
        );
        assert_eq!(
            restaurant.place_order("customer", " ", &[line("01", 1)]),
            Err(RestaurantError::Order(OrderError::EmptyTableNumber))
        );
        assert_eq!(
            restaurant.place_order("customer", "T1", &[line("01", 1), line("42", 1)]),
            Err(RestaurantError::UnknownMenuItem("42".into()))
        );
        assert_eq!(
            restaurant.place_order("customer", "T1", &[line("01", 0)]),
            Err(RestaurantError::Order(OrderError::InvalidQuantity(0)))
        );
        assert_eq!(
            restaurant.place_order("ghost", "T1", &[line("01", 1)]),
            Err(RestaurantError::UnknownAccount("ghost".into()))
        );

        assert!(restaurant.orders().is_empty());
        assert_eq!(counter(&restaurant, "validation_failures_total"), 4.0);

        // Nothing consumed an order id
        assert_eq!(restaurant.place_order("customer", "T1", &[line("01", 1)]).unwrap(), "1");
    }

    #[test]
    fn test_merged_quantity_overflow_is_rejected() {
        let mut restaurant = seeded();

        assert_eq!(
            restaurant.place_order("customer", "T1", &[line("08", u32::MAX), line("08", 1)]),
            Err(RestaurantError::Order(OrderError::QuantityOverflow("08".into())))
        );
        assert!(restaurant.orders().is_empty());
        assert_eq!(counter(&restaurant, "orders_placed_total"), 0.0);
        assert_eq!(counter(&restaurant, "validation_failures_total"), 1.0);

        // A single huge line is still fine
        let order_id = restaurant.place_order("admin", "T1", &[line("08", u32::MAX)]).unwrap();
        assert_eq!(order_id, "1");
    }

    #[test]
    fn test_unavailable_item_is_rejected() {
        let mut restaurant = seeded();
        assert_eq!(restaurant.set_menu_item_available("admin", "08", false), Ok(true));

        assert_eq!(
            restaurant.place_order("customer", "T1", &[line("08", 1)]),
            Err(RestaurantError::Order(OrderError::ItemUnavailable("Iced Coffee".into())))
        );
    }

    #[test]
    fn test_customers_cannot_manage() {
        let mut restaurant = seeded();
        let order_id = restaurant.place_order("customer", "T1", &[line("01", 1)]).unwrap();

        assert!(matches!(
            restaurant.update_order_status("customer", &order_id, OrderStatus::Done),
            Err(RestaurantError::AccessDenied { capability: Capability::ManageOrders, .. })
        ));
        assert!(matches!(
            restaurant.remove_menu_item("customer", "01"),
            Err(RestaurantError::AccessDenied { capability: Capability::ManageMenu, .. })
        ));
        assert!(matches!(
            restaurant.sales_report("customer"),
            Err(RestaurantError::AccessDenied { capability: Capability::ViewReports, .. })
        ));
        assert_eq!(counter(&restaurant, "capability_denials_total"), 3.0);
        assert_eq!(restaurant.menu().len(), 9);
    }

    #[test]
    fn test_update_unknown_order_is_soft() {
        let mut restaurant = seeded();
        assert_eq!(restaurant.update_order_status("admin", "7", OrderStatus::Done), Ok(false));
    }

    #[test]
    fn test_user_management_by_access_level() {
        let mut restaurant = seeded();
        restaurant
            .add_admin("admin", "clerk", "pw", "Clerk", "Front", 1)
            .unwrap();
        restaurant
            .add_admin("admin", "lead", "pw", "Lead", "Front", 2)
            .unwrap();

        assert!(matches!(
            restaurant.add_admin("lead", "other", "pw", "Other", "Front", 1),
            Err(RestaurantError::AccessDenied { capability: Capability::ManageUsers, .. })
        ));
        assert!(restaurant.sales_report("lead").is_ok());
        assert!(restaurant.sales_report("clerk").is_err());

        assert_eq!(
            restaurant.add_admin("admin", "bad", "pw", "Bad", "Front", 0).err(),
            Some(RestaurantError::Account(AccountError::InvalidAccessLevel(0)))
        );
    }

    #[test]
    fn test_remove_account() {
        let mut restaurant = seeded();
        assert_eq!(
            restaurant.remove_account("admin", "admin"),
            Err(RestaurantError::SelfRemoval("admin".into()))
        );
        assert_eq!(restaurant.remove_account("admin", "ghost"), Ok(false));
        assert_eq!(restaurant.remove_account("admin", "customer"), Ok(true));
        assert!(restaurant.login("customer", "customer123").is_none());
    }

    #[test]
    fn test_register_customer_rejects_duplicate() {
        let mut restaurant = seeded();
        restaurant.register_customer("dina", "pw", "Dina", "0811").unwrap();
        assert_eq!(
            restaurant.register_customer("dina", "pw", "Dina", "0811").err(),
            Some(RestaurantError::Account(AccountError::DuplicateUsername("dina".into())))
        );
    }

    #[test]
    fn test_orders_for_matches_display_name() {
        let mut restaurant = seeded();
        restaurant.register_customer("dina", "pw", "Dina", "0811").unwrap();
        restaurant.place_order("customer", "T1", &[line("01", 1)]).unwrap();
        restaurant.place_order("dina", "T2", &[line("02", 1)]).unwrap();
        restaurant.place_order("customer", "T3", &[line("03", 1)]).unwrap();

        let ids: Vec<_> = restaurant
            .orders_for("customer")
            .unwrap()
            .into_iter()
            .map(Order::id)
            .collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_sales_report() {
        let mut restaurant = seeded();
        let first = restaurant.place_order("customer", "T1", &[line("03", 3)]).unwrap();
        let second = restaurant.place_order("customer", "T2", &[line("01", 1)]).unwrap();
        restaurant.place_order("customer", "T3", &[line("02", 1)]).unwrap();

        restaurant.update_order_status("admin", &first, OrderStatus::Done).unwrap();
        restaurant.update_order_status("admin", &second, OrderStatus::Cancelled).unwrap();

        let report = restaurant.sales_report("admin").unwrap();
        assert_eq!(report.total_orders, 3);
        assert_eq!(report.count(OrderStatus::New), 1);
        assert_eq!(report.count(OrderStatus::Done), 1);
        assert_eq!(report.count(OrderStatus::Cancelled), 1);
        assert_eq!(report.revenue, 69000.0);
        assert!(report.to_string().contains("Revenue (Done): Rp 69000.00"));
    }

    #[test]
    fn test_discounted_total_follows_tier() {
        let mut restaurant = seeded();
        restaurant.register_customer("dina", "pw", "Dina", "0811").unwrap();

        // 10 Cappuccinos = 250000 -> 25 points, still Bronze
        let order_id = restaurant.place_order("dina", "T1", &[line("02", 10)]).unwrap();
        assert_eq!(restaurant.discounted_total(&order_id, "dina"), Some(250000.0));

        // 75 more Americanos = 1500000 -> +150 points, Silver
        restaurant.place_order("dina", "T1", &[line("04", 75)]).unwrap();
        let discounted = restaurant.discounted_total(&order_id, "dina").unwrap();
        assert!((discounted - 237500.0).abs() < 1e-6);

        assert_eq!(restaurant.discounted_total(&order_id, "admin"), Some(250000.0));
        assert_eq!(restaurant.discounted_total("99", "dina"), None);
        assert_eq!(restaurant.discounted_total(&order_id, "ghost"), None);
    }

    #[test]
    fn test_menu_edit_failure_is_counted() {
        let mut restaurant = seeded();
        let patch = MenuItemPatch { price: Some(-1.0), ..Default::default() };

        assert_eq!(
            restaurant.edit_menu_item("admin", "01", &patch).err(),
            Some(RestaurantError::Menu(MenuError::InvalidPrice(-1.0)))
        );
        assert_eq!(counter(&restaurant, "validation_failures_total"), 1.0);
        assert_eq!(restaurant.menu().find("01").unwrap().borrow().price(), 18000.0);
    }

    #[test]
    fn test_add_and_remove_menu_item() {
        let mut restaurant = seeded();
        let item = restaurant
            .add_menu_item(
                "admin",
                NewMenuItem::Food {
                    name: "Brownies".into(),
                    price: 12000.0,
                    vegetarian: true,
                    topping: "chocolate".into(),
                },
            )
            .unwrap();
        assert_eq!(item.borrow().id(), "10");
        assert_eq!(
            restaurant.menu().describe("10").unwrap(),
            "Brownies (Vegetarian, Topping: Chocolate)"
        );

        assert_eq!(restaurant.remove_menu_item("admin", "10"), Ok(true));
        assert_eq!(restaurant.remove_menu_item("admin", "10"), Ok(false));
    }
}
