use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

// ============================================================================
// Metrics Module - Prometheus counters for business operations
// ============================================================================
//
// Provides counters for:
// - Order placement and status transitions (accepted and rejected)
// - Validation failures per entity
// - Loyalty points awarded
// - Logins and capability denials
//
// There is no HTTP endpoint; `render()` returns the text exposition format.
// ============================================================================

pub struct Metrics {
    registry: Registry,

    // Order Metrics
    pub orders_placed: IntCounter,
    pub order_status_transitions: IntCounterVec,
    pub order_transitions_rejected: IntCounterVec,

    // Validation Metrics
    pub validation_failures: IntCounterVec,

    // Loyalty Metrics
    pub loyalty_points_awarded: IntCounter,

    // Access Metrics
    pub logins: IntCounterVec,
    pub capability_denials: IntCounterVec,
}

impl Metrics {
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        // Order Metrics
        let orders_placed = IntCounter::new("orders_placed_total", "Total orders placed")?;
        registry.register(Box::new(orders_placed.clone()))?;

        let order_status_transitions = IntCounterVec::new(
            Opts::new("order_status_transitions_total", "Accepted order status transitions"),
            &["from", "to"],
        )?;
        registry.register(Box::new(order_status_transitions.clone()))?;

        let order_transitions_rejected = IntCounterVec::new(
            Opts::new("order_transitions_rejected_total", "Order status transitions rejected by the transition table"),
            &["from", "to"],
        )?;
        registry.register(Box::new(order_transitions_rejected.clone()))?;

        // Validation Metrics
        let validation_failures = IntCounterVec::new(
            Opts::new("validation_failures_total", "Rejected inputs by entity"),
            &["entity"],
        )?;
        registry.register(Box::new(validation_failures.clone()))?;

        // Loyalty Metrics
        let loyalty_points_awarded = IntCounter::new(
            "loyalty_points_awarded_total",
            "Total loyalty points awarded to customers",
        )?;
        registry.register(Box::new(loyalty_points_awarded.clone()))?;

        // Access Metrics
        let logins = IntCounterVec::new(
            Opts::new("logins_total", "Login attempts by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(logins.clone()))?;

        let capability_denials = IntCounterVec::new(
            Opts::new("capability_denials_total", "Operations refused for missing capability"),
            &["capability"],
        )?;
        registry.register(Box::new(capability_denials.clone()))?;

        Ok(Self {
            registry,
            orders_placed,
            order_status_transitions,
            order_transitions_rejected,
            validation_failures,
            loyalty_points_awarded,
            logins,
            capability_denials,
        })
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn record_order_placed(&self) {
        self.orders_placed.inc();
    }

    pub fn record_status_transition(&self, from: &str, to: &str, accepted: bool) {
        if accepted {
            self.order_status_transitions.with_label_values(&[from, to]).inc();
        } else {
            self.order_transitions_rejected.with_label_values(&[from, to]).inc();
        }
    }

    pub fn record_validation_failure(&self, entity: &str) {
        self.validation_failures.with_label_values(&[entity]).inc();
    }

    pub fn record_points_awarded(&self, points: u64) {
        self.loyalty_points_awarded.inc_by(points);
    }

    pub fn record_login(&self, success: bool) {
        let outcome = if success { "success" } else { "failure" };
        self.logins.with_label_values(&[outcome]).inc();
    }

    pub fn record_capability_denial(&self, capability: &str) {
        self.capability_denials.with_label_values(&[capability]).inc();
    }

    /// Text exposition of every registered metric
    pub fn render(&self) -> anyhow::Result<String> {
        let mut buffer = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buffer)?;
        Ok(String::from_utf8(buffer)?)
    }
}

impl std::fmt::Debug for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Metrics")
            .field("families", &self.registry.gather().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new().unwrap();
        metrics.record_order_placed();
        assert!(!metrics.registry.gather().is_empty());
    }

    #[test]
    fn test_record_status_transition() {
        let metrics = Metrics::new().unwrap();
        metrics.record_status_transition("New", "Done", true);
        metrics.record_status_transition("Done", "Processing", false);
        metrics.record_status_transition("Done", "Processing", false);

        let gathered = metrics.registry.gather();
        let accepted = gathered.iter().find(|m| m.name() == "order_status_transitions_total").unwrap();
        assert_eq!(accepted.metric[0].counter.value, Some(1.0));

        let rejected = gathered.iter().find(|m| m.name() == "order_transitions_rejected_total").unwrap();
        assert_eq!(rejected.metric[0].counter.value, Some(2.0));
    }

    #[test]
    fn test_record_logins() {
        let metrics = Metrics::new().unwrap();
        metrics.record_login(true);
        metrics.record_login(false);

        let gathered = metrics.registry.gather();
        let logins = gathered.iter().find(|m| m.name() == "logins_total").unwrap();
        assert_eq!(logins.metric.len(), 2); // One series per outcome
    }

    #[test]
    fn test_record_points_awarded() {
        let metrics = Metrics::new().unwrap();
        metrics.record_points_awarded(6);
        metrics.record_points_awarded(2);

        let gathered = metrics.registry.gather();
        let points = gathered.iter().find(|m| m.name() == "loyalty_points_awarded_total").unwrap();
        assert_eq!(points.metric[0].counter.value, Some(8.0));
    }

    #[test]
    fn test_render_text_format() {
        let metrics = Metrics::new().unwrap();
        metrics.record_capability_denial("manage_users");
        metrics.record_validation_failure("menu_item");

        let text = metrics.render().unwrap();
        assert!(text.contains("capability_denials_total{capability=\"manage_users\"} 1"));
        assert!(text.contains("validation_failures_total{entity=\"menu_item\"} 1"));
    }
}
