// ============================================================================
// Restaurant Configuration
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantConfig {
    /// Spend needed for one loyalty point (points = floor(total / this))
    pub points_per_spend: f64,
    /// Seed the sample menu and the default admin/customer accounts
    pub seed_sample_data: bool,
    /// Zero-pad width of menu item ids
    pub menu_id_width: usize,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        Self {
            points_per_spend: 10000.0,
            seed_sample_data: true,
            menu_id_width: 2,
        }
    }
}

impl RestaurantConfig {
    /// Empty restaurant, same rules
    pub fn unseeded() -> Self {
        Self {
            seed_sample_data: false,
            ..Self::default()
        }
    }

    /// Loyalty points earned for an order total. Never negative.
    pub fn points_for(&self, total: f64) -> u64 {
        if self.points_per_spend.is_nan() || self.points_per_spend <= 0.0 || !total.is_finite() || total <= 0.0 {
            return 0;
        }
        (total / self.points_per_spend).floor() as u64
    }
}
