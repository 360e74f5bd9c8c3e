// ============================================================================
// Sequential Id Allocator
// ============================================================================
//
// Each registry owns one allocator. Counters start at 1, only move forward,
// and are never persisted.
//
// ============================================================================

#[derive(Debug, Clone)]
pub struct IdAllocator {
    next: u64,
    width: usize,
}

impl IdAllocator {
    /// Zero-pad every id to at least `width` digits (0 or 1 = no padding)
    pub fn new(width: usize) -> Self {
        Self { next: 1, width }
    }

    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> String {
        let id = format!("{:0width$}", self.next, width = self.width);
        self.next += 1;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_padded_ids() {
        let mut ids = IdAllocator::new(2);
        assert_eq!(ids.next(), "01");
        assert_eq!(ids.next(), "02");
    }

    #[test]
    fn test_unpadded_ids() {
        let mut ids = IdAllocator::new(1);
        assert_eq!(ids.next(), "1");
        assert_eq!(ids.next(), "2");
    }

    #[test]
    fn test_ids_widen_past_padding() {
        let mut ids = IdAllocator::new(2);
        let last = (0..100).map(|_| ids.next()).last().unwrap();
        assert_eq!(last, "100");
    }

    #[test]
    fn test_allocators_are_independent() {
        let mut menu = IdAllocator::new(2);
        let mut orders = IdAllocator::new(1);
        menu.next();
        menu.next();
        assert_eq!(orders.next(), "1");
        assert_eq!(menu.next(), "03");
    }
}
