use std::fmt;

/// Total and solved item counts for one group.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    pub total: u64,
    pub solved: u64,
}

impl Tally {
    pub fn new(total: u64, solved: u64) -> Self {
        Tally { total, solved }
    }

    /// Count one more item, solved or not.
    pub fn count(&mut self, solved: bool) {
        self.total += 1;
        if solved {
            self.solved += 1;
        }
    }

    /// Fraction of solved items, `None` when nothing has been counted.
    pub fn ratio(&self) -> Option<f64> {
        if self.total == 0 {
            return None;
        }
        Some(self.solved as f64 / self.total as f64)
    }

    /// Solved fraction as a percentage with two decimals, eg. `66.67%`.
    ///
    /// An empty tally has no meaningful percentage and shows as `N/A`.
    pub fn percentage(&self) -> String {
        match self.ratio() {
            Some(r) => format!("{:.2}%", r * 100.0),
            None => "N/A".into(),
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} {}", self.solved, self.total, self.percentage())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage() {
        assert_eq!(Tally::new(3, 1).percentage(), "33.33%");
        assert_eq!(Tally::new(2, 2).percentage(), "100.00%");
        assert_eq!(Tally::new(5, 0).percentage(), "0.00%");
        assert_eq!(Tally::new(3, 2).percentage(), "66.67%");
        assert_eq!(Tally::new(8, 1).percentage(), "12.50%");
        assert_eq!(Tally::new(0, 0).percentage(), "N/A");
    }

    #[test]
    fn test_count() {
        let mut t = Tally::default();
        t.count(true);
        t.count(false);
        t.count(false);
        assert_eq!(t, Tally::new(3, 1));
        assert_eq!(t.to_string(), "1/3 33.33%");
    }

    #[test]
    fn test_empty_ratio() {
        assert_eq!(Tally::default().ratio(), None);
        assert_eq!(Tally::new(4, 1).ratio(), Some(0.25));
    }
}
