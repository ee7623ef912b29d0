//! Two-click delete confirmation.
//!
//! The first click on a row arms it and hands back a generation number; the
//! caller starts a timer and calls [`DeleteConfirm::expire`] with that number
//! when the window closes. A second click on the same armed row confirms.
//! Clicking another row re-arms for that row. An expiry only disarms the
//! arming it was started for, so a stale timer never cancels a newer arming.

/// Outcome of a delete click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfirmStep {
    /// Row is now armed; start a timer for this generation.
    Armed { generation: u64 },
    /// Second click inside the window; perform the delete.
    Confirmed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DeleteConfirm<K> {
    armed: Option<(K, u64)>,
    generation: u64,
}

impl<K> Default for DeleteConfirm<K> {
    fn default() -> Self {
        Self {
            armed: None,
            generation: 0,
        }
    }
}

impl<K: PartialEq + Clone> DeleteConfirm<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn click(&mut self, key: &K) -> ConfirmStep {
        match &self.armed {
            Some((armed, _)) if armed == key => {
                self.armed = None;
                ConfirmStep::Confirmed
            }
            _ => {
                self.generation += 1;
                self.armed = Some((key.clone(), self.generation));
                ConfirmStep::Armed {
                    generation: self.generation,
                }
            }
        }
    }

    /// Close the window opened by `generation`. Returns whether anything was disarmed.
    pub fn expire(&mut self, generation: u64) -> bool {
        match self.armed {
            Some((_, g)) if g == generation => {
                self.armed = None;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.armed = None;
    }

    pub fn is_armed(&self, key: &K) -> bool {
        matches!(&self.armed, Some((armed, _)) if armed == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_clicks_confirm() {
        let mut c = DeleteConfirm::new();
        assert!(matches!(c.click(&1), ConfirmStep::Armed { .. }));
        assert!(c.is_armed(&1));
        assert_eq!(c.click(&1), ConfirmStep::Confirmed);
        assert!(!c.is_armed(&1));
    }

    #[test]
    fn test_single_click_does_not_confirm() {
        let mut c = DeleteConfirm::new();
        let ConfirmStep::Armed { generation } = c.click(&1) else {
            panic!("first click must arm");
        };
        assert!(c.expire(generation));
        // After the window closed, the next click arms again instead of deleting.
        assert!(matches!(c.click(&1), ConfirmStep::Armed { .. }));
    }

    #[test]
    fn test_other_row_rearms() {
        let mut c = DeleteConfirm::new();
        c.click(&1);
        assert!(matches!(c.click(&2), ConfirmStep::Armed { .. }));
        assert!(!c.is_armed(&1));
        assert!(c.is_armed(&2));
        // Row 1 needs two fresh clicks now.
        assert!(matches!(c.click(&1), ConfirmStep::Armed { .. }));
        assert_eq!(c.click(&1), ConfirmStep::Confirmed);
    }

    #[test]
    fn test_stale_timer_keeps_newer_arming() {
        let mut c = DeleteConfirm::new();
        let ConfirmStep::Armed { generation: first } = c.click(&1) else {
            panic!("first click must arm");
        };
        let ConfirmStep::Armed { generation: second } = c.click(&2) else {
            panic!("other row must arm");
        };
        assert_ne!(first, second);
        assert!(!c.expire(first));
        assert!(c.is_armed(&2));
        assert!(c.expire(second));
        assert!(!c.is_armed(&2));
    }

    #[test]
    fn test_reset() {
        let mut c = DeleteConfirm::new();
        c.click(&"row");
        c.reset();
        assert!(!c.is_armed(&"row"));
    }

    #[test]
    fn test_unit_key_for_single_target() {
        let mut c = DeleteConfirm::<()>::new();
        assert!(matches!(c.click(&()), ConfirmStep::Armed { .. }));
        assert_eq!(c.click(&()), ConfirmStep::Confirmed);
    }
}
