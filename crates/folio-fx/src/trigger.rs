//! Fire-once bookkeeping for viewport triggers
//!
//! The shell hands each observed element a [`TriggerId`] at registration
//! and reports every intersection entry here. An element fires on its first
//! entering crossing and never again, no matter how often it re-enters.

/// Browsers report ratios slightly under the threshold they fired for
const RATIO_TOLERANCE: f64 = 1e-3;

/// Identifier of one observed element within a registry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriggerId(u32);

impl TriggerId {
    /// Index into the registry
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Per-element trigger state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerState {
    /// Registered, waiting for its first qualifying intersection
    Pending,
    /// Fired; the element is no longer observed
    Triggered,
}

/// Trigger state for one set of observed elements sharing a threshold
#[derive(Clone, Debug)]
pub struct TriggerRegistry {
    threshold: f64,
    states: Vec<TriggerState>,
    pending: usize,
}

impl TriggerRegistry {
    /// Create an empty registry. `threshold` is clamped to `[0, 1]`.
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            states: Vec::new(),
            pending: 0,
        }
    }

    /// Visible fraction required to fire
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Register a new element in the `Pending` state
    pub fn register(&mut self) -> TriggerId {
        let id = TriggerId(self.states.len() as u32);
        self.states.push(TriggerState::Pending);
        self.pending += 1;
        id
    }

    /// State of an element, `None` for unknown ids
    pub fn state(&self, id: TriggerId) -> Option<TriggerState> {
        self.states.get(id.index()).copied()
    }

    /// Report an intersection entry
    ///
    /// Returns true exactly once per element: on the first entry that is
    /// intersecting at or above the threshold. The caller must unobserve
    /// the element and run its effect when this returns true.
    pub fn on_entry(&mut self, id: TriggerId, is_intersecting: bool, ratio: f64) -> bool {
        if !is_intersecting || ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        match self.states.get_mut(id.index()) {
            Some(state) if *state == TriggerState::Pending => {
                *state = TriggerState::Triggered;
                self.pending -= 1;
                true
            }
            _ => false,
        }
    }

    /// Number of elements still waiting
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// True once every registered element has fired
    pub fn is_drained(&self) -> bool {
        self.pending == 0
    }

    /// Total registered elements
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Whether nothing was ever registered
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_on_entry() {
        let mut registry = TriggerRegistry::new(0.5);
        let id = registry.register();

        assert!(registry.on_entry(id, true, 0.6));
        assert_eq!(registry.state(id), Some(TriggerState::Triggered));

        // Leave and re-enter
        assert!(!registry.on_entry(id, false, 0.0));
        assert!(!registry.on_entry(id, true, 0.9));
    }

    #[test]
    fn test_exit_only_crossing_ignored() {
        let mut registry = TriggerRegistry::new(0.1);
        let id = registry.register();
        assert!(!registry.on_entry(id, false, 0.2));
        assert_eq!(registry.state(id), Some(TriggerState::Pending));
    }

    #[test]
    fn test_below_threshold_ignored() {
        let mut registry = TriggerRegistry::new(0.5);
        let id = registry.register();
        assert!(!registry.on_entry(id, true, 0.2));
        assert!(registry.on_entry(id, true, 0.5));
    }

    #[test]
    fn test_drains() {
        let mut registry = TriggerRegistry::new(0.1);
        let a = registry.register();
        let b = registry.register();
        assert_eq!(registry.pending(), 2);

        registry.on_entry(a, true, 1.0);
        assert!(!registry.is_drained());
        registry.on_entry(b, true, 1.0);
        assert!(registry.is_drained());
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unknown_id() {
        let mut registry = TriggerRegistry::new(0.1);
        let mut other = TriggerRegistry::new(0.1);
        other.register();
        let foreign = other.register();
        assert!(!registry.on_entry(foreign, true, 1.0));
        assert_eq!(registry.state(foreign), None);
    }

    #[test]
    fn test_threshold_clamped() {
        assert_eq!(TriggerRegistry::new(3.0).threshold(), 1.0);
        assert_eq!(TriggerRegistry::new(-1.0).threshold(), 0.0);
    }
}
