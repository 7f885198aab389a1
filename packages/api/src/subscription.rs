//! Subscription capability flag. Billing never shipped, so every check
//! passes and the counters are no-ops; the type exists so the editor asks a
//! capability question rather than hardcoding "free".

/// The current user's (stubbed) subscription state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Subscription;

impl Subscription {
    pub fn new() -> Self {
        Self
    }

    /// Whether another presentation may be created. Always true.
    pub fn can_create_presentation(&self) -> bool {
        true
    }

    /// Record a created presentation. No-op until billing exists.
    pub fn record_presentation(&self) {}

    /// Whether the user is on a paid plan. Always false.
    pub fn is_paid(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_everything_is_allowed() {
        let subscription = Subscription::new();
        assert!(subscription.can_create_presentation());
        assert!(!subscription.is_paid());
        subscription.record_presentation();
        assert!(subscription.can_create_presentation());
    }
}
