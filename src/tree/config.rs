//! Configuration types for traversals

/// Which phase runs first at every level of a traversal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Order {
    /// Report a level's own entries before descending into its containers.
    /// Shallow entries come out before deeper ones.
    #[default]
    ShallowFirst,
    /// Finish every child subtree before reporting a level's own entries.
    /// Leaves come out before their ancestors.
    DeepFirst,
}

/// Configuration for derived traversal operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraversalConfig {
    /// Also hand container entries to the callback, not only leaves.
    pub include_intermediate: bool,
    pub order: Order,
}

impl TraversalConfig {
    /// Leaves only, deep entries first.
    pub fn deep_first() -> Self {
        Self {
            order: Order::DeepFirst,
            ..Default::default()
        }
    }

    pub fn with_intermediate(mut self) -> Self {
        self.include_intermediate = true;
        self
    }

    pub fn with_order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }
}
