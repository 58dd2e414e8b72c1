//! Session configuration.

use marketfloor_audit::AuditConfig;
use marketfloor_interaction::Container;
use marketfloor_layout::{LayoutConfig, SeedItem, seed};

/// Configuration for a floor plan session.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    /// Creation defaults for new items.
    pub layout: LayoutConfig,
    /// Audit trail settings.
    pub audit: AuditConfig,
    /// Initial container size in pixels.
    pub container: Container,
    /// Items placed when the session starts.
    pub seed: Vec<SeedItem>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            audit: AuditConfig::default(),
            container: Container::default(),
            seed: seed::default_market(),
        }
    }
}

impl SessionConfig {
    /// Creates the default configuration, seeded with the default market.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a configuration that starts from an empty floor plan.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            seed: Vec::new(),
            ..Self::default()
        }
    }

    /// Builder method to set the layout defaults.
    #[must_use]
    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    /// Builder method to set the audit configuration.
    #[must_use]
    pub fn with_audit(mut self, audit: AuditConfig) -> Self {
        self.audit = audit;
        self
    }

    /// Builder method to set the container size.
    #[must_use]
    pub fn with_container(mut self, container: Container) -> Self {
        self.container = container;
        self
    }

    /// Builder method to set the seed plan.
    #[must_use]
    pub fn with_seed(mut self, seed: Vec<SeedItem>) -> Self {
        self.seed = seed;
        self
    }
}
