//! Provider filter state: exclusive pills and the provider/service fields.
//!
//! DESIGN
//! ======
//! Both widgets are thin, but keeping their rules here lets the DOM glue in
//! `dom::provider` stay a direct mapping of state onto attributes.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

/// Exclusive provider pills. An empty `active` value means "all providers".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderPicker {
    pills: Vec<String>,
    active: String,
}

impl ProviderPicker {
    /// Create a picker over pill values in document order.
    pub fn new(pills: Vec<String>, active: impl Into<String>) -> Self {
        Self { pills, active: active.into() }
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Make `value` the active provider and return it.
    pub fn pick(&mut self, value: impl Into<String>) -> &str {
        self.active = value.into();
        &self.active
    }

    /// `aria-pressed` state for each pill, in document order.
    pub fn pressed(&self) -> Vec<bool> {
        self.pills.iter().map(|p| *p == self.active).collect()
    }
}

/// Hidden provider/service pair where the service depends on the provider.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderFields {
    pub provider: String,
    pub service: String,
}

impl ProviderFields {
    /// Choosing a provider invalidates any previously chosen service.
    pub fn select_provider(&mut self, provider: impl Into<String>) {
        self.service.clear();
        self.provider = provider.into();
    }
}
