//! Error types for resource tables and platforms.

use crate::resource::ResourceKey;

/// Errors raised while building a resource table or resolving resources in it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlatformError {
    /// No fitted resource matches the requested name (and index).
    #[error("resource '{name}'{} not found", index_suffix(.index))]
    NotFound {
        /// The requested resource name.
        name: String,
        /// The requested index, if one was given.
        index: Option<u32>,
    },

    /// A strict lookup was made without an index.
    #[error("lookup of '{0}' requires an index unless it is loose")]
    IndexRequired(String),

    /// Two fitted resources share the same name and index.
    #[error("duplicate resource '{0}'")]
    DuplicateResource(ResourceKey),

    /// A composite resource declares no sub-signals.
    #[error("composite resource '{0}' has no sub-signals")]
    EmptySubsignals(ResourceKey),

    /// A composite resource declares the same sub-signal twice.
    #[error("composite resource '{resource}' declares sub-signal '{subsignal}' twice")]
    DuplicateSubsignal {
        /// The composite resource.
        resource: ResourceKey,
        /// The repeated sub-signal name.
        subsignal: String,
    },

    /// A simple resource was given a sub-signal.
    #[error("simple resource '{resource}' cannot take sub-signal '{subsignal}'")]
    SubsignalOnSimple {
        /// The simple resource.
        resource: ResourceKey,
        /// The first sub-signal given to it.
        subsignal: String,
    },

    /// A fitted resource or sub-signal has an empty pin-location string.
    #[error("'{0}' has no pins")]
    EmptyPins(String),

    /// A period constraint is zero, negative or not finite.
    #[error("invalid period {period_ns} ns for '{resource}'")]
    InvalidPeriod {
        /// The constrained resource.
        resource: ResourceKey,
        /// The rejected period.
        period_ns: f64,
    },
}

fn index_suffix(index: &Option<u32>) -> String {
    index.map(|i| format!(" index {i}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_found_with_index() {
        let err = PlatformError::NotFound {
            name: "serial".to_string(),
            index: Some(0),
        };
        assert_eq!(err.to_string(), "resource 'serial' index 0 not found");
    }

    #[test]
    fn display_not_found_without_index() {
        let err = PlatformError::NotFound {
            name: "clk50".to_string(),
            index: None,
        };
        assert_eq!(err.to_string(), "resource 'clk50' not found");
    }

    #[test]
    fn display_duplicate() {
        let err = PlatformError::DuplicateResource(ResourceKey::new("user_led", 1));
        assert_eq!(err.to_string(), "duplicate resource 'user_led:1'");
    }

    #[test]
    fn display_empty_pins() {
        let err = PlatformError::EmptyPins("eth:0.rx_data".to_string());
        assert_eq!(err.to_string(), "'eth:0.rx_data' has no pins");
    }
}
