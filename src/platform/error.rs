//! Platform error types
//!
//! This module defines error types for platform operations.

/// Result type for platform operations
pub type Result<T> = core::result::Result<T, PlatformError>;

/// Platform-level errors
///
/// All platform implementations map their HAL-specific errors to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PlatformError {
    /// GPIO operation failed
    Gpio(GpioError),
    /// Platform initialization failed
    InitializationFailed,
}

/// GPIO-specific errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GpioError {
    /// Pin number does not exist on this package or variant
    InvalidPin,
    /// Pin is already claimed by another owner
    PinInUse,
    /// Requested configuration is not available on this pin
    UnsupportedMode,
    /// Operation is not valid in the pin's current mode
    InvalidMode,
    /// The hardware rejected an otherwise supported operation
    HardwareFault,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpio_errors_compare_by_variant() {
        assert_eq!(GpioError::InvalidPin, GpioError::InvalidPin);
        assert_ne!(GpioError::InvalidPin, GpioError::PinInUse);
        assert_eq!(
            PlatformError::Gpio(GpioError::HardwareFault),
            PlatformError::Gpio(GpioError::HardwareFault)
        );
    }
}
