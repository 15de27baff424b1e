//! Root platform trait
//!
//! This module defines the root Platform trait that aggregates the peripheral
//! interfaces the scanner needs.

use super::{BoardDescriptor, GpioInterface, SystemInfo};
use crate::platform::Result;

/// Root platform trait
///
/// Platform implementations provide concrete types for each interface via
/// associated types, enabling compile-time dispatch.
///
/// Pin ownership is explicit: [`claim_pin`](Platform::claim_pin) hands out a
/// short-lived exclusive handle and [`release_pin`](Platform::release_pin)
/// takes it back. A pin that was claimed and not yet released cannot be
/// claimed again, which is what serializes the probe sequence on shared
/// hardware state.
pub trait Platform: Sized {
    /// GPIO peripheral type
    type Gpio: GpioInterface;

    /// System information provider type
    type Sys: SystemInfo;

    /// Initialize the platform
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::InitializationFailed` if initialization fails.
    fn init() -> Result<Self>;

    /// Static board description (name, pin count)
    fn board(&self) -> &BoardDescriptor;

    /// Claim exclusive ownership of a GPIO pin
    ///
    /// # Errors
    ///
    /// Returns `PlatformError::Gpio(GpioError::InvalidPin)` if the index is
    /// not implemented on this package, or
    /// `PlatformError::Gpio(GpioError::PinInUse)` if the pin is currently
    /// owned elsewhere.
    fn claim_pin(&mut self, pin: u8) -> Result<Self::Gpio>;

    /// Return a claimed pin
    ///
    /// Callers park the pin in a safe configuration (plain input) before
    /// releasing it; the platform makes the index claimable again.
    fn release_pin(&mut self, pin: u8, gpio: Self::Gpio);

    /// System information provider
    fn sysinfo(&self) -> &Self::Sys;
}
