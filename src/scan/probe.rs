//! Pin capability prober
//!
//! Drives one pin through a fixed sequence of electrical configurations and
//! records the logic level observed after each one. The order matters: the
//! last configuration determines which electrical state the pin is left in
//! between steps, and reordering could mask an earlier failure.

use core::fmt;

use crate::log_debug;
use crate::platform::{
    error::{GpioError, PlatformError},
    traits::{GpioInterface, GpioMode, Platform},
};

/// One step of the probe sequence, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProbeStep {
    /// Input with internal pull-up enabled
    PullUp,
    /// Input with internal pull-down enabled
    PullDown,
    /// Output driven high
    DriveHigh,
    /// Output driven low
    DriveLow,
}

impl ProbeStep {
    /// All steps in probe order
    pub const ALL: [ProbeStep; 4] = [
        ProbeStep::PullUp,
        ProbeStep::PullDown,
        ProbeStep::DriveHigh,
        ProbeStep::DriveLow,
    ];

    /// Logic level a healthy unconnected pin reads back after this step
    pub fn expected_level(self) -> bool {
        matches!(self, ProbeStep::PullUp | ProbeStep::DriveHigh)
    }

    fn mode(self) -> GpioMode {
        match self {
            ProbeStep::PullUp => GpioMode::InputPullUp,
            ProbeStep::PullDown => GpioMode::InputPullDown,
            ProbeStep::DriveHigh | ProbeStep::DriveLow => GpioMode::OutputPushPull,
        }
    }
}

impl fmt::Display for ProbeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ProbeStep::PullUp => "PULL_UP",
            ProbeStep::PullDown => "PULL_DOWN",
            ProbeStep::DriveHigh => "OUT_HIGH",
            ProbeStep::DriveLow => "OUT_LOW",
        })
    }
}

/// Observed logic levels for one pin, one reading per probe step
///
/// A `None` reading means the step's configuration is not supported on this
/// platform; the remaining steps are still attempted, so one missing
/// capability never hides the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinObservations {
    /// Level with the internal pull-up enabled (expected high)
    pub pull_up: Option<bool>,
    /// Level with the internal pull-down enabled (expected low)
    pub pull_down: Option<bool>,
    /// Level read back while driving high (expected high)
    pub drive_high: Option<bool>,
    /// Level read back while driving low (expected low)
    pub drive_low: Option<bool>,
}

impl PinObservations {
    /// Reading recorded for `step`, if the step was supported
    pub fn get(&self, step: ProbeStep) -> Option<bool> {
        match step {
            ProbeStep::PullUp => self.pull_up,
            ProbeStep::PullDown => self.pull_down,
            ProbeStep::DriveHigh => self.drive_high,
            ProbeStep::DriveLow => self.drive_low,
        }
    }

    fn set(&mut self, step: ProbeStep, level: bool) {
        match step {
            ProbeStep::PullUp => self.pull_up = Some(level),
            ProbeStep::PullDown => self.pull_down = Some(level),
            ProbeStep::DriveHigh => self.drive_high = Some(level),
            ProbeStep::DriveLow => self.drive_low = Some(level),
        }
    }

    /// True if all four steps produced a reading
    pub fn is_complete(&self) -> bool {
        ProbeStep::ALL.iter().all(|step| self.get(*step).is_some())
    }

    /// Steps that produced no reading, in probe order
    pub fn missing(&self) -> impl Iterator<Item = ProbeStep> + '_ {
        ProbeStep::ALL
            .into_iter()
            .filter(|step| self.get(*step).is_none())
    }
}

/// Why a pin produced no observations at all
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProbeFailure {
    /// Pin index is not implemented on this package or variant
    InvalidPin,
    /// Pin is owned by another peripheral or probe
    PinBusy,
    /// A supported configuration step failed; partial readings taken before
    /// the fault are withheld rather than reported as valid
    Hardware(ProbeStep),
}

impl fmt::Display for ProbeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeFailure::InvalidPin => f.write_str("invalid pin"),
            ProbeFailure::PinBusy => f.write_str("pin busy"),
            ProbeFailure::Hardware(step) => write!(f, "hardware fault at {}", step),
        }
    }
}

/// Result of probing one pin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProbeResult {
    /// The sequence ran to completion (individual readings may be absent)
    Observed(PinObservations),
    /// No trustworthy readings exist for this pin
    Unavailable(ProbeFailure),
}

/// Probe one pin through the four-step sequence
///
/// Claims the pin, runs the sequence, then parks the pin as a plain input
/// and releases it on every exit path, so a half-configured pin never leaks
/// into the next probe.
pub fn probe<P: Platform>(platform: &mut P, pin: u8) -> ProbeResult {
    let mut gpio = match platform.claim_pin(pin) {
        Ok(gpio) => gpio,
        Err(PlatformError::Gpio(GpioError::InvalidPin)) => {
            return ProbeResult::Unavailable(ProbeFailure::InvalidPin);
        }
        Err(_) => return ProbeResult::Unavailable(ProbeFailure::PinBusy),
    };

    let result = run_sequence(pin, &mut gpio);

    let _ = gpio.set_mode(GpioMode::Input);
    platform.release_pin(pin, gpio);
    result
}

fn run_sequence(pin: u8, gpio: &mut impl GpioInterface) -> ProbeResult {
    let mut observations = PinObservations::default();

    for step in ProbeStep::ALL {
        match run_step(gpio, step) {
            StepOutcome::Level(level) => observations.set(step, level),
            StepOutcome::Unsupported => {
                log_debug!("pin {}: {} not supported, reading skipped", pin, step);
            }
            StepOutcome::Failed => {
                return ProbeResult::Unavailable(ProbeFailure::Hardware(step));
            }
        }
    }

    ProbeResult::Observed(observations)
}

enum StepOutcome {
    Level(bool),
    Unsupported,
    Failed,
}

fn run_step(gpio: &mut impl GpioInterface, step: ProbeStep) -> StepOutcome {
    let mode = step.mode();
    if !gpio.supports(mode) {
        return StepOutcome::Unsupported;
    }

    match gpio.set_mode(mode) {
        Ok(()) => {}
        // The capability query said yes but the pin disagreed; treat it the
        // same as an up-front "unsupported" so the other steps still run.
        Err(PlatformError::Gpio(GpioError::UnsupportedMode)) => return StepOutcome::Unsupported,
        Err(_) => return StepOutcome::Failed,
    }

    let driven = match step {
        ProbeStep::DriveHigh => gpio.set_high(),
        ProbeStep::DriveLow => gpio.set_low(),
        ProbeStep::PullUp | ProbeStep::PullDown => Ok(()),
    };
    if driven.is_err() {
        return StepOutcome::Failed;
    }

    StepOutcome::Level(gpio.read())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::GpioMode;
    use crate::platform::mock::{MockPlatform, PinBehavior};
    use crate::platform::traits::Platform;

    fn observations(result: ProbeResult) -> PinObservations {
        match result {
            ProbeResult::Observed(obs) => obs,
            ProbeResult::Unavailable(failure) => panic!("unexpected failure: {:?}", failure),
        }
    }

    #[test]
    fn healthy_pin_reads_expected_tuple() {
        let mut platform = MockPlatform::new();
        let obs = observations(probe(&mut platform, 0));
        assert_eq!(obs.pull_up, Some(true));
        assert_eq!(obs.pull_down, Some(false));
        assert_eq!(obs.drive_high, Some(true));
        assert_eq!(obs.drive_low, Some(false));
        assert!(obs.is_complete());
    }

    #[test]
    fn stuck_high_pin_reports_readings_verbatim() {
        let mut platform = MockPlatform::new().with_behavior(4, PinBehavior::StuckHigh);
        let obs = observations(probe(&mut platform, 4));
        assert_eq!(obs.pull_up, Some(true));
        assert_eq!(obs.pull_down, Some(true));
        assert_eq!(obs.drive_high, Some(true));
        assert_eq!(obs.drive_low, Some(true));
    }

    #[test]
    fn invalid_pin_fails_fast() {
        let mut platform = MockPlatform::new();
        assert_eq!(
            probe(&mut platform, MockPlatform::MAX_GPIO + 1),
            ProbeResult::Unavailable(ProbeFailure::InvalidPin)
        );
    }

    #[test]
    fn busy_pin_reports_pin_busy() {
        let mut platform = MockPlatform::new();
        let held = platform.claim_pin(7).unwrap();
        assert_eq!(
            probe(&mut platform, 7),
            ProbeResult::Unavailable(ProbeFailure::PinBusy)
        );
        platform.release_pin(7, held);
    }

    #[test]
    fn missing_pull_control_degrades_those_readings_only() {
        let mut platform = MockPlatform::new().with_behavior(2, PinBehavior::NoPullControl);
        let obs = observations(probe(&mut platform, 2));
        assert_eq!(obs.pull_up, None);
        assert_eq!(obs.pull_down, None);
        assert_eq!(obs.drive_high, Some(true));
        assert_eq!(obs.drive_low, Some(false));
        let missing: heapless::Vec<ProbeStep, 4> = obs.missing().collect();
        assert_eq!(missing.as_slice(), &[ProbeStep::PullUp, ProbeStep::PullDown]);
    }

    #[test]
    fn hardware_fault_withholds_partial_readings() {
        let mut platform = MockPlatform::new()
            .with_behavior(9, PinBehavior::FailsMode(GpioMode::OutputPushPull));
        assert_eq!(
            probe(&mut platform, 9),
            ProbeResult::Unavailable(ProbeFailure::Hardware(ProbeStep::DriveHigh))
        );
    }

    #[test]
    fn pin_is_parked_and_released_after_probe() {
        let mut platform = MockPlatform::new();
        let _ = probe(&mut platform, 5);

        assert_eq!(platform.last_released_mode(5), Some(GpioMode::Input));
        assert!(platform.claim_pin(5).is_ok());
    }

    #[test]
    fn pin_is_parked_and_released_even_after_hardware_fault() {
        let mut platform = MockPlatform::new()
            .with_behavior(6, PinBehavior::FailsMode(GpioMode::InputPullDown));
        assert_eq!(
            probe(&mut platform, 6),
            ProbeResult::Unavailable(ProbeFailure::Hardware(ProbeStep::PullDown))
        );
        assert_eq!(platform.last_released_mode(6), Some(GpioMode::Input));
        assert!(platform.claim_pin(6).is_ok());
    }

    #[test]
    fn step_order_is_fixed() {
        assert_eq!(
            ProbeStep::ALL,
            [
                ProbeStep::PullUp,
                ProbeStep::PullDown,
                ProbeStep::DriveHigh,
                ProbeStep::DriveLow,
            ]
        );
    }
}
