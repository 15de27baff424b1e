//! Diagnostic classification of probe observations
//!
//! A healthy unconnected pin follows its pull resistors in input mode and
//! reads back its own drive level in output mode, so the expected tuple is
//! (1, 0, 1, 0). Classification only ever looks at readings that are
//! present; which readings are absent is reported alongside the verdict, not
//! folded into it.

use core::fmt;

use super::probe::{PinObservations, ProbeStep};

/// Diagnostic verdict for one pin's observations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Verdict {
    /// All four readings present and at their expected default levels
    Nominal,
    /// At least one reading deviates from its expected level (possible
    /// damage, peripheral conflict, or misconfiguration)
    Anomalous,
    /// No present reading deviates, but not every step could be observed,
    /// so the pin cannot be called nominal
    Indeterminate,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Nominal => "nominal",
            Verdict::Anomalous => "anomalous",
            Verdict::Indeterminate => "indeterminate",
        })
    }
}

/// Classify one pin's observations
pub fn classify(observations: &PinObservations) -> Verdict {
    let mut complete = true;
    for step in ProbeStep::ALL {
        match observations.get(step) {
            Some(level) if level != step.expected_level() => return Verdict::Anomalous,
            Some(_) => {}
            None => complete = false,
        }
    }
    if complete {
        Verdict::Nominal
    } else {
        Verdict::Indeterminate
    }
}
