//! Pinout table parsing and lookup
//!
//! The backing resource is human-editable INI-style text: a section per MCU
//! identifier, one `LABEL = description` entry per pin. Parsing never fails;
//! anything unparseable degrades to fewer entries, and a table with no
//! entries resolves every pin to [`UNKNOWN_FUNCTION`].

use heapless::Vec;

use crate::log_warn;

use super::pin_label;

/// Upper bound on entries across all MCU sections
pub const MAX_PINOUT_ENTRIES: usize = 128;

/// Sentinel description for any lookup miss
pub const UNKNOWN_FUNCTION: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PinoutEntry<'a> {
    mcu: &'a str,
    label: &'a str,
    function: &'a str,
}

/// Per-MCU pin function table, borrowed from its text source
///
/// Loaded once and read-only afterwards; lookups are pure functions of the
/// table contents.
#[derive(Debug)]
pub struct PinoutTable<'a> {
    entries: Vec<PinoutEntry<'a>, MAX_PINOUT_ENTRIES>,
}

impl<'a> PinoutTable<'a> {
    /// Table with no entries; every resolution yields [`UNKNOWN_FUNCTION`]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parse INI-style pinout text
    ///
    /// `#` and `;` start comments, `[Name]` opens an MCU section, and
    /// `LABEL = description` adds an entry to the open section. Malformed
    /// lines are skipped with a warning rather than failing the load.
    pub fn parse(source: &'a str) -> Self {
        let mut table = Self::empty();
        let mut current_mcu: Option<&'a str> = None;

        for raw in source.lines() {
            let line = match raw.find(['#', ';']) {
                Some(index) => &raw[..index],
                None => raw,
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(inner) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let name = inner.trim();
                if name.is_empty() {
                    log_warn!("pinout: empty section header skipped");
                    current_mcu = None;
                } else {
                    current_mcu = Some(name);
                }
                continue;
            }

            let Some(mcu) = current_mcu else {
                log_warn!("pinout: entry before any [mcu] section skipped");
                continue;
            };
            let Some((label, function)) = line.split_once('=') else {
                log_warn!("pinout: malformed line skipped in [{}]", mcu);
                continue;
            };
            let (label, function) = (label.trim(), function.trim());
            if label.is_empty() || function.is_empty() {
                log_warn!("pinout: entry with empty label or description skipped");
                continue;
            }

            let entry = PinoutEntry {
                mcu,
                label,
                function,
            };
            if table.entries.push(entry).is_err() {
                log_warn!("pinout: table full, remaining entries dropped");
                break;
            }
        }

        table
    }

    /// Parse an optional source; a missing resource yields the empty table
    pub fn from_source(source: Option<&'a str>) -> Self {
        match source {
            Some(text) => Self::parse(text),
            None => Self::empty(),
        }
    }

    /// Number of entries across all MCU sections
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no entries were loaded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the function for `(mcu_id, label)`, if present
    pub fn lookup(&self, mcu_id: &str, label: &str) -> Option<&'a str> {
        self.entries
            .iter()
            .find(|entry| entry.mcu == mcu_id && entry.label == label)
            .map(|entry| entry.function)
    }

    /// Resolve a pin index against this table
    ///
    /// Builds the `GPIO{index}` label and returns the matching description,
    /// or [`UNKNOWN_FUNCTION`] on any miss, at the MCU level or the entry
    /// level. Never fails.
    pub fn resolve(&self, mcu_id: &str, pin: u8) -> &'a str {
        let label = pin_label(pin);
        self.lookup(mcu_id, label.as_str())
            .unwrap_or(UNKNOWN_FUNCTION)
    }
}

impl Default for PinoutTable<'_> {
    fn default() -> Self {
        Self::empty()
    }
}
