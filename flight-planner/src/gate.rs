//! Safety gate: whether operations at a location are currently permitted.
//!
//! The catalog asks a [`SafetyGate`] about both ends of a connection before
//! admitting it. How a verdict is reached (weather, manual closures, ...) is
//! the gate's business; the catalog only reacts to the three [`Verdict`]s.

use std::collections::HashMap;
use std::fmt;

use crate::domain::Location;

/// Safety classification of a location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// Arrivals and departures are permitted.
    Safe,
    /// Conditions are bad enough that flights may be rescheduled.
    Reschedule,
    /// No verdict could be produced (e.g. the weather service was unreachable).
    Unknown,
}

impl Verdict {
    /// Returns true only for [`Verdict::Safe`].
    pub fn is_safe(self) -> bool {
        matches!(self, Verdict::Safe)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Verdict::Safe => "safe",
            Verdict::Reschedule => "flights may be rescheduled",
            Verdict::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Trait for classifying locations.
///
/// Verdicts are synchronous: anything that needs I/O should gather its
/// answers up front (see [`crate::weather::survey`]).
pub trait SafetyGate {
    /// Classify `location`.
    fn verdict(&self, location: &Location) -> Verdict;
}

impl<G: SafetyGate + ?Sized> SafetyGate for &G {
    fn verdict(&self, location: &Location) -> Verdict {
        (**self).verdict(location)
    }
}

/// A gate backed by a fixed table of verdicts.
///
/// Locations missing from the table get the fallback verdict.
#[derive(Debug, Clone)]
pub struct StaticGate {
    verdicts: HashMap<Location, Verdict>,
    fallback: Verdict,
}

impl StaticGate {
    /// A gate that returns `fallback` for every location.
    pub fn new(fallback: Verdict) -> Self {
        Self {
            verdicts: HashMap::new(),
            fallback,
        }
    }

    /// A gate that reports every location safe.
    pub fn all_safe() -> Self {
        Self::new(Verdict::Safe)
    }

    /// Set the verdict for one location.
    pub fn set(&mut self, location: Location, verdict: Verdict) {
        self.verdicts.insert(location, verdict);
    }

    /// Builder-style variant of [`StaticGate::set`].
    pub fn with(mut self, location: Location, verdict: Verdict) -> Self {
        self.set(location, verdict);
        self
    }
}

impl Default for StaticGate {
    fn default() -> Self {
        Self::all_safe()
    }
}

impl SafetyGate for StaticGate {
    fn verdict(&self, location: &Location) -> Verdict {
        self.verdicts
            .get(location)
            .copied()
            .unwrap_or(self.fallback)
    }
}
