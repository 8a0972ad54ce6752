//! Cooling-water system description supplied per selection.

use core::fmt;

use serde::{Deserialize, Serialize};
use sf_core::{Real, usable_sizing_input};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoopType {
    Open,
    Closed,
}

impl fmt::Display for LoopType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoopType::Open => f.write_str("open"),
            LoopType::Closed => f.write_str("closed"),
        }
    }
}

/// Sizing inputs for one loop topology.
///
/// Every input is optional. A missing value skips the constraint it feeds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SystemLoop {
    /// Open (cooling tower) loop sized by load and recirculation flow.
    Open {
        tonnage: Option<Real>,
        total_recirc_gpm: Option<Real>,
    },
    /// Closed loop sized by total system water volume.
    Closed { system_volume_gal: Option<Real> },
}

impl SystemLoop {
    pub fn loop_type(&self) -> LoopType {
        match self {
            SystemLoop::Open { .. } => LoopType::Open,
            SystemLoop::Closed { .. } => LoopType::Closed,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemDescription {
    pub system: SystemLoop,
    /// Electricity price in $/kWh. Only the cost estimate reads it.
    pub energy_price_per_kwh: Real,
}

impl SystemDescription {
    pub fn open(tonnage: Option<Real>, total_recirc_gpm: Option<Real>, price: Real) -> Self {
        Self {
            system: SystemLoop::Open {
                tonnage,
                total_recirc_gpm,
            },
            energy_price_per_kwh: price,
        }
    }

    pub fn closed(system_volume_gal: Option<Real>, price: Real) -> Self {
        Self {
            system: SystemLoop::Closed { system_volume_gal },
            energy_price_per_kwh: price,
        }
    }

    pub fn loop_type(&self) -> LoopType {
        self.system.loop_type()
    }

    /// Tonnage if supplied and usable (finite, non-negative).
    pub fn tonnage(&self) -> Option<Real> {
        match self.system {
            SystemLoop::Open { tonnage, .. } => usable_sizing_input(tonnage),
            SystemLoop::Closed { .. } => None,
        }
    }

    /// Total recirculation flow if supplied and usable.
    pub fn total_recirc_gpm(&self) -> Option<Real> {
        match self.system {
            SystemLoop::Open {
                total_recirc_gpm, ..
            } => usable_sizing_input(total_recirc_gpm),
            SystemLoop::Closed { .. } => None,
        }
    }

    /// Closed-loop volume if supplied and usable.
    pub fn system_volume_gal(&self) -> Option<Real> {
        match self.system {
            SystemLoop::Closed { system_volume_gal } => usable_sizing_input(system_volume_gal),
            SystemLoop::Open { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_respect_loop_type() {
        let open = SystemDescription::open(Some(3300.0), Some(7200.0), 0.2);
        assert_eq!(open.loop_type(), LoopType::Open);
        assert_eq!(open.tonnage(), Some(3300.0));
        assert_eq!(open.total_recirc_gpm(), Some(7200.0));
        assert_eq!(open.system_volume_gal(), None);

        let closed = SystemDescription::closed(Some(100_000.0), 0.2);
        assert_eq!(closed.loop_type(), LoopType::Closed);
        assert_eq!(closed.system_volume_gal(), Some(100_000.0));
        assert_eq!(closed.tonnage(), None);
        assert_eq!(closed.total_recirc_gpm(), None);
    }

    #[test]
    fn negative_inputs_read_as_absent() {
        let open = SystemDescription::open(Some(-1.0), Some(f64::NAN), 0.2);
        assert_eq!(open.tonnage(), None);
        assert_eq!(open.total_recirc_gpm(), None);

        let closed = SystemDescription::closed(Some(-5.0), 0.2);
        assert_eq!(closed.system_volume_gal(), None);
    }

    #[test]
    fn loop_type_display() {
        assert_eq!(LoopType::Open.to_string(), "open");
        assert_eq!(LoopType::Closed.to_string(), "closed");
    }
}
