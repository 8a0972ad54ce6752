// sf-core/src/units.rs

use uom::si::f64::{Energy as UomEnergy, Power as UomPower, Time as UomTime};

// Public canonical unit types (SI, f64)
pub type Energy = UomEnergy;
pub type Power = UomPower;
pub type Time = UomTime;

/// Electrical draw of one catalog horsepower, in kW.
///
/// Fixed at four digits to reproduce published OPEX figures; uom's own
/// mechanical horsepower (745.699 W) would drift in the cents.
pub const KW_PER_HP: f64 = 0.7457;

/// Hours of continuous operation per year.
pub const HOURS_PER_YEAR: f64 = 8760.0;

/// Nameplate horsepower as electrical power.
#[inline]
pub fn hp(v: f64) -> Power {
    kw(v * KW_PER_HP)
}

#[inline]
pub fn kw(v: f64) -> Power {
    use uom::si::power::kilowatt;
    Power::new::<kilowatt>(v)
}

#[inline]
pub fn hours(v: f64) -> Time {
    use uom::si::time::hour;
    Time::new::<hour>(v)
}

#[inline]
pub fn to_kwh(e: Energy) -> f64 {
    use uom::si::energy::kilowatt_hour;
    e.get::<kilowatt_hour>()
}

/// Energy drawn by a load running around the clock for a year.
pub fn annual_energy(power: Power) -> Energy {
    power * hours(HOURS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _p = hp(60.0);
        let _k = kw(1.0);
        let _t = hours(1.0);
    }

    #[test]
    fn annual_energy_of_one_hp() {
        let kwh = to_kwh(annual_energy(hp(1.0)));
        assert!((kwh - 0.7457 * 8760.0).abs() < 1e-6);
    }
}
