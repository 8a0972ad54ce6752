//! Annual operating-energy cost of a filter's pump.

use sf_core::{Real, annual_energy, hp, to_kwh};

/// kWh drawn in a year of continuous operation by a `power_hp` motor.
pub fn annual_energy_kwh(power_hp: Real) -> Real {
    to_kwh(annual_energy(hp(power_hp)))
}

/// `power_hp × 0.7457 × 8760 × price_per_kwh`.
///
/// Returns 0 when either input is non-finite or not strictly positive.
pub fn annual_energy_cost(power_hp: Real, price_per_kwh: Real) -> Real {
    let usable = |v: Real| v.is_finite() && v > 0.0;
    if !(usable(power_hp) && usable(price_per_kwh)) {
        return 0.0;
    }
    annual_energy_kwh(power_hp) * price_per_kwh
}

/// Unit price implied by an annual cost, i.e. the $/kWh basis a quoted OPEX
/// figure was computed at.
pub fn price_basis(annual_cost: Real, power_hp: Real) -> Option<Real> {
    let kwh = annual_energy_kwh(power_hp);
    (kwh.is_finite() && kwh > 0.0).then(|| annual_cost / kwh)
}

/// Format dollars with thousands separators and two decimals, e.g. `$39,193.99`.
pub fn format_usd(amount: Real) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_hp_at_ten_cents() {
        let cost = annual_energy_cost(60.0, 0.10);
        assert!((cost - 60.0 * 0.7457 * 8760.0 * 0.10).abs() < 1e-6);
        assert_eq!(format!("{cost:.2}"), "39193.99");
        assert_eq!(format_usd(cost), "$39,193.99");
    }

    #[test]
    fn cts1600_at_twenty_cents() {
        let cost = annual_energy_cost(60.0, 0.20);
        assert_eq!(format_usd(cost), "$78,387.98");
    }

    #[test]
    fn invalid_inputs_cost_nothing() {
        assert_eq!(annual_energy_cost(60.0, 0.0), 0.0);
        assert_eq!(annual_energy_cost(60.0, -0.1), 0.0);
        assert_eq!(annual_energy_cost(60.0, f64::NAN), 0.0);
        assert_eq!(annual_energy_cost(0.0, 0.1), 0.0);
    }

    #[test]
    fn basis_recovers_price() {
        let cost = annual_energy_cost(7.5, 0.13);
        let basis = price_basis(cost, 7.5).unwrap();
        assert!((basis - 0.13).abs() < 1e-12);
        assert_eq!(price_basis(100.0, 0.0), None);
    }

    #[test]
    fn usd_grouping() {
        assert_eq!(format_usd(0.0), "$0.00");
        assert_eq!(format_usd(999.999), "$1,000.00");
        assert_eq!(format_usd(1234567.891), "$1,234,567.89");
        assert_eq!(format_usd(-12.5), "-$12.50");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn cost_scales_linearly_with_price(hp in 0.5_f64..200.0, price in 0.01_f64..1.0) {
                let single = annual_energy_cost(hp, price);
                let double = annual_energy_cost(hp, 2.0 * price);
                prop_assert!((double - 2.0 * single).abs() <= 1e-9 * double);
            }

            #[test]
            fn basis_round_trips(hp in 0.5_f64..200.0, price in 0.01_f64..1.0) {
                let basis = price_basis(annual_energy_cost(hp, price), hp).unwrap();
                prop_assert!((basis - price).abs() < 1e-12);
            }
        }
    }
}
