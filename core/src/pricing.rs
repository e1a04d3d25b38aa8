use shipbox_common::shipping::country::Country;

/// Shipping cost in INR for `weight` kilograms sent to `country`.
///
/// The weight is not validated: zero yields zero, negative or NaN weights
/// flow straight through the formula. Callers validate first.
pub fn calculate_shipping_cost(weight: f64, country: Country) -> f64 {
    let cost = weight * country.rate_per_kg();
    round_half_up(cost * 100.0) / 100.0
}

/// Rounds to the nearest integer, ties toward positive infinity.
///
/// `f64::round` sends ties away from zero, which differs for negative halves.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cost_per_country() {
        assert_eq!(calculate_shipping_cost(5.0, Country::Sweden), 36.75);
        assert_eq!(calculate_shipping_cost(10.0, Country::China), 115.3);
        assert_eq!(calculate_shipping_cost(3.0, Country::Brazil), 46.89);
        assert_eq!(calculate_shipping_cost(2.0, Country::Australia), 100.18);
    }

    #[test]
    fn rounds_to_two_decimals() {
        // 9.0729
        assert_eq!(calculate_shipping_cost(1.234, Country::Sweden), 9.07);
        // 28.825 rounds up
        assert_eq!(calculate_shipping_cost(2.5, Country::China), 28.83);
    }

    #[test]
    fn zero_weight_costs_nothing() {
        assert_eq!(calculate_shipping_cost(0.0, Country::Sweden), 0.0);
    }

    #[test]
    fn performs_no_validation() {
        assert_eq!(calculate_shipping_cost(-1.0, Country::Sweden), -7.35);
        assert!(calculate_shipping_cost(f64::NAN, Country::China).is_nan());
    }

    #[test]
    fn halves_round_toward_positive_infinity() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(2.4999), 2.0);
    }
}
