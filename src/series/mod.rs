// ============================================================================
// Series Module
// Closed-form purchase costs and affordable counts over either engine
// ============================================================================
//
// Prices either grow geometrically (each item costs `ratio` times the previous)
// or arithmetically (each item costs `add` more). Counts come from solving the
// series sum for the number of terms, so they work for counts no loop could
// reach. Near the float boundary the closed form can land one item off; counts
// that are still exact integers get checked against the sum and nudged.

use crate::interfaces::LargeNumber;
use crate::utils::float::MAX_SAFE_INTEGER;

/// Largest number of items affordable with `resources_available`.
pub fn afford_geometric<N: LargeNumber>(
    resources_available: N,
    price_start: N,
    price_ratio: N,
    current_owned: N,
) -> N {
    let actual_start = price_start * price_ratio.pow(current_owned);
    let count = ((resources_available / actual_start * (price_ratio - N::ONE) + N::ONE).log10()
        / price_ratio.log10())
    .floor();
    settle_count(count, resources_available, |n| {
        sum_geometric(n, price_start, price_ratio, current_owned)
    })
}

/// Total price of the next `num_items` items.
pub fn sum_geometric<N: LargeNumber>(
    num_items: N,
    price_start: N,
    price_ratio: N,
    current_owned: N,
) -> N {
    price_start * price_ratio.pow(current_owned) * (N::ONE - price_ratio.pow(num_items))
        / (N::ONE - price_ratio)
}

/// Largest number of items affordable with `resources_available`.
pub fn afford_arithmetic<N: LargeNumber>(
    resources_available: N,
    price_start: N,
    price_add: N,
    current_owned: N,
) -> N {
    let two = N::from(2.0f64);
    let actual_start = price_start + current_owned * price_add;
    let b = actual_start - price_add / two;
    let discriminant = b * b + price_add * resources_available * two;
    let count = ((-b + discriminant.sqrt()) / price_add).floor();
    settle_count(count, resources_available, |n| {
        sum_arithmetic(n, price_start, price_add, current_owned)
    })
}

/// Total price of the next `num_items` items.
pub fn sum_arithmetic<N: LargeNumber>(
    num_items: N,
    price_start: N,
    price_add: N,
    current_owned: N,
) -> N {
    let two = N::from(2.0f64);
    let actual_start = price_start + current_owned * price_add;
    num_items / two * (actual_start * two + (num_items - N::ONE) * price_add)
}

/// Seconds to save up for `cost` plus seconds until the purchase pays for itself.
pub fn efficiency_of_purchase<N: LargeNumber>(cost: N, current_rp_s: N, delta_rp_s: N) -> N {
    cost / current_rp_s + cost / delta_rp_s
}

/// Steps an exact-integer estimate down while it overshoots the budget (at most
/// twice), then up once if one more item still fits.
fn settle_count<N: LargeNumber>(count: N, budget: N, cost: impl Fn(N) -> N) -> N {
    if !count.is_finite()
        || count.to_f64().is_none_or(|whole| whole >= MAX_SAFE_INTEGER)
        || count < N::ZERO
    {
        return count;
    }
    let mut count = count;
    for _ in 0..2 {
        if count > N::ZERO && cost(count) > budget {
            count = count - N::ONE;
        } else {
            break;
        }
    }
    if cost(count + N::ONE) <= budget {
        count = count + N::ONE;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eternal::EternalDecimal;
    use crate::numeric::Decimal;

    fn d(value: f64) -> Decimal {
        Decimal::from(value)
    }

    #[test]
    fn test_geometric() {
        assert_eq!(afford_geometric(d(100.0), d(10.0), d(2.0), d(0.0)).to_f64(), 3.0);
        assert_eq!(sum_geometric(d(3.0), d(10.0), d(2.0), d(0.0)).to_f64(), 70.0);
        // owning 2 already makes the next item cost 40
        assert_eq!(afford_geometric(d(100.0), d(10.0), d(2.0), d(2.0)).to_f64(), 1.0);
        assert_eq!(afford_geometric(d(5.0), d(10.0), d(2.0), d(0.0)).to_f64(), 0.0);
    }

    #[test]
    fn test_geometric_inverse() {
        for resources in [1e3, 12345.0, 1e9, 7.7e14] {
            let (start, ratio) = (d(15.0), d(1.15));
            let count = afford_geometric(d(resources), start, ratio, d(3.0));
            assert!(sum_geometric(count, start, ratio, d(3.0)).to_f64() <= resources);
            assert!(sum_geometric(count + 1.0, start, ratio, d(3.0)).to_f64() > resources);
        }
    }

    #[test]
    fn test_geometric_beyond_float_range() {
        let resources: Decimal = "1e5000".parse().unwrap();
        let count = afford_geometric(resources, d(1.0), d(10.0), d(0.0));
        assert!((count.to_f64() - 5000.0).abs() <= 1.0, "{count}");

        let resources: EternalDecimal = "1e1e20".parse().unwrap();
        let count = afford_geometric(
            resources,
            EternalDecimal::ONE,
            EternalDecimal::TEN,
            EternalDecimal::ZERO,
        );
        assert!(count.eq_tolerance(1e20, 1e-9), "{count}");
    }

    #[test]
    fn test_arithmetic() {
        assert_eq!(afford_arithmetic(d(100.0), d(10.0), d(5.0), d(0.0)).to_f64(), 5.0);
        assert_eq!(sum_arithmetic(d(5.0), d(10.0), d(5.0), d(0.0)).to_f64(), 100.0);
        assert_eq!(sum_arithmetic(d(2.0), d(10.0), d(5.0), d(2.0)).to_f64(), 45.0);
        assert_eq!(afford_arithmetic(d(44.0), d(10.0), d(5.0), d(2.0)).to_f64(), 1.0);
    }

    #[test]
    fn test_arithmetic_inverse() {
        for resources in [50.0, 999.0, 1e6, 3.3e10] {
            let (start, add) = (d(7.0), d(3.0));
            let count = afford_arithmetic(d(resources), start, add, d(0.0));
            assert!(sum_arithmetic(count, start, add, d(0.0)).to_f64() <= resources);
            assert!(sum_arithmetic(count + 1.0, start, add, d(0.0)).to_f64() > resources);
        }
    }

    #[test]
    fn test_efficiency() {
        assert_eq!(efficiency_of_purchase(d(100.0), d(10.0), d(5.0)).to_f64(), 30.0);
        let eternal = efficiency_of_purchase(
            EternalDecimal::from(100),
            EternalDecimal::from(10),
            EternalDecimal::from(5),
        );
        assert_eq!(eternal.to_f64(), 30.0);
    }

    #[test]
    fn test_invalid_inputs_propagate() {
        assert!(afford_geometric(d(f64::NAN), d(10.0), d(2.0), d(0.0)).is_nan());
        assert!(afford_arithmetic(d(100.0), d(10.0), d(0.0), d(0.0)).is_nan());
    }
}
