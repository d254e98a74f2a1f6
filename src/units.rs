//! Bidirectional unit conversions for the units the rig floor actually uses.
//!
//! The table stores a direct factor for every supported (from, to) pair,
//! both directions explicitly: no inversion, no chaining through a third
//! unit. A pair that is not in the table is unsupported by design, not an
//! omission: conversions stay auditable against the published oilfield
//! factors they were copied from.
//!
//! Supported pairs:
//! - length: ft↔m, in↔mm
//! - volume: bbl↔L, bbl↔m3, bbl↔gal
//! - pressure: psi↔bar, psi↔kPa, psi↔MPa
//! - density: ppg↔sg, ppg↔kgm3

use crate::error::CalcError;
use crate::round::round_to;

/// Direct conversion factor for an ordered (from, to) unit pair.
///
/// Returns `UnsupportedConversion` when the pair is not in the table.
pub fn conversion_factor(from: &str, to: &str) -> Result<f64, CalcError> {
    let factor = match (from, to) {
        // Length
        ("ft", "m") => 0.3048,
        ("m", "ft") => 3.281,
        ("in", "mm") => 25.4,
        ("mm", "in") => 0.03937,

        // Volume
        ("bbl", "L") => 159.0,
        ("L", "bbl") => 1.0 / 159.0,
        ("bbl", "m3") => 0.159,
        ("m3", "bbl") => 6.29,
        ("bbl", "gal") => 42.0,
        ("gal", "bbl") => 1.0 / 42.0,

        // Pressure
        ("psi", "bar") => 0.0689,
        ("bar", "psi") => 14.5,
        ("psi", "kPa") => 6.895,
        ("kPa", "psi") => 0.145,
        ("psi", "MPa") => 0.006895,
        ("MPa", "psi") => 145.0,

        // Mud weight / density
        ("ppg", "sg") => 0.1198,
        ("sg", "ppg") => 8.345,
        ("ppg", "kgm3") => 119.8,
        ("kgm3", "ppg") => 0.00835,

        _ => {
            return Err(CalcError::UnsupportedConversion {
                from: from.to_string(),
                to: to.to_string(),
            })
        }
    };
    Ok(factor)
}

/// Convert `value` from one unit to another via the direct factor table.
///
/// The result is rounded to 6 decimal places at this output boundary.
pub fn convert_unit(value: f64, from: &str, to: &str) -> Result<f64, CalcError> {
    let factor = conversion_factor(from, to)?;
    Ok(round_to(value * factor, 6))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Every canonical pair; the reverse direction is exercised by the
    /// round trip itself.
    const PAIRS: [(&str, &str); 10] = [
        ("ft", "m"),
        ("in", "mm"),
        ("bbl", "L"),
        ("bbl", "m3"),
        ("bbl", "gal"),
        ("psi", "bar"),
        ("psi", "kPa"),
        ("psi", "MPa"),
        ("ppg", "sg"),
        ("ppg", "kgm3"),
    ];

    proptest! {
        #[test]
        fn round_trip_within_tolerance(
            idx in 0usize..PAIRS.len(),
            value in 0.1_f64..10_000.0,
        ) {
            let (a, b) = PAIRS[idx];
            let there = convert_unit(value, a, b).unwrap();
            let back = convert_unit(there, b, a).unwrap();
            let rel = ((back - value) / value).abs();
            prop_assert!(rel < 1e-3, "{a}->{b}->{a}: {value} came back as {back}");
        }
    }
}
