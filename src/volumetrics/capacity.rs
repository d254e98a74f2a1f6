//! Tubular capacity and hydrostatic pressure formulas.
//!
//! The building blocks every other calculator composes. Diameters are
//! inches, capacities bbl/ft, pressures psi.

use crate::constants::{CAPACITY_DIVISOR, PSI_PER_FT_PER_PPG};
use crate::error::CalcError;

/// Internal capacity of a pipe or casing bore.
///
/// Formula: `capacity = id² / 1029.4` (bbl/ft)
pub fn pipe_capacity(inner_diameter_in: f64) -> Result<f64, CalcError> {
    if inner_diameter_in <= 0.0 {
        return Err(CalcError::InvalidGeometry {
            field: "inner_diameter_in",
            value: inner_diameter_in,
            reason: "must be positive",
        });
    }
    Ok(inner_diameter_in * inner_diameter_in / CAPACITY_DIVISOR)
}

/// Annular capacity between a bore and the pipe run through it.
///
/// Formula: `capacity = (bore_id² − pipe_od²) / 1029.4` (bbl/ft)
///
/// A pipe as large as the bore has zero or negative annular area, which is
/// physically invalid and rejected, never silently returned.
pub fn annular_capacity(bore_id_in: f64, pipe_od_in: f64) -> Result<f64, CalcError> {
    if bore_id_in <= 0.0 {
        return Err(CalcError::InvalidGeometry {
            field: "bore_id_in",
            value: bore_id_in,
            reason: "must be positive",
        });
    }
    if pipe_od_in <= 0.0 {
        return Err(CalcError::InvalidGeometry {
            field: "pipe_od_in",
            value: pipe_od_in,
            reason: "must be positive",
        });
    }
    if pipe_od_in >= bore_id_in {
        return Err(CalcError::InvalidGeometry {
            field: "pipe_od_in",
            value: pipe_od_in,
            reason: "must be smaller than the bore ID",
        });
    }
    Ok((bore_id_in * bore_id_in - pipe_od_in * pipe_od_in) / CAPACITY_DIVISOR)
}

/// Steel displacement of a tubular with wall thickness.
///
/// Formula: `displacement = (od² − id²) / 1029.4` (bbl/ft)
pub fn displacement_capacity(od_in: f64, id_in: f64) -> Result<f64, CalcError> {
    if od_in <= 0.0 {
        return Err(CalcError::InvalidGeometry {
            field: "od_in",
            value: od_in,
            reason: "must be positive",
        });
    }
    if id_in <= 0.0 {
        return Err(CalcError::InvalidGeometry {
            field: "id_in",
            value: id_in,
            reason: "must be positive",
        });
    }
    if id_in >= od_in {
        return Err(CalcError::InvalidGeometry {
            field: "id_in",
            value: id_in,
            reason: "must be smaller than the OD",
        });
    }
    Ok((od_in * od_in - id_in * id_in) / CAPACITY_DIVISOR)
}

/// Hydrostatic pressure of a mud column.
///
/// Formula: `pressure = mw × 0.052 × tvd` (psi)
pub fn hydrostatic_pressure(mud_weight_ppg: f64, tvd_ft: f64) -> f64 {
    mud_weight_ppg * PSI_PER_FT_PER_PPG * tvd_ft
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipe_capacity_matches_formula() {
        let cap = pipe_capacity(3.0).unwrap();
        assert!((cap - 9.0 / 1029.4).abs() < 1e-12);
    }

    #[test]
    fn pipe_capacity_rejects_non_positive_diameter() {
        assert!(pipe_capacity(0.0).is_err());
        assert!(pipe_capacity(-4.5).is_err());
    }

    #[test]
    fn annular_capacity_positive_for_valid_geometry() {
        let cap = annular_capacity(8.5, 5.0).unwrap();
        assert!(cap > 0.0);
        assert!((cap - (72.25 - 25.0) / 1029.4).abs() < 1e-12);
    }

    #[test]
    fn annular_capacity_rejects_pipe_at_or_over_bore() {
        // Equal diameters mean zero annular area: rejected, not returned.
        assert!(annular_capacity(5.0, 5.0).is_err());
        assert!(annular_capacity(5.0, 6.0).is_err());
    }

    #[test]
    fn displacement_capacity_rejects_id_at_or_over_od() {
        assert!(displacement_capacity(5.0, 5.0).is_err());
        assert!(displacement_capacity(5.0, 5.5).is_err());
    }

    #[test]
    fn hydrostatic_pressure_matches_formula() {
        assert!((hydrostatic_pressure(10.0, 10_000.0) - 5_200.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn pipe_capacity_strictly_increasing(d in 0.01_f64..36.0) {
            let smaller = pipe_capacity(d).unwrap();
            let larger = pipe_capacity(d + 0.01).unwrap();
            prop_assert!(larger > smaller);
        }

        #[test]
        fn annular_capacity_positive_whenever_od_fits(
            bore in 1.0_f64..36.0,
            ratio in 0.01_f64..0.99,
        ) {
            let pipe = bore * ratio;
            let cap = annular_capacity(bore, pipe).unwrap();
            prop_assert!(cap > 0.0);
        }
    }
}
