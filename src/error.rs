//! Calculation error taxonomy.
//!
//! Every failure names the offending field (and element index for batch
//! failures) so callers can point at the bad input. Nothing here is retried
//! internally; retry policy belongs to the transport layer.

use thiserror::Error;

/// Errors produced by the calculation engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Non-positive or physically inconsistent diameters.
    #[error("invalid geometry: {field} = {value} ({reason})")]
    InvalidGeometry {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A malformed element in a string-component batch. The whole batch is
    /// rejected; no partial results are returned.
    #[error("invalid string component at index {index}: {source}")]
    InvalidComponent {
        index: usize,
        #[source]
        source: Box<CalcError>,
    },

    /// A malformed element in an annulus-section batch. The whole batch is
    /// rejected; no partial results are returned.
    #[error("invalid annulus section at index {index}: {source}")]
    InvalidSection {
        index: usize,
        #[source]
        source: Box<CalcError>,
    },

    /// Non-positive pump geometry or out-of-range efficiency.
    #[error("invalid pump spec: {field} = {value} ({reason})")]
    InvalidPumpSpec {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The requested (from, to) unit pair has no direct conversion factor.
    #[error("unsupported unit conversion: {from} -> {to}")]
    UnsupportedConversion { from: String, to: String },

    /// A divisor precondition was violated (zero depth, zero mud weight,
    /// zero pump output where a division is required).
    #[error("division by zero: {field} must be > 0, got {value}")]
    DivisionByZero { field: &'static str, value: f64 },

    /// Any other precondition violation (negative pressure, negative pit
    /// gain, non-positive shoe depth, ...).
    #[error("invalid input: {field} = {value} ({reason})")]
    InvalidInput {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
}

impl CalcError {
    /// Wrap a geometry/input error as a component-batch failure.
    pub(crate) fn in_component(self, index: usize) -> Self {
        CalcError::InvalidComponent {
            index,
            source: Box::new(self),
        }
    }

    /// Wrap a geometry/input error as a section-batch failure.
    pub(crate) fn in_section(self, index: usize) -> Self {
        CalcError::InvalidSection {
            index,
            source: Box::new(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_error_names_index_and_cause() {
        let err = CalcError::InvalidGeometry {
            field: "id_in",
            value: -1.0,
            reason: "must be positive",
        }
        .in_component(3);

        let msg = err.to_string();
        assert!(msg.contains("index 3"), "message should carry the index: {msg}");
        assert!(msg.contains("id_in"), "message should carry the field: {msg}");
    }

    #[test]
    fn unsupported_conversion_names_both_units() {
        let err = CalcError::UnsupportedConversion {
            from: "ft".to_string(),
            to: "bbl".to_string(),
        };
        assert_eq!(err.to_string(), "unsupported unit conversion: ft -> bbl");
    }
}
