//! Quotation errors
//!
//! Rating itself never fails. Everything here is raised at the input
//! boundary (parsing, validation, loading) or while writing the document.

use thiserror::Error;

/// Errors that can occur while building a quotation
#[derive(Debug, Error)]
pub enum QuoteError {
    /// Vehicle type other than Private or Commercial
    #[error("Unknown vehicle type: {0}")]
    UnknownVehicleType(String),

    /// Commercial subclass not in the tariff
    #[error("Unknown subclass: {0}")]
    UnknownSubclass(String),

    /// Cover type other than Comprehensive or TPO
    #[error("Unknown cover type: {0}")]
    UnknownCoverType(String),

    /// Unit type other than Single Unit or Fleet
    #[error("Unknown unit type: {0}")]
    UnknownUnitType(String),

    /// Yes/no field that could not be read as a flag
    #[error("Invalid flag value for {field}: {value}")]
    InvalidFlag {
        field: &'static str,
        value: String,
    },

    /// Amount below zero
    #[error("{field} must not be negative, got {value}")]
    NegativeAmount {
        field: &'static str,
        value: f64,
    },

    /// NaN or infinite amount
    #[error("{field} must be a finite number")]
    NonFiniteAmount {
        field: &'static str,
    },

    /// Required column left empty in a schedule row
    #[error("Row {row}: missing required field {field}")]
    MissingField {
        row: usize,
        field: &'static str,
    },

    /// Schedule row rejected, with the row number for context
    #[error("Row {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: Box<QuoteError>,
    },

    /// More vehicles of one type than a single quotation accepts
    #[error("Too many {vehicle_type} vehicles: {count} (maximum {max})")]
    TooManyVehicles {
        vehicle_type: &'static str,
        count: usize,
        max: usize,
    },

    /// Tariff list file present but empty
    #[error("Tariff file {0} contains no entries")]
    EmptyTariffList(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl QuoteError {
    /// Attach a 1-based schedule row number to an error
    pub fn at_row(self, row: usize) -> Self {
        match self {
            err @ (QuoteError::MissingField { .. } | QuoteError::InvalidRow { .. }) => err,
            other => QuoteError::InvalidRow {
                row,
                source: Box::new(other),
            },
        }
    }
}

/// Result type for quotation operations
pub type Result<T> = std::result::Result<T, QuoteError>;

/// Reject negative and non-finite amounts
pub fn ensure_amount(field: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(QuoteError::NonFiniteAmount { field });
    }
    if value < 0.0 {
        return Err(QuoteError::NegativeAmount { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_amount() {
        assert_eq!(ensure_amount("Sum Insured", 0.0).unwrap(), 0.0);
        assert_eq!(ensure_amount("Sum Insured", 800_000.0).unwrap(), 800_000.0);

        let err = ensure_amount("Sum Insured", -1.0).unwrap_err();
        assert_eq!(err.to_string(), "Sum Insured must not be negative, got -1");

        assert!(matches!(
            ensure_amount("Tonnage", f64::NAN),
            Err(QuoteError::NonFiniteAmount { field: "Tonnage" })
        ));
    }

    #[test]
    fn test_at_row_wraps_once() {
        let err = QuoteError::UnknownSubclass("Taxi".to_string()).at_row(3);
        assert_eq!(err.to_string(), "Row 3: Unknown subclass: Taxi");

        // Already carries a row number
        let err = err.at_row(7);
        assert_eq!(err.to_string(), "Row 3: Unknown subclass: Taxi");
    }
}
