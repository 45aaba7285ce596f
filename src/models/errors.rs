use thiserror::Error;

/// Malformed values supplied by the caller of a filter request.
#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("Invalid value [{value}] for [{field}]: expected a decimal number")]
    InvalidBound {
        field: &'static str,
        value: String
    },
    #[error("Value [{value}] for [{field}] is outside the supported range")]
    BoundOutOfRange {
        field: &'static str,
        value: String
    },
    #[error("Invalid sort direction [{0}]: expected 'asc' or 'desc'")]
    InvalidSortDirection(String)
}

impl InputError {
    pub fn invalid_bound(field: &'static str, value: &str) -> Self {
        Self::InvalidBound {
            field,
            value: value.to_string()
        }
    }

    pub fn bound_out_of_range(field: &'static str, value: &str) -> Self {
        Self::BoundOutOfRange {
            field,
            value: value.to_string()
        }
    }
}
