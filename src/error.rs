use thiserror::Error;

/// Every failure the engine can report.
///
/// Each variant maps onto exactly one [`ErrorKind`]; binding layers use the
/// kind (or its numeric code) to pick an exception class and
/// [`message`] to fill in the text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjError {
    #[error("Malformed specification: {0}")]
    MalformedSpecification(String),

    #[error("Unknown projection family: {0}")]
    UnknownProjectionFamily(String),

    #[error("Unknown ellipsoid: {0}")]
    UnknownEllipsoid(String),

    #[error("Unknown datum: {0}")]
    UnknownDatum(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Invalid value for parameter '{key}': {reason}")]
    InvalidParameterValue { key: String, reason: String },

    #[error("Invalid parameter combination: {0}")]
    InvalidParameterCombination(String),

    #[error("Numerically invalid: {0}")]
    NumericallyInvalid(String),

    #[error("Inverse not supported by projection '{0}'")]
    InverseUnsupported(String),

    #[error("Failed to converge after {iterations} iterations: {what}")]
    ConvergenceFailure { what: &'static str, iterations: usize },
}

impl ProjError {
    pub(crate) fn invalid_value(key: &str, reason: impl Into<String>) -> Self {
        ProjError::InvalidParameterValue {
            key: key.to_string(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ProjError::MalformedSpecification(_) => ErrorKind::MalformedSpecification,
            ProjError::UnknownProjectionFamily(_) => ErrorKind::UnknownProjectionFamily,
            ProjError::UnknownEllipsoid(_) => ErrorKind::UnknownEllipsoid,
            ProjError::UnknownDatum(_) => ErrorKind::UnknownDatum,
            ProjError::UnknownUnit(_) => ErrorKind::UnknownUnit,
            ProjError::InvalidParameterValue { .. } => ErrorKind::InvalidParameterValue,
            ProjError::InvalidParameterCombination(_) => ErrorKind::InvalidParameterCombination,
            ProjError::NumericallyInvalid(_) => ErrorKind::NumericallyInvalid,
            ProjError::InverseUnsupported(_) => ErrorKind::InverseUnsupported,
            ProjError::ConvergenceFailure { .. } => ErrorKind::ConvergenceFailure,
        }
    }

    /// Numeric code of this error's kind.
    pub fn code(&self) -> i32 {
        self.kind().code()
    }
}

/// Structured error classification with stable numeric codes.
///
/// Codes live in a single space starting at 1; 0 is reserved for "unknown".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum ErrorKind {
    MalformedSpecification = 1,
    UnknownProjectionFamily = 2,
    UnknownEllipsoid = 3,
    UnknownDatum = 4,
    UnknownUnit = 5,
    InvalidParameterValue = 6,
    InvalidParameterCombination = 7,
    NumericallyInvalid = 8,
    InverseUnsupported = 9,
    ConvergenceFailure = 10,
}

const ALL_KINDS: [ErrorKind; 10] = [
    ErrorKind::MalformedSpecification,
    ErrorKind::UnknownProjectionFamily,
    ErrorKind::UnknownEllipsoid,
    ErrorKind::UnknownDatum,
    ErrorKind::UnknownUnit,
    ErrorKind::InvalidParameterValue,
    ErrorKind::InvalidParameterCombination,
    ErrorKind::NumericallyInvalid,
    ErrorKind::InverseUnsupported,
    ErrorKind::ConvergenceFailure,
];

impl ErrorKind {
    /// All kinds in code order.
    pub fn all() -> &'static [ErrorKind] {
        &ALL_KINDS
    }

    pub fn code(self) -> i32 {
        self as i32
    }

    pub fn from_code(code: i32) -> Option<Self> {
        ALL_KINDS.iter().copied().find(|k| k.code() == code)
    }

    /// CamelCase name, suitable for deriving exception class names.
    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::MalformedSpecification => "MalformedSpecification",
            ErrorKind::UnknownProjectionFamily => "UnknownProjectionFamily",
            ErrorKind::UnknownEllipsoid => "UnknownEllipsoid",
            ErrorKind::UnknownDatum => "UnknownDatum",
            ErrorKind::UnknownUnit => "UnknownUnit",
            ErrorKind::InvalidParameterValue => "InvalidParameterValue",
            ErrorKind::InvalidParameterCombination => "InvalidParameterCombination",
            ErrorKind::NumericallyInvalid => "NumericallyInvalid",
            ErrorKind::InverseUnsupported => "InverseUnsupported",
            ErrorKind::ConvergenceFailure => "ConvergenceFailure",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ErrorKind::MalformedSpecification => "malformed projection specification",
            ErrorKind::UnknownProjectionFamily => "unknown projection id",
            ErrorKind::UnknownEllipsoid => "unknown elliptical parameter name",
            ErrorKind::UnknownDatum => "unknown datum id",
            ErrorKind::UnknownUnit => "unknown unit conversion id",
            ErrorKind::InvalidParameterValue => "invalid parameter value",
            ErrorKind::InvalidParameterCombination => "conflicting parameters",
            ErrorKind::NumericallyInvalid => "tolerance condition error",
            ErrorKind::InverseUnsupported => "inverse projection not available",
            ErrorKind::ConvergenceFailure => "iteration failed to converge",
        }
    }
}

/// Human-readable text for an error code; anything unrecognised is
/// reported as `"unknown error"`.
pub fn message(code: i32) -> &'static str {
    ErrorKind::from_code(code)
        .map(ErrorKind::message)
        .unwrap_or("unknown error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_roundtrip() {
        for &kind in ErrorKind::all() {
            assert_eq!(ErrorKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ErrorKind::from_code(0), None);
        assert_eq!(ErrorKind::from_code(-3), None);
    }

    #[test]
    fn test_message_lookup() {
        assert_eq!(message(8), "tolerance condition error");
        assert_eq!(message(9), "inverse projection not available");
        assert_eq!(message(0), "unknown error");
        assert_eq!(message(-2000), "unknown error");
    }

    #[test]
    fn test_kind_of_error() {
        let err = ProjError::invalid_value("lat_0", "latitude out of range");
        assert_eq!(err.kind(), ErrorKind::InvalidParameterValue);
        assert_eq!(err.code(), 6);
        assert_eq!(
            err.to_string(),
            "Invalid value for parameter 'lat_0': latitude out of range"
        );
    }
}
