//! Error macros for wayfind

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::WayfindError::invalid_value($context, $value))
    };
}

/// Macro for creating parse errors at a given line
#[macro_export]
macro_rules! bail_parse {
    ($what:expr, $line:expr, $reason:expr) => {
        return Err($crate::error::WayfindError::parse($what, $line, $reason))
    };
}
