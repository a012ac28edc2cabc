//! Error macros for shuttle

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::ShuttleError::invalid_value($context, $value))
    };
}

/// Macro for creating invalid network errors
#[macro_export]
macro_rules! bail_network {
    ($($arg:tt)*) => {
        return Err($crate::error::ShuttleError::invalid_network(format!($($arg)*)))
    };
}

/// Macro for creating unsupported errors
#[macro_export]
macro_rules! bail_unsupported {
    ($context:expr, $value:expr, $supported:expr) => {
        return Err($crate::error::ShuttleError::unsupported(
            $context, $value, $supported,
        ))
    };
}
