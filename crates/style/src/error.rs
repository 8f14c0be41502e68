use thiserror::Error;

/// Errors raised while parsing style values or resolving named styles.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleError {
    #[error("invalid length '{0}' (expected a number with optional mm/cm/in/pt unit)")]
    InvalidLength(String),

    #[error("invalid color '{0}' (expected #RRGGBB)")]
    InvalidColor(String),

    #[error("invalid alignment '{0}' (expected left, right, center or justify)")]
    InvalidAlignment(String),

    #[error("unknown style '{0}'")]
    UnknownStyle(String),

    #[error("unknown base style '{base}' while defining '{name}'")]
    UnknownBaseStyle { name: String, base: String },

    #[error("invalid value for '{property}': {message}")]
    InvalidValue { property: String, message: String },
}
