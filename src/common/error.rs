// src/common/error.rs

#[derive(Debug, thiserror::Error)]
pub enum Wtc401Error<E = ()>
where
    E: core::fmt::Debug, // Needed for the generic Io error message
{
    /// Underlying bus or pin error from the interface implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// The driver configuration was rejected.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
