use eco_core::EcoError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimError {
    #[error(transparent)]
    Eco(#[from] EcoError),
}

pub type SimResult<T> = Result<T, SimError>;
