use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CabinError {
    #[error("seat {seat} is outside the cabin (valid: 1..={capacity})")]
    OutOfRange { seat: u32, capacity: u32 },

    #[error("seat {seat} is already empty")]
    AlreadyEmpty { seat: u32 },
}

pub type CabinResult<T> = Result<T, CabinError>;
