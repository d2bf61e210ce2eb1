use thiserror::Error;
use uuid::Uuid;

use crate::types::InputField;

#[derive(Error, Debug)]
pub enum LoanError {
    #[error("invalid {field}: {reason}")]
    InvalidInput {
        field: InputField,
        reason: String,
    },

    #[error("scenario not found: {id}")]
    ScenarioNotFound {
        id: Uuid,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },
}

pub type Result<T> = std::result::Result<T, LoanError>;
