use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid rating: {0}. rating must be in [1, 5]")]
    InvalidRating(u8),

    #[error("Ratings are required")]
    EmptyRatings,

    #[error("End date is required to activate feedback")]
    EndDateRequired,

    #[error("Invalid end date format")]
    InvalidEndDate(String),

    #[error("End date must be in the future")]
    EndDateNotInFuture,

    #[error("invalid {kind} id '{value}'")]
    InvalidId { kind: &'static str, value: String },
}
