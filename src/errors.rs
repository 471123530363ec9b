use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    #[error("not logged in to edupage")]
    NotAuthenticated,
    #[error("menu payload malformed: {0}")]
    MalformedPayload(String),
    #[error("meal change rejected by edupage")]
    MealChangeRejected,
    #[error("meal rating rejected by edupage")]
    RatingRejected,
    #[error(transparent)]
    Request(#[from] reqwest::Error),
}
