use brand_guidelines::error::GuidelineError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Guideline(#[from] GuidelineError),

    #[error("config error: {0}")]
    Config(String),
}
