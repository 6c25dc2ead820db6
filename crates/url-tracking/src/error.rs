use newsletter_common::error::CommonError;

#[derive(Debug, thiserror::Error)]
pub enum TrackingError {
    #[error(transparent)]
    Common(#[from] CommonError),
}
