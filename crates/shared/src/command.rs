#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown form field `{0}`")]
    UnknownField(String),

    #[error("a submission is already in flight")]
    SubmissionInFlight,
}

pub type Result<T> = std::result::Result<T, Error>;
