use voice_guidance_core::model::TurnsSoundError;

#[derive(thiserror::Error, Debug)]
pub enum GuidanceAppError {
    #[error("failure reading guidance configuration: {0}")]
    ConfigurationError(String),
    #[error("failure reading trace: {0}")]
    TraceError(String),
    #[error(transparent)]
    TurnsSoundError(#[from] TurnsSoundError),
    #[error("internal error: {0}")]
    InternalError(String),
}
