#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum TurnsSoundError {
    #[error("invalid notification configuration: {0}")]
    ConfigurationError(String),
    #[error("failure loading locale phrases: {0}")]
    LocaleLoadError(String),
    #[error("locale has no phrase for '{0}'")]
    MissingPhraseError(String),
    #[error("internal error: {0}")]
    InternalError(String),
}
