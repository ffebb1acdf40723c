use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid document: {0}")]
    Codec(String),
}
