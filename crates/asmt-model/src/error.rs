use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown question type: id={id} name={name:?}")]
    UnknownQuestionType { id: i64, name: String },
    #[error("unknown media kind code: {0}")]
    UnknownMediaKind(i64),
    #[error("cannot infer media kind for file {0:?}")]
    UnknownMediaExtension(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
