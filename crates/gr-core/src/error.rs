use thiserror::Error;

pub type GrResult<T> = Result<T, GrError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GrError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}
