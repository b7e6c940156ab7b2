use thiserror::Error;

pub type TrendResult<T> = Result<T, TrendError>;

#[derive(Debug, Error)]
pub enum TrendError {
    #[error("malformed record at index {index}: field `{field}` {reason}")]
    MalformedRecord {
        index: usize,
        field: &'static str,
        reason: String,
    },

    #[error("price history is empty")]
    EmptyHistory,

    #[error("invalid plot area: width={width}, height={height}")]
    InvalidPlotArea { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
