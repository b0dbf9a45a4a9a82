use thiserror::Error;

pub type AxesResult<T> = Result<T, AxesError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AxesError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("only four y-axes are supported at this time (trying to use {requested})")]
    TooManyAxes { requested: usize },

    #[error("attempting to draw tick on unknown axis {axis}")]
    UnknownTickAxis { axis: i64 },

    #[error("y tick `{label}` does not reference an axis")]
    MissingTickAxis { label: String },

    #[error("invalid color `{0}`: expected #rrggbb or #rgb")]
    InvalidColor(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
