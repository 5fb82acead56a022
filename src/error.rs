use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Coverage radius must be a finite, strictly positive distance.
    #[error("invalid coverage radius: {0} m")]
    InvalidCoverageRadius(f64),

    /// Staffing ratio is used as a divisor and cannot be null.
    #[error("students per professional cannot be zero")]
    NullStaffingRatio,

    /// Travel time estimation requires a finite, strictly positive speed.
    #[error("invalid travel speed: {0} km/h")]
    InvalidTravelSpeed(f64),

    /// Tabular export failure
    #[error("csv export error: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying writer failure
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
