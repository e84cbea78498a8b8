use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Could not open {port}: {source}")]
    SourceOpen {
        port: String,
        #[source]
        source: serialport::Error,
    },

    #[error("Serial error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Plot error: {0}")]
    Plot(String),

    #[error("Invalid interval: {input} ms (must be greater than zero)")]
    InvalidInterval { input: u64 },

    #[error("Invalid baud rate: {input}")]
    InvalidBaud { input: u32 },
}

pub(crate) type Result<T> = std::result::Result<T, AppError>;
