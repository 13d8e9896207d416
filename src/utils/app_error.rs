use crate::services::wigle_client::types::wigle_service_error::WigleServiceError;

#[derive(Debug)]
pub enum AppError {
    Config(String),
    Client(WigleServiceError),
    Io(std::io::Error),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Invalid configuration: {}", e),
            AppError::Client(e) => write!(f, "Failed to set up Wigle client: {}", e),
            AppError::Io(e) => write!(f, "Terminal I/O failed: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<WigleServiceError> for AppError {
    fn from(e: WigleServiceError) -> Self {
        AppError::Client(e)
    }
}
