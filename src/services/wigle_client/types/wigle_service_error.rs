#[derive(Debug, Clone)]
pub enum WigleServiceError {
    /// The service answered with anything other than 200.
    Status { status: u16, body: String },
    Transport(String),
    Decode(String),
    InvalidRequest(String),
}

impl std::fmt::Display for WigleServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            WigleServiceError::Status { status, body } => {
                write!(f, "Failed to fetch data: {}, {}", status, body)
            }
            WigleServiceError::Transport(e) => write!(f, "Failed to send request: {}", e),
            WigleServiceError::Decode(e) => write!(f, "Failed to read response body: {}", e),
            WigleServiceError::InvalidRequest(e) => write!(f, "Invalid search request: {}", e),
        }
    }
}

impl std::error::Error for WigleServiceError {}
