use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Failed to deliver analytics event: {0}")]
    Transport(String),

    #[error("Analytics endpoint rejected event with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("Invalid header value for analytics request: {0}")]
    InvalidHeader(String),

    #[error("Failed to build analytics client: {0}")]
    Client(String),
}
