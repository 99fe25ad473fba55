use thiserror::Error;

/// Failures while obtaining routes from a provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// The directions service answered with a status other than `OK`.
    #[error("Directions API error ({status}): {message}")]
    Status { status: String, message: String },

    // Non-JSON body on a non-success HTTP status
    #[error("Unstructured API Error (HTTP {status}): {body}")]
    RawApiError { status: u16, body: String },

    #[error("Route {index} in the response has no legs")]
    MalformedRoute { index: usize },

    #[error("Failed to decode route geometry: {0}")]
    Polyline(String),

    #[error("Underlying request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Everything that can stop a single dashboard request. Each variant is
/// rendered once to the user; nothing partial is shown.
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Please provide both start and destination ({0} is missing).")]
    MissingInput(&'static str),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("No routes available to rank")]
    EmptyInput,

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write CSV table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Failed to serialize map view: {0}")]
    Json(#[from] serde_json::Error),
}
