//! Weather client error types.

/// Errors from a weather lookup.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid API key
    #[error("unauthorized: check OPENWEATHER_API_KEY")]
    Unauthorized,

    /// The API does not know the city
    #[error("no weather data for {0}")]
    NotFound(String),

    /// Rate limited by the API
    #[error("rate limited by weather API")]
    RateLimited,

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body could not be parsed or is incomplete
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },
}
