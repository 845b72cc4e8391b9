#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A create request violated the validation contract. The inner
    /// message is exactly what the API returns to the client.
    #[error("Validation failed: {0}")]
    Validation(String),
}
