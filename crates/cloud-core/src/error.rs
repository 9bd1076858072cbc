/// Reasons a parameter snapshot is rejected before generation.
#[derive(Debug, thiserror::Error)]
pub enum ParameterError {
    #[error("instance count must be at least 1")]
    ZeroCount,

    #[error("parameter `{field}` is not finite")]
    NonFinite { field: &'static str },

    #[error("unknown parameter: {0}")]
    UnknownField(String),

    #[error("parameter json error: {0}")]
    Json(#[from] serde_json::Error),
}
