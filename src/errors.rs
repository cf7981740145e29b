use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("property store failure: {0}")]
    Store(#[from] sled::Error),
    #[error("malformed user keys: {0}")]
    Json(#[from] serde_json::Error),
    #[error("could not read manifest {path}: {source}")]
    ManifestIo {
        path: String,
        source: std::io::Error,
    },
    #[error("record {index}: `{field}` must not be empty")]
    EmptyField { index: usize, field: &'static str },
    #[error("duplicate user `{0}` in manifest")]
    DuplicateUser(String),
    #[error("property `{0}` holds non-utf8 data")]
    Corrupt(String),
}
