//! DOM error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("malformed JSON in attribute {name}: {source}")]
    MalformedJson {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
