//! Wire types for the remote data-access protocol.
//!
//! These mirror the JSON documents the query engine exchanges over the
//! transport: a statement document going out, and a response envelope with
//! a `data` map and an `errors` list coming back.

mod decode;

pub use decode::{result_key, Row};
pub(crate) use decode::{aggregate_scalar, mutation_count, result_object, tuple_from_object};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::translate::JsonMap;

// ============================================================================
// Response envelope
// ============================================================================

/// Response envelope received from the transport.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Response {
    /// Result payloads keyed by `<action><Entity>`, e.g. `findManyUser`.
    #[serde(default)]
    pub data: JsonMap,
    /// Remote-reported errors. Any entry here makes the response
    /// undecodable; classification happens before any tuple is built.
    #[serde(default)]
    pub errors: Vec<ErrorEnvelope>,
}

/// One remote error entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorEnvelope {
    pub user_facing_error: UserFacingError,
}

/// The user-facing half of a remote error.
#[derive(Debug, Clone, Deserialize)]
pub struct UserFacingError {
    /// Remote error code, e.g. `P2002`.
    pub error_code: String,
    /// Human-readable message text.
    pub message: String,
}

/// Remote error codes with a dedicated local classification.
pub mod codes {
    /// Unique constraint violated.
    pub const UNIQUE_CONSTRAINT_VIOLATION: &str = "P2002";
}

// ============================================================================
// Errors
// ============================================================================

/// Errors raised while classifying or decoding a response.
#[derive(Error, Debug, PartialEq)]
pub enum ProtocolError {
    /// Remote uniqueness violation, carrying the remote message text.
    #[error("integrity error: {0}")]
    Integrity(String),

    /// Any other remote-reported error.
    #[error("database error {code}: {message}")]
    Database { code: String, message: String },

    /// Response shape or cardinality did not match what the statement
    /// expected.
    #[error("decode shape error: {0}")]
    DecodeShape(String),
}

impl Response {
    /// Classify remote-reported errors, short-circuiting before any decode.
    ///
    /// Error handling is all-or-nothing: one error entry fails the whole
    /// response, and no tuple is ever built from a response carrying errors.
    pub fn check_errors(&self) -> Result<(), ProtocolError> {
        if let Some(envelope) = self.errors.first() {
            let error = &envelope.user_facing_error;
            return Err(match error.error_code.as_str() {
                codes::UNIQUE_CONSTRAINT_VIOLATION => {
                    ProtocolError::Integrity(error.message.clone())
                }
                _ => ProtocolError::Database {
                    code: error.error_code.clone(),
                    message: error.message.clone(),
                },
            });
        }
        Ok(())
    }

    /// Locate the result payload for the given composite key, classifying
    /// errors first.
    pub fn result(&self, key: &str) -> Result<&Value, ProtocolError> {
        self.check_errors()?;
        self.data
            .get(key)
            .ok_or_else(|| ProtocolError::DecodeShape(format!("no result under key '{key}'")))
    }
}
