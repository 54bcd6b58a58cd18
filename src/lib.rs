//! # Prismatic
//!
//! Translates relational query plans into Prisma-style JSON protocol
//! statements, and decodes protocol responses back into ordered value tuples.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │           Query Plan (entity, fields, filter,            │
//! │               joins, action, cache strategy)             │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [statement::build]
//! ┌─────────────────────────────────────────────────────────┐
//! │     Statement (modelName / action / query document)      │
//! │  where-clause translation · join expansion · aggregates  │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [external transport round-trip]
//! ┌─────────────────────────────────────────────────────────┐
//! │                   Protocol Response                      │
//! │        error classification, then tuple decoding         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! The crate is purely computational: connection management, authentication,
//! remote schema registration, and the actual network round-trip belong to
//! the transport layer that carries the serialized statement.
//!
//! # Example
//!
//! ```
//! use prismatic::prelude::*;
//!
//! let plan = QueryPlan::find("User")
//!     .fields(["id", "name"])
//!     .filter(eq("name", "Alice"))
//!     .join("pets");
//!
//! let statement = prismatic::statement::build(plan).unwrap();
//! let document = statement.serialize();
//! // `document` goes to the transport; when the response comes back:
//! // statement.decode(&response)? -> Vec<Row>
//! ```

pub mod plan;
pub mod protocol;
pub mod statement;
pub mod translate;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::plan::predicate::{and, eq, gt, is_in, Predicate};
    pub use crate::plan::{
        Action, AggregateSpec, CacheStrategy, JoinSpec, QueryPlan, QuerySource, ScalarValue,
    };
    pub use crate::protocol::{ProtocolError, Response, Row};
    pub use crate::statement::{build, Statement};
    pub use crate::translate::{TranslateError, TranslateResult};
}
