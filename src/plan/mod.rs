//! Query plan types - the relational description of one operation.
//!
//! A [`QueryPlan`] is built once by the caller (the query-planning layer),
//! consumed once by [`crate::statement::build`], and then discarded. Entity
//! and field names arrive already resolved; no schema lookup happens here.

pub mod predicate;
mod value;

pub use predicate::Predicate;
pub use value::ScalarValue;

// ============================================================================
// Action
// ============================================================================

/// The kind of operation a plan describes.
///
/// Closed set: statement construction matches on this exhaustively, so a new
/// action kind is a compile-time-checked extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Find,
    Create,
    UpdateMany,
    Aggregate,
}

impl Action {
    /// The action name as it appears in the wire document and in the
    /// response's result key.
    pub fn wire_name(self) -> &'static str {
        match self {
            Action::Find => "findMany",
            Action::Create => "createOne",
            Action::UpdateMany => "updateMany",
            Action::Aggregate => "aggregate",
        }
    }
}

// ============================================================================
// Joins and aggregates
// ============================================================================

/// Request to include one related entity's fields alongside the primary
/// entity's, in the protocol's full default-ordered expansion. No per-join
/// filter, sort, or projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinSpec {
    pub field: String,
}

impl JoinSpec {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

/// A requested summary value.
///
/// Only [`AggregateSpec::CountAll`] can be encoded today; every other kind
/// fails statement construction with `UnsupportedAggregate`.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateSpec {
    /// Wildcard row count: `count(*)`.
    CountAll,
    Sum(String),
    Avg(String),
    Min(String),
    Max(String),
}

// ============================================================================
// Cache strategy
// ============================================================================

/// Caller-declared freshness hint for a read, in seconds.
///
/// The strategy rides on the built statement as an attribute - it is never
/// serialized into the query document. The transport renders it into its own
/// channel-level caching hint (typically a header).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStrategy {
    pub ttl: u64,
    pub stale_while_revalidate: u64,
}

impl CacheStrategy {
    pub fn new(ttl: u64, stale_while_revalidate: u64) -> Self {
        Self {
            ttl,
            stale_while_revalidate,
        }
    }
}

/// A long-lived handle for one entity that callers attach cache strategies to.
///
/// The strategy is a single-use latch: set before a read, consumed by exactly
/// one plan construction, never carried across unrelated calls. A source
/// supports one in-flight plan construction at a time; concurrent callers
/// need external synchronization or per-call sources.
#[derive(Debug, Clone)]
pub struct QuerySource {
    entity: String,
    cache: Option<CacheStrategy>,
}

impl QuerySource {
    pub fn new(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            cache: None,
        }
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    /// Arm the latch for the next plan built from this source.
    pub fn set_cache_strategy(&mut self, strategy: CacheStrategy) {
        self.cache = Some(strategy);
    }

    /// Consume the latch. Returns `None` once taken, until re-armed.
    pub fn take_cache_strategy(&mut self) -> Option<CacheStrategy> {
        self.cache.take()
    }
}

// ============================================================================
// Query plan
// ============================================================================

/// Structured description of one relational operation prior to translation.
///
/// Owned solely by the call that built it; `statement::build` consumes it.
#[derive(Debug, Clone)]
#[must_use = "a query plan has no effect until passed to statement::build"]
pub struct QueryPlan {
    /// Target entity (model) name, already resolved.
    pub entity: String,
    /// Projected field names, in the order decoded tuples will carry them.
    pub fields: Vec<String>,
    /// Filter predicate; `None` means match-all.
    pub predicate: Option<Predicate>,
    /// Related-entity inclusions, in declaration order.
    pub joins: Vec<JoinSpec>,
    /// Operation kind; decides which statement variant gets built.
    pub action: Action,
    /// Value rows for `Create` (exactly one row is supported).
    pub rows: Vec<Vec<ScalarValue>>,
    /// Field assignments for `UpdateMany`, in declaration order.
    pub assignments: Vec<(String, ScalarValue)>,
    /// Requested aggregates as (alias, spec) pairs.
    pub aggregates: Vec<(String, AggregateSpec)>,
    /// Freshness hint threaded explicitly into statement construction.
    pub cache_strategy: Option<CacheStrategy>,
}

impl QueryPlan {
    fn new(entity: impl Into<String>, action: Action) -> Self {
        Self {
            entity: entity.into(),
            fields: Vec::new(),
            predicate: None,
            joins: Vec::new(),
            action,
            rows: Vec::new(),
            assignments: Vec::new(),
            aggregates: Vec::new(),
            cache_strategy: None,
        }
    }

    /// Start a read plan.
    pub fn find(entity: impl Into<String>) -> Self {
        Self::new(entity, Action::Find)
    }

    /// Start a single-row insert plan.
    pub fn create(entity: impl Into<String>) -> Self {
        Self::new(entity, Action::Create)
    }

    /// Start a filtered bulk-update plan.
    pub fn update_many(entity: impl Into<String>) -> Self {
        Self::new(entity, Action::UpdateMany)
    }

    /// Start an aggregate plan.
    pub fn aggregate(entity: impl Into<String>) -> Self {
        Self::new(entity, Action::Aggregate)
    }

    /// Set the projected fields. Order here is the tuple order on decode.
    pub fn fields(mut self, fields: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Set the filter predicate.
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Include one related entity. Declaration order is replayed at decode.
    pub fn join(mut self, field: impl Into<String>) -> Self {
        self.joins.push(JoinSpec::new(field));
        self
    }

    /// Add a value row for `Create`, zipped against `fields`.
    pub fn row(mut self, values: impl IntoIterator<Item = impl Into<ScalarValue>>) -> Self {
        self.rows.push(values.into_iter().map(Into::into).collect());
        self
    }

    /// Add a field assignment for `UpdateMany`.
    pub fn set(mut self, field: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.assignments.push((field.into(), value.into()));
        self
    }

    /// Request an aggregate under the given alias.
    pub fn with_aggregate(mut self, alias: impl Into<String>, spec: AggregateSpec) -> Self {
        self.aggregates.push((alias.into(), spec));
        self
    }

    /// Attach a freshness hint directly.
    pub fn cache(mut self, strategy: CacheStrategy) -> Self {
        self.cache_strategy = Some(strategy);
        self
    }

    /// Consume the source's cache latch into this plan.
    pub fn cache_from(mut self, source: &mut QuerySource) -> Self {
        self.cache_strategy = source.take_cache_strategy();
        self
    }
}
