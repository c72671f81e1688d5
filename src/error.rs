//! Crate-level error type.
//!
//! Every handle-accepting operation validates its handles against the structure
//! it is called on before touching any state, so a failed call leaves the
//! structure unchanged.

/// Errors surfaced by the graph store, the partition and the priority queue.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The vertex handle was minted by another graph or its vertex was removed.
    #[error("invalid vertex: handle is foreign to this graph or was removed")]
    InvalidVertex,

    /// The edge handle was minted by another graph or its edge was removed.
    #[error("invalid edge: handle is foreign to this graph or was removed")]
    InvalidEdge,

    /// An edge between the ordered vertex pair already exists.
    #[error("an edge from the origin to the destination already exists")]
    DuplicateEdge,

    /// The vertex is not an endpoint of the edge.
    #[error("vertex is not incident to the edge")]
    IncidentMismatch,

    /// A partition or priority-queue locator is foreign or stale.
    #[error("invalid locator: handle is foreign to this structure or no longer live")]
    InvalidLocator,

    /// A priority-queue key cannot be compared under the queue's ordering.
    #[error("incomparable key")]
    IncomparableKey,
}

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;
