//! Weighted directed graph with vertex consolidation.
//!
//! The store keeps one adjacency map per vertex (neighbor → strictly
//! positive weight) and exposes plain CRUD plus one-hop neighbor queries.
//! Consolidation collapses two connected vertices into a survivor chosen
//! by a caller-supplied total order, reconciling conflicting weights to
//! the minimum.
//!
//! # Example
//!
//! ```rust
//! use veche_core::graph::Graph;
//!
//! let mut graph = Graph::new();
//! assert!(graph.add_edge("x", "y", 5));
//! assert_eq!(graph.edge_weight("x", "y"), Some(5));
//! assert_eq!(graph.edge_weight("y", "x"), None);
//! ```

mod merge;
mod ordering;
mod store;


pub use ordering::{NaturalOrder, OrderFn, VertexOrder};
pub use store::Graph;
