//! # Veche Core
//!
//! Weighted directed graph engine for social-relationship data.
//!
//! The engine owns a generic adjacency-map graph whose most interesting
//! operation is *vertex consolidation*: collapsing two connected vertices
//! into a single survivor while reconciling conflicting edge weights.
//! On top of it sit a thin social-network layer (friendships as pairs of
//! unit-weight directed edges) and a concurrent file-ingestion pipeline
//! that applies textual commands from many sources under one lock.
//!
//! ## Quick Start
//!
//! ```rust
//! use veche_core::Graph;
//!
//! let mut graph = Graph::new();
//! graph.add_edge("ana", "bora", 3);
//! graph.add_edge("ciril", "ana", 2);
//! graph.add_edge("ciril", "bora", 7);
//! assert_eq!(graph.edge_weight("ana", "bora"), Some(3));
//!
//! // "ana" and "bora" collapse into "ana"; the conflicting incoming
//! // weights 2 and 7 reconcile to the minimum.
//! assert!(graph.consolidate(&"ana", &"bora"));
//! assert!(!graph.has_vertex("bora"));
//! assert_eq!(graph.edge_weight("ciril", "ana"), Some(2));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod social;
#[cfg(test)]
mod social_tests;

pub use config::IngestConfig;
pub use error::{Error, Result};
pub use graph::{Graph, NaturalOrder, OrderFn, VertexOrder};
pub use ingest::{ingest_files, Command, IngestReport};
pub use social::SocialNetwork;
