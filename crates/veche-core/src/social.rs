//! Social-network layer over the graph engine.
//!
//! Users are vertices; a friendship is a pair of unit-weight directed
//! edges, one in each direction. The layer adds nothing algorithmic on
//! top of the graph beyond the friend-of-friend suggestion query.

use std::collections::HashSet;

use parking_lot::Mutex;

use crate::graph::Graph;
use crate::ingest::Command;

/// Weight carried by every friendship edge.
const FRIEND_WEIGHT: u32 = 1;

/// A social network backed by a weighted directed graph.
///
/// The underlying graph is not internally synchronized, so the network
/// guards it with one process-wide mutex. Every public method acquires
/// the lock for the duration of exactly one command; that per-command
/// granularity is the contract the ingestion workers interleave under.
#[derive(Debug, Default)]
pub struct SocialNetwork {
    graph: Mutex<Graph<String>>,
}

impl SocialNetwork {
    /// Creates an empty network.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user with no friends.
    ///
    /// Returns `false` without change when the name is empty or the user
    /// already exists.
    pub fn add_user(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }
        self.graph.lock().add_vertex(name.to_string())
    }

    /// Returns an unordered snapshot of every user name.
    #[must_use]
    pub fn all_users(&self) -> Vec<String> {
        self.graph.lock().vertices()
    }

    /// Creates a symmetric friendship between two users.
    ///
    /// Absent users are created first. Returns `false` when either name
    /// is empty, the names are equal, or the pair is already befriended.
    pub fn add_friends(&self, a: &str, b: &str) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }
        let mut graph = self.graph.lock();
        // Short-circuit: if the forward edge already exists the reverse
        // insertion is not attempted.
        graph.add_edge(a.to_string(), b.to_string(), FRIEND_WEIGHT)
            && graph.add_edge(b.to_string(), a.to_string(), FRIEND_WEIGHT)
    }

    /// Returns a user's friends.
    ///
    /// Empty both for an unknown user and for a friendless one.
    #[must_use]
    pub fn friends(&self, name: &str) -> Vec<String> {
        self.graph.lock().neighbors(name)
    }

    /// Dissolves the friendship between two users.
    ///
    /// Returns `true` only when both users exist and were mutually
    /// connected; otherwise nothing changes and no user is created.
    pub fn unfriend(&self, a: &str, b: &str) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }
        let mut graph = self.graph.lock();
        graph.remove_edge(a, b) && graph.remove_edge(b, a)
    }

    /// Suggests people the user may want to know: distinct friends of
    /// friends, excluding the user and their direct friends.
    ///
    /// Empty when the user is unknown, friendless, or their friends have
    /// no further friends. The result order is unspecified.
    #[must_use]
    pub fn suggestions(&self, name: &str) -> Vec<String> {
        let graph = self.graph.lock();
        if !graph.has_vertex(name) {
            return Vec::new();
        }

        let friends = graph.neighbors(name);
        let mut found = HashSet::new();
        for friend in &friends {
            for candidate in graph.neighbors(friend.as_str()) {
                if candidate != name && !friends.contains(&candidate) {
                    found.insert(candidate);
                }
            }
        }
        found.into_iter().collect()
    }

    /// Merges two users' vertices through the consolidation engine.
    ///
    /// Succeeds only when the users are directly related; the surviving
    /// name is the lexicographically smaller one.
    pub fn merge_users(&self, a: &str, b: &str) -> bool {
        if a.is_empty() || b.is_empty() {
            return false;
        }
        self.graph
            .lock()
            .consolidate(&a.to_string(), &b.to_string())
    }

    /// Applies one parsed ingestion command.
    pub fn apply(&self, command: &Command) -> bool {
        match command {
            Command::AddUser(name) => self.add_user(name),
            Command::AddFriends(a, b) => self.add_friends(a, b),
        }
    }
}
