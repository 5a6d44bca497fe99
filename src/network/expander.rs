//! Fixed-depth breadth-first expansion of a word's social network.

use std::fmt;

use ahash::AHashSet;
use log::{debug, info};
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::{Deserialize, Serialize};

use crate::dictionary::WordIndex;
use crate::error::{LexinetError, Result};
use crate::network::adjacency::{find_adjacent, par_find_adjacent};

/// Number of expansion rounds. The network never reaches further than this.
pub const NETWORK_DEPTH: usize = 3;

/// One level of the social network, named by its distance from the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Hop {
    Friends,
    FriendsOfFriends,
    FriendsOfFriendsOfFriends,
}

impl Hop {
    /// All hops in expansion order.
    pub const ALL: [Hop; NETWORK_DEPTH] = [
        Hop::Friends,
        Hop::FriendsOfFriends,
        Hop::FriendsOfFriendsOfFriends,
    ];

    /// Edit-distance hops from the origin (1..=3).
    pub fn distance(self) -> usize {
        self.index() + 1
    }

    /// Human-readable name of the group.
    pub fn label(self) -> &'static str {
        match self {
            Hop::Friends => "Friends",
            Hop::FriendsOfFriends => "Friends of Friends",
            Hop::FriendsOfFriendsOfFriends => "Friends of Friends of Friends",
        }
    }

    fn index(self) -> usize {
        match self {
            Hop::Friends => 0,
            Hop::FriendsOfFriends => 1,
            Hop::FriendsOfFriendsOfFriends => 2,
        }
    }
}

impl fmt::Display for Hop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Configuration for network expansion.
#[derive(Debug, Clone, Default)]
pub struct ExpansionConfig {
    /// Scan each round's frontier on a rayon thread pool.
    pub parallel: bool,

    /// Worker threads for parallel expansion.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

impl ExpansionConfig {
    /// Configuration for parallel expansion with the default pool size.
    pub fn parallel() -> Self {
        ExpansionConfig {
            parallel: true,
            thread_pool_size: None,
        }
    }
}

/// The finished social network of one origin word.
///
/// The three levels are pairwise disjoint, and `network` is exactly their
/// union plus the origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialNetwork {
    origin: String,
    network: AHashSet<String>,
    levels: [AHashSet<String>; NETWORK_DEPTH],
}

impl SocialNetwork {
    /// The word the network was expanded from.
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Every word in the network, origin included.
    pub fn network(&self) -> &AHashSet<String> {
        &self.network
    }

    /// Words first found at the given hop.
    pub fn level(&self, hop: Hop) -> &AHashSet<String> {
        &self.levels[hop.index()]
    }

    pub fn friends(&self) -> &AHashSet<String> {
        self.level(Hop::Friends)
    }

    pub fn friends_of_friends(&self) -> &AHashSet<String> {
        self.level(Hop::FriendsOfFriends)
    }

    pub fn friends_of_friends_of_friends(&self) -> &AHashSet<String> {
        self.level(Hop::FriendsOfFriendsOfFriends)
    }

    /// Words of one level in lexicographic order.
    pub fn sorted_level(&self, hop: Hop) -> Vec<&str> {
        sorted_words(self.level(hop))
    }

    /// The whole network in lexicographic order.
    pub fn sorted_network(&self) -> Vec<&str> {
        sorted_words(&self.network)
    }

    /// Number of words in the network, origin included.
    pub fn size(&self) -> usize {
        self.network.len()
    }

    /// True when nothing besides the origin was reached.
    pub fn is_isolated(&self) -> bool {
        self.network.len() == 1
    }
}

fn sorted_words(words: &AHashSet<String>) -> Vec<&str> {
    let mut sorted: Vec<&str> = words.iter().map(String::as_str).collect();
    sorted.sort_unstable();
    sorted
}

/// Runs the three adjacency rounds over a word index.
pub struct NetworkExpander<'a> {
    index: &'a WordIndex,
    thread_pool: Option<ThreadPool>,
}

impl<'a> NetworkExpander<'a> {
    /// Create a sequential expander.
    pub fn new(index: &'a WordIndex) -> Self {
        NetworkExpander {
            index,
            thread_pool: None,
        }
    }

    /// Create an expander from a configuration.
    pub fn with_config(index: &'a WordIndex, config: ExpansionConfig) -> Result<Self> {
        if !config.parallel {
            return Ok(Self::new(index));
        }

        let thread_pool_size = config.thread_pool_size.unwrap_or_else(num_cpus::get);
        if thread_pool_size == 0 {
            return Err(LexinetError::invalid_argument(
                "thread pool size must be at least 1",
            ));
        }

        let thread_pool = ThreadPoolBuilder::new()
            .num_threads(thread_pool_size)
            .thread_name(|i| format!("network-expand-{i}"))
            .build()
            .map_err(|e| LexinetError::thread_pool(format!("Failed to create thread pool: {e}")))?;

        debug!("Parallel expansion on {thread_pool_size} threads");

        Ok(NetworkExpander {
            index,
            thread_pool: Some(thread_pool),
        })
    }

    /// Whether rounds are scanned on a thread pool.
    pub fn is_parallel(&self) -> bool {
        self.thread_pool.is_some()
    }

    /// Expand the social network of `origin`.
    ///
    /// The origin does not need to be in the dictionary. Each round excludes
    /// everything visited before the round started, and its discoveries are
    /// merged into the visited set only once the round is over.
    pub fn expand(&self, origin: &str) -> Result<SocialNetwork> {
        if origin.is_empty() {
            return Err(LexinetError::EmptyOrigin);
        }

        let mut visited = AHashSet::new();
        visited.insert(origin.to_string());

        let mut levels: [AHashSet<String>; NETWORK_DEPTH] = Default::default();
        let mut frontier = vec![origin.to_string()];

        for hop in Hop::ALL {
            let found = self.find_round(&frontier, &visited);
            debug!(
                "{hop}: searched {} words, found {} new",
                frontier.len(),
                found.len()
            );

            visited.extend(found.iter().cloned());
            frontier = found.iter().cloned().collect();
            levels[hop.index()] = found;
        }

        info!(
            "Social network of '{origin}' holds {} words ({} / {} / {})",
            visited.len(),
            levels[0].len(),
            levels[1].len(),
            levels[2].len()
        );

        Ok(SocialNetwork {
            origin: origin.to_string(),
            network: visited,
            levels,
        })
    }

    fn find_round(&self, frontier: &[String], visited: &AHashSet<String>) -> AHashSet<String> {
        match &self.thread_pool {
            Some(thread_pool) => {
                thread_pool.install(|| par_find_adjacent(frontier, self.index, visited))
            }
            None => find_adjacent(frontier, self.index, visited),
        }
    }
}

/// Expand the social network of `origin` sequentially.
pub fn social_network(index: &WordIndex, origin: &str) -> Result<SocialNetwork> {
    NetworkExpander::new(index).expand(origin)
}
