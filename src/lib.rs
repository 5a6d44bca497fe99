//! # Lexinet
//!
//! Bounded "social networks" of words within a dictionary.
//!
//! Two words are friends when one can be turned into the other by inserting,
//! deleting or substituting exactly one character. A word's social network is
//! the word plus everything reachable through at most three such hops, grouped
//! by the hop at which each word was first reached.
//!
//! ## Example
//!
//! ```
//! use lexinet::dictionary::WordIndex;
//! use lexinet::network::{Hop, social_network};
//!
//! let index = WordIndex::from_lines(["cat", "cot", "cop", "dog", "at", "cats"]);
//! let network = social_network(&index, "cat").unwrap();
//!
//! assert_eq!(network.sorted_level(Hop::Friends), vec!["at", "cats", "cot"]);
//! assert_eq!(network.sorted_level(Hop::FriendsOfFriends), vec!["cop"]);
//! assert!(!network.network().contains("dog"));
//! ```

pub mod cli;
pub mod dictionary;
pub mod error;
pub mod network;

pub mod prelude {
    pub use crate::dictionary::{DictionaryLoad, WordIndex};
    pub use crate::error::{LexinetError, Result};
    pub use crate::network::{
        ExpansionConfig, Hop, NetworkExpander, SocialNetwork, find_adjacent, is_adjacent,
        social_network,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
