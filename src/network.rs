//! Word social networks over a length-indexed dictionary.
//!
//! Two words are friends when they are at Levenshtein distance exactly 1. A
//! word's social network is the word itself plus its friends, friends of
//! friends, and friends of friends of friends. Each hop reports only the words
//! that were new at that distance.

pub mod adjacency;
pub mod expander;
pub mod report;

pub use adjacency::*;
pub use expander::*;
pub use report::*;
