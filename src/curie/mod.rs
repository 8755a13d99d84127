//! Compact identifiers (CURIEs)
//!
//! Converts between `HP:0000118` and
//! `http://purl.obolibrary.org/obo/HP_0000118` using a prefix map.

pub mod config;
pub mod error;
pub mod trie;
pub mod util;

pub use config::{default_curie_map, load_curie_map, parse_curie_map, CurieMap};
pub use error::{CurieError, CurieResult};
pub use trie::PrefixTrie;
pub use util::CurieUtil;
