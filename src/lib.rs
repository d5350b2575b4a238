//! Memory Match (workspace facade crate).
//!
//! This package keeps a stable `memory_match::{core,input,store,term,types}`
//! public API while the implementation lives in dedicated crates under
//! `crates/`.

pub use memory_match_core as core;
pub use memory_match_input as input;
pub use memory_match_store as store;
pub use memory_match_term as term;
pub use memory_match_types as types;
