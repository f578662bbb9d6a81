// Content-based career matching.
// Implements: career catalog, synonym expansion, fuzzy similarity, ranking,
// and the HTTP handlers that expose them.

mod builtin_careers;
pub mod catalog;
pub mod engine;
pub mod handlers;
pub mod similarity;
pub mod store;
pub mod synonyms;
