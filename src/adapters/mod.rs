// Adapters layer: concrete implementations of the domain ports (filesystem storage, progress reporting).

pub mod reporter;
pub mod storage;
