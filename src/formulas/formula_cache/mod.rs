pub mod formula_encoding;
pub mod simple_cache;

const CACHE_INITIAL_CAPACITY: usize = 10;
