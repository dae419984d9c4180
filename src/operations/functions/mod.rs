mod variables;

pub use variables::*;
