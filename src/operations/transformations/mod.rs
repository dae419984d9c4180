mod restriction;

pub use restriction::*;
