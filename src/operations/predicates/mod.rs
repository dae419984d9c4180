mod sat;

pub use sat::*;
