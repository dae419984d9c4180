mod computation_result;
mod events;
mod handler;
mod row_limit_handler;
mod timeout_handler;

pub use computation_result::*;
pub use events::*;
pub use handler::*;
pub use row_limit_handler::*;
pub use timeout_handler::*;
