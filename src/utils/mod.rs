pub mod parameter_error_handler;
pub mod table;
pub mod validate;

pub use parameter_error_handler::query_error_handler;
pub use table::render_report;
