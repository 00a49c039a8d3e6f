pub mod catalog;

pub mod reports;

pub use catalog::configure_catalog_routes;
pub use reports::configure_report_routes;
