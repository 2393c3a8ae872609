//! Saved stair designs for the estimate report.

mod routes;
pub mod store;

pub use routes::router;
pub use store::StairReport;
