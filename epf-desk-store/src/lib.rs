//! Customer record models and the repository operations the front-end
//! performs against the EPF backend.

pub mod models;
pub mod repository;
pub mod utils;

pub use models::*;
pub use repository::*;
