pub mod customer;
pub mod identifiable;
pub mod requests;

// Re-exports
pub use customer::*;
pub use identifiable::*;
pub use requests::*;
