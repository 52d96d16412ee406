pub mod load_all;
pub mod create;
pub mod update;
pub mod confirm;
pub mod reopen;
pub mod delete;
pub mod customer_repository;

#[cfg(any(test, feature = "test-utils"))]
pub mod in_memory;

// Re-exports
pub use load_all::*;
pub use create::*;
pub use update::*;
pub use confirm::*;
pub use reopen::*;
pub use delete::*;
pub use customer_repository::*;
