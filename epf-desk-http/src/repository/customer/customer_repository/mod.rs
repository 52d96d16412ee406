pub mod repo_impl;
pub mod load_all;
pub mod create;
pub mod update;
pub mod confirm;
pub mod reopen;
pub mod delete;

#[cfg(test)]
pub mod test_utils;

pub use repo_impl::CustomerRepositoryImpl;
