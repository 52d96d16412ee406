pub mod config;
pub mod http_repositories;
pub mod repository;
pub mod utils;

pub use config::ClientConfig;
pub use http_repositories::HttpRepositories;
pub use repository::customer::customer_repository::CustomerRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
