pub mod stocks_repository;

pub use stocks_repository::{MongoStocksRepository, StocksRepository};
