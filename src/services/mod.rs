pub mod db_init;
pub mod finnhub;
pub mod stocks_service;
