use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, error::Error, options::FindOptions, Database};

use crate::models::{BuyOrder, SellOrder};

pub const BUY_ORDERS_COLLECTION: &str = "buy_orders";
pub const SELL_ORDERS_COLLECTION: &str = "sell_orders";

/// Data access for buy and sell orders.
///
/// Append-only: there are no update or delete operations. Storage failures
/// are returned as-is, never wrapped or swallowed.
#[async_trait]
pub trait StocksRepository: Send + Sync {
    /// Inserts a new buy order and returns it.
    async fn create_buy_order(&self, buy_order: BuyOrder) -> Result<BuyOrder, Error>;

    /// Inserts a new sell order and returns it.
    async fn create_sell_order(&self, sell_order: SellOrder) -> Result<SellOrder, Error>;

    /// All buy orders, most recent order first.
    async fn get_all_buy_orders(&self) -> Result<Vec<BuyOrder>, Error>;

    /// All sell orders, most recent order first.
    async fn get_all_sell_orders(&self) -> Result<Vec<SellOrder>, Error>;
}

/// `StocksRepository` over two MongoDB collections, one per order kind.
/// Stateless aside from the database handle.
#[derive(Clone)]
pub struct MongoStocksRepository {
    db: Database,
}

impl MongoStocksRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn newest_first() -> FindOptions {
        FindOptions::builder()
            .sort(doc! { "date_and_time_of_order": -1 })
            .build()
    }
}

#[async_trait]
impl StocksRepository for MongoStocksRepository {
    async fn create_buy_order(&self, buy_order: BuyOrder) -> Result<BuyOrder, Error> {
        let col = self.db.collection::<BuyOrder>(BUY_ORDERS_COLLECTION);
        col.insert_one(&buy_order, None).await?;
        Ok(buy_order)
    }

    async fn create_sell_order(&self, sell_order: SellOrder) -> Result<SellOrder, Error> {
        let col = self.db.collection::<SellOrder>(SELL_ORDERS_COLLECTION);
        col.insert_one(&sell_order, None).await?;
        Ok(sell_order)
    }

    async fn get_all_buy_orders(&self) -> Result<Vec<BuyOrder>, Error> {
        let col = self.db.collection::<BuyOrder>(BUY_ORDERS_COLLECTION);
        let cursor = col.find(None, Self::newest_first()).await?;
        cursor.try_collect().await
    }

    async fn get_all_sell_orders(&self) -> Result<Vec<SellOrder>, Error> {
        let col = self.db.collection::<SellOrder>(SELL_ORDERS_COLLECTION);
        let cursor = col.find(None, Self::newest_first()).await?;
        cursor.try_collect().await
    }
}
