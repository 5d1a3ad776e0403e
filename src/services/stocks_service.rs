use std::sync::Arc;

use uuid::Uuid;

use crate::dtos::{BuyOrderRequest, BuyOrderResponse, SellOrderRequest, SellOrderResponse};
use crate::errors::OrderError;
use crate::models::{BuyOrder, SellOrder};
use crate::repositories::StocksRepository;
use crate::validation;

/// Source of order identities. Pluggable so tests can supply a deterministic
/// sequence; the production generator is random and needs no coordination
/// between concurrent creates.
pub trait OrderIdGenerator: Send + Sync {
    fn next_id(&self) -> Uuid;
}

/// Default generator: random v4 UUIDs.
pub struct RandomOrderIds;

impl OrderIdGenerator for RandomOrderIds {
    fn next_id(&self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Facade for creating and listing simulated buy/sell orders.
///
/// Holds its repository and id generator behind immutable shared handles and
/// nothing else, so clones are cheap and safe to use concurrently.
#[derive(Clone)]
pub struct StocksService {
    stocks_repository: Arc<dyn StocksRepository>,
    order_ids: Arc<dyn OrderIdGenerator>,
}

impl StocksService {
    pub fn new(stocks_repository: Arc<dyn StocksRepository>) -> Self {
        Self::with_id_generator(stocks_repository, Arc::new(RandomOrderIds))
    }

    pub fn with_id_generator(
        stocks_repository: Arc<dyn StocksRepository>,
        order_ids: Arc<dyn OrderIdGenerator>,
    ) -> Self {
        Self {
            stocks_repository,
            order_ids,
        }
    }

    /// Validates and persists a buy order.
    ///
    /// A missing request fails immediately; constraint violations fail with
    /// one aggregated message before anything touches the store. The single
    /// write in the middle is the only side effect.
    pub async fn create_buy_order(
        &self,
        buy_order_request: Option<BuyOrderRequest>,
    ) -> Result<BuyOrderResponse, OrderError> {
        let buy_order_request = buy_order_request.ok_or(OrderError::MissingRequest)?;

        validation::model_validation(&buy_order_request)?;

        let buy_order = buy_order_request.to_buy_order(self.order_ids.next_id());

        let buy_order = self.stocks_repository.create_buy_order(buy_order).await?;

        Ok(buy_order.to_response())
    }

    /// Validates and persists a sell order.
    pub async fn create_sell_order(
        &self,
        sell_order_request: Option<SellOrderRequest>,
    ) -> Result<SellOrderResponse, OrderError> {
        let sell_order_request = sell_order_request.ok_or(OrderError::MissingRequest)?;

        validation::model_validation(&sell_order_request)?;

        let sell_order = sell_order_request.to_sell_order(self.order_ids.next_id());

        let sell_order = self.stocks_repository.create_sell_order(sell_order).await?;

        Ok(sell_order.to_response())
    }

    /// All buy orders, most recent first. An empty store yields an empty
    /// list, never an error.
    pub async fn get_buy_orders(&self) -> Result<Vec<BuyOrderResponse>, OrderError> {
        let orders = self.stocks_repository.get_all_buy_orders().await?;

        Ok(orders.iter().map(BuyOrder::to_response).collect())
    }

    /// All sell orders, most recent first.
    pub async fn get_sell_orders(&self) -> Result<Vec<SellOrderResponse>, OrderError> {
        let orders = self.stocks_repository.get_all_sell_orders().await?;

        Ok(orders.iter().map(SellOrder::to_response).collect())
    }
}
