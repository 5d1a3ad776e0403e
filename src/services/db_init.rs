use mongodb::{bson::doc, Database, IndexModel};

use crate::repositories::stocks_repository::{BUY_ORDERS_COLLECTION, SELL_ORDERS_COLLECTION};

pub async fn ensure_indexes(db: &Database) -> Result<(), String> {
    // order histories are always read newest first
    for name in [BUY_ORDERS_COLLECTION, SELL_ORDERS_COLLECTION] {
        let col = db.collection::<mongodb::bson::Document>(name);
        let model = IndexModel::builder()
            .keys(doc! { "date_and_time_of_order": -1 })
            .build();

        col.create_index(model, None)
            .await
            .map_err(|e| e.to_string())?;
    }

    Ok(())
}
