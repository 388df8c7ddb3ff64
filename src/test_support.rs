use crate::config::StoreConfig;
use crate::storage::establish_connection;
use sea_orm::DatabaseConnection;

/// Fresh in-memory store with the full schema.
pub async fn memory_db() -> DatabaseConnection {
    establish_connection(&StoreConfig::in_memory())
        .await
        .expect("in-memory sqlite")
}
