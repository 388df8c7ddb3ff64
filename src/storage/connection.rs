use crate::config::StoreConfig;
use crate::storage::entity::{
    Assessment, Category, Company, Department, Dimension, Evidence, MaturityDescriptor, Score,
    Sector, User,
};
use log::info;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    EntityTrait, Schema, Statement,
};

pub async fn establish_connection(config: &StoreConfig) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(config.database_url.to_owned());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.connect_timeout)
        .sqlx_logging(config.sqlx_logging)
        .sqlx_logging_level(log::LevelFilter::Debug);
    if let Some(idle) = config.idle_timeout {
        opt.idle_timeout(idle);
    }
    if let Some(lifetime) = config.max_lifetime {
        opt.max_lifetime(lifetime);
    }

    let db = Database::connect(opt).await?;

    if db.get_database_backend() == DatabaseBackend::Sqlite {
        // 启用 WAL 模式（内存库会返回 memory，无影响）
        db.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            "PRAGMA journal_mode=WAL;".to_string(),
        ))
        .await?;
    }

    ensure_schema(&db).await?;

    info!("Database connection established and schema ensured.");

    Ok(db)
}

/// Creates any missing table, parents before children, plus the descriptor ladder index.
pub async fn ensure_schema<C: ConnectionTrait>(db: &C) -> Result<(), DbErr> {
    create_table(db, Category).await?;
    create_table(db, Sector).await?;
    create_table(db, Company).await?;
    create_table(db, Department).await?;
    create_table(db, User).await?;
    create_table(db, Dimension).await?;
    create_table(db, MaturityDescriptor).await?;
    create_table(db, Assessment).await?;
    create_table(db, Score).await?;
    create_table(db, Evidence).await?;

    // 唯一索引：每个 (dimension, sector) 每个等级只有一条描述
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "CREATE UNIQUE INDEX IF NOT EXISTS idx_maturity_descriptors_unique ON maturity_descriptors(dimension_id, sector_id, level);".to_string(),
    ))
    .await?;

    Ok(())
}

async fn create_table<C, E>(db: &C, entity: E) -> Result<(), DbErr>
where
    C: ConnectionTrait,
    E: EntityTrait,
{
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);
    let stmt = builder.build(schema.create_table_from_entity(entity).if_not_exists());
    db.execute(stmt).await?;
    Ok(())
}
