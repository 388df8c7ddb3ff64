mod catalog;
mod config;
mod seed;
mod storage;
#[cfg(test)]
mod test_support;

use chrono::Local;
use log::{error, info, warn};
use sea_orm::DatabaseConnection;
use std::path::Path;
use std::process::ExitCode;

use crate::catalog::Catalog;
use crate::config::SeedConfig;
use crate::seed::verify;
use crate::seed::{LoadOptions, Loader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // 加载 .env（不存在时直接读系统环境变量）
    let _ = dotenv::dotenv();

    let config = match SeedConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.log_dir.as_deref()) {
        eprintln!("failed to initialise logging: {}", e);
        return ExitCode::FAILURE;
    }

    info!("seeding {}", config.store.database_url);
    let db = match storage::establish_connection(&config.store).await {
        Ok(connection) => connection,
        Err(e) => {
            error!("cannot connect to database: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let outcome = run(&db, &config).await;

    if let Err(e) = db.close().await {
        warn!("failed to close database connection: {}", e);
    }

    match outcome {
        Ok(()) => {
            info!("seed run finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("seed run failed: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(db: &DatabaseConnection, config: &SeedConfig) -> anyhow::Result<()> {
    let catalog = match &config.catalog_path {
        Some(path) => {
            info!("loading catalog from {}", path.display());
            Catalog::from_json_file(path)?
        }
        None => catalog::builtin(),
    };

    let loader = Loader::new(
        db,
        LoadOptions {
            ladder_levels: config.ladder_levels,
        },
    );
    let run = loader
        .load_with_timeout(&catalog, config.run_timeout)
        .await?;
    run.report.log_summary();

    verify::report(db, config.ladder_levels).await?;
    let violations =
        verify::soft_deletes_hold(db, &run.context, &catalog.soft_deletes).await?;
    for v in &violations {
        error!("soft delete check failed: {}", v);
    }
    if !violations.is_empty() {
        anyhow::bail!("{} soft-delete checks failed", violations.len());
    }
    Ok(())
}

fn init_logging(log_dir: Option<&Path>) -> std::io::Result<()> {
    let mut builder = env_logger::Builder::from_default_env();
    builder
        .filter_level(log::LevelFilter::Warn)
        .filter_module("lean_seed", log::LevelFilter::Info)
        .filter_module("sqlx", log::LevelFilter::Error)
        .filter_module("sea_orm", log::LevelFilter::Error);

    if let Some(dir) = log_dir {
        std::fs::create_dir_all(dir)?;
        let ts = Local::now().format("%Y%m%d-%H%M%S").to_string();
        let log_file = std::fs::File::create(dir.join(format!("seed-{}.log", ts)))?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    builder.init();
    Ok(())
}
