use std::{io, sync::OnceLock};

use application::{render, Args, Config, Service};
use common::Date;
use service::{command::Checkout, domain::tool, infra::InMemory, Command as _};
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

const STDERR_LEVELS: &[log::Level] = &[log::Level::WARN, log::Level::ERROR];

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stdout)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (!STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || (STDERR_LEVELS.contains(meta.level()))
                            && LOG_LEVEL
                                .get()
                                .copied()
                                .unwrap_or(log::Level::INFO)
                                >= *meta.level()
                })),
        )
        .init();

    _ = start().await;
}

async fn start() -> Result<(), ()> {
    let Args {
        config,
        tool_code,
        rental_days,
        discount_percent,
        checkout_date,
    } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config { service, log } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let checkout_date: Date = checkout_date.parse().map_err(|e| {
        log::error!("failed to parse checkout date: {e}");
    })?;
    let tool_code: tool::Code = tool_code.parse().map_err(|e| {
        log::error!("failed to parse tool code: {e}");
    })?;

    let service = Service::new(service.into(), InMemory::stock());

    let agreement = service
        .execute(Checkout {
            tool_code,
            rental_days,
            discount_percent,
            checkout_date,
        })
        .await
        .map_err(|e| {
            log::error!("checkout failed: {e}");
        })?;

    println!("{}", render::agreement(&agreement));

    Ok(())
}
