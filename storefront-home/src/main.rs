use anyhow::Context;
use storefront_home::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("storefront_home", LevelFilter::Debug)
        .filter_module("storefront_config", LevelFilter::Info)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = AppConfig::from_environment()
        .context("failed to load storefront configuration")?;

    app::application(config)
        .run()
        .map_err(|err| anyhow::anyhow!("storefront home exited: {err}"))
}
