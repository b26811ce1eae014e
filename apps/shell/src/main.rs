use anyhow::Context;
use fhub::FontHub;
use fhub::domain::config::{FontHubConfig, LoggerSettings};
use fhub::kernel::config::{effective_config_path, load_config};
use fhub_logger::{Logger, parse_level};
use std::path::PathBuf;
use tracing::{debug, info, warn};

#[fhub_runtime::main(single_threaded)]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::var_os("FHUB_CONFIG").map(PathBuf::from);
    let cfg: FontHubConfig =
        load_config(config_path.as_ref()).context("Critical: Configuration is malformed")?;

    let _logger = init_logger(&cfg.logger)?;
    info!(path = %effective_config_path(config_path.as_ref()).display(), "Configuration loaded");

    let hub = FontHub::builder().config(cfg.clone()).build();

    if let Some(dir) = &cfg.preload.dir {
        let report = hub.preload_dir(dir).await?;
        for (path, err) in &report.failed {
            warn!(path = %path.display(), "{err}");
        }
    }

    let snapshot = hub.snapshot();
    info!(fonts = snapshot.fonts.len(), groups = snapshot.font_groups.len(), "FontHub ready");
    debug!(snapshot = %serde_json::to_string(&snapshot)?, "registry snapshot");

    Ok(())
}

fn init_logger(settings: &LoggerSettings) -> anyhow::Result<Logger> {
    let level = parse_level(&settings.level)?;
    let mut builder = Logger::builder().name(env!("CARGO_BIN_NAME")).console(settings.console).level(level);
    if let Some(filter) = &settings.filter {
        builder = builder.env_filter(filter.as_str());
    }

    let logger = match &settings.path {
        Some(path) => builder.path(path).json(settings.json).init()?,
        None => builder.init()?,
    };
    Ok(logger)
}
