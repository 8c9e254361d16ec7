use std::path::Path;
use std::sync::Arc;

use insured_cli::{config::AppConfig, controller::InsuredController};
use insured_store::{export::TextFileExporter, repository::memory::MemoryRepository};
use stated_dialogues::controller::console::{StdinSource, StdoutSink};

fn main() -> anyhow::Result<()> {
    AppConfig::load_env_file(Path::new(".env"))?;
    let config = AppConfig::from_env();

    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&config.log_filter)
        .init();

    log::info!("Starting insured persons manager...");
    log::debug!("Export directory: {:?}", config.export_dir);

    let mut controller = InsuredController::new(
        MemoryRepository::new(),
        Arc::new(TextFileExporter::new(config.export_dir)),
        StdinSource::new(),
        StdoutSink::new(),
    );
    controller.run()?;

    log::info!("Insured persons manager stopped");
    Ok(())
}
