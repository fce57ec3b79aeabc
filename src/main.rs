use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::error;

use news_merger::{logging, DatasetMerger, MergerConfig};

#[derive(Parser)]
#[command(name = "news-merger")]
#[command(about = "Merge labeled real/fake news datasets into one CSV table")]
#[command(version)]
struct Cli {
    /// TOML file overriding the source list, data directory, or output path
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&Path>) -> news_merger::Result<MergerConfig> {
    match path {
        Some(path) => MergerConfig::load(path),
        None => Ok(MergerConfig::default()),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            // No log dir is known yet, so report on the console only
            let _guard = logging::init_logging(None);
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Keep the guard alive so the log file is flushed on exit
    let _guard = logging::init_logging(config.log_dir.as_deref());

    if let Err(e) = DatasetMerger::new(config).run() {
        error!("Merge failed: {}", e);
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use news_merger::MergerError;

    #[test]
    fn test_no_config_flag_uses_fixed_run() {
        let config = load_config(None).unwrap();
        assert_eq!(config, MergerConfig::default());
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let result = load_config(Some(Path::new("/nonexistent/news_merger.toml")));
        assert!(matches!(result, Err(MergerError::Config(_))));
    }

    #[test]
    fn test_cli_accepts_config_flag() {
        let cli = Cli::try_parse_from(["news-merger", "--config", "merge.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("merge.toml")));
    }
}
