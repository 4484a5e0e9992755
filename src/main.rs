//! # dungeon_floor entry point
//!
//! Generates one map (the default) or a batch of randomly sized maps.
//! Progress is logged at `info`; override with `RUST_LOG`.

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;

use dungeon_floor::{
    make_dungeon, make_dungeons, save_dungeon, BatchConfig, GeneratorConfig, OutputFormat,
    AUTO_SAVE_PATH, DEFAULT_HEIGHT, DEFAULT_WIDTH,
};

/// Drunkard's-walk dungeon floor generator.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, PartialEq, Subcommand)]
enum Command {
    /// Generate a single map.
    Single {
        #[arg(default_value_t = DEFAULT_WIDTH)]
        width: usize,
        #[arg(default_value_t = DEFAULT_HEIGHT)]
        height: usize,
        /// Output file; the extension picks the format (png, jpeg, bmp).
        #[arg(default_value = AUTO_SAVE_PATH)]
        path: PathBuf,
    },
    /// Generate `count` maps of base size plus up to `variance` extra cells per side.
    Batch {
        width: usize,
        height: usize,
        variance: usize,
        count: usize,
        /// Output directory.
        #[arg(default_value = dungeon_floor::batch::DEFAULT_OUTPUT_DIR)]
        dir: PathBuf,
    },
    /// Run a batch described by a JSON `BatchConfig` file.
    Config { file: PathBuf },
}

impl Command {
    fn single_default() -> Self {
        Command::Single {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            path: PathBuf::from(AUTO_SAVE_PATH),
        }
    }
}

const DEFAULT_LOG_FILTER: &str = "info";

/// Logging setup read from `var`, falling back to `info` so progress is visible.
fn log_env(var: &str) -> Env<'_> {
    Env::new().filter_or(var, DEFAULT_LOG_FILTER)
}

fn format_for(path: &std::path::Path) -> OutputFormat {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => OutputFormat::Jpeg,
        Some("bmp") => OutputFormat::Bmp,
        _ => OutputFormat::Png,
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    // Initialize logging.
    env_logger::Builder::from_env(log_env("RUST_LOG")).init();
    let cli = Cli::parse();

    match cli.command.unwrap_or_else(Command::single_default) {
        Command::Single { width, height, path } => {
            info!("Creating {width}x{height} map...");
            let grid = make_dungeon(width, height, &GeneratorConfig::default())?;
            save_dungeon(&grid, &path, format_for(&path))?;
            info!("Map creation complete: {}", path.display());
        }
        Command::Batch {
            width,
            height,
            variance,
            count,
            dir,
        } => {
            let config = BatchConfig {
                base_width: width,
                base_height: height,
                variance,
                count,
                output_dir: dir,
                ..BatchConfig::default()
            };
            let report = make_dungeons(config)?;
            info!("{} map(s) created", report.total);
        }
        Command::Config { file } => {
            let report = make_dungeons(BatchConfig::from_json_file(&file)?)?;
            info!("{} map(s) created", report.total);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_default_single_map() {
        let cli = Cli::try_parse_from(["dungeon_floor"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(Command::single_default(), Command::Single {
            width: 128,
            height: 64,
            path: PathBuf::from("auto_save.png"),
        });
    }

    #[test]
    fn test_single_with_and_without_arguments() {
        let cli = Cli::try_parse_from(["dungeon_floor", "single"]).unwrap();
        assert_eq!(cli.command, Some(Command::single_default()));

        let cli = Cli::try_parse_from(["dungeon_floor", "single", "40", "30", "map.bmp"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Single {
                width: 40,
                height: 30,
                path: PathBuf::from("map.bmp"),
            })
        );
        assert_eq!(format_for(&PathBuf::from("map.bmp")), OutputFormat::Bmp);
        assert_eq!(format_for(&PathBuf::from("map.jpg")), OutputFormat::Jpeg);
    }

    #[test]
    fn test_batch_arguments() {
        let cli = Cli::try_parse_from(["dungeon_floor", "batch", "64", "48", "16", "10"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Command::Batch {
                width: 64,
                height: 48,
                variance: 16,
                count: 10,
                dir: PathBuf::from("maps"),
            })
        );

        let cli = Cli::try_parse_from(["dungeon_floor", "batch", "64", "48", "0", "5", "out"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Batch { dir, .. }) if dir == PathBuf::from("out")));
    }

    #[test]
    fn test_progress_is_logged_by_default() {
        let logger = env_logger::Builder::from_env(log_env("DUNGEON_FLOOR_UNSET_LOG_VAR")).build();
        assert_eq!(logger.filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_config_and_bad_input() {
        let cli = Cli::try_parse_from(["dungeon_floor", "config", "batch.json"]).unwrap();
        assert_eq!(cli.command, Some(Command::Config { file: PathBuf::from("batch.json") }));

        assert!(Cli::try_parse_from(["dungeon_floor", "batch", "64", "64"]).is_err());
        assert!(Cli::try_parse_from(["dungeon_floor", "single", "wide"]).is_err());
        assert!(Cli::try_parse_from(["dungeon_floor", "carve"]).is_err());
    }
}
