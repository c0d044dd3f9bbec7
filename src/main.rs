// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result, anyhow};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, warn};
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod document;
mod errors;
mod file_utils;
mod language_utils;
mod pacing;
mod placeholder;
mod providers;
mod translation_service;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

fn level_filter(level: &app_config::LogLevel) -> LevelFilter {
    match level {
        app_config::LogLevel::Error => LevelFilter::Error,
        app_config::LogLevel::Warn => LevelFilter::Warn,
        app_config::LogLevel::Info => LevelFilter::Info,
        app_config::LogLevel::Debug => LevelFilter::Debug,
        app_config::LogLevel::Trace => LevelFilter::Trace,
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate locale files into the missing target languages (default command)
    Translate(TranslateArgs),

    /// Generate shell completions for yaltwai
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct TranslateArgs {
    /// Directory containing the locale JSON files
    #[arg(value_name = "LOCALES_DIR")]
    locales_dir: Option<PathBuf>,

    /// Source language code (e.g., 'en')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language codes; defaults to the locale files found on disk
    #[arg(short, long, value_delimiter = ',')]
    target_languages: Vec<String>,

    /// Translation endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// API key for the translation endpoint
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Only test the connection to the translation endpoint
    #[arg(long)]
    check: bool,
}

/// YALTwAI - Yet Another Locale Translator with AI
///
/// Batch-translates a directory of JSON locale files from a source language
/// into every other locale found on disk, preserving {placeholder} template
/// variables and riding out transient provider failures.
#[derive(Parser, Debug)]
#[command(name = "yaltwai")]
#[command(version = "0.1.0")]
#[command(about = "Batch translator for JSON locale files")]
#[command(long_about = "YALTwAI translates a tree of localized UI strings into multiple languages.

EXAMPLES:
    yaltwai src/locales                      # Translate using default config
    yaltwai -s en src/locales                # English as the source language
    yaltwai -t fr,de src/locales             # Translate only into French and German
    yaltwai -e http://localhost:5000 .       # Use a local LibreTranslate instance
    yaltwai --check                          # Test the provider connection and exit
    yaltwai --log-level debug src/locales    # Verbose diagnostics
    yaltwai completions bash > yaltwai.bash  # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default
    one will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory containing the locale JSON files
    #[arg(value_name = "LOCALES_DIR")]
    locales_dir: Option<PathBuf>,

    /// Source language code (e.g., 'en')
    #[arg(short, long)]
    source_language: Option<String>,

    /// Target language codes; defaults to the locale files found on disk
    #[arg(short, long, value_delimiter = ',')]
    target_languages: Vec<String>,

    /// Translation endpoint URL
    #[arg(short, long)]
    endpoint: Option<String>,

    /// API key for the translation endpoint
    #[arg(short = 'k', long)]
    api_key: Option<String>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Only test the connection to the translation endpoint
    #[arg(long)]
    check: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color code for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "1;31",
            Level::Warn => "1;33",
            Level::Info => "1;32",
            Level::Debug => "1;36",
            Level::Trace => "1;35",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S%.3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {:<5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}


#[tokio::main]
async fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "yaltwai", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Translate(args)) => run_translate(args).await,
        None => {
            // Default behavior - use top-level args
            let translate_args = TranslateArgs {
                locales_dir: cli.locales_dir,
                source_language: cli.source_language,
                target_languages: cli.target_languages,
                endpoint: cli.endpoint,
                api_key: cli.api_key,
                config_path: cli.config_path,
                log_level: cli.log_level,
                check: cli.check,
            };
            run_translate(translate_args).await
        }
    }
}

async fn run_translate(options: TranslateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level_filter(&config_log_level));
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(locales_dir) = &options.locales_dir {
        config.locales_dir = locales_dir.to_string_lossy().to_string();
    }

    if let Some(source_language) = &options.source_language {
        config.source_language = source_language.clone();
    }

    if !options.target_languages.is_empty() {
        config.target_languages = options.target_languages.clone();
    }

    if let Some(endpoint) = &options.endpoint {
        config.translation.endpoint = endpoint.clone();
    }

    if let Some(api_key) = &options.api_key {
        config.translation.api_key = api_key.clone();
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config.validate().context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        log::set_max_level(level_filter(&config.log_level));
    }

    // Warn about target codes that do not carry a known language subtag;
    // the provider is the final authority, so this is advisory only
    for target in &config.target_languages {
        if let Err(e) = language_utils::validate_language_code(target) {
            warn!("{}", e);
        }
    }

    // Create controller
    let controller = Controller::with_config(config.clone())?;

    if options.check {
        return controller.check_connection().await;
    }

    if !file_utils::FileManager::dir_exists(&config.locales_dir) {
        return Err(anyhow!("Locales directory does not exist: {}", config.locales_dir));
    }

    controller.run().await
}
