// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError, info, warn};
use std::io::Write;
use std::path::PathBuf;

use vibelink_docgen::app_config::{self, Config};
use vibelink_docgen::app_controller::Controller;
use vibelink_docgen::document::OutlineEntry;

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

/// Output format of the heading outline
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutlineFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build and save the technical documentation (default command)
    Generate(GenerateArgs),

    /// Print the heading outline without writing a file
    Outline {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutlineFormat::Text)]
        format: OutlineFormat,
    },

    /// Generate shell completions for vibelink-docgen
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Where to write the .docx file (overrides the config file)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Force overwrite of an existing output file
    #[arg(short, long)]
    force_overwrite: bool,

    /// Configuration file path
    #[arg(short, long, default_value = "docgen.json")]
    config_path: PathBuf,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,
}

/// VibeLink Docgen - VibeLink Ghana technical documentation generator
///
/// Assembles the VibeLink Ghana technical documentation (architecture, workflow,
/// features, schema, integrations, deployment, security, maintenance) into a
/// Word document.
#[derive(Parser, Debug)]
#[command(name = "vibelink-docgen")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(about = "Generate the VibeLink Ghana technical documentation as a .docx file")]
#[command(long_about = "vibelink-docgen writes the VibeLink Ghana technical documentation as a Word document.

EXAMPLES:
    vibelink-docgen                                  # Generate using default config
    vibelink-docgen -f                               # Overwrite an existing document
    vibelink-docgen -o out/Docs.docx                 # Write to a custom path
    vibelink-docgen outline --format json            # Print the heading outline as JSON
    vibelink-docgen completions bash > docgen.bash   # Generate bash completions

CONFIGURATION:
    Configuration is stored in docgen.json by default. You can specify a different
    config file with --config-path. If the config file doesn't exist, a default one
    will be created automatically.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,
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

    // @returns: Emoji for log level
    fn get_emoji_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "❌ ",
            Level::Warn => "🚧 ",
            Level::Info => " ",
            Level::Debug => "🔍 ",
            Level::Trace => "📋 ",
        }
    }

    // @returns: ANSI color prefix for log level
    fn get_color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let level = record.level();
            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {} {}\x1B[0m",
                Self::get_color_for_level(level),
                now,
                Self::get_emoji_for_level(level),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; the effective level is set via set_max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let cli = CommandLineOptions::parse();

    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "vibelink-docgen", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Outline { format }) => run_outline(format),
        Some(Commands::Generate(args)) => run_generate(args),
        None => run_generate(cli.generate),
    }
}

fn run_generate(options: GenerateArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let (mut config, created) = Config::load_or_create(&options.config_path)
        .with_context(|| format!("Failed to load config file: {}", options.config_path.display()))?;
    if created {
        warn!(
            "Config file not found at '{}', created default config.",
            options.config_path.display()
        );
    }

    // Override config with CLI options if provided
    if let Some(output) = options.output {
        config.output_path = output;
    }
    if let Some(log_level) = options.log_level {
        config.log_level = log_level.into();
    } else {
        log::set_max_level(config.log_level.to_level_filter());
    }

    config.validate().context("Configuration validation failed")?;

    let controller = Controller::with_config(config)?;
    match controller.run(options.force_overwrite)? {
        Some(path) => info!("Success: {}", path.display()),
        None => info!("Nothing written"),
    }

    Ok(())
}

fn run_outline(format: OutlineFormat) -> Result<()> {
    // Keep stdout clean for the outline itself
    log::set_max_level(LevelFilter::Warn);

    let controller = Controller::with_config(Config::default())?;
    let outline = controller.build_document()?.outline();

    let mut stdout = std::io::stdout().lock();
    match format {
        OutlineFormat::Text => {
            for entry in &outline {
                writeln!(stdout, "{}", format_outline_entry(entry))?;
            }
        }
        OutlineFormat::Json => {
            let json = serde_json::to_string_pretty(&outline).context("Failed to serialize outline")?;
            writeln!(stdout, "{}", json)?;
        }
    }

    Ok(())
}

// Two spaces of indent per level below the top
fn format_outline_entry(entry: &OutlineEntry) -> String {
    let depth = usize::from(entry.level.saturating_sub(1));
    format!("{}{}", "  ".repeat(depth), entry.text)
}
