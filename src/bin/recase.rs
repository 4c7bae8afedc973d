// Recase CLI
// Converts text between casing styles and Morse code from the command line

use std::fs;
use std::io::{self, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use recase_core::settings::default_settings_content;
use recase_core::{
    compute_stats, morse, save_text_atomic, transform, transform_named, Selector, Settings,
    TextStats,
};

/// Text case converter
#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(author = "recase contributors")]
#[command(version)]
#[command(about = "Convert text between casing styles and Morse code", long_about = None)]
struct Args {
    /// Text to convert (read from --input or stdin when omitted)
    #[arg(value_name = "TEXT")]
    text: Vec<String>,

    /// Conversion to apply, e.g. title, snake, morse (see --list)
    #[arg(short, long, value_name = "SELECTOR")]
    selector: Option<String>,

    /// Read the input text from a file
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    input: Option<PathBuf>,

    /// Save the result to a file instead of printing it (-o alone uses the configured name)
    #[arg(short, long, value_name = "FILE", num_args = 0..=1, require_equals = true)]
    output: Option<Option<PathBuf>>,

    /// Print text statistics after the result
    #[arg(long)]
    stats: bool,

    /// Print only the text statistics
    #[arg(long, conflicts_with = "stats")]
    stats_only: bool,

    /// Layout of the statistics
    #[arg(long, value_enum, default_value_t = StatsFormat::Plain)]
    format: StatsFormat,

    /// List available conversions
    #[arg(long)]
    list: bool,

    /// Print the Morse code table
    #[arg(long)]
    list_morse: bool,

    /// TOML settings file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Validate settings and exit
    #[arg(long)]
    check_config: bool,

    /// Print a commented default settings file and exit
    #[arg(long)]
    print_default_config: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum StatsFormat {
    Plain,
    Toml,
}

/// Main application state
struct Application {
    settings: Settings,
    args: Args,
}

impl Application {
    /// Create a new application from CLI arguments
    fn new(args: Args) -> Result<Self> {
        let settings = match &args.config {
            Some(path) => Settings::from_file(path)
                .with_context(|| format!("failed to load settings from {}", path.display()))?,
            None => Settings::load_default().context("failed to load default settings")?,
        };

        Ok(Self { settings, args })
    }

    /// Validate configuration
    fn validate(&self) -> Result<()> {
        match self.settings.source_path() {
            Some(path) => println!("Configuration is valid: {}", path.display()),
            None => println!("No settings file found, using defaults"),
        }
        match self.settings.default_selector() {
            Some(selector) => println!("  default conversion = {}", selector),
            None => println!("  default conversion = none"),
        }
        println!("  live = {}", self.settings.live());
        println!("  file_name = {}", self.settings.file_name());
        println!("  trailing_newline = {}", self.settings.trailing_newline());
        Ok(())
    }

    fn list_selectors() {
        println!("Available conversions:");
        for selector in Selector::ALL {
            println!("  {:<14} {}", selector.name(), selector.label());
        }
    }

    fn list_morse() {
        println!("Morse table ({} symbols):", morse::len());
        for (c, code) in morse::entries() {
            let shown = if c == ' ' { "space".to_string() } else { c.to_string() };
            println!("  {:<6} {}", shown, code);
        }
    }

    /// Gather the input text from arguments, a file, or stdin
    fn read_input(&self) -> Result<String> {
        if !self.args.text.is_empty() {
            return Ok(self.args.text.join(" "));
        }

        if let Some(ref path) = self.args.input {
            return fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()));
        }

        let stdin = io::stdin();
        if stdin.is_terminal() {
            bail!("no input given: pass TEXT, use --input FILE, or pipe text on stdin");
        }
        let mut buffer = String::new();
        stdin
            .lock()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        Ok(buffer)
    }

    /// Run a single conversion
    fn run(&self) -> Result<()> {
        let input = self.read_input()?;
        log::debug!("read {} bytes of input", input.len());

        let stats = compute_stats(&input);
        if self.args.stats_only {
            print!("{}", render_stats(&stats, self.args.format)?);
            return Ok(());
        }

        let output = convert(
            &input,
            self.args.selector.as_deref(),
            self.settings.default_selector(),
        );

        match &self.args.output {
            Some(target) => {
                let path = target
                    .clone()
                    .unwrap_or_else(|| PathBuf::from(self.settings.file_name()));
                save_output(&path, &output)?;
                eprintln!("Saved output to {}", path.display());
            }
            None => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(output.as_bytes())?;
                if self.settings.trailing_newline() && !output.ends_with('\n') {
                    stdout.write_all(b"\n")?;
                }
                stdout.flush()?;
            }
        }

        if self.args.stats {
            print!("{}", render_stats(&stats, self.args.format)?);
        }

        Ok(())
    }
}

/// Apply the requested conversion, falling back to the configured default.
///
/// A requested name that is not a known conversion leaves the text unchanged.
fn convert(input: &str, requested: Option<&str>, fallback: Option<Selector>) -> String {
    match (requested, fallback) {
        (Some(name), _) => {
            if Selector::from_name(name).is_none() {
                log::warn!(
                    "unknown conversion '{}', output is the unchanged input (see --list)",
                    name
                );
            }
            transform_named(input, name)
        }
        (None, Some(selector)) => transform(input, selector),
        (None, None) => input.to_string(),
    }
}

fn render_stats(stats: &TextStats, format: StatsFormat) -> Result<String> {
    match format {
        StatsFormat::Plain => Ok(format!(
            "Characters: {}\nWords: {}\nSentences: {}\nLines: {}\n",
            stats.character_count, stats.word_count, stats.sentence_count, stats.line_count
        )),
        StatsFormat::Toml => toml::to_string(stats).context("failed to render statistics"),
    }
}

/// Write the result as a plain-text file, replacing any existing one
fn save_output(path: &Path, content: &str) -> Result<()> {
    save_text_atomic(path, content)
        .with_context(|| format!("failed to write {}", path.display()))
}

fn init_logging(verbose: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Flags that don't need input or settings
    if args.print_default_config {
        print!("{}", default_settings_content());
        return Ok(());
    }
    if args.list {
        Application::list_selectors();
        return Ok(());
    }
    if args.list_morse {
        Application::list_morse();
        return Ok(());
    }

    let app = Application::new(args)?;

    if app.args.check_config {
        return app.validate();
    }

    app.run()
}
