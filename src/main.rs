use anyhow::{Context, Result};
use clap::Parser;
use git_merged::OutputFormat;
use git_merged::areas::repository::Repository;
use git_merged::artifacts::branch::DEFAULT_MAIN_BRANCH;
use git_merged::artifacts::core::PagerWriter;
use git_merged::config::{Config, LogLevel, Presentation};
use is_terminal::IsTerminal;
use minus::Pager;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "git-merged",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Show which branches are merged into the main branch",
    long_about = "Lists every local and remote-tracking branch of the repository in the \
    current directory and tells whether its tip is already an ancestor of the main branch.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(short, long, help = "Increase verbosity")]
    verbose: bool,
    #[arg(long, help = "Trace level verbosity")]
    trace: bool,
    #[arg(
        long,
        value_enum,
        ignore_case = true,
        default_value_t = OutputFormat::Table,
        help = "Output text format"
    )]
    format: OutputFormat,
    #[arg(
        short,
        long = "main",
        default_value = DEFAULT_MAIN_BRANCH,
        help = "Branch the others are compared against"
    )]
    main_branch: String,
    #[arg(long, help = "Disable colored output")]
    no_color: bool,
    #[arg(long, help = "Write directly to stdout instead of a pager")]
    no_pager: bool,
}

fn setup_logging(level: LogLevel) {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_env_filter(EnvFilter::new(level.as_level().as_str()))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = LogLevel::from_flags(cli.verbose, cli.trace);
    setup_logging(log_level);

    let presentation = Presentation::detect(
        cli.no_color,
        cli.no_pager,
        std::env::var_os("NO_PAGER").is_some(),
        std::io::stdout().is_terminal(),
    );
    if !presentation.color {
        colored::control::set_override(false);
    }

    let config = Config::try_new(&cli.main_branch, cli.format, log_level, presentation)?;

    let pager = presentation.pager.then(Pager::new);
    let writer: Box<dyn std::io::Write> = match &pager {
        Some(pager) => Box::new(PagerWriter::new(pager.clone())),
        None => Box::new(std::io::stdout()),
    };

    let pwd = std::env::current_dir()?;
    let repository = Repository::open(&pwd, writer)?;
    repository
        .merged(&config)
        .with_context(|| format!("failed to report branches merged to {}", config.main_branch()))?;

    if let Some(pager) = pager {
        minus::page_all(pager)?;
    }

    Ok(())
}
