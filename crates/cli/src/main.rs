use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cmd;
mod output;

/// Build orchestrator for the hparse WebAssembly module
#[derive(Parser)]
#[command(name = "hparse-build")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Build mode: `image`, `setup` or `containerized`; anything else (or
  /// nothing) runs the local pipeline
  mode: Option<String>,

  /// Enable verbose output
  #[arg(short, long)]
  verbose: bool,
}

fn main() {
  let cli = Cli::parse();

  let filter = if cli.verbose {
    EnvFilter::new("debug")
  } else {
    EnvFilter::from_default_env()
  };
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .without_time()
    .init();

  if let Err(err) = run(&cli) {
    output::print_error(&format!("{err:#}"));
    std::process::exit(exit_code(&err));
  }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
  let mode = cli.mode.as_deref();
  let config = hparse_core::BuildConfig::resolve(mode)?;

  match mode {
    Some("image") => cmd::cmd_image(&config),
    Some("setup") => cmd::cmd_setup(&config),
    Some("containerized") => cmd::cmd_containerized(&config),
    // No argument and unrecognized arguments both mean a local build.
    _ => cmd::cmd_local(&config),
  }
}

/// Failed external steps terminate this process with their own exit code.
fn exit_code(err: &anyhow::Error) -> i32 {
  match err.downcast_ref::<hparse_core::CoreError>() {
    Some(core) => core.exit_code(),
    None => 1,
  }
}
