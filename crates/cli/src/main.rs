mod cmd;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::cmd::{BuildArgs, cmd_build, cmd_plan, cmd_restore};
use crate::output::{OutputFormat, print_error};

/// mandrel-build - Build and install Mandrel artifacts with mx and Maven
#[derive(Parser)]
#[command(name = "mandrel-build")]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Run tools verbosely and log at debug level
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Output format. With json, `build` still lets mx and mvn write to stdout,
  /// so their output precedes the report unless redirected by the tools
  #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
  output: OutputFormat,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Patch mx for the Maven proxy, build, and install the artifacts
  Build(BuildArgs),

  /// Show the commands a build would run, without running them
  Plan(BuildArgs),

  /// Restore mx.py from its backup, removing the Maven proxy
  Restore,
}

fn init_tracing(verbose: bool) {
  let default_level = if verbose { "debug" } else { "info" };
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
    .with_writer(std::io::stderr)
    .without_time()
    .init();
}

fn main() {
  let cli = Cli::parse();
  init_tracing(cli.verbose);

  let result = match &cli.command {
    Commands::Build(args) => cmd_build(args, cli.verbose, cli.output),
    Commands::Plan(args) => cmd_plan(args, cli.verbose, cli.output),
    Commands::Restore => cmd_restore(cli.output),
  };

  if let Err(err) = result {
    print_error(&format!("{:#}", err));
    std::process::exit(1);
  }
}
