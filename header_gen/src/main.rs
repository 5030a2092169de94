use clap::{Parser, Subcommand};
use header_gen::cmds;
use header_gen::cmds::imports::ImportsOutputFormat;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "clang-header")]
#[command(about = "Generate Objective-C / C++ compatible headers for compiled modules", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging (overridden by RUST_LOG)
    #[arg(short = 'v', long = "verbose", global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the header for a module manifest
    Generate {
        /// YAML manifest describing the module
        #[arg(short = 'f', long = "file", value_name = "FILE")]
        manifest: PathBuf,

        /// Bridging header to include instead of the underlying module
        #[arg(short = 'b', long = "bridging-header", value_name = "HEADER")]
        bridging_header: Option<String>,

        /// Also emit declarations that are only visible to C++
        #[arg(long = "expose-public-decls")]
        expose_public_decls: bool,

        /// Output file (defaults to stdout)
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the sorted and deduplicated import block of a module
    Imports {
        /// YAML manifest describing the module
        #[arg(short = 'f', long = "file", value_name = "FILE")]
        manifest: PathBuf,

        /// Bridging header to include instead of the underlying module
        #[arg(short = 'b', long = "bridging-header", value_name = "HEADER")]
        bridging_header: Option<String>,

        /// Output format
        #[arg(long = "format", value_enum, default_value = "text")]
        format: ImportsOutputFormat,
    },

    /// Print the include guard macro for a module name
    Guard {
        /// Module name
        name: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Generate {
            manifest,
            bridging_header,
            expose_public_decls,
            output,
        } => {
            cmds::generate::run(manifest, bridging_header, expose_public_decls, output)?;
        }

        Commands::Imports {
            manifest,
            bridging_header,
            format,
        } => {
            cmds::imports::run(manifest, bridging_header, format)?;
        }

        Commands::Guard { name } => {
            cmds::guard::run(&name)?;
        }
    }

    Ok(())
}
