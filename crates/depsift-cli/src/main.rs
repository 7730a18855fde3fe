mod commands;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use commands::EXIT_FAILURE;
use depsift_schema::Selection;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "depsift",
    version,
    about = "Print the dependencies declared in a pyproject.toml"
)]
struct Cli {
    /// Path to the `pyproject.toml` file.
    file: Option<PathBuf>,

    /// Do not show runtime dependencies.
    #[arg(short, long, default_value_t = false)]
    runtime: bool,

    /// Do not show build dependencies.
    #[arg(short, long, default_value_t = false)]
    build: bool,

    /// Only show the optional dependencies of this group (default: all groups).
    #[arg(short = 't', long = "type", value_name = "NAME")]
    group: Option<String>,

    /// List the optional dependency groups. Overrides all other selection options.
    #[arg(short, long, default_value_t = false)]
    list: bool,

    /// Treat missing tables and keys as empty instead of failing.
    #[arg(long, default_value_t = false)]
    lenient: bool,

    /// Output results as structured JSON.
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Enable verbose (debug) logging output.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Enable trace-level logging (more detailed than --verbose).
    #[arg(long, default_value_t = false)]
    trace: bool,

    /// Print shell completions for bash, zsh, fish, elvish, or powershell and exit.
    #[arg(long, value_name = "SHELL", exclusive = true)]
    completions: Option<Shell>,

    /// Write the man page into this directory and exit.
    #[arg(long, value_name = "DIR", exclusive = true)]
    man_pages: Option<PathBuf>,
}

fn main() -> ExitCode {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let msg = info.to_string();
        if msg.contains("Broken pipe")
            || msg.contains("broken pipe")
            || msg.contains("os error 32")
            || msg.contains("failed printing to stdout")
        {
            std::process::exit(0);
        }
        default_hook(info);
    }));

    let cli = Cli::parse();

    let default_level = if cli.trace {
        "trace"
    } else if cli.verbose {
        "debug"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("DEPSIFT_LOG")
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let result = if let Some(shell) = cli.completions {
        commands::completions::run::<Cli>(shell)
    } else if let Some(dir) = &cli.man_pages {
        commands::man_pages::run::<Cli>(dir)
    } else {
        let Some(file) = &cli.file else {
            Cli::command()
                .error(
                    ErrorKind::MissingRequiredArgument,
                    "the path to a pyproject.toml is required",
                )
                .exit()
        };
        if cli.list {
            commands::list::run(file, cli.lenient, cli.json)
        } else {
            commands::show::run(
                file,
                &Selection {
                    build: !cli.build,
                    runtime: !cli.runtime,
                    group: cli.group,
                    lenient: cli.lenient,
                },
                cli.json,
            )
        }
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
