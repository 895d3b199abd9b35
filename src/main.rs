use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use formtpl::cli::{parse_field_args, render_template, GET_TPL_USAGE};
use formtpl_core::config::Config;
use formtpl_core::{resolve, seed};

#[derive(Parser)]
#[command(name = "formtpl", about = "Find the form template matching submitted field values")]
struct Cli {
    /// Template store file, overriding the configured path.
    #[arg(long, value_name = "PATH")]
    db: Option<PathBuf>,

    /// Write debug logs to formtpl-debug.log in the temp directory.
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the name of the template matching `--field=value` pairs, or the
    /// inferred field types when none matches.
    #[command(name = "get_tpl", disable_help_flag = true)]
    GetTpl {
        #[arg(
            value_name = "--FIELD=VALUE",
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        fields: Vec<String>,
    },
    /// Replace the store contents with the example templates.
    #[command(name = "init_db")]
    InitDb,
    /// Print every stored template.
    #[command(name = "list_tpl")]
    ListTpl,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.debug {
        let path = std::env::temp_dir().join("formtpl-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(path = %path.display(), "formtpl debug log started");
    }

    let mut config = Config::load()?;
    if let Some(db) = cli.db {
        config.store.path = db;
    }
    let store = config.store.open();

    match cli.command {
        Command::GetTpl { fields } => {
            let fields = parse_field_args(&fields);
            if fields.is_empty() {
                eprintln!("error: no fields given");
                eprintln!("{GET_TPL_USAGE}");
                return Ok(ExitCode::FAILURE);
            }
            println!("{}", resolve(&fields, &store)?);
        }
        Command::InitDb => {
            let count = seed::seed(&store)?;
            println!("Seeded {count} templates into {}", store.path().display());
        }
        Command::ListTpl => {
            for template in store.all()? {
                println!("{}", render_template(&template));
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
