// SPDX-License-Identifier: MPL-2.0
use half_frame::app::{config, paths, view, App, Flags};
use half_frame::cli;
use half_frame::error::{Error, Result};
use half_frame::infrastructure::DryRunBackend;
use half_frame::logging;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
Usage: half_frame [OPTIONS] PHOTO...

Runs a scripted half-frame splitting session against the given photos.
Commands are read from --script FILE, or from standard input.

Options:
  --config-dir DIR   Directory holding settings.toml
  --data-dir DIR     Directory holding session state and logs
  --output DIR       Output directory offered by the directory chooser
  --script FILE      Command script to run
  -h, --help         Print this help
";

struct Args {
    config_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    output: Option<PathBuf>,
    script: Option<PathBuf>,
    photos: Vec<PathBuf>,
}

fn parse_args() -> std::result::Result<Option<Args>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    Ok(Some(Args {
        config_dir: args.opt_value_from_str("--config-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        output: args.opt_value_from_str("--output")?,
        script: args.opt_value_from_str("--script")?,
        photos: args.finish().into_iter().map(PathBuf::from).collect(),
    }))
}

fn run(args: Args) -> Result<()> {
    paths::init_cli_overrides(args.data_dir.clone(), args.config_dir.clone());

    let (log_config, _) = config::load();
    let _guard = logging::init(&log_config, paths::get_app_data_dir().as_deref())?;

    let script = match &args.script {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    let commands = cli::parse_script(&script)?;

    let mut app = App::new(Flags {
        data_dir: args.data_dir,
        config_dir: args.config_dir,
    });
    let mut backend = DryRunBackend::new(args.photos);
    if let Some(output) = args.output {
        backend = backend.with_output_dir(output);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    let mut stdout = io::stdout().lock();
    runtime.block_on(cli::run_script(&mut app, &backend, &commands, &mut stdout))?;

    write!(stdout, "{}", view::status(&app))?;
    Ok(())
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(Some(args)) => args,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("{err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ Error::Script(_)) => {
            eprintln!("{err}");
            ExitCode::from(2)
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
