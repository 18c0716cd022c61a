// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use std::path::PathBuf;
use std::process::ExitCode;

const HELP: &str = "\
iced_gallery - image gallery with multi-select, bulk delete and drag-to-reorder

USAGE:
  iced_gallery [OPTIONS] [ASSETS_DIR]

ARGS:
  ASSETS_DIR              Directory to load images from (default: ./assets)

OPTIONS:
  --lang <LOCALE>         Interface language, e.g. en-US or fr
  --config-dir <DIR>      Directory holding settings.toml
  --log-level <LEVEL>     Minimum log level: error, warn, info, debug, trace
  -h, --help              Print this help
";

struct Cli {
    flags: Flags,
    log_level: tracing::Level,
}

fn parse_args() -> Result<Option<Cli>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let log_level = args
        .opt_value_from_str("--log-level")?
        .unwrap_or(tracing::Level::INFO);
    let assets_dir = args.opt_free_from_os_str(|s| Ok::<_, pico_args::Error>(PathBuf::from(s)))?;

    let rest = args.finish();
    if !rest.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {rest:?}");
    }

    Ok(Some(Cli {
        flags: Flags {
            lang,
            assets_dir,
            config_dir,
        },
        log_level,
    }))
}

fn main() -> ExitCode {
    let cli = match parse_args() {
        Ok(Some(cli)) => cli,
        Ok(None) => {
            print!("{HELP}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            return ExitCode::from(2);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(cli.log_level.into()),
        )
        .init();

    match app::run(cli.flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "application exited with an error");
            ExitCode::FAILURE
        }
    }
}
