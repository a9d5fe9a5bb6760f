// SPDX-License-Identifier: MPL-2.0
use nightread::app::{self, paths, Flags};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "NIGHTREAD_LOG";
const DEFAULT_LOG_FILTER: &str = "nightread=info";

const HELP: &str = "\
NightRead - PDF reader with night and coffee filters

USAGE:
  nightread [OPTIONS] [FILE]

OPTIONS:
  --lang <id>          UI language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  -h, --help           Print this help

ENVIRONMENT:
  NIGHTREAD_CONFIG_DIR Config directory when --config-dir is not given
  NIGHTREAD_LOG        Log filter (falls back to RUST_LOG)
";

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(None);
    }

    let lang = args.opt_value_from_str("--lang")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    Ok(Some(Flags {
        lang,
        file_path,
        config_dir,
    }))
}

fn main() -> iced::Result {
    init_tracing();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => return Ok(()),
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    tracing::debug!(?flags, "starting");
    app::run(flags)
}
