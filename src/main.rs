// SPDX-License-Identifier: MPL-2.0
// Prevent a console window next to the app window in Windows release builds.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use gixio::app::{self, paths, Flags};

const HELP: &str = "\
GIXIO - image generation studio

USAGE:
  gixio [OPTIONS]

OPTIONS:
  --lang <id>         UI language (e.g. en-US, fr)
  --api-url <url>     Backend origin [env: GIXIO_API_URL]
  --config-dir <dir>  Directory of settings.toml [env: GIXIO_CONFIG_DIR]
  --data-dir <dir>    Directory of state.cbor [env: GIXIO_DATA_DIR]
  --i18n-dir <dir>    Directory with extra .ftl translations
  -h, --help          Print this help
";

fn parse_flags() -> Result<Option<Flags>, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        return Ok(None);
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang")?,
        api_url: args.opt_value_from_str("--api-url")?,
        i18n_dir: args.opt_value_from_str("--i18n-dir")?,
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
    };

    let rest = args.finish();
    if !rest.is_empty() {
        log::warn!("ignoring unexpected arguments: {rest:?}");
    }
    Ok(Some(flags))
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("gixio=info"))
        .init();

    let flags = match parse_flags() {
        Ok(Some(flags)) => flags,
        Ok(None) => {
            print!("{HELP}");
            return Ok(());
        }
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());
    app::run(flags)
}
