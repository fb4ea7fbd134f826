// SPDX-License-Identifier: MPL-2.0
use gallery_admin::app::{self, paths, Flags};
use gallery_admin::logging;

const HELP: &str = "\
Gallery Admin - manage a remote photo gallery

USAGE:
  gallery_admin [OPTIONS]

OPTIONS:
  -h, --help               Print this help
      --lang <LOCALE>      Interface language (e.g. en-US, fr)
      --config-dir <DIR>   Directory holding settings.toml
      --api-url <URL>      Gallery API base URL (e.g. http://localhost:5000/api)

ENVIRONMENT:
  GALLERY_ADMIN_CONFIG_DIR   Same as --config-dir
  GALLERY_ADMIN_API_URL      Same as --api-url
  RUST_LOG                   Log filter (default: gallery_admin=info)
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    logging::init();

    let flags = Flags {
        lang: optional_value(&mut args, "--lang"),
        api_url: optional_value(&mut args, "--api-url"),
    };
    let config_dir = optional_value(&mut args, "--config-dir");

    let leftover = args.finish();
    if !leftover.is_empty() {
        tracing::warn!(?leftover, "ignoring unrecognized arguments");
    }

    paths::init_cli_overrides(config_dir);
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting gallery admin");

    app::run(flags)
}

fn optional_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            tracing::warn!(key, error = %err, "invalid command line value");
            None
        }
    }
}
