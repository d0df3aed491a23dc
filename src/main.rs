// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::toast::Placement;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage: iced_toast [--config <path>] [--placement centered|top-drop]";

fn parse_placement(value: &str) -> Result<Placement, String> {
    match value {
        "centered" => Ok(Placement::Centered),
        "top-drop" => Ok(Placement::TopDrop),
        other => Err(format!("unknown placement '{other}'")),
    }
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n{USAGE}");
            std::process::exit(2);
        }
    };

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        config_path: args.opt_value_from_str("--config")?,
        placement: args.opt_value_from_fn("--placement", parse_placement)?,
    })
}
