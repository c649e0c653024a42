use std::io;
use std::path::Path;
use std::process;

use anyhow::Result;
use clap::{App, Arg, ArgMatches};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use recase::{read_input, write_output, InputSource, Scheme};

const DEFAULT_SCHEME: &str = "sentence";

fn main() {
    let matches = build_app().get_matches();
    init_tracing(matches.occurrences_of("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("recase: error: {}", err);
        process::exit(2);
    }
}

fn build_app<'a, 'b>() -> App<'a, 'b> {
    App::new("recase")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Aleksei Voronov <despawn@gmail.com>")
        .about("Normalize text capitalization.")
        .arg(
            Arg::with_name("scheme")
                .short("s")
                .long("scheme")
                .value_name("SCHEME")
                .help("Capitalization scheme: sentence, title, upper, or lower")
                .env("RECASE_SCHEME")
                .default_value(DEFAULT_SCHEME)
                .takes_value(true),
        )
        .arg(
            Arg::with_name("file")
                .short("f")
                .long("file")
                .value_name("FILE")
                .help("Read input text from the specified file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("Write transformed text to the specified file. stdout by default.")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Log more details to stderr; repeat for even more"),
        )
        .arg(
            Arg::with_name("text")
                .value_name("TEXT")
                .help("Text to transform. stdin is read when neither TEXT nor --file is given.")
                .index(1),
        )
}

fn init_tracing(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // stdout carries the transformed text only
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let scheme: Scheme = matches.value_of("scheme").unwrap_or(DEFAULT_SCHEME).parse()?;
    let source = InputSource::resolve(
        matches.value_of_os("file").map(Into::into),
        matches.value_of("text").map(str::to_owned),
    )?;
    info!(%scheme, "starting");

    let text = read_input(source)?;
    let transformed = scheme.apply(&text);
    debug!(input = text.len(), output = transformed.len(), "transformed");

    write_output(&transformed, matches.value_of_os("output").map(Path::new))?;
    Ok(())
}
