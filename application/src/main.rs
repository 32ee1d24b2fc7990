use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    process::ExitCode,
    sync::OnceLock,
};

use application::{loader, Args, Config, Gesture, JsonLines, Service};
use service::Command as _;
use tracing as log;
use tracing_subscriber::{
    filter::filter_fn,
    layer::{Layer as _, SubscriberExt as _},
    util::SubscriberInitExt as _,
};

static LOG_LEVEL: OnceLock<log::Level> = OnceLock::new();

fn main() -> ExitCode {
    // Standard output is reserved for view updates.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_ansi(true)
                .with_writer(io::stderr)
                .with_filter(filter_fn(|meta| {
                    meta.is_span()
                        || LOG_LEVEL.get().copied().unwrap_or(log::Level::INFO)
                            >= *meta.level()
                })),
        )
        .init();

    start().map_or(ExitCode::FAILURE, |()| ExitCode::SUCCESS)
}

fn start() -> Result<(), ()> {
    let Args { config, gestures } = Args::parse().map_err(|e| {
        log::error!("failed to parse command line arguments: {e}");
    })?;

    let Config {
        dataset,
        service,
        log,
    } = Config::new(config).map_err(|e| {
        log::error!("failed to load `Config`: {e}");
    })?;

    LOG_LEVEL
        .set(log.level.into())
        .unwrap_or_else(|_| unreachable!("first initialization"));

    let load = loader::dataset(&dataset).map_err(|e| {
        log::error!("failed to load dataset: {e}");
    })?;

    let mut service =
        Service::new(service.into(), JsonLines::new(io::stdout()));
    if let Err(e) = service.execute(load) {
        log::error!("failed to draw loaded dataset: {e}");
    }

    let input: Box<dyn BufRead> = match gestures {
        Some(path) => Box::new(BufReader::new(File::open(&path).map_err(
            |e| log::error!("failed to open `{}`: {e}", path.display()),
        )?)),
        None => Box::new(io::stdin().lock()),
    };

    for (n, line) in input.lines().enumerate() {
        let line = line.map_err(|e| {
            log::error!("failed to read gestures: {e}");
        })?;
        if line.trim().is_empty() {
            continue;
        }

        let gesture = match serde_json::from_str::<Gesture>(&line) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("skipping gesture #{}: {e}", n + 1);
                continue;
            }
        };
        match gesture.apply(&mut service) {
            Ok(change) => log::debug!("gesture #{} applied: `{change}`", n + 1),
            Err(e) => log::error!("failed to apply gesture #{}: {e}", n + 1),
        }
    }

    Ok(())
}
