//! Command-line front end for the item information request chain.
//!
//! `iteminfo [config flags] [IDENTIFIER...]` loads layered configuration,
//! installs telemetry, wires the canonical handler chain over the selected
//! catalogue, and prints one reply per identifier. Without identifiers the
//! built-in demo identifiers are dispatched.

mod config;
mod errors;
mod telemetry;

use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

use tracing::{debug, info};

use iteminfo_catalog::{CatalogLookup, StaticCatalog, TableCatalog};
use iteminfo_chain::{ItemRequest, RequestDispatcher};
use iteminfo_config::{Config, DEMO_IDENTIFIERS};

pub(crate) use config::{ConfigLoader, OrthoConfigLoader, split_config_arguments};
pub(crate) use errors::AppError;

const RUN_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::run");

/// Runs the CLI using the provided arguments and IO handles.
///
/// Replies go to `stdout`, separated by a blank line. Any failure is written
/// to `stderr` and yields [`ExitCode::FAILURE`]; nothing is dispatched when
/// an identifier is rejected.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    run_with_loader(args, stdout, stderr, &OrthoConfigLoader)
}

pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    stdout: &mut W,
    stderr: &mut E,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    match execute(args, stdout, loader) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{error}");
            ExitCode::FAILURE
        }
    }
}

fn execute<I, W, L>(args: I, stdout: &mut W, loader: &L) -> Result<(), AppError>
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    L: ConfigLoader,
{
    let split = split_config_arguments(args);
    let config = loader.load(&split.config_arguments)?;
    telemetry::initialise(&config)?;

    let requests = parse_requests(split.identifiers)?;
    let dispatcher = RequestDispatcher::new(open_catalog(&config)?)?;
    info!(
        target: RUN_TARGET,
        requests = requests.len(),
        chain = %dispatcher.chain().map(|kind| kind.as_str()).collect::<Vec<_>>().join(" -> "),
        "dispatching requests"
    );

    write_replies(&dispatcher, &requests, stdout).map_err(AppError::WriteReply)
}

/// Validates every identifier before any request is dispatched.
fn parse_requests(identifiers: Vec<OsString>) -> Result<Vec<ItemRequest>, AppError> {
    let raw: Vec<String> = if identifiers.is_empty() {
        debug!(target: RUN_TARGET, "no identifiers given; using demo identifiers");
        DEMO_IDENTIFIERS.iter().map(|id| (*id).to_owned()).collect()
    } else {
        identifiers
            .into_iter()
            .map(|identifier| identifier.into_string().map_err(AppError::NonUtf8Identifier))
            .collect::<Result<_, _>>()?
    };

    raw.into_iter()
        .enumerate()
        .map(|(index, id)| {
            ItemRequest::new(id).map_err(|source| AppError::Request {
                position: index + 1,
                source,
            })
        })
        .collect()
}

fn open_catalog(config: &Config) -> Result<Box<dyn CatalogLookup>, AppError> {
    match config.catalog_path() {
        Some(path) => {
            let catalog = TableCatalog::load(path)?;
            info!(target: RUN_TARGET, %path, records = catalog.len(), "loaded catalogue");
            Ok(Box::new(catalog))
        }
        None => {
            debug!(target: RUN_TARGET, "using the static catalogue");
            Ok(Box::new(StaticCatalog::new()))
        }
    }
}

fn write_replies<L, W>(
    dispatcher: &RequestDispatcher<L>,
    requests: &[ItemRequest],
    stdout: &mut W,
) -> std::io::Result<()>
where
    L: CatalogLookup,
    W: Write,
{
    for (index, request) in requests.iter().enumerate() {
        if index > 0 {
            writeln!(stdout)?;
        }
        writeln!(stdout, "{}", dispatcher.handle(request))?;
    }
    stdout.flush()
}

#[cfg(test)]
mod tests;
