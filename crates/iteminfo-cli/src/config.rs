//! Configuration loading helpers for the `iteminfo` binary.
//!
//! Arguments are split into the configuration flags handed to `ortho_config`
//! and the item identifiers that follow them.

use std::ffi::{OsStr, OsString};

use iteminfo_config::{CONFIG_CLI_FLAGS, Config, OrthoConfig};

use crate::AppError;

pub(crate) trait ConfigLoader {
    /// Loads configuration from the filtered argument list.
    ///
    /// The first element is the program name, as with `std::env::args_os`.
    fn load(&self, args: &[OsString]) -> Result<Config, AppError>;
}

pub(crate) struct OrthoConfigLoader;

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        Config::load_from_iter(args.iter().cloned()).map_err(AppError::LoadConfiguration)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FlagAction {
    Include { needs_value: bool },
    EndOfFlags,
    Stop,
}

fn classify(argument: &OsStr) -> FlagAction {
    let text = argument.to_string_lossy();
    if text == "--" {
        return FlagAction::EndOfFlags;
    }
    if !text.starts_with("--") {
        return FlagAction::Stop;
    }

    let (flag, inline_value) = match text.split_once('=') {
        Some((flag, _)) => (flag, true),
        None => (text.as_ref(), false),
    };
    if CONFIG_CLI_FLAGS.contains(&flag) {
        FlagAction::Include {
            needs_value: !inline_value,
        }
    } else {
        FlagAction::Stop
    }
}

/// Arguments partitioned between the configuration loader and dispatch.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct ConfigArgumentSplit {
    pub(crate) config_arguments: Vec<OsString>,
    pub(crate) identifiers: Vec<OsString>,
}

/// Splits leading configuration flags from item identifiers.
///
/// Configuration flags must precede identifiers. Scanning stops at the first
/// argument that is not a recognised flag; a literal `--` ends the flags and
/// is dropped, so identifiers that look like flags can still be passed.
pub(crate) fn split_config_arguments<I>(args: I) -> ConfigArgumentSplit
where
    I: IntoIterator<Item = OsString>,
{
    let mut remaining = args.into_iter().peekable();
    let mut split = ConfigArgumentSplit::default();
    let Some(program) = remaining.next() else {
        return split;
    };
    split.config_arguments.push(program);

    while let Some(argument) = remaining.peek() {
        match classify(argument) {
            FlagAction::Include { needs_value } => {
                split.config_arguments.extend(remaining.next());
                if needs_value {
                    split.config_arguments.extend(remaining.next());
                }
            }
            FlagAction::EndOfFlags => {
                remaining.next();
                break;
            }
            FlagAction::Stop => break,
        }
    }

    split.identifiers.extend(remaining);
    split
}
