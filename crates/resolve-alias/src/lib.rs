//! Resolve a Finder alias / bookmark file to the path it points at.

pub mod error;
pub mod resolver;

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Parser;
use filetools_core::{EXIT_FAILURE, EXIT_SUCCESS, write_line};
use tracing::debug;

pub use error::AliasError;
pub use resolver::{BookmarkResolver, Resolution, SystemBookmarks};

pub const USAGE: &str = "Usage: resolve-alias <alias-file>";

#[derive(Parser, Debug)]
#[command(name = "resolve-alias")]
#[command(about = "Print the path a Finder alias or bookmark file points at")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Alias or bookmark file
    #[arg(allow_hyphen_values = true)]
    alias_file: PathBuf,
}

impl Cli {
    /// Accept exactly one argument after the program name and take it as
    /// the alias path whatever it looks like.
    fn from_args(args: Vec<OsString>) -> Option<Self> {
        let [program, alias] = <[OsString; 2]>::try_from(args).ok()?;
        Self::try_parse_from([program, OsString::from("--"), alias]).ok()
    }
}

/// Read the bookmark stored in `alias` and resolve it.
pub fn resolve_alias<R: BookmarkResolver + ?Sized>(
    resolver: &R,
    alias: &Path,
) -> Result<Resolution, AliasError> {
    let bookmark = resolver.read_bookmark(alias)?;
    debug!(alias = %alias.display(), bytes = bookmark.len(), "read bookmark data");

    let resolution = resolver.resolve(&bookmark)?;
    debug!(
        target = %resolution.path.display(),
        stale = resolution.stale,
        "resolved bookmark"
    );
    Ok(resolution)
}

/// Run the command line and return the process exit code.
///
/// `args` includes the program name and must hold exactly one more
/// argument. Usage errors go to `stdout`, resolution errors to `stderr`.
pub fn run<I, T, R, O, E>(args: I, resolver: &R, stdout: &mut O, stderr: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    R: BookmarkResolver + ?Sized,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let count = args.len().saturating_sub(1);
    let Some(cli) = Cli::from_args(args) else {
        debug!(count, "expected exactly one argument");
        let _ = write_line(stdout, USAGE);
        return EXIT_FAILURE;
    };

    match resolve_alias(resolver, &cli.alias_file) {
        Ok(resolution) => {
            match write_line(stdout, &resolution.path.to_string_lossy()) {
                Ok(()) => EXIT_SUCCESS,
                Err(err) => {
                    debug!(%err, "could not write resolved path");
                    EXIT_FAILURE
                }
            }
        }
        Err(err) => {
            debug!(alias = %cli.alias_file.display(), ?err, "alias resolution failed");
            let _ = write_line(stderr, &format!("Error: {}", err));
            EXIT_FAILURE
        }
    }
}
