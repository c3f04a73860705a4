use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "iconfetcher")]
#[command(about = "Print a file's system icon as a base64-encoded PNG")]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// File or directory whose icon is fetched (need not exist)
    #[arg(allow_hyphen_values = true)]
    pub path: PathBuf,

    /// Width and height of the PNG in pixels [default: 32]
    #[arg(allow_hyphen_values = true)]
    pub size: Option<OsString>,

    /// Ignored
    #[arg(hide = true, allow_hyphen_values = true)]
    pub rest: Vec<OsString>,
}

impl Cli {
    /// Parse `args` (program name first) treating every argument as a value,
    /// so `-name`, `--` and `--help` are all ordinary paths.
    pub fn parse_values<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let argv: Vec<OsString> = args
            .next()
            .into_iter()
            .chain(std::iter::once(OsString::from("--")))
            .chain(args)
            .collect();
        Self::try_parse_from(argv)
    }

    pub fn size_arg(&self) -> Option<&str> {
        self.size.as_deref().and_then(|s| s.to_str())
    }
}
