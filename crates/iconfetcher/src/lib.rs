//! Fetch the icon the desktop shows for a file and print it as base64 PNG.
//!
//! The OS lookup sits behind [`IconSource`]; [`SystemIcons`] is the real one
//! and tests substitute their own.

mod cli;
pub mod error;
pub mod render;
pub mod size;
pub mod source;

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;

use filetools_core::{EXIT_FAILURE, EXIT_SUCCESS, write_line};
use tracing::debug;

pub use error::IconError;
pub use render::decode_icon_base64;
pub use size::{DEFAULT_SIZE, IconSize};
pub use source::{IconSource, SystemIcons};

pub const USAGE: &str = "Usage: iconfetcher <path> [size]";
pub const FAILURE_MESSAGE: &str = "Failed to get icon";

/// Render the icon for `path` into a `size x size` PNG and return it as
/// base64 text.
pub fn fetch_icon_base64<S: IconSource + ?Sized>(
    source: &S,
    path: &Path,
    size: IconSize,
) -> Result<String, IconError> {
    debug!(path = %path.display(), size = size.pixels(), "fetching icon");

    let icon = source.render_icon(path, size)?;
    debug!(width = icon.width(), height = icon.height(), "icon rendered");

    let canvas = render::fit_to_canvas(&icon, size);
    let png = render::encode_png(&canvas)?;
    Ok(render::encode_base64(&png))
}

/// Run the command line and return the process exit code.
///
/// `args` includes the program name, as `std::env::args_os` yields it.
/// Every argument after it is a value; there are no flags.
pub fn run<I, T, S, O, E>(args: I, source: &S, stdout: &mut O, stderr: &mut E) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    S: IconSource + ?Sized,
    O: Write + ?Sized,
    E: Write + ?Sized,
{
    let cli = match cli::Cli::parse_values(args) {
        Ok(cli) => cli,
        Err(err) => {
            debug!(kind = ?err.kind(), "rejected arguments");
            let _ = write_line(stderr, USAGE);
            return EXIT_FAILURE;
        }
    };

    if !cli.rest.is_empty() {
        debug!(count = cli.rest.len(), "ignoring extra arguments");
    }

    let result = IconSize::from_arg(cli.size_arg())
        .and_then(|size| fetch_icon_base64(source, &cli.path, size));

    match result {
        Ok(encoded) => match write_line(stdout, &encoded) {
            Ok(()) => EXIT_SUCCESS,
            Err(err) => {
                debug!(%err, "could not write icon");
                EXIT_FAILURE
            }
        },
        Err(err) => {
            debug!(%err, "icon fetch failed");
            let _ = write_line(stderr, FAILURE_MESSAGE);
            EXIT_FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};
    use std::cell::RefCell;
    use std::path::PathBuf;

    /// Draws a solid square at `scale` times the requested size and records
    /// every request.
    struct FakeIcons {
        scale: u32,
        requests: RefCell<Vec<(PathBuf, u32)>>,
    }

    impl FakeIcons {
        fn new() -> Self {
            Self::with_scale(1)
        }

        fn with_scale(scale: u32) -> Self {
            FakeIcons {
                scale,
                requests: RefCell::new(Vec::new()),
            }
        }
    }

    impl IconSource for FakeIcons {
        fn render_icon(&self, path: &Path, size: IconSize) -> Result<DynamicImage, IconError> {
            self.requests
                .borrow_mut()
                .push((path.to_path_buf(), size.pixels()));
            let side = size.pixels() * self.scale;
            Ok(DynamicImage::ImageRgba8(RgbaImage::from_pixel(
                side,
                side,
                Rgba([30, 144, 255, 255]),
            )))
        }
    }

    struct BrokenIcons;

    impl IconSource for BrokenIcons {
        fn render_icon(&self, path: &Path, _size: IconSize) -> Result<DynamicImage, IconError> {
            Err(IconError::Render {
                path: path.to_path_buf(),
                reason: "no bitmap".to_string(),
            })
        }
    }

    fn invoke<S: IconSource>(source: &S, args: &[&str]) -> (i32, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let argv = std::iter::once("iconfetcher").chain(args.iter().copied());
        let code = run(argv, source, &mut out, &mut err);
        (
            code,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn prints_png_of_requested_size() {
        let icons = FakeIcons::new();
        let (code, out, err) = invoke(&icons, &["/Applications/Safari.app", "48"]);

        assert_eq!(code, EXIT_SUCCESS);
        assert!(err.is_empty());
        assert!(out.ends_with('\n'));
        assert_eq!(out.matches('\n').count(), 1);

        let image = decode_icon_base64(&out).unwrap();
        assert_eq!(image.dimensions(), (48, 48));
        assert_eq!(
            icons.requests.borrow().as_slice(),
            &[(PathBuf::from("/Applications/Safari.app"), 48)]
        );
    }

    #[test]
    fn default_size_matches_explicit_32() {
        let icons = FakeIcons::new();
        let (_, implicit, _) = invoke(&icons, &["/tmp/file.txt"]);
        let (_, explicit, _) = invoke(&icons, &["/tmp/file.txt", "32"]);

        assert_eq!(implicit, explicit);
        assert_eq!(decode_icon_base64(&implicit).unwrap().dimensions(), (32, 32));
    }

    #[test]
    fn unparsable_size_falls_back_to_default() {
        let icons = FakeIcons::new();
        let (code, out, _) = invoke(&icons, &["/tmp/file.txt", "not-a-number"]);

        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(
            decode_icon_base64(&out).unwrap().dimensions(),
            (DEFAULT_SIZE, DEFAULT_SIZE)
        );
    }

    #[test]
    fn hidpi_render_is_scaled_to_requested_size() {
        let icons = FakeIcons::with_scale(2);
        let (code, out, _) = invoke(&icons, &["/tmp/file.txt", "20"]);

        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(decode_icon_base64(&out).unwrap().dimensions(), (20, 20));
    }

    #[test]
    fn missing_path_prints_usage_to_stderr() {
        let (code, out, err) = invoke(&FakeIcons::new(), &[]);

        assert_eq!(code, EXIT_FAILURE);
        assert!(out.is_empty());
        assert_eq!(err, format!("{}\n", USAGE));
    }

    #[test]
    fn render_failure_prints_fixed_message() {
        let (code, out, err) = invoke(&BrokenIcons, &["/tmp/file.txt"]);

        assert_eq!(code, EXIT_FAILURE);
        assert!(out.is_empty());
        assert_eq!(err, "Failed to get icon\n");
    }

    #[test]
    fn zero_size_fails_without_calling_source() {
        let icons = FakeIcons::new();
        let (code, out, err) = invoke(&icons, &["/tmp/file.txt", "0"]);

        assert_eq!(code, EXIT_FAILURE);
        assert!(out.is_empty());
        assert_eq!(err, "Failed to get icon\n");
        assert!(icons.requests.borrow().is_empty());
    }

    #[test]
    fn extra_arguments_are_ignored() {
        let icons = FakeIcons::new();
        let (code, out, _) = invoke(&icons, &["/tmp/file.txt", "24", "extra", "--more"]);

        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(decode_icon_base64(&out).unwrap().dimensions(), (24, 24));
    }

    #[test]
    fn repeated_runs_are_identical() {
        let icons = FakeIcons::new();
        let first = invoke(&icons, &["/tmp/file.txt", "40"]);
        let second = invoke(&icons, &["/tmp/file.txt", "40"]);
        assert_eq!(first, second);
    }

    #[test]
    fn dash_prefixed_path_reaches_source() {
        let icons = FakeIcons::new();
        let (code, out, err) = invoke(&icons, &["-notes.txt", "16"]);

        assert_eq!(code, EXIT_SUCCESS);
        assert!(err.is_empty());
        assert_eq!(decode_icon_base64(&out).unwrap().dimensions(), (16, 16));
        assert_eq!(
            icons.requests.borrow().as_slice(),
            &[(PathBuf::from("-notes.txt"), 16)]
        );
    }

    #[test]
    fn help_flag_is_treated_as_a_path() {
        let icons = FakeIcons::new();
        let (code, _, _) = invoke(&icons, &["--help"]);

        assert_eq!(code, EXIT_SUCCESS);
        assert_eq!(
            icons.requests.borrow().as_slice(),
            &[(PathBuf::from("--help"), DEFAULT_SIZE)]
        );
    }

    #[test]
    fn fetch_returns_base64_without_newline() {
        let size = IconSize::from_value(8.0).unwrap();
        let encoded = fetch_icon_base64(&FakeIcons::new(), Path::new("/tmp"), size).unwrap();

        assert!(!encoded.ends_with('\n'));
        assert_eq!(decode_icon_base64(&encoded).unwrap().dimensions(), (8, 8));
    }

    #[test]
    fn fetch_propagates_source_error() {
        let result = fetch_icon_base64(&BrokenIcons, Path::new("/tmp"), IconSize::default());
        assert!(matches!(result, Err(IconError::Render { .. })));
    }
}
