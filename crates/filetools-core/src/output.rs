use std::io::{self, Write};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;

/// Write `line` followed by a newline, then flush.
///
/// The binaries leave through `process::exit`, which skips destructors, so
/// every line is flushed as soon as it is written.
pub fn write_line<W: Write + ?Sized>(writer: &mut W, line: &str) -> io::Result<()> {
    writeln!(writer, "{}", line)?;
    writer.flush()
}
