use std::env;
use std::io;
use std::process;

use resolve_alias::SystemBookmarks;

fn main() {
    filetools_core::logging::init();

    let code = resolve_alias::run(
        env::args_os(),
        &SystemBookmarks,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    process::exit(code);
}
