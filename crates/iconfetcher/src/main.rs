use std::env;
use std::io;
use std::process;

use iconfetcher::SystemIcons;

fn main() {
    filetools_core::logging::init();

    let code = iconfetcher::run(
        env::args_os(),
        &SystemIcons,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
    process::exit(code);
}
