use std::process::ExitCode;

use crate::shell::run;

mod disk;
mod shell;

fn main() -> ExitCode {
    run()
}
