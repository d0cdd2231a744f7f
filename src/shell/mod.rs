pub mod report;

use std::{path::Path, process::ExitCode};

use crate::disk::generate_image;
use crate::shell::report::{report_failure, report_success, WriteSpinner};

/// 在当前目录生成 ssd.img，并把结果映射成进程退出码
pub fn run() -> ExitCode {
    let spinner = WriteSpinner::start();
    let result = generate_image(Path::new("."));
    spinner.finish();

    match result {
        Ok((path, len)) => {
            report_success(&path, len);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_failure(&e);
            ExitCode::FAILURE
        }
    }
}
