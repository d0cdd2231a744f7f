use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::{
    error::Error,
    io::{self, Write},
    path::Path,
    time::Duration,
};

use crate::disk::{ImageError, IMAGE_FILE_NAME};

/// 写入期间显示的转圈提示，画在 stderr 上，不是终端时 indicatif 会自动隐藏
pub struct WriteSpinner {
    pb: ProgressBar,
}

impl WriteSpinner {
    pub fn start() -> Self {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("💾 Writing {}...", IMAGE_FILE_NAME));
        pb.enable_steady_tick(Duration::from_millis(80));
        Self { pb }
    }

    pub fn finish(self) {
        self.pb.finish_and_clear();
    }
}

/// 镜像已经写好，提示信息写不出去（比如管道被关闭）不影响结果
pub fn report_success(path: &Path, len: usize) {
    let _ = write_success(&mut io::stdout(), path, len);
}

pub fn report_failure(err: &ImageError) {
    let _ = write_failure(&mut io::stderr(), err);
}

fn write_success(out: &mut impl Write, path: &Path, len: usize) -> io::Result<()> {
    writeln!(
        out,
        "{} {} ({} bytes)",
        "✅ Created disk image:".green().bold(),
        path.display().to_string().cyan(),
        len
    )
}

fn write_failure(out: &mut impl Write, err: &ImageError) -> io::Result<()> {
    writeln!(out, "{} {}", "❌ Error:".red().bold(), err)?;
    if let Some(cause) = err.source() {
        writeln!(
            out,
            "   {} {} ({:?})",
            "caused by:".bright_black(),
            cause,
            err.kind()
        )?;
    }
    Ok(())
}
