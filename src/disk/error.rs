use std::{fmt, io, path::PathBuf};

/// 镜像生成错误类型，两种情况本质上都是 I/O 失败
#[derive(Debug)]
pub enum ImageError {
    Create { path: PathBuf, source: io::Error }, // 无法创建或截断文件
    Write { path: PathBuf, source: io::Error },  // 写入或落盘失败
}

impl ImageError {
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Create { source, .. } | Self::Write { source, .. } => source.kind(),
        }
    }
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Create { path, .. } => {
                write!(f, "Couldn't create disk image: {}", path.display())
            }
            Self::Write { path, .. } => write!(f, "Couldn't write disk image: {}", path.display()),
        }
    }
}

impl std::error::Error for ImageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Create { source, .. } | Self::Write { source, .. } => Some(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, ImageError>;
