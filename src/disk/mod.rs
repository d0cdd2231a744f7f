use std::path::{Path, PathBuf};

pub mod error;
pub mod image;
pub mod types;

pub use error::{ImageError, Result};
pub use image::DiskImage;
pub use types::{IMAGE_FILE_NAME, IMAGE_SIZE};

pub fn image_path(dir: &Path) -> PathBuf {
    dir.join(IMAGE_FILE_NAME)
}

/// 在 dir 下生成空白的 ssd.img，返回写入的路径和字节数
pub fn generate_image(dir: &Path) -> Result<(PathBuf, usize)> {
    let path = image_path(dir);
    let image = DiskImage::blank();
    image.write_to(&path)?;
    Ok((path, image.len()))
}
