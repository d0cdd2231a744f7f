use std::{fs::File, io::Write, path::Path};

use crate::disk::{
    error::{ImageError, Result},
    types::IMAGE_SIZE,
};

/// 空白磁盘镜像：固定 IMAGE_SIZE 字节，全部为 0
///
/// 不提供任何修改接口，长度和内容在构造后不会改变。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskImage {
    bytes: Box<[u8]>,
}

impl DiskImage {
    pub fn blank() -> Self {
        Self {
            bytes: vec![0u8; IMAGE_SIZE].into_boxed_slice(),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// 创建（或覆盖）目标文件，一次性写入整个镜像并落盘
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|source| ImageError::Create {
            path: path.to_path_buf(),
            source,
        })?;

        file.write_all(self.as_bytes())
            .and_then(|_| file.sync_all())
            .map_err(|source| ImageError::Write {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn blank_image_is_4mb_of_zeros() {
        let image = DiskImage::blank();
        assert_eq!(image.len(), 4 * 1024 * 1024);
        assert!(image.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn write_to_truncates_a_larger_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ssd.img");
        fs::write(&path, vec![0xAAu8; IMAGE_SIZE + 4096]).unwrap();

        DiskImage::blank().write_to(&path).unwrap();

        let contents = fs::read(&path).unwrap();
        assert_eq!(contents.len(), IMAGE_SIZE);
        assert!(contents.iter().all(|&b| b == 0));
    }

    #[test]
    fn write_to_a_directory_is_a_create_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ssd.img");
        fs::create_dir(&path).unwrap();

        let err = DiskImage::blank().write_to(&path).unwrap_err();
        assert!(matches!(err, ImageError::Create { .. }));
        assert!(path.is_dir());
    }

    #[test]
    fn write_to_missing_parent_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("ssd.img");

        let err = DiskImage::blank().write_to(&path).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
        match err {
            ImageError::Create { path: failed, .. } => assert_eq!(failed, path),
            other => panic!("expected create error, got {:?}", other),
        }
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn write_to_full_device_is_a_write_error() {
        let path = Path::new("/dev/full");

        let err = DiskImage::blank().write_to(path).unwrap_err();

        assert_eq!(err.kind(), std::io::ErrorKind::StorageFull);
        assert!(matches!(err, ImageError::Write { .. }));
    }
}
