/// 镜像文件总大小：4MB（0x400000 字节）
/// 模拟器的 SSD 在启动时按这个长度一次性读入镜像。
pub const IMAGE_SIZE: usize = 0x400000;

/// 输出文件名，相对于当前工作目录
pub const IMAGE_FILE_NAME: &str = "ssd.img";
