mod prepare;
mod transforms;

use std::path::Path;

use image::{Rgb, RgbImage};

/// 在 `path` 写入一张纯色图像，格式由扩展名决定（父目录不存在时自动创建）
fn write_image(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    RgbImage::from_pixel(width, height, Rgb(color))
        .save(path)
        .unwrap();
}

/// 在 `path` 写入任意字节（用于构造损坏的图像或非图像文件）
fn write_bytes(path: &Path, bytes: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, bytes).unwrap();
}
