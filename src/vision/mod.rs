/*
 * @Author       : 老董
 * @Description  : 本模块提供计算机视觉相关的功能。
 *                 在本模块中，不严谨地说：
 *                 1. 所谓的image/图像是指8位RGB格式的图像，其他格式在加载时统一转换；
 *                 2. 图像张量的形状为[高, 宽, 通道]，即行优先的HWC排列。
 */

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, ImageError, ImageReader};

use crate::errors::VisionError;
use crate::tensor::Tensor;
use crate::utils::traits::dynamic_image::TraitForDynamicImage;


pub struct Vision;

impl Vision {
    /// 将本地的图像解码为`DynamicImage`
    ///
    /// 图像格式优先根据文件内容判断，判断不出时才参考扩展名，
    /// 因此扩展名与实际格式不符（如png内容存成了.jpg）的文件也能正常解码。
    /// 文件不可读、被截断或根本不是图像时返回错误。
    pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage, ImageError> {
        let reader = ImageReader::open(path.as_ref())?.with_guessed_format()?;
        reader.decode()
    }

    /// 调整图像大小
    /// * `image` - 原始图像
    /// * `height` - 调整后的高度
    /// * `width` - 调整后的宽度
    /// * `filter` - 重采样方式
    ///
    /// 不保持宽高比，直接拉伸到目标尺寸。
    pub fn resize_image(
        image: &DynamicImage,
        height: usize,
        width: usize,
        filter: FilterType,
    ) -> DynamicImage {
        image.resize_exact(width as u32, height as u32, filter)
    }

    /// 加载本地图像并转换为形状为`[height, width, 3]`的RGB张量（像素值在[0,255]之间）
    ///
    /// 先转成RGB再缩放，故alpha通道、调色板等信息不会参与插值。
    pub fn load_rgb_tensor<P: AsRef<Path>>(
        path: P,
        height: usize,
        width: usize,
        filter: FilterType,
    ) -> Result<Tensor, ImageError> {
        let image = Self::load_image(path)?;
        let rgb = DynamicImage::ImageRgb8(image.to_rgb8());
        Ok(Self::resize_image(&rgb, height, width, filter).to_rgb_tensor())
    }

    /// 将像素值在[0,1]之间的RGB图像张量保存为本地图像，格式由扩展名决定
    pub fn save_image<P: AsRef<Path>>(tensor: &Tensor, path: P) -> Result<(), VisionError> {
        let image = tensor.to_rgb_image()?;
        image.save(path.as_ref())?;
        Ok(())
    }
}
