use super::Tensor;
use crate::errors::TensorError;
use image::RgbImage;

impl Tensor {
    /// 确定是`[高, 宽, 3]`的RGB图像张量的情况下，返回该图像的高度和宽度
    pub fn get_image_size(&self) -> Result<(usize, usize), TensorError> {
        match self.shape() {
            &[height, width, 3] => Ok((height, width)),
            shape => Err(TensorError::NotRgbImage(shape.to_vec())),
        }
    }

    /// 将像素值在[0,1]之间的RGB图像张量还原为Image库的`RgbImage`（像素值乘回255并四舍五入）
    pub fn to_rgb_image(&self) -> Result<RgbImage, TensorError> {
        let (height, width) = self.get_image_size()?;

        let mut raw = Vec::with_capacity(self.size());
        for &pixel in self.data.iter() {
            if !(0.0..=1.0).contains(&pixel) {
                return Err(TensorError::PixelOutOfRange(pixel));
            }
            raw.push((pixel * 255.0).round() as u8);
        }

        RgbImage::from_raw(width as u32, height as u32, raw).ok_or(
            TensorError::DataLengthMismatch {
                len: self.size(),
                shape: self.shape().to_vec(),
            },
        )
    }
}
