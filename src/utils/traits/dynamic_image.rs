use crate::tensor::Tensor;
use image::DynamicImage;

pub trait TraitForDynamicImage {
    fn get_channel_len(&self) -> usize;
    fn to_rgb_tensor(&self) -> Tensor;
}

impl TraitForDynamicImage for DynamicImage {
    fn get_channel_len(&self) -> usize {
        self.color().channel_count() as usize
    }

    /// 将Image库的`DynamicImage`格式转换为形状为`[高, 宽, 3]`的张量，像素值仍在[0,255]之间。
    /// 非RGB格式（灰度、带alpha通道、16位等）会先统一转换为8位RGB，alpha通道直接丢弃。
    fn to_rgb_tensor(&self) -> Tensor {
        let rgb = self.to_rgb8();
        let (width, height) = rgb.dimensions();
        // `RgbImage`的底层缓冲即行优先的[h, w, c]排列，长度必然与形状相符
        let data = rgb.as_raw().iter().map(|&p| f32::from(p)).collect::<Vec<_>>();
        Tensor::new(&data, &[height as usize, width as usize, 3])
    }
}
