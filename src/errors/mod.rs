use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TensorError {
    #[error("张量列表为空")]
    EmptyList,
    // 堆叠时各张量形状须完全一致
    #[error("张量形状不一致：期望{expected:?}，实际{got:?}")]
    InconsistentShape {
        expected: Vec<usize>,
        got: Vec<usize>,
    },
    #[error("数据长度{len}与形状{shape:?}不匹配")]
    DataLengthMismatch { len: usize, shape: Vec<usize> },

    // 图像张量相关
    #[error("RGB图像张量的形状应为[高, 宽, 3]，实际为{0:?}")]
    NotRgbImage(Vec<usize>),
    #[error("检测到像素值{0}：归一化图像张量的每个像素值必须在[0,1]之间")]
    PixelOutOfRange(f32),
}

#[derive(Error, Debug)]
pub enum VisionError {
    #[error("图像处理失败: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Tensor(#[from] TensorError),
}
