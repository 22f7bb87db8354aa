//! 数据加载错误类型定义

use std::path::PathBuf;
use thiserror::Error;

use crate::errors::TensorError;

/// 数据加载相关错误
#[derive(Debug, Error)]
pub enum DataError {
    /// 数据集根目录或划分目录不存在
    #[error("目录未找到: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// IO 错误
    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    /// 单个图像文件无法读取或解码（文件损坏、被截断或根本不是图像）
    #[error("图像解码失败 {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    /// 标签未在拟合时出现过
    #[error("未知标签: `{0}`（拟合标签编码器时未出现过）")]
    UnknownLabel(String),

    /// 编码超出类别范围
    #[error("未知编码: {code}（类别数为 {num_classes}）")]
    UnknownCode { code: usize, num_classes: usize },

    /// 标签编码器尚未拟合
    #[error("标签编码器尚未拟合，请先调用 fit 或 fit_transform")]
    EncoderNotFitted,

    /// 索引越界
    #[error("索引越界: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// 格式错误（如编码器 JSON 文件内容不合法）
    #[error("格式错误: {0}")]
    FormatError(String),

    /// 张量堆叠等操作失败
    #[error(transparent)]
    Tensor(#[from] TensorError),
}
