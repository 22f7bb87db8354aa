//! 数据加载模块
//!
//! 按目录结构加载图像分类数据集，完成归一化与标签编码。
//!
//! # 主要组件
//!
//! - [`ImageFolderDataset`]: 按“划分目录/类别文件夹/图像文件”结构加载的数据集
//! - [`ImageFolderConfig`]: 加载配置（根目录、目标尺寸、允许的扩展名等）
//! - [`SplitCollection`]: 单个划分（训练/测试）内一一对应的图像与标签
//! - [`LabelEncoder`]: 字符串标签 → 整数编码
//! - [`prepare_dataset`]: 加载 + 堆叠 + 编码的完整流程
//! - [`transforms`]: 数据变换函数（归一化、one-hot 等）
//! - [`DataError`]: 数据加载错误类型
//!
//! # 使用示例
//!
//! ```ignore
//! use image_folder::data::{prepare_dataset, Split};
//!
//! let dataset = prepare_dataset("/data/tire_textures")?;
//! println!("{dataset}");
//!
//! let x = dataset.train_images(); // [N, 128, 128, 3]
//! let y = dataset.one_hot_labels(Split::Training); // [N, 类别数]
//! ```

pub mod datasets;
pub mod error;
mod label_encoder;
mod prepare;
mod split;
pub mod transforms;

#[cfg(test)]
mod tests;

// Re-exports
pub use datasets::{ImageFolderConfig, ImageFolderDataset};
pub use error::DataError;
pub use label_encoder::LabelEncoder;
pub use prepare::{PreparedDataset, prepare_dataset, prepare_dataset_with};
pub use split::{LoadFailure, Split, SplitCollection};
