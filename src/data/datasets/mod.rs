//! 内置数据集
//!
//! - ImageFolder：按“划分目录/类别文件夹/图像文件”结构组织的图像分类数据集

mod image_folder;

pub use image_folder::{ImageFolderConfig, ImageFolderDataset};
