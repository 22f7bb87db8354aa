//! # Image Folder
//!
//! `image_folder`项目用纯rust加载按“划分目录/类别文件夹/图像文件”组织的图像分类数据集：
//! 解码、转RGB、缩放到固定尺寸、像素归一化到[0,1]，并把类别文件夹名编码为整数标签，
//! 最终得到可直接交给下游分类模型的训练集与测试集张量。
//!
//! ```ignore
//! let dataset = image_folder::data::prepare_dataset("/data/tire_textures")?;
//! println!("{dataset}");
//! ```

pub mod data;
pub mod errors;
pub mod tensor;
pub mod utils;
pub mod vision;
