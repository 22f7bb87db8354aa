/*
 * @Author       : 老董
 * @Description  : 数据集准备流程：加载 → 堆叠 → 标签编码 → 摘要
 */

use std::fmt;
use std::path::Path;

use super::datasets::{ImageFolderConfig, ImageFolderDataset};
use super::error::DataError;
use super::label_encoder::LabelEncoder;
use super::split::{LoadFailure, Split};
use super::transforms::one_hot;
use crate::tensor::Tensor;

/// 准备好的数据集：堆叠后的图像张量 + 原始标签 + 整数编码
#[derive(Debug)]
pub struct PreparedDataset {
    /// [训练样本数, 高, 宽, 3]
    train_images: Tensor,
    train_labels: Vec<String>,
    train_codes: Vec<usize>,
    /// [测试样本数, 高, 宽, 3]
    test_images: Tensor,
    test_labels: Vec<String>,
    test_codes: Vec<usize>,
    /// 由训练集标签拟合
    encoder: LabelEncoder,
    failures: Vec<LoadFailure>,
}

/// 便捷 API：以默认配置（128x128、jpg/jpeg/png）准备 `root` 下的数据集
pub fn prepare_dataset<P: AsRef<Path>>(root: P) -> Result<PreparedDataset, DataError> {
    prepare_dataset_with(&ImageFolderConfig::new(root))
}

/// 完整准备流程
///
/// # 错误
/// - 根目录或划分目录不存在：[`DataError::DirectoryNotFound`]
/// - 测试集中出现训练集没有的类别：[`DataError::UnknownLabel`]
pub fn prepare_dataset_with(config: &ImageFolderConfig) -> Result<PreparedDataset, DataError> {
    let dataset = ImageFolderDataset::load(config)?;

    let image_shape = config.image_shape();
    let train_images = dataset.training().stack_images(&image_shape)?;
    let test_images = dataset.testing().stack_images(&image_shape)?;

    let mut encoder = LabelEncoder::new();
    let train_codes = encoder.fit_transform(dataset.training().labels());
    let test_codes = encoder.transform(dataset.testing().labels())?;

    // 图像已堆叠，逐样本的张量不再需要
    let (training, testing, failures) = dataset.into_parts();
    let (_, train_labels) = training.into_parts();
    let (_, test_labels) = testing.into_parts();

    Ok(PreparedDataset {
        train_images,
        train_labels,
        train_codes,
        test_images,
        test_labels,
        test_codes,
        encoder,
        failures,
    })
}

impl PreparedDataset {
    pub fn train_images(&self) -> &Tensor {
        &self.train_images
    }

    pub fn train_labels(&self) -> &[String] {
        &self.train_labels
    }

    pub fn train_codes(&self) -> &[usize] {
        &self.train_codes
    }

    pub fn test_images(&self) -> &Tensor {
        &self.test_images
    }

    pub fn test_labels(&self) -> &[String] {
        &self.test_labels
    }

    pub fn test_codes(&self) -> &[usize] {
        &self.test_codes
    }

    pub fn encoder(&self) -> &LabelEncoder {
        &self.encoder
    }

    /// 按编码顺序排列的类别名
    pub fn classes(&self) -> &[String] {
        self.encoder.classes()
    }

    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }

    /// 指定划分标签的 one-hot 编码，形状 [样本数, 类别数]
    pub fn one_hot_labels(&self, split: Split) -> Tensor {
        let codes = match split {
            Split::Training => &self.train_codes,
            Split::Testing => &self.test_codes,
        };
        one_hot(codes, self.encoder.num_classes())
    }
}

impl fmt::Display for PreparedDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "类别: {:?}", self.classes())?;
        writeln!(f, "训练集形状: {:?}", self.train_images.shape())?;
        writeln!(f, "测试集形状: {:?}", self.test_images.shape())?;
        write!(f, "跳过的文件: {}", self.failures.len())
    }
}
