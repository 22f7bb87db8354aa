//! 数据集划分（训练集/测试集）及其样本集合

use std::fmt;
use std::path::PathBuf;

use super::error::DataError;
use crate::errors::TensorError;
use crate::tensor::Tensor;

/// 数据集的两个顶层划分，各自对应根目录下一个固定名称的子目录
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Split {
    Training,
    Testing,
}

impl Split {
    /// 按加载顺序排列的全部划分
    pub const ALL: [Split; 2] = [Split::Training, Split::Testing];

    /// 划分在数据集根目录下对应的子目录名
    pub fn dir_name(&self) -> &'static str {
        match self {
            Split::Training => "training_data",
            Split::Testing => "testing_data",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// 单个划分内按加载顺序排列的样本集合
///
/// 图像与标签按下标一一对应，二者长度始终相等（只能通过 [`SplitCollection::push`] 成对追加）。
#[derive(Debug, Clone)]
pub struct SplitCollection {
    split: Split,
    /// 每个元素为形状 [高, 宽, 3]、像素值在 [0, 1] 的图像张量
    images: Vec<Tensor>,
    /// 每个元素为对应图像所在类别文件夹的名称
    labels: Vec<String>,
}

impl SplitCollection {
    pub fn new(split: Split) -> Self {
        Self {
            split,
            images: Vec::new(),
            labels: Vec::new(),
        }
    }

    /// 成对追加一个样本
    pub fn push(&mut self, image: Tensor, label: &str) {
        self.images.push(image);
        self.labels.push(label.to_owned());
    }

    pub fn split(&self) -> Split {
        self.split
    }

    /// 返回样本数量
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// 是否不含任何样本
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn images(&self) -> &[Tensor] {
        &self.images
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// 获取第 index 个样本
    ///
    /// # 返回
    /// (image, label) 元组
    pub fn get(&self, index: usize) -> Result<(&Tensor, &str), DataError> {
        match (self.images.get(index), self.labels.get(index)) {
            (Some(image), Some(label)) => Ok((image, label)),
            _ => Err(DataError::IndexOutOfBounds {
                index,
                len: self.len(),
            }),
        }
    }

    /// 将全部图像堆叠为形状 [样本数, 高, 宽, 3] 的单个张量
    ///
    /// `image_shape` 为单个样本应有的形状；不含样本时返回形状为 [0, 高, 宽, 3] 的空张量。
    pub fn stack_images(&self, image_shape: &[usize]) -> Result<Tensor, DataError> {
        let Some(first) = self.images.first() else {
            let mut shape = image_shape.to_vec();
            shape.insert(0, 0);
            return Ok(Tensor::zeros(&shape));
        };
        if first.shape() != image_shape {
            return Err(TensorError::InconsistentShape {
                expected: image_shape.to_vec(),
                got: first.shape().to_vec(),
            }
            .into());
        }

        let images = self.images.iter().collect::<Vec<_>>();
        Ok(Tensor::stack(&images)?)
    }

    /// 拆分为图像列表和标签列表
    pub fn into_parts(self) -> (Vec<Tensor>, Vec<String>) {
        (self.images, self.labels)
    }
}

/// 单个文件加载失败的诊断记录（该文件不会出现在任何划分中）
#[derive(Debug)]
pub struct LoadFailure {
    pub split: Split,
    /// 文件所在类别文件夹的名称
    pub label: String,
    pub path: PathBuf,
    pub error: DataError,
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}/{}] {}", self.split, self.label, self.error)
    }
}
