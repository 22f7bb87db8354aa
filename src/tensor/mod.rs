use ndarray::{Array, IxDyn};

use crate::errors::TensorError;

mod ops {
    pub mod div;
    pub mod index;
}

mod image;
mod property;
mod shape;

#[cfg(test)]
mod tests;

/// 定义张量的结构体。本库中主要用于承载图像样本（`[高, 宽, 通道]`）
/// 及其堆叠后的批量数组（`[样本数, 高, 宽, 通道]`）。
/// 注：只要通Tensor初始化的都是张量（即使标量也是张量）。
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: Array<f32, IxDyn>,
}

impl Tensor {
    /// 创建一个张量，若为标量，`shape`可以是[]、[1]、[1,1]...
    /// 若为更高维度的数组，`shape`可以是[n,h,w,c,...]；
    /// 注：`data`的长度必须和`shape`中所有元素的乘积相等，否则会panic。
    /// 不确定长度是否匹配时请用[`Tensor::try_new`]。
    pub fn new(data: &[f32], shape: &[usize]) -> Tensor {
        match Self::try_new(data.to_vec(), shape) {
            Ok(tensor) => tensor,
            Err(e) => panic!("{}", e),
        }
    }

    /// 以拥有所有权的数据创建张量，长度与形状不符时返回错误而非panic
    pub fn try_new(data: Vec<f32>, shape: &[usize]) -> Result<Tensor, TensorError> {
        let len = data.len();
        let data =
            Array::from_shape_vec(IxDyn(shape), data).map_err(|_| TensorError::DataLengthMismatch {
                len,
                shape: shape.to_vec(),
            })?;
        Ok(Tensor { data })
    }

    /// 创建一个全零张量。`shape`中允许出现0（如`[0, 128, 128, 3]`表示不含任何样本的批量）
    pub fn zeros(shape: &[usize]) -> Tensor {
        Tensor {
            data: Array::zeros(IxDyn(shape)),
        }
    }
}
