use super::Tensor;
use crate::errors::TensorError;

impl Tensor {
    /// 将多个形状相同的张量沿新增的首个维度堆叠起来，返回一个新的张量。
    /// * `tensors` - 一个包含多个张量的数组的引用。
    ///
    /// 如n个形状为`[h, w, c]`的图像张量会堆叠为形状为`[n, h, w, c]`的张量。
    /// 列表为空或其中任一张量形状与首个张量不同时报错。
    pub fn stack(tensors: &[&Self]) -> Result<Self, TensorError> {
        let first = tensors.first().ok_or(TensorError::EmptyList)?;
        let first_shape = first.shape();

        if let Some(t) = tensors.iter().find(|t| t.shape() != first_shape) {
            return Err(TensorError::InconsistentShape {
                expected: first_shape.to_vec(),
                got: t.shape().to_vec(),
            });
        }

        let mut data = Vec::with_capacity(first.size() * tensors.len());
        for t in tensors {
            // 非标准布局（如经过转置的视图）时按逻辑顺序逐个拷贝
            match t.data.as_slice() {
                Some(slice) => data.extend_from_slice(slice),
                None => data.extend(t.data.iter().copied()),
            }
        }

        let mut shape = first_shape.to_vec();
        shape.insert(0, tensors.len());
        Self::try_new(data, &shape)
    }

    /// 在不改变元素顺序的前提下改变形状，元素数量不一致时报错
    pub fn reshape(&self, shape: &[usize]) -> Result<Self, TensorError> {
        let data = self.data.iter().copied().collect::<Vec<_>>();
        Self::try_new(data, shape)
    }
}
