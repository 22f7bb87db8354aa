use std::ops::Index;

use crate::tensor::Tensor;

// 如`image[[y, x, c]]`、`batch[[n, y, x, c]]`，索引个数须与张量维数一致，越界会panic
impl<const N: usize> Index<[usize; N]> for Tensor {
    type Output = f32;

    fn index(&self, index: [usize; N]) -> &f32 {
        assert_eq!(
            N,
            self.dimension(),
            "索引维度{}与张量维度{}不一致",
            N,
            self.dimension()
        );
        &self.data[&index[..]]
    }
}
