//! 数据变换函数
//!
//! 提供常用的数据预处理操作，如像素归一化、one-hot 编码等。

use crate::tensor::Tensor;

/// 将 0-255 像素值归一化到 0-1
///
/// # 参数
/// - `tensor`: 输入 Tensor，值范围 [0, 255]
///
/// # 返回
/// 归一化后的 Tensor，值范围 [0, 1]
pub fn normalize_pixels(tensor: &Tensor) -> Tensor {
    tensor / 255.0
}

/// 将类别编码转换为 one-hot 编码
///
/// # 参数
/// - `codes`: 类别编码，值为 0..num_classes（超出范围的编码对应全零行）
/// - `num_classes`: 类别总数
///
/// # 返回
/// one-hot 编码 Tensor，形状 [N, num_classes]
///
/// # 示例
/// ```ignore
/// let encoded = one_hot(&[0, 2, 1], 3);
/// // 结果: [[1,0,0], [0,0,1], [0,1,0]]
/// ```
pub fn one_hot(codes: &[usize], num_classes: usize) -> Tensor {
    let n = codes.len();

    let mut data = vec![0.0; n * num_classes];
    for (i, &code) in codes.iter().enumerate() {
        if code < num_classes {
            data[i * num_classes + code] = 1.0;
        }
    }

    Tensor::new(&data, &[n, num_classes])
}
