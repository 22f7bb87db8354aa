//! transforms 模块单元测试

use crate::data::transforms::{normalize_pixels, one_hot};
use crate::tensor::Tensor;

#[test]
fn test_normalize_pixels_basic() {
    let tensor = Tensor::new(&[0.0, 127.5, 255.0, 51.0], &[2, 2]);
    let normalized = normalize_pixels(&tensor);

    assert!((normalized[[0, 0]] - 0.0).abs() < 1e-6);
    assert!((normalized[[0, 1]] - 0.5).abs() < 1e-6);
    assert!((normalized[[1, 0]] - 1.0).abs() < 1e-6);
    assert!((normalized[[1, 1]] - 0.2).abs() < 1e-6);
}

#[test]
fn test_one_hot_basic() {
    // 3 个样本，3 个类别
    let encoded = one_hot(&[0, 2, 1], 3);

    assert_eq!(encoded.shape(), &[3, 3]);

    // 类别 0 -> [1, 0, 0]
    assert_eq!(encoded[[0, 0]], 1.0);
    assert_eq!(encoded[[0, 1]], 0.0);
    assert_eq!(encoded[[0, 2]], 0.0);

    // 类别 2 -> [0, 0, 1]
    assert_eq!(encoded[[1, 0]], 0.0);
    assert_eq!(encoded[[1, 1]], 0.0);
    assert_eq!(encoded[[1, 2]], 1.0);

    // 类别 1 -> [0, 1, 0]
    assert_eq!(encoded[[2, 0]], 0.0);
    assert_eq!(encoded[[2, 1]], 1.0);
    assert_eq!(encoded[[2, 2]], 0.0);
}

#[test]
fn test_one_hot_out_of_range_code() {
    let encoded = one_hot(&[1, 5], 2);
    assert_eq!(encoded.shape(), &[2, 2]);
    assert_eq!(encoded[[0, 1]], 1.0);
    // 超出范围的编码对应全零行
    assert_eq!(encoded[[1, 0]] + encoded[[1, 1]], 0.0);
}

#[test]
fn test_one_hot_empty() {
    let encoded = one_hot(&[], 4);
    assert_eq!(encoded.shape(), &[0, 4]);
}
