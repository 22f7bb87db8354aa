use crate::errors::TensorError;
use crate::tensor::Tensor;

#[test]
fn test_new() {
    let tensor = Tensor::new(&[1., 2., 3., 4., 5., 6.], &[2, 3]);
    assert_eq!(tensor.shape(), &[2, 3]);
    assert_eq!(tensor.dimension(), 2);
    assert_eq!(tensor.size(), 6);
    assert_eq!(tensor[[1, 2]], 6.);
}

#[test]
#[should_panic(expected = "数据长度3与形状[2, 2]不匹配")]
fn test_new_with_mismatched_shape() {
    Tensor::new(&[1., 2., 3.], &[2, 2]);
}

#[test]
fn test_try_new() {
    let tensor = Tensor::try_new(vec![0.5; 12], &[2, 2, 3]).unwrap();
    assert_eq!(tensor.shape(), &[2, 2, 3]);

    let result = Tensor::try_new(vec![0.5; 11], &[2, 2, 3]);
    assert_eq!(
        result,
        Err(TensorError::DataLengthMismatch {
            len: 11,
            shape: vec![2, 2, 3],
        })
    );
}

#[test]
fn test_zeros_with_empty_batch() {
    let tensor = Tensor::zeros(&[0, 128, 128, 3]);
    assert_eq!(tensor.shape(), &[0, 128, 128, 3]);
    assert_eq!(tensor.size(), 0);
    assert!(tensor.data_as_slice().is_empty());
}

#[test]
fn test_min_max_value() {
    let tensor = Tensor::new(&[0.2, 0.9, 0.0, 0.4], &[4]);
    assert_eq!(tensor.min_value(), 0.0);
    assert_eq!(tensor.max_value(), 0.9);
}
