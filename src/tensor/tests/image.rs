use crate::errors::TensorError;
use crate::tensor::Tensor;

#[test]
fn test_get_image_size() {
    let image = Tensor::zeros(&[4, 5, 3]);
    assert_eq!(image.get_image_size(), Ok((4, 5)));

    let luma = Tensor::zeros(&[4, 5]);
    assert_eq!(
        luma.get_image_size(),
        Err(TensorError::NotRgbImage(vec![4, 5]))
    );
    let rgba = Tensor::zeros(&[4, 5, 4]);
    assert!(rgba.get_image_size().is_err());
}

#[test]
fn test_to_rgb_image() {
    // 1行2列：一个纯红像素、一个中灰像素
    let tensor = Tensor::new(&[1.0, 0.0, 0.0, 0.5, 0.5, 0.5], &[1, 2, 3]);
    let image = tensor.to_rgb_image().unwrap();

    assert_eq!(image.dimensions(), (2, 1));
    assert_eq!(image.get_pixel(0, 0).0, [255, 0, 0]);
    assert_eq!(image.get_pixel(1, 0).0, [128, 128, 128]);
}

#[test]
fn test_to_rgb_image_with_unnormalized_pixels() {
    let tensor = Tensor::new(&[255.0, 0.0, 0.0], &[1, 1, 3]);
    assert_eq!(
        tensor.to_rgb_image(),
        Err(TensorError::PixelOutOfRange(255.0))
    );
}
