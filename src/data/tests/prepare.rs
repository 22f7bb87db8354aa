//! 数据集准备流程单元测试

use super::write_image;
use crate::assert_err;
use crate::data::{DataError, ImageFolderConfig, Split, prepare_dataset_with};

#[test]
fn test_prepare_dataset_with_custom_config() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_image(&root.join("training_data/normal/1.png"), 40, 30, [9, 9, 9]);
    write_image(&root.join("training_data/cracked/2.png"), 40, 30, [9, 9, 9]);
    write_image(&root.join("training_data/normal/3.png"), 40, 30, [9, 9, 9]);
    write_image(&root.join("testing_data/normal/4.png"), 40, 30, [9, 9, 9]);

    let config = ImageFolderConfig::new(root)
        .image_size(24, 12)
        .show_progress(false);
    let dataset = prepare_dataset_with(&config).unwrap();

    assert_eq!(dataset.train_images().shape(), &[3, 24, 12, 3]);
    assert_eq!(dataset.test_images().shape(), &[1, 24, 12, 3]);
    // 按类别文件夹名排序：cracked 先于 normal
    assert_eq!(dataset.train_labels(), &["cracked", "normal", "normal"]);
    assert_eq!(dataset.train_codes(), &[0, 1, 1]);
    assert_eq!(dataset.test_labels(), &["normal"]);
    assert_eq!(dataset.test_codes(), &[1]);
    assert_eq!(dataset.classes(), &["cracked", "normal"]);
    assert!(dataset.encoder().is_fitted());
    assert!(dataset.failures().is_empty());
}

#[test]
fn test_one_hot_labels() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_image(&root.join("training_data/a/1.png"), 4, 4, [0, 0, 0]);
    write_image(&root.join("training_data/b/1.png"), 4, 4, [0, 0, 0]);
    write_image(&root.join("training_data/c/1.png"), 4, 4, [0, 0, 0]);
    write_image(&root.join("testing_data/c/1.png"), 4, 4, [0, 0, 0]);

    let config = ImageFolderConfig::new(root).image_size(4, 4).show_progress(false);
    let dataset = prepare_dataset_with(&config).unwrap();

    let train = dataset.one_hot_labels(Split::Training);
    assert_eq!(train.shape(), &[3, 3]);
    assert_eq!(train[[0, 0]], 1.0);
    assert_eq!(train[[1, 1]], 1.0);
    assert_eq!(train[[2, 2]], 1.0);

    let test = dataset.one_hot_labels(Split::Testing);
    assert_eq!(test.shape(), &[1, 3]);
    assert_eq!(test[[0, 2]], 1.0);
    assert_eq!(test[[0, 0]] + test[[0, 1]], 0.0);
}

#[test]
fn test_summary_display() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_image(&root.join("training_data/cracked/a.png"), 4, 4, [0, 0, 0]);
    write_image(&root.join("training_data/normal/b.png"), 4, 4, [0, 0, 0]);
    write_image(&root.join("testing_data/normal/c.png"), 4, 4, [0, 0, 0]);

    let config = ImageFolderConfig::new(root).show_progress(false);
    let summary = prepare_dataset_with(&config).unwrap().to_string();

    assert!(summary.contains(r#"类别: ["cracked", "normal"]"#));
    assert!(summary.contains("训练集形状: [2, 128, 128, 3]"));
    assert!(summary.contains("测试集形状: [1, 128, 128, 3]"));
    assert!(summary.contains("跳过的文件: 0"));
}

#[test]
fn test_prepare_with_unseen_testing_class() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write_image(&root.join("training_data/cracked/a.png"), 4, 4, [0, 0, 0]);
    write_image(&root.join("testing_data/rusted/b.png"), 4, 4, [0, 0, 0]);

    let config = ImageFolderConfig::new(root).show_progress(false);
    assert_err!(prepare_dataset_with(&config), DataError::UnknownLabel("rusted"));
}
