/*
 * @Author       : 老董
 * @Description  : ImageFolderDataset - 按“划分目录/类别文件夹/图像文件”结构加载的图像分类数据集
 *
 * 目录结构：
 * <root>/
 *   training_data/<类别名>/<图像文件>
 *   testing_data/<类别名>/<图像文件>
 *
 * 每个图像依次经过：解码 → 转为RGB → 拉伸缩放到固定尺寸 → 像素值归一化到[0,1]。
 * 单个文件加载失败只会被跳过并记录，目录缺失则整个加载失败。
 */

use std::path::{Path, PathBuf};

use image::imageops::FilterType;
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use walkdir::{DirEntry, WalkDir};

use crate::data::error::DataError;
use crate::data::split::{LoadFailure, Split, SplitCollection};
use crate::data::transforms::normalize_pixels;
use crate::tensor::Tensor;
use crate::vision::Vision;

/// 默认的目标尺寸（高、宽）
const DEFAULT_IMAGE_SIZE: usize = 128;

/// 默认允许的图像扩展名（不区分大小写）
const DEFAULT_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

const PROGRESS_TEMPLATE: &str = "{msg:<32} [{bar:40}] {pos}/{len}";

/// 加载配置
///
/// # 示例
/// ```ignore
/// let config = ImageFolderConfig::new("/data/tire_textures")
///     .image_size(64, 64)
///     .show_progress(false);
/// let dataset = ImageFolderDataset::load(&config)?;
/// ```
#[derive(Debug, Clone)]
pub struct ImageFolderConfig {
    root: PathBuf,
    height: usize,
    width: usize,
    /// 小写、不带前导点
    extensions: Vec<String>,
    filter: FilterType,
    show_progress: bool,
}

impl ImageFolderConfig {
    /// 以默认参数创建配置：128x128、jpg/jpeg/png、双三次（Catmull-Rom）插值、显示进度条
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            height: DEFAULT_IMAGE_SIZE,
            width: DEFAULT_IMAGE_SIZE,
            extensions: DEFAULT_EXTENSIONS.iter().map(|ext| ext.to_string()).collect(),
            filter: FilterType::CatmullRom,
            show_progress: true,
        }
    }

    /// 设置缩放后的目标尺寸
    pub fn image_size(mut self, height: usize, width: usize) -> Self {
        self.height = height;
        self.width = width;
        self
    }

    /// 设置允许的扩展名，如 `["png", ".BMP"]`（统一转为小写并去掉前导点）
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extensions = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    /// 设置缩放时的重采样方式
    pub fn filter(mut self, filter: FilterType) -> Self {
        self.filter = filter;
        self
    }

    /// 设置是否显示每个类别文件夹的进度条
    pub fn show_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// 单个样本的形状 [高, 宽, 3]
    pub fn image_shape(&self) -> [usize; 3] {
        [self.height, self.width, 3]
    }

    /// 文件扩展名是否在允许列表中（不区分大小写）
    pub fn is_allowed(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| {
                self.extensions
                    .iter()
                    .any(|allowed| allowed.eq_ignore_ascii_case(ext))
            })
    }
}

/// 按目录结构加载的图像分类数据集
///
/// 加载结果包含训练集、测试集以及所有被跳过文件的诊断记录。
/// 注：所有样本同时常驻内存，数据集大小受限于可用内存。
#[derive(Debug)]
pub struct ImageFolderDataset {
    training: SplitCollection,
    testing: SplitCollection,
    failures: Vec<LoadFailure>,
}

impl ImageFolderDataset {
    /// 完整加载 API
    ///
    /// 依次加载 `training_data` 与 `testing_data`；同一层级的目录项按文件名排序后处理，
    /// 因此对未改动的目录树重复加载，得到的样本及其顺序完全相同。
    ///
    /// # 错误
    /// - 根目录或任一划分目录不存在：[`DataError::DirectoryNotFound`]
    /// - 目录无法列出：[`DataError::IoError`]
    ///
    /// 单个图像解码失败不会返回错误，而是记入 [`ImageFolderDataset::failures`]。
    pub fn load(config: &ImageFolderConfig) -> Result<Self, DataError> {
        let root = config.root();
        if !root.is_dir() {
            return Err(DataError::DirectoryNotFound(root.to_path_buf()));
        }

        let mut failures = Vec::new();
        let mut training = SplitCollection::new(Split::Training);
        let mut testing = SplitCollection::new(Split::Testing);
        for collection in [&mut training, &mut testing] {
            load_split(config, collection, &mut failures)?;
        }

        info!(
            "加载完成：训练集 {} 个样本，测试集 {} 个样本，跳过 {} 个文件",
            training.len(),
            testing.len(),
            failures.len()
        );

        Ok(Self {
            training,
            testing,
            failures,
        })
    }

    pub fn training(&self) -> &SplitCollection {
        &self.training
    }

    pub fn testing(&self) -> &SplitCollection {
        &self.testing
    }

    /// 获取指定划分
    pub fn split(&self, split: Split) -> &SplitCollection {
        match split {
            Split::Training => &self.training,
            Split::Testing => &self.testing,
        }
    }

    /// 所有加载失败而被跳过的文件
    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }

    /// 拆分为 (训练集, 测试集, 失败记录)
    pub fn into_parts(self) -> (SplitCollection, SplitCollection, Vec<LoadFailure>) {
        (self.training, self.testing, self.failures)
    }
}

/// 加载单个划分下的所有类别文件夹；划分目录下直接存放的文件被忽略
fn load_split(
    config: &ImageFolderConfig,
    collection: &mut SplitCollection,
    failures: &mut Vec<LoadFailure>,
) -> Result<(), DataError> {
    let split = collection.split();
    let split_path = config.root().join(split.dir_name());
    if !split_path.is_dir() {
        return Err(DataError::DirectoryNotFound(split_path));
    }

    info!("正在加载 {} ...", split_path.display());
    for class_entry in list_dir(&split_path)? {
        // 跟随符号链接判断，指向目录的链接同样视为类别文件夹
        if !class_entry.path().is_dir() {
            continue;
        }
        let label = class_entry.file_name().to_string_lossy().into_owned();
        load_class_folder(config, class_entry.path(), &label, collection, failures)?;
    }

    Ok(())
}

/// 加载单个类别文件夹下的图像（不进入子目录）
fn load_class_folder(
    config: &ImageFolderConfig,
    class_path: &Path,
    label: &str,
    collection: &mut SplitCollection,
    failures: &mut Vec<LoadFailure>,
) -> Result<(), DataError> {
    let split = collection.split();
    let entries = list_dir(class_path)?;

    let progress = if config.show_progress {
        ProgressBar::new(entries.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::with_template(PROGRESS_TEMPLATE) {
        progress.set_style(style.progress_chars("=> "));
    }
    progress.set_message(format!("{split}/{label}"));

    let before = collection.len();
    for entry in &entries {
        progress.inc(1);
        let path = entry.path();
        if entry.file_type().is_dir() || !config.is_allowed(path) {
            continue;
        }

        match load_sample(config, path) {
            Ok(image) => collection.push(image, label),
            Err(error) => {
                progress.suspend(|| warn!("跳过无法加载的图像 {}", error));
                failures.push(LoadFailure {
                    split,
                    label: label.to_owned(),
                    path: path.to_path_buf(),
                    error,
                });
            }
        }
    }
    progress.finish();

    debug!(
        "{split}/{label}: {} 个目录项，加载 {} 个样本",
        entries.len(),
        collection.len() - before
    );
    Ok(())
}

/// 解码、转RGB、缩放并归一化单个图像文件
fn load_sample(config: &ImageFolderConfig, path: &Path) -> Result<Tensor, DataError> {
    let pixels = Vision::load_rgb_tensor(path, config.height(), config.width(), config.filter)
        .map_err(|source| DataError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(normalize_pixels(&pixels))
}

/// 列出目录的直接子项，按文件名排序
fn list_dir(path: &Path) -> Result<Vec<DirEntry>, DataError> {
    WalkDir::new(path)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DataError::IoError(e.into()))
}
