/*
 * @Author       : 老董
 * @Description  : LabelEncoder - 将字符串类别标签编码为 [0, 类别数) 范围内的整数
 *
 * 词表由拟合时出现过的所有不同标签按字典序排列而成，类别的编码即其在词表中的下标，
 * 因此相同的标签集合总会得到相同的编码。
 */

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::DataError;

/// 标签编码器
///
/// # 示例
/// ```ignore
/// let mut encoder = LabelEncoder::new();
/// let train_codes = encoder.fit_transform(&["normal", "cracked", "normal"]);
/// assert_eq!(train_codes, vec![1, 0, 1]);
///
/// let test_codes = encoder.transform(&["cracked"])?;
/// assert_eq!(test_codes, vec![0]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    /// 升序且无重复的类别列表；`None` 表示尚未拟合
    classes: Option<Vec<String>>,
}

impl LabelEncoder {
    /// 创建未拟合的编码器
    pub fn new() -> Self {
        Self::default()
    }

    /// 根据标签序列建立词表（会覆盖之前的拟合结果）
    pub fn fit<S: AsRef<str>>(&mut self, labels: &[S]) -> &mut Self {
        let mut classes = labels
            .iter()
            .map(|label| label.as_ref().to_owned())
            .collect::<Vec<_>>();
        classes.sort_unstable();
        classes.dedup();
        self.classes = Some(classes);
        self
    }

    /// 拟合并返回同一标签序列的编码，顺序和长度与输入一致
    pub fn fit_transform<S: AsRef<str>>(&mut self, labels: &[S]) -> Vec<usize> {
        self.fit(labels);
        let classes = self.classes();
        labels
            .iter()
            .filter_map(|label| code_of(classes, label.as_ref()))
            .collect()
    }

    /// 用已拟合的词表编码标签序列
    ///
    /// 任一标签未在拟合时出现过，整个调用即返回 [`DataError::UnknownLabel`]，不做部分编码。
    pub fn transform<S: AsRef<str>>(&self, labels: &[S]) -> Result<Vec<usize>, DataError> {
        let classes = self.fitted_classes()?;
        labels
            .iter()
            .map(|label| {
                let label = label.as_ref();
                code_of(classes, label).ok_or_else(|| DataError::UnknownLabel(label.to_owned()))
            })
            .collect()
    }

    /// 将编码还原为类别名
    pub fn inverse_transform(&self, codes: &[usize]) -> Result<Vec<String>, DataError> {
        let classes = self.fitted_classes()?;
        codes
            .iter()
            .map(|&code| {
                classes
                    .get(code)
                    .cloned()
                    .ok_or(DataError::UnknownCode {
                        code,
                        num_classes: classes.len(),
                    })
            })
            .collect()
    }

    /// 按编码顺序排列的类别名；未拟合时为空
    pub fn classes(&self) -> &[String] {
        self.classes.as_deref().unwrap_or(&[])
    }

    pub fn num_classes(&self) -> usize {
        self.classes().len()
    }

    pub fn is_fitted(&self) -> bool {
        self.classes.is_some()
    }

    /// 将词表保存为 JSON 文件
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DataError> {
        self.fitted_classes()?;
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| DataError::FormatError(format!("序列化标签编码器失败: {e}")))?;
        std::fs::write(path.as_ref(), json)?;
        Ok(())
    }

    /// 从 [`LabelEncoder::save`] 写出的 JSON 文件加载词表
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let encoder: Self = serde_json::from_str(&json)
            .map_err(|e| DataError::FormatError(format!("解析标签编码器失败: {e}")))?;

        let classes = encoder.fitted_classes()?;
        // 编码依赖二分查找，词表必须严格升序
        if classes.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(DataError::FormatError(
                "类别列表必须严格升序且无重复".to_string(),
            ));
        }
        Ok(encoder)
    }

    fn fitted_classes(&self) -> Result<&[String], DataError> {
        self.classes.as_deref().ok_or(DataError::EncoderNotFitted)
    }
}

fn code_of(classes: &[String], label: &str) -> Option<usize> {
    classes
        .binary_search_by(|class| class.as_str().cmp(label))
        .ok()
}
