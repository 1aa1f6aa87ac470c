//! 全局配置管理，存储所有可配置项

use std::path::{Path, PathBuf};

use rsudger_engine::{Flags, VersionExtraction};

use crate::dataset::DatasetFormat;

/// 默认数据集文件名
pub const DEFAULT_DATASET_PATH: &str = "udgerdb_v3.json";

/// 分类器配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UdgerConfig {
    // 数据集路径
    pub dataset_path: PathBuf,
    // 维度开关（默认全部开启）
    pub flags: Flags,
    // 数据集格式，None 时按扩展名推断
    pub format: Option<DatasetFormat>,
    // 浏览器版本提取模式（默认关闭）
    pub version_extraction: VersionExtraction,
}

impl Default for UdgerConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATASET_PATH)
    }
}

impl UdgerConfig {
    /// 指定数据集路径，其余使用默认值
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            dataset_path: dataset_path.into(),
            flags: Flags::default(),
            format: None,
            version_extraction: VersionExtraction::default(),
        }
    }

    /// 自定义配置
    pub fn builder(dataset_path: impl Into<PathBuf>) -> UdgerConfigBuilder {
        UdgerConfigBuilder::new(dataset_path)
    }

    /// 实际使用的数据集格式
    pub fn resolved_format(&self) -> DatasetFormat {
        self.format
            .unwrap_or_else(|| DatasetFormat::from_path(&self.dataset_path))
    }

    pub fn dataset_path(&self) -> &Path {
        &self.dataset_path
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone)]
pub struct UdgerConfigBuilder {
    config: UdgerConfig,
}

impl UdgerConfigBuilder {
    pub fn new(dataset_path: impl Into<PathBuf>) -> Self {
        Self {
            config: UdgerConfig::new(dataset_path),
        }
    }

    pub fn flags(mut self, flags: Flags) -> Self {
        self.config.flags = flags;
        self
    }

    pub fn browser(mut self, enabled: bool) -> Self {
        self.config.flags.browser = enabled;
        self
    }

    pub fn os(mut self, enabled: bool) -> Self {
        self.config.flags.os = enabled;
        self
    }

    pub fn device(mut self, enabled: bool) -> Self {
        self.config.flags.device = enabled;
        self
    }

    pub fn format(mut self, format: DatasetFormat) -> Self {
        self.config.format = Some(format);
        self
    }

    pub fn version_extraction(mut self, mode: VersionExtraction) -> Self {
        self.config.version_extraction = mode;
        self
    }

    pub fn build(self) -> UdgerConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UdgerConfig::new("db.json");
        assert_eq!(config.flags, Flags::all());
        assert_eq!(config.format, None);
        assert_eq!(config.version_extraction, VersionExtraction::Disabled);
        assert_eq!(config.resolved_format(), DatasetFormat::Json);
    }

    #[test]
    fn test_builder() {
        let config = UdgerConfig::builder("db.bin")
            .os(false)
            .format(DatasetFormat::MessagePack)
            .version_extraction(VersionExtraction::CaptureGroup)
            .build();

        assert_eq!(config.flags, Flags::all().with_os(false));
        assert_eq!(config.resolved_format(), DatasetFormat::MessagePack);
        assert_eq!(config.dataset_path(), Path::new("db.bin"));
    }
}
