//! 分类器门面：加载数据集 → 构建引擎 → classify
use std::path::PathBuf;
use std::time::Instant;

use rsudger_engine::{CatalogStats, ClassificationEngine, Flags, Info};
use tracing::info;

use crate::config::UdgerConfig;
use crate::dataset::DatasetLoader;
use crate::error::{UdgerError, UdgerResult};

/// UA 分类器
///
/// 构建完成后完全只读，`Udger: Send + Sync`，多线程共享时包一层 `Arc` 即可。
/// 同一实例不支持并发构建；构建失败不会返回任何部分可用的实例。
#[derive(Debug, Clone)]
pub struct Udger {
    engine: ClassificationEngine,
}

impl Udger {
    /// 按配置同步构建
    pub fn new(config: UdgerConfig) -> UdgerResult<Self> {
        Self::validate(&config)?;
        let start = Instant::now();

        let loaded = DatasetLoader::load(&config)?;
        let udger = Self::from_parts(loaded.into_engine(config.version_extraction));

        info!(
            "分类器初始化完成：{}，耗时{:?}，统计：{:?}",
            config.dataset_path().display(),
            start.elapsed(),
            udger.stats()
        );
        Ok(udger)
    }

    /// 使用默认开关打开数据集
    pub fn open(path: impl Into<PathBuf>) -> UdgerResult<Self> {
        Self::new(UdgerConfig::new(path))
    }

    /// 按配置异步构建
    pub async fn new_async(config: UdgerConfig) -> UdgerResult<Self> {
        Self::validate(&config)?;
        let start = Instant::now();

        let loaded = DatasetLoader::load_async(&config).await?;
        let udger = Self::from_parts(loaded.into_engine(config.version_extraction));

        info!(
            "分类器异步初始化完成：{}，耗时{:?}，统计：{:?}",
            config.dataset_path().display(),
            start.elapsed(),
            udger.stats()
        );
        Ok(udger)
    }

    /// 直接包装已构建的引擎（合成数据集/测试）
    pub fn from_parts(engine: ClassificationEngine) -> Self {
        Self { engine }
    }

    fn validate(config: &UdgerConfig) -> UdgerResult<()> {
        if config.dataset_path().as_os_str().is_empty() {
            return Err(UdgerError::InvalidInput("数据集路径为空".to_string()));
        }
        Ok(())
    }

    /// 分类单条 UA（不会失败，未识别的维度为零值）
    #[inline]
    pub fn classify(&self, ua: &str) -> Info {
        self.engine.classify(ua)
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.engine.flags()
    }

    pub fn stats(&self) -> CatalogStats {
        self.engine.stats()
    }

    #[inline]
    pub fn engine(&self) -> &ClassificationEngine {
        &self.engine
    }
}
