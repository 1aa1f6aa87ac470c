//! rsudger - 基于 Udger 参考数据集的 UA 分类工具（浏览器 / 操作系统 / 设备类型）

// 导出全局错误类型
pub use self::error::{UdgerError, UdgerResult};

// 导出配置模块
pub use self::config::{UdgerConfig, UdgerConfigBuilder, DEFAULT_DATASET_PATH};

// 导出数据集模块核心接口
pub use self::dataset::{DatasetDocument, DatasetFormat, DatasetLoader, LoadedDataset, Table};

// 导出检测模块核心接口
pub use self::detector::{global_udger, init_global_udger, Udger};

// 导出内核常用类型
pub use rsudger_engine::{
    BrowserInfo, CatalogStats, Category, ClassificationEngine, ClientClass, DeviceFallback,
    DeviceInfo, EntityCatalog, Flags, Info, OsInfo, VersionExtraction,
};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod dataset;
pub mod detector;
