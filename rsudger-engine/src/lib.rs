//! rsudger-engine 内核：模式集编译 + 实体目录 + 有序匹配分类
//! 仅包含纯内存数据结构与算法，不做任何 IO，数据由上层加载器注入

// 内核错误定义
pub mod error;
// 核心公共结构体+枚举（记录、实体、分类、开关）
pub mod core;
// 模式清洗+编译+有序模式集
pub mod indexer;
// 实体目录（只读查找表）
pub mod catalog;
// 分类引擎：有序匹配 + OS 关联捷径 + 设备兜底
pub mod classifier;

// 顶层导出常用类型
pub use crate::core::{
    Browser, BrowserRecord, Category, ClassRecord, ClientClass, Device, DeviceRecord, Flags, Os,
    OsRecord, PatternId, PatternRecord, RelationRecord,
};
pub use catalog::{CatalogBuilder, CatalogStats, EntityCatalog};
pub use classifier::{
    find_first_match, find_first_match_with_version, BrowserInfo, ClassificationEngine,
    DeviceFallback, DeviceInfo, Info, MatchHit, OsInfo, VersionExtraction,
};
pub use error::{CoreError, CoreResult};
pub use indexer::{clean_regex, Pattern, PatternSet};
