//! 数据集模块：数据集文档的读取、解码，以及到内核结构的构建
pub mod format;
pub mod model;
pub mod loader;

// 导出核心接口
pub use self::format::DatasetFormat;
pub use self::model::{DatasetDocument, Table};
pub use self::loader::{DatasetLoader, LoadedDataset};
