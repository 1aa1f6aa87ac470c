mod enums;
mod entity;
mod flags;
mod record;

// 导出常用项
pub use enums::{Category, ClientClass};
pub use entity::{Browser, Device, Os};
pub use flags::Flags;
pub use record::{
    BrowserRecord, ClassRecord, DeviceRecord, OsRecord, PatternRecord, RelationRecord,
};

/// 数据集中实体/模式的标识符
pub type PatternId = u32;
