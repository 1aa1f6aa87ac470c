use serde::{Deserialize, Serialize};

use super::enums::ClientClass;
use super::record::{BrowserRecord, DeviceRecord, OsRecord};

/// 浏览器（客户端）实体
/// class_id 为分类表外键，查找时再解析为标签
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Browser {
    pub class_id: u32,
    pub family: String,
    pub engine: String,
    pub vendor: String,
    pub icon: String,
}

impl Browser {
    /// 具名分类类型
    pub fn class(&self) -> ClientClass {
        ClientClass::from_id(self.class_id)
    }
}

impl From<BrowserRecord> for Browser {
    fn from(r: BrowserRecord) -> Self {
        Self {
            class_id: r.class_id,
            family: r.name,
            engine: r.engine,
            vendor: r.vendor,
            icon: r.icon,
        }
    }
}

/// 操作系统实体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Os {
    pub name: String,
    pub family: String,
    pub vendor: String,
    pub icon: String,
}

impl From<OsRecord> for Os {
    fn from(r: OsRecord) -> Self {
        Self {
            name: r.name,
            family: r.family,
            vendor: r.vendor,
            icon: r.icon,
        }
    }
}

/// 设备类型实体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    pub name: String,
    pub icon: String,
}

impl From<DeviceRecord> for Device {
    fn from(r: DeviceRecord) -> Self {
        Self {
            name: r.name,
            icon: r.icon,
        }
    }
}
