//! 分类结果模型
//! 未开启/未命中的维度保持零值，结果对象本身总是完整的

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Browser, Device, Os, PatternId};

/// 浏览器结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserInfo {
    /// family + " " + version（family 为空时为空）
    pub name: String,
    pub version: String,
    pub family: String,
    pub engine: String,
    pub vendor: String,
    pub icon: String,
    /// 分类标签，如 "Mobile browser"
    #[serde(rename = "type")]
    pub type_label: String,
    /// 原始分类编码（设备兜底依据）
    #[serde(skip_serializing_if = "is_zero", default)]
    pub class_id: u32,
}

impl BrowserInfo {
    pub(crate) fn resolve(browser: Browser, version: String, type_label: &str) -> Self {
        let name = if browser.family.is_empty() {
            String::new()
        } else {
            format!("{} {}", browser.family, version)
        };
        Self {
            name,
            version,
            family: browser.family,
            engine: browser.engine,
            vendor: browser.vendor,
            icon: browser.icon,
            type_label: type_label.to_string(),
            class_id: browser.class_id,
        }
    }
}

/// 操作系统结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsInfo {
    pub name: String,
    pub family: String,
    pub vendor: String,
    pub icon: String,
}

impl From<Os> for OsInfo {
    fn from(os: Os) -> Self {
        Self {
            name: os.name,
            family: os.family,
            vendor: os.vendor,
            icon: os.icon,
        }
    }
}

/// 设备类型结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub name: String,
    pub icon: String,
}

impl From<Device> for DeviceInfo {
    fn from(device: Device) -> Self {
        Self {
            name: device.name,
            icon: device.icon,
        }
    }
}

/// 单条 UA 的完整分类结果
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Info {
    pub browser: BrowserInfo,
    pub os: OsInfo,
    pub device: DeviceInfo,
    /// 命中的浏览器标识符
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub browser_id: Option<PatternId>,
    /// 解析出的操作系统标识符（关联捷径或模式匹配）
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub os_id: Option<PatternId>,
    /// 命中的设备标识符（兜底时为 None）
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub device_id: Option<PatternId>,
}

fn is_zero(v: &u32) -> bool {
    *v == 0
}

// ======== Display（用于 CLI / 日志输出） ========
impl fmt::Display for Info {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let or_unknown = |s: &str| match s.trim() {
            "" => "unknown".to_string(),
            s => s.to_string(),
        };
        write!(
            f,
            "{} / {} / {}",
            or_unknown(&self.browser.name),
            or_unknown(&self.os.name),
            or_unknown(&self.device.name)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browser_name_requires_family() {
        let info = BrowserInfo::resolve(Browser::default(), "1.0".into(), "");
        assert_eq!(info.name, "");
        assert_eq!(info.version, "1.0");

        let opera = Browser {
            family: "Opera".into(),
            ..Default::default()
        };
        assert_eq!(BrowserInfo::resolve(opera.clone(), "9.50".into(), "").name, "Opera 9.50");
        assert_eq!(BrowserInfo::resolve(opera, String::new(), "").name, "Opera ");
    }

    #[test]
    fn test_display() {
        let mut info = Info::default();
        assert_eq!(info.to_string(), "unknown / unknown / unknown");
        info.browser.name = "Opera ".into();
        info.device.name = "Smartphone".into();
        assert_eq!(info.to_string(), "Opera / unknown / Smartphone");
    }

    #[test]
    fn test_serialize_type_label() {
        let info = BrowserInfo {
            type_label: "Mobile browser".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&info).unwrap();
        assert_eq!(json["type"], "Mobile browser");
        assert!(json.get("class_id").is_none());
    }
}
