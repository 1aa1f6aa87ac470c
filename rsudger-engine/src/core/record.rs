//! 数据集行记录（加载器输出契约）
//! 字段名与参考数据集的表结构一致，缺失的文本列按空串处理

use serde::{Deserialize, Serialize};

use super::PatternId;

/// 模式表行（udger_client_regex / udger_os_regex / udger_deviceclass_regex）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternRecord {
    /// 三张模式表的外键列名各不相同
    #[serde(alias = "client_id", alias = "os_id", alias = "deviceclass_id")]
    pub id: PatternId,
    pub regstring: String,
    /// 匹配优先级，升序尝试
    #[serde(default)]
    pub sequence: i64,
    /// 可选版本模板（仅在开启版本提取时生效，默认 `\1`）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version_template: Option<String>,
}

impl PatternRecord {
    pub fn new(id: PatternId, sequence: i64, regstring: impl Into<String>) -> Self {
        Self {
            id,
            regstring: regstring.into(),
            sequence,
            version_template: None,
        }
    }
}

/// 浏览器表行（udger_client_list）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserRecord {
    pub id: PatternId,
    #[serde(default)]
    pub class_id: u32,
    /// 浏览器家族名
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub engine: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub icon: String,
}

/// 浏览器分类表行（udger_client_class）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    pub id: u32,
    #[serde(default)]
    pub client_classification: String,
}

/// 浏览器→操作系统关联表行（udger_client_os_relation）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
    pub client_id: PatternId,
    pub os_id: PatternId,
}

/// 操作系统表行（udger_os_list）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsRecord {
    pub id: PatternId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub family: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub icon: String,
}

/// 设备类型表行（udger_deviceclass_list）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub id: PatternId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub icon: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_record_aliases() {
        let browser: PatternRecord =
            serde_json::from_str(r#"{"client_id":42,"regstring":"/opera/si","sequence":1}"#).unwrap();
        let os: PatternRecord =
            serde_json::from_str(r#"{"os_id":7,"regstring":"nintendo dsi","sequence":3}"#).unwrap();
        let device: PatternRecord =
            serde_json::from_str(r#"{"deviceclass_id":2,"regstring":"ipad"}"#).unwrap();

        assert_eq!(browser.id, 42);
        assert_eq!(os.id, 7);
        assert_eq!(device.id, 2);
        assert_eq!(device.sequence, 0);
        assert_eq!(device.version_template, None);
    }

    #[test]
    fn test_missing_text_columns_default_to_empty() {
        let rec: BrowserRecord = serde_json::from_str(r#"{"id":1}"#).unwrap();
        assert_eq!(rec.class_id, 0);
        assert!(rec.name.is_empty() && rec.icon.is_empty());
    }
}
