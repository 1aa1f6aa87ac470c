//! 数据集文档模型
//! 顶层为 表名 → 行数组 的映射，表结构与参考数据集一致

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::format::DatasetFormat;
use crate::error::{UdgerError, UdgerResult};

/// 数据集中的表
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    ClientRegex,
    ClientList,
    ClientClass,
    ClientOsRelation,
    OsRegex,
    OsList,
    DeviceClassRegex,
    DeviceClassList,
}

impl Table {
    pub const ALL: [Table; 8] = [
        Table::ClientRegex,
        Table::ClientList,
        Table::ClientClass,
        Table::ClientOsRelation,
        Table::OsRegex,
        Table::OsList,
        Table::DeviceClassRegex,
        Table::DeviceClassList,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Table::ClientRegex => "udger_client_regex",
            Table::ClientList => "udger_client_list",
            Table::ClientClass => "udger_client_class",
            Table::ClientOsRelation => "udger_client_os_relation",
            Table::OsRegex => "udger_os_regex",
            Table::OsList => "udger_os_list",
            Table::DeviceClassRegex => "udger_deviceclass_regex",
            Table::DeviceClassList => "udger_deviceclass_list",
        }
    }
}

impl Display for Table {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// 已解码的数据集文档（表内容按需惰性解码）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetDocument {
    tables: BTreeMap<String, Value>,
}

impl DatasetDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从原始字节解码文档外层结构
    pub fn decode(bytes: &[u8], format: DatasetFormat) -> UdgerResult<Self> {
        let tables: BTreeMap<String, Value> = match format {
            DatasetFormat::Json => serde_json::from_slice(bytes)
                .map_err(|e| UdgerError::corrupt("document", e))?,
            DatasetFormat::MessagePack => rmp_serde::from_slice(bytes)
                .map_err(|e| UdgerError::corrupt("document", e))?,
        };
        Ok(Self { tables })
    }

    /// 编码为指定格式（用于导出/转换数据集）
    pub fn encode(&self, format: DatasetFormat) -> UdgerResult<Vec<u8>> {
        match format {
            DatasetFormat::Json => serde_json::to_vec(&self.tables)
                .map_err(|e| UdgerError::corrupt("document", e)),
            DatasetFormat::MessagePack => rmp_serde::to_vec(&self.tables)
                .map_err(|e| UdgerError::corrupt("document", e)),
        }
    }

    /// 写入一张表
    pub fn insert_table<T: Serialize>(&mut self, table: Table, rows: &[T]) -> UdgerResult<()> {
        let value = serde_json::to_value(rows).map_err(|e| UdgerError::corrupt(table.name(), e))?;
        self.tables.insert(table.name().to_string(), value);
        Ok(())
    }

    pub fn contains(&self, table: Table) -> bool {
        self.tables.contains_key(table.name())
    }

    /// 取出并解码一张表；缺表或任意一行结构不符都视为数据集损坏
    pub fn take_table<T: DeserializeOwned>(&mut self, table: Table) -> UdgerResult<Vec<T>> {
        let value = self
            .tables
            .remove(table.name())
            .ok_or_else(|| UdgerError::corrupt(table.name(), "table missing"))?;
        serde_json::from_value(value).map_err(|e| UdgerError::corrupt(table.name(), e))
    }
}
