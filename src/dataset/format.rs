//! 数据集文件格式

use std::path::Path;

use serde::{Deserialize, Serialize};

/// 数据集编码格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetFormat {
    /// JSON 文档
    Json,
    /// MessagePack 文档（体积更小，解码更快）
    MessagePack,
}

impl DatasetFormat {
    /// 按扩展名推断：.mp / .msgpack → MessagePack，其余 → JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("mp") | Some("msgpack") => DatasetFormat::MessagePack,
            _ => DatasetFormat::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(DatasetFormat::from_path(Path::new("udger.json")), DatasetFormat::Json);
        assert_eq!(DatasetFormat::from_path(Path::new("udger.mp")), DatasetFormat::MessagePack);
        assert_eq!(DatasetFormat::from_path(Path::new("UDGER.MSGPACK")), DatasetFormat::MessagePack);
        assert_eq!(DatasetFormat::from_path(Path::new("udgerdb_v3.dat")), DatasetFormat::Json);
        assert_eq!(DatasetFormat::from_path(Path::new("noext")), DatasetFormat::Json);
    }
}
