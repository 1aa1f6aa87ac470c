use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// 分类维度枚举，每个维度各自拥有一个模式集
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Category {
    Browser,
    Os,
    Device,
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Browser => write!(f, "browser"),
            Category::Os => write!(f, "os"),
            Category::Device => write!(f, "device"),
        }
    }
}

/// 浏览器分类类型（数据集 class_id 的具名形式）
///
/// 仅列出设备兜底策略关心的编码，其余编码原样保留在 `Other` 中。
/// `Unknown` 表示未计算（浏览器开关关闭或未命中任何浏览器）。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ClientClass {
    #[default]
    Unknown,
    Browser,
    MobileBrowser,
    Library,
    MultimediaPlayer,
    GameConsole,
    FeedReader,
    Other(u32),
}

impl ClientClass {
    pub const BROWSER_ID: u32 = 1;
    pub const MOBILE_BROWSER_ID: u32 = 3;
    pub const LIBRARY_ID: u32 = 5;
    pub const MULTIMEDIA_PLAYER_ID: u32 = 10;
    pub const GAME_CONSOLE_ID: u32 = 20;
    pub const FEED_READER_ID: u32 = 50;

    /// 从数据集中的 class_id 还原；0 视为未知
    pub fn from_id(id: u32) -> Self {
        match id {
            0 => ClientClass::Unknown,
            Self::BROWSER_ID => ClientClass::Browser,
            Self::MOBILE_BROWSER_ID => ClientClass::MobileBrowser,
            Self::LIBRARY_ID => ClientClass::Library,
            Self::MULTIMEDIA_PLAYER_ID => ClientClass::MultimediaPlayer,
            Self::GAME_CONSOLE_ID => ClientClass::GameConsole,
            Self::FEED_READER_ID => ClientClass::FeedReader,
            other => ClientClass::Other(other),
        }
    }

    /// 还原为数据集编码
    pub fn id(&self) -> u32 {
        match self {
            ClientClass::Unknown => 0,
            ClientClass::Browser => Self::BROWSER_ID,
            ClientClass::MobileBrowser => Self::MOBILE_BROWSER_ID,
            ClientClass::Library => Self::LIBRARY_ID,
            ClientClass::MultimediaPlayer => Self::MULTIMEDIA_PLAYER_ID,
            ClientClass::GameConsole => Self::GAME_CONSOLE_ID,
            ClientClass::FeedReader => Self::FEED_READER_ID,
            ClientClass::Other(id) => *id,
        }
    }
}

impl From<u32> for ClientClass {
    fn from(id: u32) -> Self {
        ClientClass::from_id(id)
    }
}
