use serde::{Deserialize, Serialize};

use crate::core::{ClientClass, Device};

/// 设备兜底描述
/// 设备模式未命中（或命中的标识符不在目录中）时，按浏览器分类类型推断
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceFallback {
    Smartphone,
    Other,
    PersonalComputer,
}

impl DeviceFallback {
    /// 兜底策略：移动浏览器 → 智能手机；库/多媒体/游戏机/订阅阅读器 → 其他；其余 → 个人电脑
    pub fn for_class(class: ClientClass) -> Self {
        match class {
            ClientClass::MobileBrowser => DeviceFallback::Smartphone,
            ClientClass::Library
            | ClientClass::MultimediaPlayer
            | ClientClass::GameConsole
            | ClientClass::FeedReader => DeviceFallback::Other,
            ClientClass::Unknown | ClientClass::Browser | ClientClass::Other(_) => {
                DeviceFallback::PersonalComputer
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DeviceFallback::Smartphone => "Smartphone",
            DeviceFallback::Other => "Other",
            DeviceFallback::PersonalComputer => "Personal computer",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            DeviceFallback::Smartphone => "phone.png",
            DeviceFallback::Other => "other.png",
            DeviceFallback::PersonalComputer => "desktop.png",
        }
    }

    pub fn to_device(self) -> Device {
        Device {
            name: self.name().to_string(),
            icon: self.icon().to_string(),
        }
    }
}
