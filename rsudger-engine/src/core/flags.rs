use serde::{Deserialize, Serialize};

/// 分类维度开关，各开关相互独立
/// 关闭的维度既不加载数据也不参与分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Flags {
    pub browser: bool,
    pub os: bool,
    pub device: bool,
}

impl Default for Flags {
    fn default() -> Self {
        Self::all()
    }
}

impl Flags {
    pub const fn all() -> Self {
        Self {
            browser: true,
            os: true,
            device: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            browser: false,
            os: false,
            device: false,
        }
    }

    pub fn with_browser(mut self, enabled: bool) -> Self {
        self.browser = enabled;
        self
    }

    pub fn with_os(mut self, enabled: bool) -> Self {
        self.os = enabled;
        self
    }

    pub fn with_device(mut self, enabled: bool) -> Self {
        self.device = enabled;
        self
    }

    /// 是否至少开启了一个维度
    pub fn any(&self) -> bool {
        self.browser || self.os || self.device
    }
}
