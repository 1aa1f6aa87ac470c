use crate::{
    catalog::{CatalogStats, EntityCatalog},
    core::{Category, ClientClass, Flags},
    indexer::PatternSet,
};

use super::{
    fallback::DeviceFallback,
    info::{BrowserInfo, DeviceInfo, Info},
    matcher::{find_first_match, find_first_match_with_version, VersionExtraction},
};

/// 分类引擎
///
/// 所有模式集与目录在构建时一次性注入，之后只读：
/// `classify` 是纯函数，可在任意多线程间共享同一实例并发调用，无需加锁。
#[derive(Debug, Clone)]
pub struct ClassificationEngine {
    flags: Flags,
    version_extraction: VersionExtraction,
    browsers: PatternSet,
    os: PatternSet,
    devices: PatternSet,
    catalog: EntityCatalog,
}

impl ClassificationEngine {
    pub fn new(
        flags: Flags,
        browsers: PatternSet,
        os: PatternSet,
        devices: PatternSet,
        catalog: EntityCatalog,
    ) -> Self {
        debug_assert_eq!(browsers.category(), Category::Browser);
        debug_assert_eq!(os.category(), Category::Os);
        debug_assert_eq!(devices.category(), Category::Device);
        Self {
            flags,
            version_extraction: VersionExtraction::default(),
            browsers,
            os,
            devices,
            catalog,
        }
    }

    /// 设置浏览器版本提取模式（构建期调用）
    pub fn with_version_extraction(mut self, mode: VersionExtraction) -> Self {
        self.version_extraction = mode;
        self
    }

    #[inline]
    pub fn flags(&self) -> Flags {
        self.flags
    }

    #[inline]
    pub fn version_extraction(&self) -> VersionExtraction {
        self.version_extraction
    }

    #[inline]
    pub fn catalog(&self) -> &EntityCatalog {
        &self.catalog
    }

    /// 指定维度的模式集
    pub fn patterns(&self, category: Category) -> &PatternSet {
        match category {
            Category::Browser => &self.browsers,
            Category::Os => &self.os,
            Category::Device => &self.devices,
        }
    }

    pub fn stats(&self) -> CatalogStats {
        self.catalog.stats()
    }

    /// 分类单条 UA
    /// 各开关独立：关闭某一维度不会影响其余维度的结果
    pub fn classify(&self, ua: &str) -> Info {
        let mut info = Info::default();
        let mut class = ClientClass::Unknown;

        // 1. 浏览器
        if self.flags.browser {
            let hit = find_first_match_with_version(ua, &self.browsers, self.version_extraction);
            let (browser_id, version) = match hit {
                Some(hit) => (Some(hit.id), hit.version),
                None => (None, String::new()),
            };
            let browser = self.catalog.browser_or_default(browser_id);
            class = browser.class();
            let type_label = self.catalog.class_label(browser.class_id);
            info.browser = BrowserInfo::resolve(browser, version, type_label);
            info.browser_id = browser_id;
        }

        // 2. 操作系统：浏览器有绑定关系时直接采用，跳过 OS 模式匹配
        if self.flags.os {
            let os_id = match info.browser_id.and_then(|id| self.catalog.related_os(id)) {
                Some(related) => Some(related),
                None => find_first_match(ua, &self.os),
            };
            info.os = self.catalog.os_or_default(os_id).into();
            info.os_id = os_id;
        }

        // 3. 设备：目录命中优先，否则按浏览器分类类型兜底
        if self.flags.device {
            let device_id = find_first_match(ua, &self.devices);
            match device_id.and_then(|id| self.catalog.device(id)) {
                Some(device) => {
                    info.device = DeviceInfo::from(device.clone());
                    info.device_id = device_id;
                }
                None => {
                    info.device = DeviceFallback::for_class(class).to_device().into();
                }
            }
        }

        info
    }
}
