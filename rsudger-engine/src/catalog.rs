//! 实体目录：标识符 → 实体的只读查找表
//! 通过 CatalogBuilder 一次性填充，build() 之后冻结，不再插入/修改/删除

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::core::{
    Browser, BrowserRecord, ClassRecord, Device, DeviceRecord, Os, OsRecord, PatternId,
    RelationRecord,
};

/// 实体目录（冻结后只读，可在多线程间无锁共享）
#[derive(Debug, Clone, Default)]
pub struct EntityCatalog {
    browsers: FxHashMap<PatternId, Browser>,
    os: FxHashMap<PatternId, Os>,
    devices: FxHashMap<PatternId, Device>,
    /// 分类ID → 分类标签
    class_labels: FxHashMap<u32, String>,
    /// 浏览器ID → 操作系统ID（至多一个）
    browser_os: FxHashMap<PatternId, PatternId>,
}

/// 目录规模统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub browsers: usize,
    pub os: usize,
    pub devices: usize,
    pub class_labels: usize,
    pub browser_os_relations: usize,
}

impl EntityCatalog {
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    #[inline]
    pub fn browser(&self, id: PatternId) -> Option<&Browser> {
        self.browsers.get(&id)
    }

    #[inline]
    pub fn os(&self, id: PatternId) -> Option<&Os> {
        self.os.get(&id)
    }

    #[inline]
    pub fn device(&self, id: PatternId) -> Option<&Device> {
        self.devices.get(&id)
    }

    /// 分类标签（未知分类返回空串）
    #[inline]
    pub fn class_label(&self, class_id: u32) -> &str {
        self.class_labels.get(&class_id).map_or("", String::as_str)
    }

    /// 浏览器绑定的操作系统ID
    #[inline]
    pub fn related_os(&self, browser_id: PatternId) -> Option<PatternId> {
        self.browser_os.get(&browser_id).copied()
    }

    /// 遍历全部 浏览器ID → 操作系统ID 关联
    pub fn relations(&self) -> impl Iterator<Item = (PatternId, PatternId)> + '_ {
        self.browser_os.iter().map(|(b, o)| (*b, *o))
    }

    /// 查找浏览器，缺失时返回零值实体
    pub fn browser_or_default(&self, id: Option<PatternId>) -> Browser {
        id.and_then(|id| self.browser(id)).cloned().unwrap_or_default()
    }

    /// 查找操作系统，缺失时返回零值实体
    pub fn os_or_default(&self, id: Option<PatternId>) -> Os {
        id.and_then(|id| self.os(id)).cloned().unwrap_or_default()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            browsers: self.browsers.len(),
            os: self.os.len(),
            devices: self.devices.len(),
            class_labels: self.class_labels.len(),
            browser_os_relations: self.browser_os.len(),
        }
    }
}

/// 目录构建器（单写者，填充完成后 build 冻结）
/// 同一标识符重复插入时后者覆盖前者
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    inner: EntityCatalog,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn browsers<I: IntoIterator<Item = BrowserRecord>>(mut self, records: I) -> Self {
        self.inner
            .browsers
            .extend(records.into_iter().map(|r| (r.id, Browser::from(r))));
        self
    }

    pub fn os<I: IntoIterator<Item = OsRecord>>(mut self, records: I) -> Self {
        self.inner
            .os
            .extend(records.into_iter().map(|r| (r.id, Os::from(r))));
        self
    }

    pub fn devices<I: IntoIterator<Item = DeviceRecord>>(mut self, records: I) -> Self {
        self.inner
            .devices
            .extend(records.into_iter().map(|r| (r.id, Device::from(r))));
        self
    }

    pub fn class_labels<I: IntoIterator<Item = ClassRecord>>(mut self, records: I) -> Self {
        self.inner
            .class_labels
            .extend(records.into_iter().map(|r| (r.id, r.client_classification)));
        self
    }

    pub fn relations<I: IntoIterator<Item = RelationRecord>>(mut self, records: I) -> Self {
        self.inner
            .browser_os
            .extend(records.into_iter().map(|r| (r.client_id, r.os_id)));
        self
    }

    /// 单条插入（测试/合成数据集用）
    pub fn insert_browser(mut self, id: PatternId, browser: Browser) -> Self {
        self.inner.browsers.insert(id, browser);
        self
    }

    pub fn insert_os(mut self, id: PatternId, os: Os) -> Self {
        self.inner.os.insert(id, os);
        self
    }

    pub fn insert_device(mut self, id: PatternId, device: Device) -> Self {
        self.inner.devices.insert(id, device);
        self
    }

    pub fn insert_class_label(mut self, class_id: u32, label: impl Into<String>) -> Self {
        self.inner.class_labels.insert(class_id, label.into());
        self
    }

    pub fn insert_relation(mut self, browser_id: PatternId, os_id: PatternId) -> Self {
        self.inner.browser_os.insert(browser_id, os_id);
        self
    }

    /// 冻结为只读目录
    pub fn build(self) -> EntityCatalog {
        self.inner
    }
}
