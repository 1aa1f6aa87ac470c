//! 数据集加载器
//! 读取数据集文档 → 按开启的维度解码各表 → 编译模式集 + 冻结实体目录
//! 文件句柄只在读取阶段持有，任何失败都不会返回部分数据

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use std::time::Instant;

use rsudger_engine::{
    BrowserRecord, CatalogBuilder, Category, ClassRecord, ClassificationEngine, DeviceRecord,
    EntityCatalog, Flags, OsRecord, PatternRecord, PatternSet, RelationRecord, VersionExtraction,
};
use tracing::{debug, warn};

use super::format::DatasetFormat;
use super::model::{DatasetDocument, Table};
use crate::config::UdgerConfig;
use crate::error::{UdgerError, UdgerResult};

/// 加载完成的数据（模式集 + 目录），可直接组装为分类引擎
#[derive(Debug, Clone)]
pub struct LoadedDataset {
    pub flags: Flags,
    pub browsers: PatternSet,
    pub os: PatternSet,
    pub devices: PatternSet,
    pub catalog: EntityCatalog,
}

impl LoadedDataset {
    pub fn into_engine(self, version_extraction: VersionExtraction) -> ClassificationEngine {
        ClassificationEngine::new(self.flags, self.browsers, self.os, self.devices, self.catalog)
            .with_version_extraction(version_extraction)
    }
}

/// 数据集加载器
pub struct DatasetLoader;

impl DatasetLoader {
    /// 同步加载
    pub fn load(config: &UdgerConfig) -> UdgerResult<LoadedDataset> {
        let bytes = Self::read_dataset(config.dataset_path())?;
        Self::load_from_bytes(&bytes, config.resolved_format(), config.flags)
    }

    /// 异步加载：tokio 读取文件，解码与正则编译放到阻塞线程池执行
    pub async fn load_async(config: &UdgerConfig) -> UdgerResult<LoadedDataset> {
        let path = config.dataset_path().to_path_buf();
        let bytes = tokio::fs::read(&path)
            .await
            .map_err(|e| UdgerError::unavailable(&path, e))?;

        let format = config.resolved_format();
        let flags = config.flags;
        tokio::task::spawn_blocking(move || Self::load_from_bytes(&bytes, format, flags))
            .await
            .map_err(|e| UdgerError::AsyncTaskError(format!("数据集加载任务异常退出：{}", e)))?
    }

    /// 读取数据集原始字节（句柄在函数返回时释放）
    fn read_dataset(path: &Path) -> UdgerResult<Vec<u8>> {
        let meta = fs::metadata(path).map_err(|e| UdgerError::unavailable(path, e))?;
        if !meta.is_file() {
            return Err(UdgerError::unavailable(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }

        let mut file = File::open(path).map_err(|e| UdgerError::unavailable(path, e))?;
        let mut bytes = Vec::with_capacity(meta.len() as usize);
        file.read_to_end(&mut bytes)
            .map_err(|e| UdgerError::unavailable(path, e))?;

        debug!("数据集读取完成：{}，大小：{} 字节", path.display(), bytes.len());
        Ok(bytes)
    }

    /// 从内存字节加载
    pub fn load_from_bytes(
        bytes: &[u8],
        format: DatasetFormat,
        flags: Flags,
    ) -> UdgerResult<LoadedDataset> {
        let document = DatasetDocument::decode(bytes, format)?;
        Self::load_document(document, flags)
    }

    /// 从已解码文档加载；关闭的维度对应的表不会被解码
    pub fn load_document(mut doc: DatasetDocument, flags: Flags) -> UdgerResult<LoadedDataset> {
        let start = Instant::now();
        let mut catalog = EntityCatalog::builder();

        let browsers = if flags.browser {
            let (set, builder) = Self::load_browsers(&mut doc, catalog)?;
            catalog = builder;
            set
        } else {
            PatternSet::empty(Category::Browser)
        };

        let devices = if flags.device {
            let patterns: Vec<PatternRecord> = doc.take_table(Table::DeviceClassRegex)?;
            let list: Vec<DeviceRecord> = doc.take_table(Table::DeviceClassList)?;
            debug!("设备表解码完成：模式{}条、设备类型{}条", patterns.len(), list.len());
            catalog = catalog.devices(list);
            PatternSet::compile(Category::Device, patterns)?
        } else {
            PatternSet::empty(Category::Device)
        };

        let os = if flags.os {
            let patterns: Vec<PatternRecord> = doc.take_table(Table::OsRegex)?;
            let list: Vec<OsRecord> = doc.take_table(Table::OsList)?;
            debug!("操作系统表解码完成：模式{}条、系统{}条", patterns.len(), list.len());
            catalog = catalog.os(list);
            PatternSet::compile(Category::Os, patterns)?
        } else {
            PatternSet::empty(Category::Os)
        };

        let catalog = catalog.build();
        if flags.browser && flags.os {
            Self::check_relations(&catalog);
        }

        debug!(
            "数据集加载完成，总耗时{:?}，统计：{:?}",
            start.elapsed(),
            catalog.stats()
        );

        Ok(LoadedDataset {
            flags,
            browsers,
            os,
            devices,
            catalog,
        })
    }

    /// 浏览器维度：模式表 → 浏览器表 → 分类表 → 关联表
    fn load_browsers(
        doc: &mut DatasetDocument,
        catalog: CatalogBuilder,
    ) -> UdgerResult<(PatternSet, CatalogBuilder)> {
        let patterns: Vec<PatternRecord> = doc.take_table(Table::ClientRegex)?;
        let list: Vec<BrowserRecord> = doc.take_table(Table::ClientList)?;
        let classes: Vec<ClassRecord> = doc.take_table(Table::ClientClass)?;
        let relations: Vec<RelationRecord> = doc.take_table(Table::ClientOsRelation)?;
        debug!(
            "浏览器表解码完成：模式{}条、浏览器{}条、分类{}条、OS关联{}条",
            patterns.len(),
            list.len(),
            classes.len(),
            relations.len()
        );

        let set = PatternSet::compile(Category::Browser, patterns)?;
        let catalog = catalog
            .browsers(list)
            .class_labels(classes)
            .relations(relations);
        Ok((set, catalog))
    }

    /// 关联表指向不存在的操作系统时仅告警（分类期会降级为零值 OS）
    fn check_relations(catalog: &EntityCatalog) {
        let dangling = catalog
            .relations()
            .filter(|(_, os_id)| catalog.os(*os_id).is_none())
            .count();
        if dangling > 0 {
            warn!("浏览器-操作系统关联中有{}条指向不存在的操作系统", dangling);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rsudger_engine::ClientClass;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// 测试用最小数据集（JSON）
    pub(crate) fn sample_dataset() -> serde_json::Value {
        json!({
            "udger_client_regex": [
                // 故意乱序，验证按 sequence 排序
                {"client_id": 50, "regstring": "/firefox\\/([0-9.]+)/si", "sequence": 20},
                {"client_id": 42, "regstring": "/opera/si", "sequence": 1},
                {"client_id": 60, "regstring": "/vlc/si", "sequence": 30}
            ],
            "udger_client_list": [
                {"id": 42, "class_id": 3, "name": "Opera", "engine": "Presto", "vendor": "Opera Software ASA.", "icon": "opera.png"},
                {"id": 50, "class_id": 1, "name": "Firefox", "engine": "Gecko", "vendor": "Mozilla Foundation", "icon": "firefox.png"},
                {"id": 60, "class_id": 10, "name": "VLC", "engine": "", "vendor": "VideoLAN", "icon": "vlc.png"}
            ],
            "udger_client_class": [
                {"id": 1, "client_classification": "Browser"},
                {"id": 3, "client_classification": "Mobile browser"},
                {"id": 10, "client_classification": "Multimedia player"}
            ],
            "udger_client_os_relation": [
                {"client_id": 42, "os_id": 7}
            ],
            "udger_os_regex": [
                {"os_id": 8, "regstring": "/en-US/si", "sequence": 1},
                {"os_id": 9, "regstring": "/linux/si", "sequence": 2}
            ],
            "udger_os_list": [
                {"id": 7, "name": "Nintendo DSi", "family": "Nintendo", "vendor": "Nintendo", "icon": "nintendo.png"},
                {"id": 8, "name": "Some en-US OS", "family": "Other", "vendor": "", "icon": "other.png"},
                {"id": 9, "name": "Linux", "family": "Linux", "vendor": "Linux Foundation", "icon": "linux.png"}
            ],
            "udger_deviceclass_regex": [
                {"deviceclass_id": 2, "regstring": "/ipad/si", "sequence": 1}
            ],
            "udger_deviceclass_list": [
                {"id": 1, "name": "Desktop", "icon": "desktop.png"},
                {"id": 2, "name": "Tablet", "icon": "tablet.png"}
            ]
        })
    }

    pub(crate) fn write_dataset(value: &serde_json::Value, suffix: &str, format: DatasetFormat) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        let bytes = match format {
            DatasetFormat::Json => serde_json::to_vec(value).unwrap(),
            DatasetFormat::MessagePack => rmp_serde::to_vec(value).unwrap(),
        };
        file.write_all(&bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_full_dataset() {
        let file = write_dataset(&sample_dataset(), ".json", DatasetFormat::Json);
        let loaded = DatasetLoader::load(&UdgerConfig::new(file.path())).unwrap();

        let ids: Vec<_> = loaded.browsers.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![42, 50, 60]);
        assert_eq!(loaded.os.len(), 2);
        assert_eq!(loaded.devices.len(), 1);

        let stats = loaded.catalog.stats();
        assert_eq!(stats.browsers, 3);
        assert_eq!(stats.os, 3);
        assert_eq!(stats.devices, 2);
        assert_eq!(stats.class_labels, 3);
        assert_eq!(stats.browser_os_relations, 1);
        assert_eq!(loaded.catalog.browser(42).unwrap().class(), ClientClass::MobileBrowser);
    }

    #[test]
    fn test_load_messagepack_dataset() {
        let file = write_dataset(&sample_dataset(), ".mp", DatasetFormat::MessagePack);
        let loaded = DatasetLoader::load(&UdgerConfig::new(file.path())).unwrap();
        assert_eq!(loaded.browsers.len(), 3);
        assert_eq!(loaded.catalog.os(7).unwrap().name, "Nintendo DSi");
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let config = UdgerConfig::new(dir.path().join("does-not-exist.json"));
        assert!(matches!(
            DatasetLoader::load(&config),
            Err(UdgerError::DatasetUnavailable { .. })
        ));

        // 目录不是可读数据
        let config = UdgerConfig::new(dir.path());
        assert!(matches!(
            DatasetLoader::load(&config),
            Err(UdgerError::DatasetUnavailable { .. })
        ));
    }

    #[test]
    fn test_bad_pattern_is_corrupt() {
        let mut dataset = sample_dataset();
        dataset["udger_os_regex"][1]["regstring"] = json!("/lin(ux/si");
        let file = write_dataset(&dataset, ".json", DatasetFormat::Json);

        let err = DatasetLoader::load(&UdgerConfig::new(file.path())).unwrap_err();
        assert!(matches!(err, UdgerError::DatasetCorrupt(ref msg) if msg.contains("lin(ux")));
    }

    #[test]
    fn test_bad_document_is_corrupt() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        assert!(matches!(
            DatasetLoader::load(&UdgerConfig::new(file.path())),
            Err(UdgerError::DatasetCorrupt(_))
        ));
    }

    #[test]
    fn test_disabled_category_tables_are_not_read() {
        let mut dataset = sample_dataset();
        let obj = dataset.as_object_mut().unwrap();
        obj.remove("udger_os_regex");
        obj.remove("udger_os_list");
        // OS 表缺失，但 OS 维度关闭时依然可以加载
        let file = write_dataset(&dataset, ".json", DatasetFormat::Json);

        let config = UdgerConfig::builder(file.path()).os(false).build();
        let loaded = DatasetLoader::load(&config).unwrap();
        assert!(loaded.os.is_empty());
        assert_eq!(loaded.catalog.stats().os, 0);

        // 开启 OS 维度则缺表即损坏
        let err = DatasetLoader::load(&UdgerConfig::new(file.path())).unwrap_err();
        assert!(matches!(err, UdgerError::DatasetCorrupt(ref msg) if msg.contains("udger_os_regex")));
    }

    #[test]
    fn test_bad_row_in_disabled_category_is_ignored() {
        let mut dataset = sample_dataset();
        dataset["udger_deviceclass_list"] = json!([{"id": "not-a-number"}]);
        let file = write_dataset(&dataset, ".json", DatasetFormat::Json);

        let config = UdgerConfig::builder(file.path()).device(false).build();
        assert!(DatasetLoader::load(&config).is_ok());
        assert!(matches!(
            DatasetLoader::load(&UdgerConfig::new(file.path())),
            Err(UdgerError::DatasetCorrupt(_))
        ));
    }

    #[tokio::test]
    async fn test_load_async() {
        let file = write_dataset(&sample_dataset(), ".json", DatasetFormat::Json);
        let loaded = DatasetLoader::load_async(&UdgerConfig::new(file.path())).await.unwrap();
        assert_eq!(loaded.browsers.len(), 3);

        let missing = UdgerConfig::new(file.path().with_extension("missing"));
        assert!(matches!(
            DatasetLoader::load_async(&missing).await,
            Err(UdgerError::DatasetUnavailable { .. })
        ));
    }
}
