//! 全局分类器单例管理
//! 只读单例，初始化后可在任意线程并发调用 classify
use once_cell::sync::Lazy;
use tokio::sync::OnceCell;

use super::udger::Udger;
use crate::config::UdgerConfig;
use crate::error::{UdgerError, UdgerResult};

/// 全局分类器实例
static GLOBAL_UDGER: Lazy<OnceCell<Udger>> = Lazy::new(OnceCell::new);

/// 初始化全局分类器
/// 已初始化时直接返回已有实例，不会重新加载数据集（即使配置不同）
pub async fn init_global_udger(config: UdgerConfig) -> UdgerResult<&'static Udger> {
    GLOBAL_UDGER
        .get_or_try_init(|| Udger::new_async(config))
        .await
}

/// 获取全局分类器
pub fn global_udger() -> UdgerResult<&'static Udger> {
    GLOBAL_UDGER.get().ok_or_else(|| {
        UdgerError::DetectorNotInitialized("请先调用 init_global_udger".to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::loader::tests::{sample_dataset, write_dataset};
    use crate::dataset::DatasetFormat;

    // 全局状态只在这一个测试里触碰，避免测试间相互干扰
    #[tokio::test]
    async fn test_global_lifecycle() {
        assert!(matches!(
            global_udger(),
            Err(UdgerError::DetectorNotInitialized(_))
        ));

        // 失败的初始化不会占用单例
        let missing = UdgerConfig::new("/nonexistent/udgerdb_v3.json");
        assert!(init_global_udger(missing).await.is_err());
        assert!(global_udger().is_err());

        let file = write_dataset(&sample_dataset(), ".json", DatasetFormat::Json);
        let first = init_global_udger(UdgerConfig::new(file.path())).await.unwrap();
        assert_eq!(first.classify("Opera/9.50").browser.family, "Opera");

        // 二次初始化为空操作
        let other = UdgerConfig::builder(file.path()).browser(false).build();
        let second = init_global_udger(other).await.unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(second.flags().browser);

        assert!(std::ptr::eq(global_udger().unwrap(), first));
    }
}
