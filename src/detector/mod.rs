//! 检测模块：分类器门面与全局实例
pub mod global;
pub mod udger;

// 导出核心接口
pub use self::global::{global_udger, init_global_udger};
pub use self::udger::Udger;
