//! 全局错误类型定义
use std::{io::Error as IoError, path::PathBuf};

use rsudger_engine::CoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UdgerError {
    // 数据集相关错误
    #[error("数据集不可用：{path}：{source}")]
    DatasetUnavailable {
        path: PathBuf,
        #[source]
        source: IoError,
    },
    #[error("数据集损坏：{0}")]
    DatasetCorrupt(String),

    // 检测器相关错误
    #[error("检测器未初始化: {0}")]
    DetectorNotInitialized(String),

    #[error("异步任务执行失败：{0}")]
    AsyncTaskError(String),

    // 基础错误
    #[error("无效输入：{0}")]
    InvalidInput(String),
}

impl UdgerError {
    pub(crate) fn unavailable(path: impl Into<PathBuf>, source: IoError) -> Self {
        UdgerError::DatasetUnavailable {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(table: &str, detail: impl std::fmt::Display) -> Self {
        UdgerError::DatasetCorrupt(format!("[{}] {}", table, detail))
    }
}

/// 内核构建期错误（模式编译失败）一律视为数据集损坏
impl From<CoreError> for UdgerError {
    fn from(e: CoreError) -> Self {
        UdgerError::DatasetCorrupt(e.to_string())
    }
}

// 全局Result类型
pub type UdgerResult<T> = Result<T, UdgerError>;
