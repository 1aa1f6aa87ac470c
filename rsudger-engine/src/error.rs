//! rsudger-engine 内核错误定义
//! 封装内核层所有核心错误，与门面层错误解耦，基于thiserror实现类型安全处理
use thiserror::Error;

use regex::Error as RegexError;

use crate::core::{Category, PatternId};

/// 内核核心错误枚举
/// 仅覆盖构建期错误：分类期（classify）永不失败
#[derive(Error, Debug)]
pub enum CoreError {
    // ===================== 编译相关错误 =====================
    /// 单条模式正则编译失败（整个数据集视为损坏）
    #[error("Pattern compilation failed: category={category} id={id} regex={regex}: {source}")]
    PatternCompile {
        category: Category,
        id: PatternId,
        regex: String,
        #[source]
        source: RegexError,
    },
}

/// 内核层全局Result类型别名
pub type CoreResult<T> = Result<T, CoreError>;

/// 单条模式匹配求值失败（仅内核内部使用，调用方只会看到降级后的结果）
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum MatchEvalError {
    /// 版本模板引用了模式中不存在的捕获组
    #[error("version template references group {group}, pattern only defines {available}")]
    MissingGroup { group: usize, available: usize },
}
