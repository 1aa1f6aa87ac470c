//! 有序匹配
//! 严格按 sequence 升序扫描，首个命中即返回；未命中是正常结果，不是错误

use serde::{Deserialize, Serialize};

use crate::{
    core::PatternId,
    error::MatchEvalError,
    indexer::PatternSet,
};

/// 版本提取模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VersionExtraction {
    /// 只返回标识符，版本恒为空（与参考数据集文档描述一致）
    #[default]
    Disabled,
    /// 按版本模板从捕获组中提取版本
    CaptureGroup,
}

/// 一次命中：标识符 + 版本（可能为空）
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchHit {
    pub id: PatternId,
    pub version: String,
}

/// 返回首个命中模式的标识符
#[inline]
pub fn find_first_match(ua: &str, patterns: &PatternSet) -> Option<PatternId> {
    patterns.iter().find(|p| p.is_match(ua)).map(|p| p.id)
}

/// 带版本提取的有序匹配
///
/// 两条路径：先尝试带版本匹配；若版本求值失败，则退回仅标识符匹配，
/// 失败本身只记录 debug 日志，不向上传播。
pub fn find_first_match_with_version(
    ua: &str,
    patterns: &PatternSet,
    mode: VersionExtraction,
) -> Option<MatchHit> {
    match mode {
        VersionExtraction::Disabled => identifier_only(ua, patterns),
        VersionExtraction::CaptureGroup => match try_match_with_version(ua, patterns) {
            Ok(hit) => hit,
            Err(e) => {
                log::debug!(
                    "Version extraction failed, falling back to identifier-only match: category={} error={}",
                    patterns.category(),
                    e
                );
                identifier_only(ua, patterns)
            }
        },
    }
}

#[inline]
fn identifier_only(ua: &str, patterns: &PatternSet) -> Option<MatchHit> {
    find_first_match(ua, patterns).map(|id| MatchHit {
        id,
        version: String::new(),
    })
}

fn try_match_with_version(
    ua: &str,
    patterns: &PatternSet,
) -> Result<Option<MatchHit>, MatchEvalError> {
    for pattern in patterns {
        let Some(captures) = pattern.captures(ua) else {
            continue;
        };
        let version = pattern.extract_version(&captures)?;
        return Ok(Some(MatchHit {
            id: pattern.id,
            version: version.unwrap_or_default(),
        }));
    }
    Ok(None)
}
