use regex::{Captures, Regex, RegexBuilder};

use crate::{
    core::{Category, PatternId, PatternRecord},
    error::{CoreError, CoreResult, MatchEvalError},
};

/// PCRE 风格的大小写/单行修饰后缀
const CASE_INSENSITIVE_SUFFIX: &str = "/si";
/// PCRE 分隔符
const DELIMITER: char = '/';
/// 未指定模板且正则带捕获组时使用的默认版本模板
const DEFAULT_VERSION_TEMPLATE: &str = "\\1";

/// 清洗数据集中的原始正则文本
/// 1. 去掉结尾的 `/si` 修饰
/// 2. 去掉开头的单个 `/` 分隔符
pub fn clean_regex(raw: &str) -> &str {
    let s = raw.strip_suffix(CASE_INSENSITIVE_SUFFIX).unwrap_or(raw);
    s.strip_prefix(DELIMITER).unwrap_or(s)
}

/// 编译后的单条模式（加载后不可变）
#[derive(Debug, Clone)]
pub struct Pattern {
    pub id: PatternId,
    pub sequence: i64,
    regex: Regex,
    version_template: Option<String>,
}

impl Pattern {
    /// 清洗并编译单条模式记录，统一忽略大小写
    pub fn compile(category: Category, record: PatternRecord) -> CoreResult<Self> {
        let cleaned = clean_regex(&record.regstring);
        let regex = RegexBuilder::new(cleaned)
            .case_insensitive(true)
            .build()
            .map_err(|source| CoreError::PatternCompile {
                category,
                id: record.id,
                regex: record.regstring.clone(),
                source,
            })?;

        Ok(Self {
            id: record.id,
            sequence: record.sequence,
            regex,
            version_template: record.version_template,
        })
    }

    /// 清洗后的正则源文本
    #[inline]
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// 非锚定匹配
    #[inline(always)]
    pub fn is_match(&self, input: &str) -> bool {
        self.regex.is_match(input)
    }

    #[inline]
    pub(crate) fn captures<'a>(&self, input: &'a str) -> Option<Captures<'a>> {
        self.regex.captures(input)
    }

    /// 生效的版本模板：显式模板优先，否则正则带捕获组时使用 `\1`
    fn effective_template(&self) -> Option<&str> {
        match &self.version_template {
            Some(t) if !t.trim().is_empty() => Some(t.as_str()),
            Some(_) => None,
            None if self.regex.captures_len() > 1 => Some(DEFAULT_VERSION_TEMPLATE),
            None => None,
        }
    }

    /// 按版本模板从捕获结果中展开版本号
    /// 模板支持 `\N` 与 `$N` 两种分组引用；引用不存在的分组视为求值失败
    pub(crate) fn extract_version(
        &self,
        captures: &Captures<'_>,
    ) -> Result<Option<String>, MatchEvalError> {
        let Some(template) = self.effective_template() else {
            return Ok(None);
        };

        let mut version = String::with_capacity(template.len());
        let mut chars = template.char_indices().peekable();
        while let Some((_, c)) = chars.next() {
            let is_ref = matches!(c, '\\' | '$')
                && chars.peek().is_some_and(|(_, next)| next.is_ascii_digit());
            if !is_ref {
                version.push(c);
                continue;
            }

            let mut group = 0usize;
            while let Some((_, d)) = chars.peek().copied() {
                let Some(digit) = d.to_digit(10) else { break };
                group = group.saturating_mul(10).saturating_add(digit as usize);
                chars.next();
            }

            if group >= captures.len() {
                return Err(MatchEvalError::MissingGroup {
                    group,
                    available: captures.len().saturating_sub(1),
                });
            }
            if let Some(m) = captures.get(group) {
                version.push_str(m.as_str().trim());
            }
        }

        let version = version.trim();
        Ok((!version.is_empty()).then(|| version.to_string()))
    }
}
