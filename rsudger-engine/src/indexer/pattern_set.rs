use std::time::Instant;

use crate::{
    core::{Category, PatternRecord},
    error::CoreResult,
};

use super::Pattern;

/// 单个分类维度的有序模式集
///
/// 迭代顺序即 sequence 升序（同 sequence 保持数据集原始顺序），
/// 构建完成后只读，查询期不再排序。
#[derive(Debug, Clone)]
pub struct PatternSet {
    category: Category,
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// 空模式集（维度关闭或数据为空）
    pub fn empty(category: Category) -> Self {
        Self {
            category,
            patterns: Vec::new(),
        }
    }

    /// 编译一组原始模式记录
    /// 任意一条编译失败即整体失败，不返回部分模式集
    pub fn compile<I>(category: Category, records: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = PatternRecord>,
    {
        let start = Instant::now();
        let mut records: Vec<PatternRecord> = records.into_iter().collect();
        // 稳定排序：等价于 ORDER BY sequence ASC
        records.sort_by_key(|r| r.sequence);

        let patterns = records
            .into_iter()
            .map(|record| Pattern::compile(category, record))
            .collect::<CoreResult<Vec<_>>>()?;

        log::debug!(
            "Pattern set compiled: category={} patterns={} elapsed={:?}",
            category,
            patterns.len(),
            start.elapsed()
        );

        Ok(Self { category, patterns })
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// 按优先级顺序遍历
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Pattern> {
        self.patterns.iter()
    }
}

impl<'a> IntoIterator for &'a PatternSet {
    type Item = &'a Pattern;
    type IntoIter = std::slice::Iter<'a, Pattern>;

    fn into_iter(self) -> Self::IntoIter {
        self.patterns.iter()
    }
}
