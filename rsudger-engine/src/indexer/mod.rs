mod pattern;
mod pattern_set;

// 对外只导出具体内容，不导出模块名
pub use pattern::{clean_regex, Pattern};
pub use pattern_set::PatternSet;
