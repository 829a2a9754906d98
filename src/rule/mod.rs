//! 规则模块：负责规则数据模型、行解析与规则目录加载
pub mod model;
pub mod parser;
pub mod loader;
pub mod stats;

// 导出核心接口
pub use self::model::{Catalog, Pattern, PatternKind, RuleGroup};
pub use self::parser::{AutoProxyParser, Diagnostic, ParseOutcome, RuleParser, V2rayParser};
pub use self::loader::{CatalogBuilder, group_name};
pub use self::stats::BuildStats;
