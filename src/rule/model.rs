//! 规则数据模型定义
//! 仅存储规则数据，无任何业务逻辑，支持序列化/反序列化

use std::fmt;
use serde::{Deserialize, Serialize};

/// 域名匹配类型（封闭集合，新增类型需在所有 match 处显式处理）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternKind {
    /// 匹配域名本身及其所有子域名
    Domain,
    /// 子串匹配
    Plain,
    /// 正则匹配
    Regex,
    /// 完整字符串匹配
    Full,
}

impl PatternKind {
    pub const ALL: [PatternKind; 4] = [
        PatternKind::Domain,
        PatternKind::Plain,
        PatternKind::Regex,
        PatternKind::Full,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PatternKind::Domain => "domain",
            PatternKind::Plain => "plain",
            PatternKind::Regex => "regex",
            PatternKind::Full => "full",
        }
    }
}

impl fmt::Display for PatternKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 单条归一化后的匹配模式
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    pub kind: PatternKind,
    pub value: String,
}

impl Pattern {
    pub fn new(kind: PatternKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

// 输出形如 `domain:example.com`，与 v2ray 文本语法一致
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.value)
    }
}

/// 规则组：一个规则文件解析出的全部模式，保持文件行序
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleGroup {
    pub name: String,
    pub patterns: Vec<Pattern>,
}

impl RuleGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            patterns: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// 完整规则目录：一次转换产出的全部规则组
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub groups: Vec<RuleGroup>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, group: RuleGroup) {
        self.groups.push(group);
    }

    pub fn group(&self, name: &str) -> Option<&RuleGroup> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// 全部规则组的模式总数
    pub fn pattern_count(&self) -> usize {
        self.groups.iter().map(RuleGroup::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pattern_display() {
        let p = Pattern::new(PatternKind::Full, "a.com");
        assert_eq!(p.to_string(), "full:a.com");
    }

    #[test]
    fn test_catalog_lookup_and_count() {
        let mut catalog = Catalog::new();
        let mut cn = RuleGroup::new("CN");
        cn.patterns.push(Pattern::new(PatternKind::Domain, "example.cn"));
        cn.patterns.push(Pattern::new(PatternKind::Plain, "baidu"));
        catalog.push(cn);
        catalog.push(RuleGroup::new("EMPTY"));

        assert_eq!(catalog.pattern_count(), 2);
        assert_eq!(catalog.group("CN").map(RuleGroup::len), Some(2));
        assert!(catalog.group("EMPTY").is_some_and(RuleGroup::is_empty));
        assert!(catalog.group("cn").is_none());
    }
}
