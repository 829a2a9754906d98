//! 规则行解析器：将两种文本语法统一归一化为 `Pattern`
//! 解析器保持纯函数语义，不做任何 IO 与日志输出，诊断信息随结果返回
pub mod autoproxy;
pub mod v2ray;

use std::fmt;

use crate::config::RuleFormat;
use crate::rule::model::Pattern;

pub use self::autoproxy::AutoProxyParser;
pub use self::v2ray::V2rayParser;

/// 非致命诊断：规则被降级处理，但不会中断转换
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// 不支持的起始锚点 `|xxx`，降级为 plain
    UnsupportedStartAnchor(String),
    /// 不支持的结束锚点 `xxx|`，降级为 plain
    UnsupportedEndAnchor(String),
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnsupportedStartAnchor(rule) => write!(
                f,
                "Unsupported rule (start anchor): {}. Regarded as plaintext rule.",
                rule
            ),
            Diagnostic::UnsupportedEndAnchor(rule) => write!(
                f,
                "Unsupported rule (end anchor): {}. Regarded as plaintext rule.",
                rule
            ),
        }
    }
}

/// 单行解析结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// 注释/指令行，直接丢弃
    Skip,
    /// 有效规则，可附带一条降级诊断
    Rule {
        pattern: Pattern,
        diagnostic: Option<Diagnostic>,
    },
}

impl ParseOutcome {
    pub(crate) fn rule(pattern: Pattern) -> Self {
        ParseOutcome::Rule {
            pattern,
            diagnostic: None,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, ParseOutcome::Skip)
    }

    /// 取出模式（Skip 返回 None）
    pub fn pattern(&self) -> Option<&Pattern> {
        match self {
            ParseOutcome::Skip => None,
            ParseOutcome::Rule { pattern, .. } => Some(pattern),
        }
    }

    pub fn diagnostic(&self) -> Option<&Diagnostic> {
        match self {
            ParseOutcome::Skip => None,
            ParseOutcome::Rule { diagnostic, .. } => diagnostic.as_ref(),
        }
    }
}

/// 规则行解析器特质
/// 输入为已去除首尾空白的非空行
pub trait RuleParser: fmt::Debug + Send + Sync {
    fn format(&self) -> RuleFormat;

    fn parse_line(&self, line: &str) -> ParseOutcome;
}

impl RuleFormat {
    /// 获取该格式对应的解析器
    pub fn parser(&self) -> &'static dyn RuleParser {
        match self {
            RuleFormat::V2ray => &V2rayParser,
            RuleFormat::AutoProxy => &AutoProxyParser,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dispatch() {
        assert_eq!(RuleFormat::V2ray.parser().format(), RuleFormat::V2ray);
        assert_eq!(RuleFormat::AutoProxy.parser().format(), RuleFormat::AutoProxy);
    }

    #[test]
    fn test_diagnostic_message() {
        let diag = Diagnostic::UnsupportedStartAnchor("|a.com".to_string());
        assert_eq!(
            diag.to_string(),
            "Unsupported rule (start anchor): |a.com. Regarded as plaintext rule."
        );
        let diag = Diagnostic::UnsupportedEndAnchor("a.com|".to_string());
        assert_eq!(
            diag.to_string(),
            "Unsupported rule (end anchor): a.com|. Regarded as plaintext rule."
        );
    }

    #[test]
    fn test_outcome_accessors() {
        assert!(ParseOutcome::Skip.is_skip());
        assert!(ParseOutcome::Skip.pattern().is_none());

        let outcome = ParseOutcome::rule(Pattern::new(
            crate::rule::model::PatternKind::Plain,
            "a.com",
        ));
        assert!(!outcome.is_skip());
        assert_eq!(outcome.pattern().map(|p| p.value.as_str()), Some("a.com"));
        assert!(outcome.diagnostic().is_none());
    }
}
