//! AutoProxy 过滤列表语法（ABP 风格锚点与通配符）
//! 1. 基础分类：注释/指令、`||` 域名锚点、`|..|` 完整匹配、单侧锚点降级
//! 2. 正则覆盖：`/../` 原生正则，或含 `*` 时将通配符展开为正则

use super::{Diagnostic, ParseOutcome, RuleParser};
use crate::config::RuleFormat;
use crate::rule::model::{Pattern, PatternKind};

/// RE2 QuoteMeta 的元字符集合，保证产物与既有 geosite 数据逐字节一致
const REGEX_META_CHARS: &str = r"\.+*?()|[]{}^$";

/// 转义所有正则元字符
pub fn quote_meta(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len() * 2);
    for ch in s.chars() {
        if REGEX_META_CHARS.contains(ch) {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

/// 通配符规则转正则：转义后将 `\*` 替换为 `.*`
pub fn wildcard_to_regex(value: &str, anchored: bool) -> String {
    let regex = quote_meta(value).replace(r"\*", ".*");
    if anchored {
        format!("^{}$", regex)
    } else {
        regex
    }
}

/// AutoProxy 规则解析器
#[derive(Debug, Default, Clone, Copy)]
pub struct AutoProxyParser;

impl AutoProxyParser {
    fn is_directive(line: &str) -> bool {
        line.starts_with('[') || line.starts_with('!') || line.starts_with("@@")
    }

    // 基础分类，互斥且首个命中生效
    fn classify(line: &str) -> (PatternKind, String, Option<Diagnostic>) {
        if let Some(rest) = line.strip_prefix("||") {
            return (PatternKind::Domain, rest.to_string(), None);
        }
        if line.len() > 1 && line.starts_with('|') && line.ends_with('|') {
            // 去除两端所有连续的 `|`
            return (PatternKind::Full, line.trim_matches('|').to_string(), None);
        }
        if let Some(rest) = line.strip_prefix('|') {
            return (
                PatternKind::Plain,
                rest.to_string(),
                Some(Diagnostic::UnsupportedStartAnchor(line.to_string())),
            );
        }
        if let Some(rest) = line.strip_suffix('|') {
            return (
                PatternKind::Plain,
                rest.to_string(),
                Some(Diagnostic::UnsupportedEndAnchor(line.to_string())),
            );
        }
        (PatternKind::Plain, line.to_string(), None)
    }
}

impl RuleParser for AutoProxyParser {
    fn format(&self) -> RuleFormat {
        RuleFormat::AutoProxy
    }

    fn parse_line(&self, line: &str) -> ParseOutcome {
        // Skip 一旦确定即短路，不再参与正则覆盖
        if Self::is_directive(line) {
            return ParseOutcome::Skip;
        }

        let (kind, value, diagnostic) = Self::classify(line);

        let pattern = if line.starts_with('/') && line.ends_with('/') {
            Pattern::new(PatternKind::Regex, line.trim_matches('/'))
        } else if value.contains('*') {
            Pattern::new(
                PatternKind::Regex,
                wildcard_to_regex(&value, kind == PatternKind::Full),
            )
        } else {
            Pattern::new(kind, value)
        };

        ParseOutcome::Rule {
            pattern,
            diagnostic,
        }
    }
}
