//! v2ray 结构化规则语法：`prefix:value`

use super::{ParseOutcome, RuleParser};
use crate::config::RuleFormat;
use crate::rule::model::{Pattern, PatternKind};

// 未带前缀时的默认类型
const DEFAULT_KIND: PatternKind = PatternKind::Domain;

/// v2ray 规则解析器
#[derive(Debug, Default, Clone, Copy)]
pub struct V2rayParser;

impl V2rayParser {
    /// 识别前缀关键字（不区分大小写），未知关键字返回 None
    fn keyword_kind(prefix: &str) -> Option<PatternKind> {
        // 逐字符取单一小写映射（`İ` → `i`），不做多字符展开
        let lowered: String = prefix
            .chars()
            .map(|c| c.to_lowercase().next().unwrap_or(c))
            .collect();
        match lowered.as_str() {
            "domain" => Some(PatternKind::Domain),
            "plain" => Some(PatternKind::Plain),
            "regex" | "regexp" => Some(PatternKind::Regex),
            "full" => Some(PatternKind::Full),
            _ => None,
        }
    }
}

impl RuleParser for V2rayParser {
    fn format(&self) -> RuleFormat {
        RuleFormat::V2ray
    }

    fn parse_line(&self, line: &str) -> ParseOutcome {
        if line.starts_with('#') {
            return ParseOutcome::Skip;
        }

        // 仅按第一个 `:` 切分，值中的其余 `:` 原样保留
        let pattern = match line.split_once(':') {
            Some((prefix, value)) => match Self::keyword_kind(prefix) {
                Some(kind) => Pattern::new(kind, value),
                // 前缀不可识别时整行作为默认类型的值
                None => Pattern::new(DEFAULT_KIND, line),
            },
            None => Pattern::new(DEFAULT_KIND, line),
        };
        ParseOutcome::rule(pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Option<(PatternKind, String)> {
        V2rayParser
            .parse_line(line)
            .pattern()
            .map(|p| (p.kind, p.value.clone()))
    }

    #[test]
    fn test_v2ray_rule_cases() {
        let cases = [
            ("a.com", PatternKind::Domain, "a.com"),
            ("a.com:a.com", PatternKind::Domain, "a.com:a.com"),
            ("domain:a.com", PatternKind::Domain, "a.com"),
            ("plain:a.com", PatternKind::Plain, "a.com"),
            ("regex:.*", PatternKind::Regex, ".*"),
            ("regexp:^a\\.com$", PatternKind::Regex, "^a\\.com$"),
            ("full:a.com", PatternKind::Full, "a.com"),
            (":a.com", PatternKind::Domain, ":a.com"),
            ("doMAin:a.com", PatternKind::Domain, "a.com"),
            ("pLAin:a.com", PatternKind::Plain, "a.com"),
            ("reGex:.*", PatternKind::Regex, ".*"),
            ("fuLl:a.com", PatternKind::Full, "a.com"),
        ];
        for (line, kind, value) in cases {
            assert_eq!(parse(line), Some((kind, value.to_string())), "rule: {}", line);
        }
    }

    #[test]
    fn test_prefix_case_insensitive() {
        for line in ["domain:a.com", "Domain:a.com", "DOMAIN:a.com"] {
            assert_eq!(parse(line), Some((PatternKind::Domain, "a.com".to_string())));
        }
    }

    #[test]
    fn test_prefix_lowered_per_char() {
        assert_eq!(
            parse("DOMAİN:a.com"),
            Some((PatternKind::Domain, "a.com".to_string()))
        );
        assert_eq!(
            parse("PLAİN:a.com"),
            Some((PatternKind::Plain, "a.com".to_string()))
        );
    }

    #[test]
    fn test_comment_is_skipped() {
        assert!(V2rayParser.parse_line("#comment").is_skip());
        assert!(V2rayParser.parse_line("# domain:a.com").is_skip());
    }

    #[test]
    fn test_extra_separators_kept_in_value() {
        assert_eq!(
            parse("regex:^[a-z]+:8080$"),
            Some((PatternKind::Regex, "^[a-z]+:8080$".to_string()))
        );
        assert_eq!(
            parse("keyword:a:b"),
            Some((PatternKind::Domain, "keyword:a:b".to_string()))
        );
    }

    #[test]
    fn test_empty_value_after_keyword() {
        assert_eq!(parse("full:"), Some((PatternKind::Full, String::new())));
    }

    #[test]
    fn test_never_emits_diagnostic() {
        assert!(V2rayParser.parse_line("|a.com").diagnostic().is_none());
    }
}
