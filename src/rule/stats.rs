//! 负责转换统计数据的定义、更新与格式化输出

use std::fmt;
use tracing::info;

use super::model::PatternKind;

/// 规则转换统计信息
/// 记录一次转换过程中的各类指标：
/// 1. 文件数与行数（总行数/空行/注释指令行）
/// 2. 各匹配类型的模式数量
/// 3. 降级诊断数量
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildStats {
    // ========== 输入统计 ==========
    /// 已处理的规则文件数
    pub files: u32,
    /// 读取的总行数
    pub total_lines: u32,
    /// 空白行数
    pub blank_lines: u32,
    /// 注释/指令行数（Skip）
    pub skipped_lines: u32,

    // ========== 模式类型统计 ==========
    pub domain_patterns: u32,
    pub plain_patterns: u32,
    pub regex_patterns: u32,
    pub full_patterns: u32,

    // ========== 诊断统计 ==========
    /// 不支持的锚点被降级为 plain 的规则数
    pub diagnostics: u32,
}

impl BuildStats {
    /// 记录一条产出的模式
    pub fn record_pattern(&mut self, kind: PatternKind) {
        match kind {
            PatternKind::Domain => self.domain_patterns += 1,
            PatternKind::Plain => self.plain_patterns += 1,
            PatternKind::Regex => self.regex_patterns += 1,
            PatternKind::Full => self.full_patterns += 1,
        }
    }

    /// 指定类型的模式数量
    pub fn count_of(&self, kind: PatternKind) -> u32 {
        match kind {
            PatternKind::Domain => self.domain_patterns,
            PatternKind::Plain => self.plain_patterns,
            PatternKind::Regex => self.regex_patterns,
            PatternKind::Full => self.full_patterns,
        }
    }

    /// 产出的模式总数
    pub fn total_patterns(&self) -> u32 {
        PatternKind::ALL.iter().map(|k| self.count_of(*k)).sum()
    }

    /// 输出统计摘要日志
    pub fn log_summary(&self) {
        info!("===== 规则转换统计 =====");
        info!("  规则文件数：{}", self.files);
        info!(
            "  总行数：{}（空行：{}，注释/指令：{}）",
            self.total_lines, self.blank_lines, self.skipped_lines
        );
        info!(
            "  模式总数：{}（domain：{}，plain：{}，regex：{}，full：{}）",
            self.total_patterns(),
            self.domain_patterns,
            self.plain_patterns,
            self.regex_patterns,
            self.full_patterns
        );
        if self.diagnostics > 0 {
            info!("  降级为 plain 的规则数：{}", self.diagnostics);
        }
    }
}

impl fmt::Display for BuildStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "files={} lines={} patterns={} skipped={} warnings={}",
            self.files,
            self.total_lines,
            self.total_patterns(),
            self.skipped_lines,
            self.diagnostics
        )
    }
}
