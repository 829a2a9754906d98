//! 规则目录加载
//! 负责遍历规则目录、逐行解析规则文件并组装为 Catalog

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use super::model::{Catalog, RuleGroup};
use super::parser::{ParseOutcome, RuleParser};
use super::stats::BuildStats;
use crate::config::RuleFormat;
use crate::error::{GeoResult, GeoSiteError};

/// 由文件名推导规则组名：去掉最后一个扩展名后转大写
/// `cn.txt` → `CN`，`geolocation-!cn.txt` → `GEOLOCATION-!CN`，`google` → `GOOGLE`
pub fn group_name(file_name: &str) -> String {
    let stem = match file_name.rfind('.') {
        Some(idx) => &file_name[..idx],
        None => file_name,
    };
    stem.to_uppercase()
}

/// 规则目录构建器
#[derive(Debug)]
pub struct CatalogBuilder {
    parser: &'static dyn RuleParser,
    stats: BuildStats,
}

impl CatalogBuilder {
    pub fn new(format: RuleFormat) -> Self {
        Self {
            parser: format.parser(),
            stats: BuildStats::default(),
        }
    }

    pub fn format(&self) -> RuleFormat {
        self.parser.format()
    }

    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// 解析单个文件的文本内容，生成规则组
    /// 空行与 Skip 行被丢弃，其余模式保持行序
    pub fn parse_content(&mut self, name: &str, content: &str) -> RuleGroup {
        let mut group = RuleGroup::new(name);

        for (idx, raw) in content.lines().enumerate() {
            self.stats.total_lines += 1;
            let line = raw.trim();
            if line.is_empty() {
                self.stats.blank_lines += 1;
                continue;
            }

            match self.parser.parse_line(line) {
                ParseOutcome::Skip => self.stats.skipped_lines += 1,
                ParseOutcome::Rule {
                    pattern,
                    diagnostic,
                } => {
                    if let Some(diag) = diagnostic {
                        self.stats.diagnostics += 1;
                        warn!("[{}:{}] {}", name, idx + 1, diag);
                    }
                    self.stats.record_pattern(pattern.kind);
                    group.patterns.push(pattern);
                }
            }
        }

        group
    }

    /// 读取并解析单个规则文件
    pub fn load_file(&mut self, path: &Path) -> GeoResult<RuleGroup> {
        let content = fs::read_to_string(path).map_err(|e| GeoSiteError::io(path, e))?;

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        let group = self.parse_content(&group_name(&file_name), &content);
        self.stats.files += 1;

        debug!(
            "规则文件解析完成：{} → [{}]，模式数：{}",
            path.display(),
            group.name,
            group.len()
        );
        Ok(group)
    }

    /// 遍历目录（不递归，按文件名排序），每个文件生成一个规则组
    /// 任一文件读取失败即整体失败，不产出部分结果
    pub fn load_dir(&mut self, dir: &Path) -> GeoResult<Catalog> {
        // 根路径必须是目录，否则 walkdir 只产出被 min_depth 过滤掉的根节点
        let meta = fs::metadata(dir).map_err(|e| GeoSiteError::io(dir, e))?;
        if !meta.is_dir() {
            return Err(GeoSiteError::io(
                dir,
                io::Error::new(io::ErrorKind::NotADirectory, "规则路径不是目录"),
            ));
        }

        let mut catalog = Catalog::new();

        let walker = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(dir).to_path_buf();
                GeoSiteError::io(path, e.into())
            })?;

            if entry.file_type().is_dir() {
                debug!("跳过子目录：{}", entry.path().display());
                continue;
            }

            catalog.push(self.load_file(entry.path())?);
        }

        debug!(
            "规则目录加载完成：{}，规则组数：{}",
            dir.display(),
            catalog.groups.len()
        );
        Ok(catalog)
    }
}
