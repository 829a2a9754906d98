//! 转换流程编排：加载规则目录 → 编码 → 写出产物

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::BuildConfig;
use crate::error::{GeoResult, GeoSiteError};
use crate::rule::{BuildStats, Catalog, CatalogBuilder};

/// 一次转换的结果摘要
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output_path: PathBuf,
    pub groups: usize,
    pub bytes_written: usize,
    pub stats: BuildStats,
}

/// 仅加载规则目录，不写出产物
pub fn build_catalog(config: &BuildConfig) -> GeoResult<(Catalog, BuildStats)> {
    let mut builder = CatalogBuilder::new(config.format);
    debug!(
        "开始加载规则目录：{}，格式：{}",
        config.sites_dir.display(),
        builder.format()
    );
    let catalog = builder.load_dir(&config.sites_dir)?;
    Ok((catalog, builder.stats().clone()))
}

/// 执行完整转换流程，任一步骤失败即中止
pub fn generate(config: &BuildConfig) -> GeoResult<GenerateReport> {
    let (catalog, stats) = build_catalog(config)?;
    stats.log_summary();

    let bytes = config.encoding.encoder().encode(&catalog)?;
    debug!(
        "规则库编码完成（{}），数据大小：{} 字节",
        config.encoding,
        bytes.len()
    );

    write_output(&config.output_path, &bytes)?;
    info!(
        "已写出 {} 个规则组 → {}",
        catalog.groups.len(),
        config.output_path.display()
    );

    Ok(GenerateReport {
        output_path: config.output_path.clone(),
        groups: catalog.groups.len(),
        bytes_written: bytes.len(),
        stats,
    })
}

/// 写出产物文件（Unix 下权限为 0666，受 umask 约束），已存在则截断
pub fn write_output(path: &Path, bytes: &[u8]) -> GeoResult<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o666);
    }

    let mut file = options.open(path).map_err(|e| GeoSiteError::io(path, e))?;
    file.write_all(bytes).map_err(|e| GeoSiteError::io(path, e))?;
    Ok(())
}
