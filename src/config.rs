//! 全局配置管理,存储一次转换任务的所有可配置项

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::GeoSiteError;

/// 规则文本格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RuleFormat {
    /// `prefix:value` 结构化语法
    #[default]
    V2ray,
    /// AutoProxy / ABP 风格的过滤列表语法
    AutoProxy,
}

impl RuleFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleFormat::V2ray => "v2ray",
            RuleFormat::AutoProxy => "autoproxy",
        }
    }
}

impl fmt::Display for RuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// 格式名不区分大小写
impl FromStr for RuleFormat {
    type Err = GeoSiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "v2ray" => Ok(RuleFormat::V2ray),
            "autoproxy" => Ok(RuleFormat::AutoProxy),
            _ => Err(GeoSiteError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// 输出产物的编码方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputEncoding {
    /// v2ray router 的 GeoSiteList protobuf
    #[default]
    Protobuf,
    Json,
    MsgPack,
}

impl OutputEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputEncoding::Protobuf => "protobuf",
            OutputEncoding::Json => "json",
            OutputEncoding::MsgPack => "msgpack",
        }
    }
}

impl fmt::Display for OutputEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputEncoding {
    type Err = GeoSiteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "protobuf" | "proto" | "dat" => Ok(OutputEncoding::Protobuf),
            "json" => Ok(OutputEncoding::Json),
            "msgpack" | "mp" => Ok(OutputEncoding::MsgPack),
            _ => Err(GeoSiteError::UnsupportedEncoding(s.to_string())),
        }
    }
}

/// 默认规则目录
pub const DEFAULT_SITES_DIR: &str = "sites";
/// 默认输出路径
pub const DEFAULT_OUTPUT_PATH: &str = "geosite.dat";

/// 转换任务配置
#[derive(Debug, Clone)]
pub struct BuildConfig {
    // 规则文件目录（每个文件对应一个规则组）
    pub sites_dir: PathBuf,
    // 输出文件路径
    pub output_path: PathBuf,
    // 规则文本格式
    pub format: RuleFormat,
    // 输出编码
    pub encoding: OutputEncoding,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            sites_dir: PathBuf::from(DEFAULT_SITES_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            format: RuleFormat::default(),
            encoding: OutputEncoding::default(),
        }
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> BuildConfig {
        BuildConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: BuildConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sites_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.sites_dir = dir.into();
        self
    }

    pub fn output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_path = path.into();
        self
    }

    pub fn format(mut self, format: RuleFormat) -> Self {
        self.config.format = format;
        self
    }

    pub fn encoding(mut self, encoding: OutputEncoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    pub fn build(self) -> BuildConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConfigManager::get_default();
        assert_eq!(config.sites_dir, PathBuf::from("sites"));
        assert_eq!(config.output_path, PathBuf::from("geosite.dat"));
        assert_eq!(config.format, RuleFormat::V2ray);
        assert_eq!(config.encoding, OutputEncoding::Protobuf);
    }

    #[test]
    fn test_format_case_insensitive() {
        assert_eq!("V2Ray".parse::<RuleFormat>().unwrap(), RuleFormat::V2ray);
        assert_eq!("AUTOPROXY".parse::<RuleFormat>().unwrap(), RuleFormat::AutoProxy);
    }

    #[test]
    fn test_unsupported_format() {
        let err = "surge".parse::<RuleFormat>().unwrap_err();
        assert!(matches!(err, GeoSiteError::UnsupportedFormat(ref f) if f == "surge"));
    }

    #[test]
    fn test_custom_builder() {
        let config = ConfigManager::custom()
            .sites_dir("data")
            .output_path("out/geosite.json")
            .format(RuleFormat::AutoProxy)
            .encoding(OutputEncoding::Json)
            .build();
        assert_eq!(config.sites_dir, PathBuf::from("data"));
        assert_eq!(config.output_path, PathBuf::from("out/geosite.json"));
        assert_eq!(config.format, RuleFormat::AutoProxy);
        assert_eq!(config.encoding, OutputEncoding::Json);
    }
}
