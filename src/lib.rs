//! rsgeosite - 域名规则列表转 geosite 规则库工具

// 导出全局错误类型
pub use self::error::{GeoSiteError, GeoResult};

// 导出配置模块
pub use self::config::{BuildConfig, ConfigManager, CustomConfigBuilder, OutputEncoding, RuleFormat};

// 导出规则模块核心接口
pub use self::rule::{
    Catalog, RuleGroup, Pattern, PatternKind, ParseOutcome, Diagnostic,
    RuleParser, V2rayParser, AutoProxyParser, CatalogBuilder, BuildStats
};

// 导出编码模块核心接口
pub use self::encoder::{CatalogEncoder, ProtobufEncoder, JsonEncoder, MsgPackEncoder};

// 导出转换流程接口
pub use self::generator::{GenerateReport, build_catalog, generate, write_output};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod rule;
pub mod encoder;
pub mod generator;
