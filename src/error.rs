//! 全局错误类型定义

use std::io::Error as IoError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoSiteError {
    // 配置相关错误
    #[error("Unsupported format {0}.")]
    UnsupportedFormat(String),
    #[error("Unsupported encoding {0}.")]
    UnsupportedEncoding(String),

    // IO 错误（携带出错路径）
    #[error("IO操作失败：{}：{source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    // 序列化/反序列化错误
    #[error("规则库序列化失败：{0}")]
    Encode(String),
    #[error("规则库反序列化失败：{0}")]
    Decode(String),
}

impl GeoSiteError {
    /// 为 IO 错误附加路径
    pub fn io(path: impl Into<PathBuf>, source: IoError) -> Self {
        GeoSiteError::Io {
            path: path.into(),
            source,
        }
    }
}

// 全局Result类型
pub type GeoResult<T> = Result<T, GeoSiteError>;
