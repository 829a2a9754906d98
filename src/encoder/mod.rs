//! 编码模块：将 Catalog 序列化为最终产物
pub mod protobuf;
pub mod serde_codec;

use crate::config::OutputEncoding;
use crate::error::GeoResult;
use crate::rule::model::Catalog;

pub use self::protobuf::{DomainType, ProtobufEncoder};
pub use self::serde_codec::{JsonEncoder, MsgPackEncoder};

/// 规则库编码器特质
pub trait CatalogEncoder: std::fmt::Debug + Send + Sync {
    fn encode(&self, catalog: &Catalog) -> GeoResult<Vec<u8>>;

    fn decode(&self, bytes: &[u8]) -> GeoResult<Catalog>;
}

impl OutputEncoding {
    /// 获取该编码方式对应的编码器
    pub fn encoder(&self) -> Box<dyn CatalogEncoder> {
        match self {
            OutputEncoding::Protobuf => Box::new(ProtobufEncoder),
            OutputEncoding::Json => Box::new(JsonEncoder { pretty: true }),
            OutputEncoding::MsgPack => Box::new(MsgPackEncoder),
        }
    }
}
