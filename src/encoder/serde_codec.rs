//! 基于 serde 的规则库编码：JSON（便于人工审阅）与 MessagePack（紧凑缓存）

use rmp_serde::{Serializer, from_slice};
use serde::Serialize;

use super::CatalogEncoder;
use crate::error::{GeoResult, GeoSiteError};
use crate::rule::model::Catalog;

/// JSON 编码器
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonEncoder {
    pub pretty: bool,
}

impl CatalogEncoder for JsonEncoder {
    fn encode(&self, catalog: &Catalog) -> GeoResult<Vec<u8>> {
        let result = if self.pretty {
            serde_json::to_vec_pretty(catalog)
        } else {
            serde_json::to_vec(catalog)
        };
        result.map_err(|e| GeoSiteError::Encode(format!("JSON序列化失败：{}", e)))
    }

    fn decode(&self, bytes: &[u8]) -> GeoResult<Catalog> {
        serde_json::from_slice(bytes)
            .map_err(|e| GeoSiteError::Decode(format!("JSON反序列化失败：{}", e)))
    }
}

/// MessagePack 编码器
#[derive(Debug, Default, Clone, Copy)]
pub struct MsgPackEncoder;

impl CatalogEncoder for MsgPackEncoder {
    fn encode(&self, catalog: &Catalog) -> GeoResult<Vec<u8>> {
        let mut data = Vec::new();
        catalog
            .serialize(&mut Serializer::new(&mut data))
            .map_err(|e| GeoSiteError::Encode(format!("MessagePack序列化失败：{}", e)))?;
        Ok(data)
    }

    fn decode(&self, bytes: &[u8]) -> GeoResult<Catalog> {
        from_slice(bytes)
            .map_err(|e| GeoSiteError::Decode(format!("MessagePack反序列化失败：{}", e)))
    }
}
