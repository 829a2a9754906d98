//! v2ray router GeoSiteList 的 protobuf 编码
//! 字段编号与 `v2ray.core.app.router` 的 proto 定义保持一致

use prost::Message;

use super::CatalogEncoder;
use crate::error::{GeoResult, GeoSiteError};
use crate::rule::model::{Catalog, Pattern, PatternKind, RuleGroup};

/// router.Domain.Type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum DomainType {
    Plain = 0,
    Regex = 1,
    Domain = 2,
    Full = 3,
}

impl From<PatternKind> for DomainType {
    fn from(kind: PatternKind) -> Self {
        match kind {
            PatternKind::Plain => DomainType::Plain,
            PatternKind::Regex => DomainType::Regex,
            PatternKind::Domain => DomainType::Domain,
            PatternKind::Full => DomainType::Full,
        }
    }
}

impl From<DomainType> for PatternKind {
    fn from(ty: DomainType) -> Self {
        match ty {
            DomainType::Plain => PatternKind::Plain,
            DomainType::Regex => PatternKind::Regex,
            DomainType::Domain => PatternKind::Domain,
            DomainType::Full => PatternKind::Full,
        }
    }
}

/// router.Domain
#[derive(Clone, PartialEq, Message)]
pub struct DomainProto {
    #[prost(enumeration = "DomainType", tag = "1")]
    pub r#type: i32,
    #[prost(string, tag = "2")]
    pub value: String,
}

/// router.GeoSite
#[derive(Clone, PartialEq, Message)]
pub struct GeoSiteProto {
    #[prost(string, tag = "1")]
    pub country_code: String,
    #[prost(message, repeated, tag = "2")]
    pub domain: Vec<DomainProto>,
}

/// router.GeoSiteList
#[derive(Clone, PartialEq, Message)]
pub struct GeoSiteListProto {
    #[prost(message, repeated, tag = "1")]
    pub entry: Vec<GeoSiteProto>,
}

impl From<&Pattern> for DomainProto {
    fn from(pattern: &Pattern) -> Self {
        Self {
            r#type: DomainType::from(pattern.kind) as i32,
            value: pattern.value.clone(),
        }
    }
}

impl From<&RuleGroup> for GeoSiteProto {
    fn from(group: &RuleGroup) -> Self {
        Self {
            country_code: group.name.clone(),
            domain: group.patterns.iter().map(DomainProto::from).collect(),
        }
    }
}

impl From<&Catalog> for GeoSiteListProto {
    fn from(catalog: &Catalog) -> Self {
        Self {
            entry: catalog.groups.iter().map(GeoSiteProto::from).collect(),
        }
    }
}

impl TryFrom<GeoSiteListProto> for Catalog {
    type Error = GeoSiteError;

    fn try_from(list: GeoSiteListProto) -> Result<Self, Self::Error> {
        let mut catalog = Catalog::new();
        for site in list.entry {
            let mut group = RuleGroup::new(site.country_code);
            for domain in site.domain {
                let ty = DomainType::try_from(domain.r#type).map_err(|_| {
                    GeoSiteError::Decode(format!("未知的 Domain.Type：{}", domain.r#type))
                })?;
                group.patterns.push(Pattern::new(ty.into(), domain.value));
            }
            catalog.push(group);
        }
        Ok(catalog)
    }
}

/// protobuf 编码器（geosite.dat）
#[derive(Debug, Default, Clone, Copy)]
pub struct ProtobufEncoder;

impl CatalogEncoder for ProtobufEncoder {
    fn encode(&self, catalog: &Catalog) -> GeoResult<Vec<u8>> {
        let list = GeoSiteListProto::from(catalog);
        let mut bytes = Vec::with_capacity(list.encoded_len());
        list.encode(&mut bytes)
            .map_err(|e| GeoSiteError::Encode(e.to_string()))?;
        Ok(bytes)
    }

    fn decode(&self, bytes: &[u8]) -> GeoResult<Catalog> {
        let list = GeoSiteListProto::decode(bytes)
            .map_err(|e| GeoSiteError::Decode(e.to_string()))?;
        Catalog::try_from(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        let mut cn = RuleGroup::new("CN");
        cn.patterns.push(Pattern::new(PatternKind::Domain, "example.cn"));
        cn.patterns.push(Pattern::new(PatternKind::Regex, "^a.*\\.com$"));
        let mut catalog = Catalog::new();
        catalog.push(cn);
        catalog.push(RuleGroup::new("EMPTY"));
        catalog
    }

    #[test]
    fn test_wire_numbers() {
        assert_eq!(DomainType::from(PatternKind::Plain) as i32, 0);
        assert_eq!(DomainType::from(PatternKind::Regex) as i32, 1);
        assert_eq!(DomainType::from(PatternKind::Domain) as i32, 2);
        assert_eq!(DomainType::from(PatternKind::Full) as i32, 3);
    }

    #[test]
    fn test_known_wire_bytes() {
        let mut group = RuleGroup::new("CN");
        group.patterns.push(Pattern::new(PatternKind::Domain, "a.cn"));
        let mut catalog = Catalog::new();
        catalog.push(group);

        let bytes = ProtobufEncoder.encode(&catalog).unwrap();
        // entry{country_code:"CN", domain{type:DOMAIN, value:"a.cn"}}
        let expected: Vec<u8> = vec![
            0x0a, 0x0e, // entry, len 14
            0x0a, 0x02, b'C', b'N', // country_code
            0x12, 0x08, // domain, len 8
            0x08, 0x02, // type = 2
            0x12, 0x04, b'a', b'.', b'c', b'n', // value
        ];
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_decode_restores_catalog() {
        let catalog = sample_catalog();
        let bytes = ProtobufEncoder.encode(&catalog).unwrap();
        assert_eq!(ProtobufEncoder.decode(&bytes).unwrap(), catalog);
    }

    #[test]
    fn test_empty_catalog_encodes_to_nothing() {
        let bytes = ProtobufEncoder.encode(&Catalog::new()).unwrap();
        assert!(bytes.is_empty());
    }

    #[test]
    fn test_decode_rejects_unknown_type() {
        let list = GeoSiteListProto {
            entry: vec![GeoSiteProto {
                country_code: "X".to_string(),
                domain: vec![DomainProto {
                    r#type: 9,
                    value: "a".to_string(),
                }],
            }],
        };
        let bytes = list.encode_to_vec();
        let err = ProtobufEncoder.decode(&bytes).unwrap_err();
        assert!(matches!(err, GeoSiteError::Decode(_)));
    }
}
