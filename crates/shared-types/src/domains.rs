//! # Known Domains
//!
//! Registry of named domain identifiers. Domains outside this registry are
//! still valid protocol participants; the registry only gives them names
//! for configuration and logs.

use crate::entities::DomainId;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{
    AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr,
};

/// Named domains. The discriminant is the domain id.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[repr(u32)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum KnownDomain {
    /// Ethereum mainnet (0x657468, "eth").
    Ethereum = 0x657468,
    /// Ethereum Goerli testnet.
    Goerli = 5,
    /// Ethereum Kovan testnet.
    Kovan = 3000,

    /// Polygon mainnet (0x706f6c79, "poly").
    Polygon = 0x706f6c79,
    /// Polygon Mumbai testnet.
    Mumbai = 80001,

    /// Avalanche mainnet (0x61766178, "avax").
    Avalanche = 0x61766178,
    /// Avalanche Fuji testnet.
    Fuji = 43113,

    /// Arbitrum mainnet (0x617262, "arb").
    Arbitrum = 0x617262,
    /// Arbitrum Rinkeby testnet (0x61722d72, "ar-r").
    ArbitrumRinkeby = 0x61722d72,
    /// Arbitrum Goerli testnet.
    ArbitrumGoerli = 421613,

    /// Optimism mainnet (0x6f70, "op").
    Optimism = 0x6f70,
    /// Optimism Kovan testnet (0x6f702d6b, "op-k").
    OptimismKovan = 0x6f702d6b,
    /// Optimism Goerli testnet.
    OptimismGoerli = 420,

    /// BNB Smart Chain mainnet (0x627363, "bsc").
    #[strum(serialize = "bsc")]
    #[serde(rename = "bsc")]
    BinanceSmartChain = 0x627363,
    /// BNB Smart Chain testnet (0x62732d74, "bs-t").
    #[strum(serialize = "bsctestnet")]
    #[serde(rename = "bsctestnet")]
    BinanceSmartChainTestnet = 0x62732d74,

    /// Celo mainnet (0x63656c6f, "celo").
    Celo = 0x63656c6f,
    /// Celo Alfajores testnet.
    Alfajores = 1000,

    /// Moonbeam testnet (0x6d6f2d61, "mo-a").
    MoonbaseAlpha = 0x6d6f2d61,
    /// Moonbeam mainnet (0x6d6f2d6d, "mo-m").
    Moonbeam = 0x6d6f2d6d,

    /// zkSync 2.0 testnet.
    Zksync2Testnet = 280,

    /// Local test chain 1.
    Test1 = 13371,
    /// Local test chain 2.
    Test2 = 13372,
    /// Local test chain 3.
    Test3 = 13373,
}

/// Classification of a domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DomainType {
    /// A production network.
    Mainnet,
    /// A public test network.
    Testnet,
    /// A local chain used by test suites.
    LocalTestChain,
}

impl KnownDomain {
    /// Numeric domain id.
    pub fn id(&self) -> DomainId {
        *self as DomainId
    }

    /// Lowercase name used in configuration.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Mainnet / testnet / local classification.
    pub fn domain_type(&self) -> DomainType {
        use KnownDomain::*;
        match self {
            Ethereum | Polygon | Avalanche | Arbitrum | Optimism | BinanceSmartChain | Celo
            | Moonbeam => DomainType::Mainnet,
            Goerli | Kovan | Mumbai | Fuji | ArbitrumRinkeby | ArbitrumGoerli | OptimismKovan
            | OptimismGoerli | BinanceSmartChainTestnet | Alfajores | MoonbaseAlpha
            | Zksync2Testnet => DomainType::Testnet,
            Test1 | Test2 | Test3 => DomainType::LocalTestChain,
        }
    }
}

impl TryFrom<DomainId> for KnownDomain {
    type Error = String;

    fn try_from(id: DomainId) -> Result<Self, Self::Error> {
        KnownDomain::iter()
            .find(|d| d.id() == id)
            .ok_or_else(|| format!("unknown domain id: {id}"))
    }
}

impl From<KnownDomain> for DomainId {
    fn from(domain: KnownDomain) -> Self {
        domain.id()
    }
}

/// Name of a domain id, if known.
pub fn name_from_domain_id(id: DomainId) -> Option<String> {
    KnownDomain::try_from(id).ok().map(|d| d.to_string())
}

/// Domain id of a name, if known. Names match case-insensitively.
pub fn domain_id_from_name(name: &str) -> Option<DomainId> {
    KnownDomain::from_str(name).ok().map(DomainId::from)
}
