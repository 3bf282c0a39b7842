//! Client configuration.

use serde::Deserialize;

/// Configuration for the marketplace client.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "defaults::node_url")]
    pub node_url: String,

    /// Account that published (and hosts) the marketplace resource.
    #[serde(default = "defaults::marketplace_address")]
    pub marketplace_address: String,

    /// Move module name; fixed by the deployed contract.
    #[serde(default = "defaults::module_name")]
    pub module_name: String,

    /// Presentation page size.
    #[serde(default = "defaults::page_size")]
    pub page_size: usize,

    /// `get_all_nfts_for_owner` enumeration limit.
    #[serde(default = "defaults::owner_limit")]
    pub owner_limit: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            node_url: defaults::node_url(),
            marketplace_address: defaults::marketplace_address(),
            module_name: defaults::module_name(),
            page_size: defaults::page_size(),
            owner_limit: defaults::owner_limit(),
        }
    }
}

impl Config {
    /// Load from environment variables, falling back to testnet defaults.
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Fully-qualified name of a function or resource in the marketplace
    /// module, e.g. `0xabc::NFTMarketplace::purchase_nft`.
    pub fn qualified(&self, name: &str) -> String {
        format!("{}::{}::{}", self.marketplace_address, self.module_name, name)
    }
}

mod defaults {
    pub fn node_url() -> String {
        std::env::var("APTOS_NODE_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "https://fullnode.testnet.aptoslabs.com".into())
    }

    pub fn marketplace_address() -> String {
        std::env::var("MARKETPLACE_ADDR")
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "0x1".into())
    }

    pub fn module_name() -> String {
        "NFTMarketplace".into()
    }

    pub fn page_size() -> usize {
        8
    }

    pub fn owner_limit() -> u64 {
        100
    }
}
