//! Static descriptors for the market/chain data providers and the SPX2.0 contract.
//! Display-only: nothing in the dashboard calls these endpoints.
use serde::Serialize;
use strum_macros::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Active,
    Maintenance,
    Deprecated,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ApiDescriptor {
    pub name: &'static str,
    pub endpoint: &'static str,
    pub api_key: &'static str,
    pub requires_api_key: bool,
    pub description: &'static str,
    pub documentation: &'static str,
    pub status: ApiStatus,
}

impl ApiDescriptor {
    pub fn action_required(&self) -> &'static str {
        if self.requires_api_key {
            "Replace YOUR_API_KEY with actual API key"
        } else {
            "No action required"
        }
    }
}

pub const API_CONFIG: &[ApiDescriptor] = &[
    ApiDescriptor {
        name: "CoinGecko",
        endpoint: "https://api.coingecko.com/api/v3",
        api_key: "YOUR_COINGECKO_API_KEY",
        requires_api_key: true,
        description: "Comprehensive cryptocurrency data API",
        documentation: "https://www.coingecko.com/api/documentation",
        status: ApiStatus::Active,
    },
    ApiDescriptor {
        name: "Twelve Data",
        endpoint: "https://api.twelvedata.com",
        api_key: "YOUR_TWELVEDATA_API_KEY",
        requires_api_key: true,
        description: "Real-time and historical market data for stocks, ETFs, and more",
        documentation: "https://twelvedata.com/docs",
        status: ApiStatus::Active,
    },
    ApiDescriptor {
        name: "Etherscan",
        endpoint: "https://api.etherscan.io/api",
        api_key: "YOUR_ETHERSCAN_API_KEY",
        requires_api_key: true,
        description: "Ethereum blockchain explorer API for token and contract data",
        documentation: "https://docs.etherscan.io",
        status: ApiStatus::Active,
    },
    ApiDescriptor {
        name: "OKX",
        endpoint: "https://www.okx.com",
        api_key: "YOUR_OKX_API_KEY",
        requires_api_key: true,
        description: "OKX cryptocurrency exchange API for trading and financial products",
        documentation: "https://www.okx.com/docs-v5/en/",
        status: ApiStatus::Active,
    },
];

#[derive(Debug, Clone, Copy, Serialize)]
pub struct ContractFact {
    pub function: &'static str,
    pub data: &'static str,
    pub notes: &'static str,
}

pub struct ContractConfig {
    pub symbol: &'static str,
    pub address: &'static str,
    pub facts: &'static [ContractFact],
}

pub const SPX_CONTRACT: ContractConfig = ContractConfig {
    symbol: "SPX2.0",
    // Placeholder until the deployed address is published
    address: "0xYourContractAddressHere",
    facts: &[
        ContractFact {
            function: "totalSupply()",
            data: "1,000,000,000 SPX2.0",
            notes: "Displayed in card details",
        },
        ContractFact {
            function: "_BuyTax(), _SellTax()",
            data: "20%, 30%",
            notes: "Displayed in token details",
        },
        ContractFact {
            function: "_maxTxAmount(), _maxWalletSize()",
            data: "20,000,000 SPX2.0",
            notes: "Anti-whale protection",
        },
    ],
};
