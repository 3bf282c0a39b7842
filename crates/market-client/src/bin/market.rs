//! Headless marketplace CLI.
//!
//! `browse` and `mine` run the full fetch → normalize → project pipeline and
//! print the requested page; the remaining subcommands print the
//! entry-function payload for an external wallet to sign and submit.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use market_client::{queries, Config, EntryFunctionPayload, NodeClient};
use market_types::{project, rental, ListQuery, Nft, Rarity, SortDirection, SortKey};

#[derive(Parser)]
#[command(name = "market", about = "Aptos NFT marketplace client")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Browse available NFTs (for sale or rentable).
    Browse {
        #[arg(long)]
        search: Option<String>,
        /// Rarity code filter (1-4).
        #[arg(long)]
        rarity: Option<u8>,
        #[arg(long, value_enum)]
        sort: Option<SortArg>,
        #[arg(long, value_enum)]
        direction: Option<DirectionArg>,
        #[arg(long, default_value_t = 1)]
        page: usize,
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// List NFTs owned by (or rented to) an account.
    Mine {
        #[arg(long)]
        owner: String,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Print a purchase payload.
    Buy {
        #[arg(long)]
        id: u64,
        /// Sale price in APT, as shown in the listing.
        #[arg(long)]
        price: f64,
    },
    /// Print a rental payload.
    Rent {
        #[arg(long)]
        id: u64,
        /// Hourly rate in APT, as shown in the listing.
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        hours: u64,
    },
    /// Print a list-for-sale payload.
    Sell {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        price: f64,
    },
    /// Print a list-for-rent payload.
    RentOut {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        rate: f64,
    },
    /// Print a transfer payload.
    Transfer {
        #[arg(long)]
        id: u64,
        #[arg(long)]
        recipient: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SortArg {
    None,
    Name,
    Id,
    Price,
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Asc,
    Desc,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::None => SortKey::None,
            SortArg::Name => SortKey::Name,
            SortArg::Id => SortKey::Id,
            SortArg::Price => SortKey::Price,
        }
    }
}

impl From<DirectionArg> for SortDirection {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Asc => SortDirection::Ascending,
            DirectionArg::Desc => SortDirection::Descending,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Command::Browse {
            search,
            rarity,
            sort,
            direction,
            page,
            page_size,
        } => {
            let client = NodeClient::new(&config.node_url)?;
            let snapshot = queries::fetch_market(&client, &config).await?;
            info!(count = snapshot.nfts.len(), dropped = snapshot.dropped, "fetched marketplace");

            let query = ListQuery {
                only_available: true,
                rarity,
                search,
                sort_by: sort.map_or(SortKey::None, Into::into),
                direction: direction.map_or(SortDirection::Ascending, Into::into),
                page,
                page_size: page_size.unwrap_or(config.page_size),
            };
            let result = project(&snapshot.nfts, &query);
            println!("{} match(es), page {}:", result.total, query.page);
            for nft in &result.items {
                print_row(nft);
            }
        }
        Command::Mine { owner, page } => {
            let client = NodeClient::new(&config.node_url)?;
            let snapshot = queries::fetch_collection(&client, &config, &owner).await?;
            info!(count = snapshot.nfts.len(), dropped = snapshot.dropped, "fetched collection");

            let query = ListQuery {
                page,
                page_size: config.page_size,
                ..ListQuery::default()
            };
            let result = project(&snapshot.nfts, &query);
            println!("{} NFT(s), page {}:", result.total, query.page);
            for nft in &result.items {
                print_row(nft);
            }
        }
        Command::Buy { id, price } => {
            print_payload(&EntryFunctionPayload::purchase_nft(&config, id, price)?)?;
        }
        Command::Rent { id, rate, hours } => {
            print_payload(&EntryFunctionPayload::rent_nft(&config, id, rate, hours)?)?;
        }
        Command::Sell { id, price } => {
            print_payload(&EntryFunctionPayload::list_for_sale(&config, id, price)?)?;
        }
        Command::RentOut { id, rate } => {
            print_payload(&EntryFunctionPayload::list_for_rent(&config, id, rate)?)?;
        }
        Command::Transfer { id, recipient } => {
            print_payload(&EntryFunctionPayload::transfer_nft(&config, id, &recipient))?;
        }
    }

    Ok(())
}

fn print_row(nft: &Nft) {
    let mut line = format!(
        "#{:<4} {:<24} [{}] {} APT",
        nft.id,
        nft.name,
        Rarity::label(nft.rarity),
        nft.price
    );
    if nft.rent_price_per_hour > 0.0 && !nft.is_rented {
        line.push_str(&format!("  rent {} APT/hr", nft.rent_price_per_hour));
    }
    if nft.is_rented {
        let hours = rental::remaining_hours(nft.rent_end_time, rental::now_unix());
        line.push_str(&format!("  rented, {hours}h left"));
    }
    println!("{line}");
}

fn print_payload(payload: &EntryFunctionPayload) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(payload)?);
    Ok(())
}
