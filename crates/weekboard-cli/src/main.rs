//! weekboard - 週間ボードの CLI
//!
//! 設定・ログを初期化し、JSON ファイルのストアで Board を組み立てて
//! show / toggle / fill を実行します。

use anyhow::{Context, bail};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use weekboard_core::app::{BoardBuilder, sign_in};
use weekboard_core::config::BoardConfig;
use weekboard_core::domain::{DayStatus, EmployeeId};
use weekboard_core::impls::JsonFileStore;

mod render;

#[derive(Debug, Parser)]
#[command(name = "weekboard", about = "Weekly teleworking / absence board")]
struct Cli {
    /// Config file (default: ./weekboard.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// JSON data file, overrides the config
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Signed-in user id, overrides the config
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the week containing DATE (default: today)
    Show {
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Only show this category
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Cycle your own status on DATE: none -> teleworking -> absent -> none
    Toggle {
        #[arg(long)]
        date: NaiveDate,
    },
    /// Set your status on every day from FROM to TO (inclusive)
    Fill {
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
        #[arg(long, value_enum)]
        status: StatusArg,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StatusArg {
    Teleworking,
    Absent,
    None,
}

impl From<StatusArg> for DayStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Teleworking => DayStatus::Teleworking,
            StatusArg::Absent => DayStatus::Absent,
            StatusArg::None => DayStatus::None,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = BoardConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let data_path = cli.data.clone().unwrap_or(config.data_path.clone());
    let Some(user) = cli.user.clone().or(config.user_id.clone()) else {
        bail!("no user: pass --user or set user_id in the config");
    };

    let store = Arc::new(
        JsonFileStore::open(&data_path)
            .await
            .with_context(|| format!("opening {}", data_path.display()))?,
    );
    let session = sign_in(store.as_ref(), &EmployeeId::new(user))
        .await
        .context("signing in")?;
    let me = session.user_id.clone();

    let mut board = BoardBuilder::new(session).store(store).build()?.load().await?;

    match cli.command {
        Command::Show {
            date,
            category,
            json,
        } => {
            if let Some(date) = date {
                board.show_week_of(date)?;
            }
            let view = board.view(category.as_deref());
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                print!("{}", render::board_text(&view)?);
            }
        }
        Command::Toggle { date } => {
            let status = board.click(&me, date).await?.unwrap_or_default();
            info!(%date, %status, "toggled");
            board.show_week_of(date)?;
            print!("{}", render::board_text(&board.view(None))?);
        }
        Command::Fill { from, to, status } => {
            let updates = board.fill_range(from, to, status.into()).await?;
            println!("{} day(s) updated", updates.len());
            board.show_week_of(from)?;
            print!("{}", render::board_text(&board.view(None))?);
        }
    }

    Ok(())
}
