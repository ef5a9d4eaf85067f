use clap::{Parser, Subcommand, ValueEnum};
use quaver_api::common::init;
use quaver_api::models::GameMode;
use quaver_api::repositories::users::ScoreKind;
use quaver_api::settings::Settings;
use quaver_api::{Client, Context, ListOptions};
use serde::Serialize;
use std::path::PathBuf;
use tokio::fs::File;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "quaver", about = "Query the Quaver web API")]
struct Opts {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Look up a user by id or username.
    User { user: String },
    /// Look up a map by id or md5 hash.
    Map { map: String },
    Mapset { id: u64 },
    Clan { id: u64 },
    /// Online users and totals.
    Stats,
    Leaderboard {
        #[arg(long, default_value = "4k")]
        mode: GameMode,
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    Scores {
        user_id: u64,
        #[arg(long, default_value = "4k")]
        mode: GameMode,
        #[arg(long, value_enum, default_value_t = Kind::Best)]
        kind: Kind,
        #[arg(long, default_value_t = 0)]
        page: u32,
    },
    DownloadMap { id: u64, path: PathBuf },
    DownloadReplay { id: u64, path: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Best,
    Recent,
    Firstplace,
}

impl From<Kind> for ScoreKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Best => ScoreKind::Best,
            Kind::Recent => ScoreKind::Recent,
            Kind::Firstplace => ScoreKind::FirstPlace,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(client: &Client, ctx: &Context, command: Command) -> anyhow::Result<()> {
    match command {
        Command::User { user } => {
            let user = match user.parse::<u64>() {
                Ok(id) => client.users().get_by_id(ctx, id).await?,
                Err(_) => client.users().get_by_name(ctx, &user).await?,
            };
            print_json(&user)
        }
        Command::Map { map } => {
            let map = match map.parse::<u64>() {
                Ok(id) => client.maps().get_by_id(ctx, id).await?,
                Err(_) => client.maps().get_by_md5(ctx, &map).await?,
            };
            print_json(&map)
        }
        Command::Mapset { id } => print_json(&client.mapsets().get(ctx, id).await?),
        Command::Clan { id } => print_json(&client.clans().get(ctx, id).await?),
        Command::Stats => print_json(&client.server_stats().get(ctx).await?),
        Command::Leaderboard { mode, page } => {
            let leaderboard = client
                .leaderboards()
                .global(ctx, mode, &ListOptions::page(page))
                .await?;
            print_json(&leaderboard)
        }
        Command::Scores {
            user_id,
            mode,
            kind,
            page,
        } => {
            let scores = client
                .users()
                .list_scores(ctx, user_id, mode, kind.into(), &ListOptions::page(page))
                .await?;
            print_json(&scores)
        }
        Command::DownloadMap { id, path } => {
            let mut file = File::create(&path).await?;
            let written = client.download().map(ctx, &mut file, id).await?;
            info!(id, written, path = %path.display(), "downloaded map");
            Ok(())
        }
        Command::DownloadReplay { id, path } => {
            let mut file = File::create(&path).await?;
            let written = client.download().replay(ctx, &mut file, id).await?;
            info!(id, written, path = %path.display(), "downloaded replay");
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let opts = Opts::parse();
    let settings = Settings::load_from_env()?;
    init::initialize_logging(&settings);

    let client = Client::from_settings(&settings)?;
    let (ctx, cancel) = Context::background()
        .with_timeout(settings.request_timeout)
        .with_cancel();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("interrupted, cancelling request");
            cancel.cancel();
        }
    });

    run(&client, &ctx, opts.command).await
}
