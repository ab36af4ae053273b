use clap::{Parser, Subcommand};
use log::error;
use rocket::fairing::AdHoc;
use rocket::{Build, Rocket};

mod api;
mod config;
mod database;

use config::{Config, ConfigError};
use database::{GameScore, ScoreRecord, ScoreStore, StoreError};

#[derive(Parser, Debug)]
#[command(name = "score_server")]
#[command(about = "High score server for the browser game")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Run the HTTP server (the default)
    Serve,
    /// Create the score table if it does not exist yet
    DbInit,
    /// Add a single score to the database
    DbAdd {
        token: String,
        name: String,
        #[arg(allow_negative_numbers = true)]
        score: GameScore,
    },
}

#[rocket::main]
async fn main() {
    let args = Args::parse();
    let command = args.command.unwrap_or(Command::Serve);

    let result = match Config::from_env() {
        Ok(config) => run(command, config).await,
        Err(error) => Err(error.into()),
    };

    if let Err(error) = result {
        eprintln!("{}", error);
        std::process::exit(1);
    }
}

async fn run(command: Command, config: Config) -> Result<(), AppError> {
    let store = ScoreStore::connect(&config).await?;

    match command {
        Command::Serve => {
            rocket(store)
                .launch()
                .await
                .map_err(|error| AppError::Launch(error.to_string()))?;
        }
        Command::DbInit => {
            store.init_schema().await?;
            println!("Created the score table");
            store.close().await;
        }
        Command::DbAdd { token, name, score } => {
            if let Some(record) = add_score(&store, &token, &name, score).await? {
                println!("Added {}", record);
            }
            store.close().await;
        }
    }

    Ok(())
}

/// Appends a score and returns the newest record stored under `token`.
async fn add_score(
    store: &ScoreStore,
    token: &str,
    name: &str,
    score: GameScore,
) -> Result<Option<ScoreRecord>, StoreError> {
    store.append(token, name, score).await?;
    Ok(store.list_records(token).await?.pop())
}

/// Builds the server around an already connected store.
/// The score table is created while the rocket ignites.
fn rocket(store: ScoreStore) -> Rocket<Build> {
    rocket::build()
        .mount(api::API_BASE, api::routes())
        .register("/", api::catchers())
        .manage(store)
        .attach(AdHoc::try_on_ignite("Score table", |rocket| async move {
            let result = match rocket.state::<ScoreStore>() {
                Some(store) => store.init_schema().await.map_err(|error| error.to_string()),
                None => Err("no score store is managed".to_owned()),
            };

            match result {
                Ok(()) => Ok(rocket),
                Err(reason) => {
                    error!("Failed to prepare the score table: {}", reason);
                    Err(rocket)
                }
            }
        }))
}

#[derive(Debug)]
enum AppError {
    Config(ConfigError),
    Store(StoreError),
    Launch(String),
}

impl std::error::Error for AppError {}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(error) => write!(f, "configuration error: {}", error),
            Self::Store(error) => write!(f, "{}", error),
            Self::Launch(reason) => write!(f, "server failed to launch: {}", reason),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::Config(error)
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        Self::Store(error)
    }
}
