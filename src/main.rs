use pokedex;

mod config;
mod view;

use crate::config::Config;
use crate::pokedex::action;
use crate::pokedex::{Name, Session, State, Status, Store};
use crate::view::View;

use clap::Parser;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task;

/// Look up a Pokémon in the online catalog.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Name of the Pokémon to look up, in any casing
    name: String,

    /// Also fetch its evolution line
    #[arg(long)]
    evolution: bool,

    /// Print the cached record as JSON
    #[arg(long)]
    json: bool,

    /// Base URL of the catalog API
    #[arg(long, env = "POKESCAN_API_URL")]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), anywho::Error> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load().await?;

    let session = Session::new(cli.api_url.as_deref().unwrap_or(&config.base_url))?;
    let store = Store::new();

    let Some(name) = Name::parse(&cli.name) else {
        println!("{}", View::NotFound { query: &cli.name });

        return Ok(());
    };

    let observer = observe(store.subscribe());

    let _ = action::lookup(&store, &session, &name).await;

    if cli.evolution && store.snapshot().detail_status == Status::Success {
        let evolution_line = store
            .snapshot()
            .get(&name)
            .and_then(|entity| entity.species.as_ref())
            .and_then(|species| species.evolution_line.clone());

        match evolution_line {
            Some(evolution_line) => {
                if let Ok(fanout) =
                    action::fetch_evolution_chain(&store, &session, &evolution_line, &name).await
                {
                    // Thumbnails must be in place before rendering
                    fanout.join().await;
                }
            }
            None => {
                log::warn!("{name} has no known evolution line");
            }
        }
    }

    observer.abort();

    let state = store.snapshot();

    match View::new(&state, &name, &cli.name) {
        View::Found { entity, .. } if cli.json => {
            println!("{}", serde_json::to_string_pretty(entity)?);
        }
        view => {
            println!("{view}");
        }
    }

    Ok(())
}

fn observe(mut receiver: watch::Receiver<Arc<State>>) -> task::JoinHandle<()> {
    task::spawn(async move {
        let mut previous = receiver.borrow_and_update().detail_status;

        while receiver.changed().await.is_ok() {
            let current = receiver.borrow_and_update().detail_status;

            if current != previous {
                log::debug!("Detail status: {previous} -> {current}");

                if current == Status::Pending {
                    eprintln!("{}", View::Loading);
                }
            }

            previous = current;
        }
    })
}
