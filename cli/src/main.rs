mod commands;
mod interactive;
mod terminal;

use commands::{CommandLine, Commands, add, delete, list, rates, ui};
use shipbox_common::config::Config;
use shipbox_common::storage::BoxStorage;
use shipbox_core::storage::{FileStorage, MemoryStorage};
use shipbox_core::store::BoxStore;
use terminal::{logging, print};

pub type SessionStore = BoxStore<Box<dyn BoxStorage>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.config();

    logging::init_logging();

    if !matches!(commands.command, Commands::Ui) {
        print::banner(cfg.no_banner, cfg.quiet);
    }

    let store: SessionStore = open_store(&cfg);

    match commands.command {
        Commands::Add {
            receiver,
            weight,
            color,
            country,
        } => {
            print::header("adding a box", cfg.quiet);
            add::add(store, receiver, weight, color, country, &cfg)
        }
        Commands::List {
            search,
            country,
            sort,
            desc,
        } => list::list(&store, search, country, sort, desc, &cfg),
        Commands::Delete { id } => delete::delete(store, &id, &cfg),
        Commands::Rates => {
            rates::rates(&cfg);
            Ok(())
        }
        Commands::Quote { weight, country } => {
            rates::quote(weight, country, &cfg);
            Ok(())
        }
        Commands::Ui => ui::ui(store, &cfg).await,
    }
}

fn open_store(cfg: &Config) -> SessionStore {
    let storage: Box<dyn BoxStorage> = if cfg.ephemeral {
        Box::new(MemoryStorage::new())
    } else {
        Box::new(FileStorage::new(&cfg.data_dir))
    };
    BoxStore::open(storage)
}
