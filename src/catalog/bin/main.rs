use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use bookshelf::books::repository::file_book_repository::FileBookRepository;
use bookshelf::catalog::controller::ConsoleController;
use bookshelf::catalog::factory::create_catalog_service;
use bookshelf::core::domain::{Configuration, DEFAULT_DATA_FILE};
use bookshelf::core::repository::RepositoryStore;
use bookshelf::utils::logs::{level_for, setup_tracing};

/// Interactive library book catalog.
#[derive(Debug, Parser)]
#[command(name = "catalog", version, about)]
struct Args {
    /// JSON file holding the catalog
    #[arg(long, default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Where books are kept: `file` or `memory`
    #[arg(long, default_value = "file", value_parser = parse_store)]
    store: RepositoryStore,

    /// Create an empty data file if none exists
    #[arg(long)]
    init: bool,

    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_store(name: &str) -> Result<RepositoryStore, String> {
    RepositoryStore::parse(name).ok_or_else(|| format!("unknown store {:?}, expected file or memory", name))
}

fn main() -> ExitCode {
    let args = Args::parse();
    setup_tracing(level_for(args.verbose));

    let config = Configuration::new(&args.data_file);
    if args.init && args.store == RepositoryStore::LocalFile {
        match FileBookRepository::new(&config.data_path).init() {
            Ok(true) => info!(path = %config.data_path.display(), "initialized data file"),
            Ok(false) => {}
            Err(err) => {
                error!(error = %err, "failed to initialize data file");
                eprintln!("Ошибка: {}", err);
                return ExitCode::FAILURE;
            }
        }
    }

    let controller = ConsoleController::new(create_catalog_service(&config, args.store));
    let stdin = io::stdin();
    match controller.run(stdin.lock(), io::stdout()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "console failed");
            ExitCode::FAILURE
        }
    }
}
