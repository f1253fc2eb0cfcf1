use std::io::{self, BufWriter};
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use shortmap::cli::Cli;
use shortmap::config::StaticConfig;
use shortmap::errors::ShortmapError;
use shortmap::interfaces::run_command_loop;
use shortmap::storage::{MappingStore, StoreOptions};
use shortmap::system::init_logging;

fn main() {
    if let Err(e) = run() {
        match e.downcast_ref::<ShortmapError>() {
            Some(err) => {
                // 先输出上下文，再输出带错误码的详情
                if e.chain().count() > 1 {
                    eprintln!("{}", e);
                }
                eprintln!("{}", err.format_colored());
            }
            None => eprintln!("{:#}", e),
        }
        process::exit(1);
    }
}

fn run() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = StaticConfig::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    if cli.print_config {
        print!("{}", config.to_toml());
        return Ok(());
    }

    let _guard = init_logging(&config.logging)?;
    debug!("Effective config: {:?}", config);

    let options = StoreOptions::from(&config.store);
    let log_path = config.store.log_file.as_deref().map(Path::new);
    let mut store = MappingStore::open(log_path, &options)
        .context("Failed to open mapping store")?;
    info!("Mapping store ready with {} entries", store.len());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_command_loop(&mut store, stdin.lock(), BufWriter::new(stdout.lock()))
        .context("Command loop aborted")?;

    Ok(())
}
