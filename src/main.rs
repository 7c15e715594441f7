use clap::Parser;
use ntn::application::{setup, DumpService, PostService, ReadService, SearchService, TodayService};
use ntn::cli::{Cli, Commands, PostCommands};
use ntn::error::NtnError;
use ntn::infrastructure::{Config, NotionClient};

fn main() {
    // Pick up NOTION_API_KEY from a .env file in the working directory
    // before anything reads the environment.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), NtnError> {
    match cli.command {
        // Setup only writes the config file; no credential needed yet.
        Commands::Setup => setup::run(),

        Commands::Dump { text } => {
            let config = Config::load()?;
            let client = NotionClient::new(&config.api_key)?;
            DumpService::new(client).execute(&config, &text)
        }

        Commands::Today => {
            let config = Config::load()?;
            let client = NotionClient::new(&config.api_key)?;
            TodayService::new(client).execute(&config)
        }

        Commands::Post { command } => {
            let config = Config::load()?;
            let client = NotionClient::new(&config.api_key)?;
            let service = PostService::new(client);
            match command {
                PostCommands::Add { url, note, source } => {
                    service.add(&config, &url, &note, &source)
                }
                PostCommands::List { limit } => service.list(&config, limit),
            }
        }

        Commands::Search { query } => {
            let config = Config::load()?;
            let client = NotionClient::new(&config.api_key)?;
            SearchService::new(client).execute(&query)
        }

        Commands::Read { title } => {
            let config = Config::load()?;
            let client = NotionClient::new(&config.api_key)?;
            ReadService::new(client).execute(&title)
        }
    }
}
