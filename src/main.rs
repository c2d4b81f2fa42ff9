use clap::Parser;
use fun_fact_finder::app::lookup_once;
use fun_fact_finder::utils::logger;
use fun_fact_finder::{
    ApiSettings, CliConfig, FactError, FormSession, NumbersApiClient, Result, TomlConfig,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting fun-fact-finder");

    let client = match build_client(&config) {
        Ok(client) => client,
        Err(e) => exit_with(&e),
    };

    if let Some((month, day)) = config.one_shot() {
        match lookup_once(&client, month, day).await {
            Ok(rendered) => println!("{}", rendered),
            Err(e) => exit_with(&e),
        }
        return Ok(());
    }

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut session = FormSession::new(Arc::new(client), std::io::stdout());
    if let Err(e) = session.run(stdin).await {
        exit_with(&e);
    }

    Ok(())
}

fn build_client(config: &CliConfig) -> Result<NumbersApiClient> {
    let file = config
        .config
        .as_ref()
        .map(TomlConfig::from_file)
        .transpose()?;
    let settings = ApiSettings::resolve(config.overrides(), file)?;
    tracing::debug!("Resolved settings: {:?}", settings);

    NumbersApiClient::new(&settings)
}

fn exit_with(e: &FactError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
