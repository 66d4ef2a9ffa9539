use clap::Parser;
use geo_signup::config::cli::Command;
use geo_signup::domain::model::NewUser;
use geo_signup::utils::logger::{self, LogFormat};
use geo_signup::utils::validation::Validate;
use geo_signup::{
    validate_coordinate, CliConfig, ErrorKind, InMemoryUserRepository, LocationResolver,
    OpenCageClient, SignupError, SignupService,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    if let Err(e) = logger::init_logger(format, cli.verbose) {
        eprintln!("⚠️ {}", e);
    }

    tracing::info!("Starting geo-signup CLI");

    if let Err(e) = run(&cli).await {
        tracing::error!("❌ {} (kind: {:?}, status: {})", e, e.kind(), e.status_code());
        eprintln!("❌ {}", e);
        std::process::exit(exit_code(&e));
    }

    Ok(())
}

async fn run(cli: &CliConfig) -> geo_signup::Result<()> {
    let config = cli.load_app_config()?;
    config.validate()?;
    if cli.verbose {
        tracing::debug!(
            endpoint = %config.geocoder.endpoint,
            country = %config.region.country,
            timeout = ?config.geocoder.timeout(),
            "Loaded configuration"
        );
    }

    let provider = OpenCageClient::new(&config.geocoder)?;
    let resolver = LocationResolver::new(provider, config.region.country.clone());

    match &cli.command {
        Command::Resolve {
            latitude,
            longitude,
        } => {
            let coordinate = validate_coordinate(*latitude, *longitude)?;
            let city = resolver.resolve_city(&coordinate).await?;
            println!("{}", city);
        }
        Command::Signup {
            name,
            email,
            latitude,
            longitude,
        } => {
            // The store lives for this process only, so duplicate-email
            // checks and id lookups never span two invocations.
            let service = SignupService::new(resolver, InMemoryUserRepository::new());
            let user = service
                .sign_up(NewUser {
                    name: name.clone(),
                    email: email.clone(),
                    latitude: *latitude,
                    longitude: *longitude,
                })
                .await?;
            let output = serde_json::to_string_pretty(&user)
                .map_err(|e| SignupError::IoError(std::io::Error::other(e)))?;
            println!("{}", output);
        }
    }

    Ok(())
}

fn exit_code(err: &SignupError) -> i32 {
    match err.kind() {
        ErrorKind::Config | ErrorKind::Io => 1,
        ErrorKind::ProviderUnavailable | ErrorKind::ProviderRejected => 3,
        _ => 2,
    }
}
