/**
 * Globetrotter command-line entry point
 *
 * Exercises the backend core against the configured countries service:
 *
 * ```text
 * globetrotter country <name>
 * globetrotter search <partial>
 * globetrotter all
 * globetrotter token <user_id> <username>
 * ```
 *
 * Country results are printed as normalized JSON.
 */

#[cfg(feature = "ssr")]
use globetrotter::backend::{CountriesClient, CountryDetails, TokenIssuer, User};
#[cfg(feature = "ssr")]
use globetrotter::shared::AppConfig;

#[cfg(feature = "ssr")]
const USAGE: &str = "usage: globetrotter <country NAME | search PARTIAL | all | token USER_ID USERNAME>";

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env()?;
    tracing::debug!("Countries service at {}", config.countries_api_url);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    let output = match args.as_slice() {
        ["country", name] => {
            let client = CountriesClient::new(&config);
            let country = client.get_country(name).await?;
            serde_json::to_value(CountryDetails::from_raw(&country))?
        }
        ["search", partial] => {
            let client = CountriesClient::new(&config);
            let details: Vec<CountryDetails> = client
                .search_countries(partial)
                .await?
                .iter()
                .map(CountryDetails::from_raw)
                .collect();
            serde_json::to_value(details)?
        }
        ["all"] => {
            let client = CountriesClient::new(&config);
            let details: Vec<CountryDetails> = client
                .get_all_countries()
                .await?
                .iter()
                .map(CountryDetails::from_raw)
                .collect();
            tracing::info!("Fetched {} countries", details.len());
            serde_json::to_value(details)?
        }
        ["token", user_id, username] => {
            let issuer = TokenIssuer::from_config(&config)?;
            let user = User::new(user_id.parse()?, *username);
            serde_json::json!({ "token": issuer.issue(&user)? })
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("globetrotter requires the 'ssr' feature to be enabled.");
    eprintln!("Run with: cargo run --bin globetrotter --features ssr");
    std::process::exit(1);
}
