//! Lookup command - query the product database directly.

use clap::Args;
use console::style;

use halscan_core::OpenFoodFactsClient;

/// Arguments for the lookup command.
#[derive(Args)]
pub struct LookupArgs {
    /// Product name to search for
    #[arg(required = true)]
    name: String,
}

pub async fn run(args: LookupArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let client = OpenFoodFactsClient::new(&config.lookup)
        .map_err(|e| anyhow::anyhow!("failed to build lookup client: {e}"))?;

    match client.search(&args.name).await {
        Some(hit) => {
            println!("{} Best match for \"{}\":", style("✓").green(), args.name);
            println!("  {:<13} {}", "Ingredients:", hit.ingredients);
            println!("  {:<13} {}", "Manufacturer:", hit.manufacturer);
            println!("  {:<13} {}", "Country:", hit.country);
        }
        None => {
            println!(
                "{} No products found for \"{}\".",
                style("ℹ").blue(),
                args.name
            );
        }
    }

    Ok(())
}
