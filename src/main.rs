// ! For better documentation readability, please use the following VScode extension:
// https://marketplace.visualstudio.com/items/?itemName=aaron-bond.better-comments

// * Meaning of the signs:
// ! - Important
// * - Important, but not that important (usually just plain documentation, like what the function does)
// Without the signs, it's just a plain comment

// =============== Imports ================
mod args;
mod config;
mod mpvipc;
mod search;
mod theme;
mod utils;

use anyhow::{Context, Result};
use console::style;
use dialoguer::Input;
use std::process;

fn main() -> Result<()> {
    utils::init_log()?; // Initialize logging
    log::info!("Application started");

    let config = config::load_config();
    config::test(&config).context("Invalid config file")?; // Testing if the config file is valid
    utils::apply_log_level(&config)?;
    log::debug!("Configuration: {:#?}", config);

    let matches = args::handle_args();

    // * Either a file given directly, or the first search hit
    let location = match matches.get_one::<String>("file") {
        Some(file) => file.to_owned(),
        None => {
            let query = match args::query(&matches) {
                Some(query) => query,
                None => Input::with_theme(&theme::CustomTheme {})
                    .with_prompt("Search")
                    .interact_text()?,
            };
            let autogenerated = args::autogenerated(&matches, config.autogenerated);

            let result = search::search(&config.extractor, &query, autogenerated)
                .with_context(|| format!("Failed to search for: {}", query))?;
            let Some(result) = result else {
                eprintln!("No results found for: {}", query);
                log::info!("No results for query: {}", query);
                process::exit(1);
            };

            println!("{}", style(utils::describe(&result)).bold());
            if matches.get_flag("print") {
                println!("{}", result.location);
                return Ok(());
            }
            result.location
        }
    };

    play(&config, &location)
}

// Queue into the running player, or become the player if there is none
fn play(config: &config::Config, location: &str) -> Result<()> {
    let mut channel = mpvipc::PlayerChannel::new();

    if channel
        .connect()
        .with_context(|| format!("Failed to connect to player socket: {}", channel.path().display()))?
    {
        channel.append_to_playlist(location)?;
        println!("{}", style("Queued").cyan());
        log::info!("Queued {}", location);
        return Ok(());
    }

    println!("{}", style("Starting player...").cyan());
    // ! Only comes back if the player couldn't be started
    Err(channel.spawn_new_player(&config.player, location))
}
