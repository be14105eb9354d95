use crate::cli::{Args, Command};
use crossterm::{
    execute,
    style::{Attribute, Print, SetAttribute},
};
use riot_stats::config::Config;
use riot_stats::error::AppError;
use riot_stats::riot_api::{MatchlistFilter, RiotClient, parse_id_list};
use riot_stats::stats::{Side, Statistic, champion_roster, summoner_roster};
use riot_stats::table::{
    TimestampStyle, matchlist_table, render_aligned, write_table,
};
use std::io::{IsTerminal, Write, stdout};
use tracing::info;

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles --config-region and --config-key.
///
/// Starts from the saved config when there is one, so other settings survive.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if std::path::Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    if let Some(region) = &args.new_region {
        config.region = region.trim().to_lowercase();
    }
    if let Some(api_key) = &args.new_api_key {
        config.api_key = api_key.trim().to_string();
    }

    // A first-time setup may set region and key in separate invocations
    if !config.region.is_empty() && !config.api_key.is_empty() {
        config.validate()?;
    }
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Runs one subcommand against the API and prints its result to stdout.
pub async fn run_command(client: &RiotClient, command: Command) -> Result<(), AppError> {
    match command {
        Command::Summoner { name } => {
            let account_id = client.account_id_by_summoner(&name).await?;
            println!("{account_id}");
        }
        Command::Account { account_id } => {
            let name = client.summoner_name_by_account(&account_id).await?;
            println!("{name}");
        }
        Command::Matchlist {
            account_id,
            champions,
            queues,
            begin_time,
            end_time,
            begin_index,
            end_index,
            tsv,
            utc,
        } => {
            let filter = MatchlistFilter::new()
                .champions(parse_id_list(champions.as_deref().unwrap_or_default())?)
                .queues(parse_id_list(queues.as_deref().unwrap_or_default())?)
                .time_range(begin_time, end_time)
                .index_range_bounds(begin_index, end_index);

            let matches = client.matchlist(&account_id, &filter).await?;
            let style = if utc {
                TimestampStyle::Utc
            } else {
                TimestampStyle::Raw
            };
            let rows = matchlist_table(&matches, style);

            if tsv {
                write_table(stdout().lock(), &rows, '\t')?;
            } else {
                print_aligned(&rows)?;
            }
        }
        Command::Match { game_id } => {
            let document = client.match_by_id(game_id).await?;
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        Command::Timeline { game_id } => {
            let timeline = client.timeline_by_id(game_id).await?;
            println!("{}", serde_json::to_string_pretty(&timeline)?);
        }
        Command::Stat {
            game_id,
            statistic,
            summoner,
            champion,
        } => {
            // Validate before spending any requests
            let statistic: Statistic = statistic.parse()?;
            let catalog = client.champion_catalog().await?;

            let value = match (summoner, champion) {
                (Some(summoner), _) => {
                    client
                        .stat_for_summoner(game_id, &summoner, statistic, &catalog)
                        .await?
                }
                (None, Some(champion)) => {
                    client
                        .stat_for_champion(game_id, &champion, statistic, &catalog)
                        .await?
                }
                (None, None) => return Err(AppError::missing_argument("--summoner or --champion")),
            };
            println!("{value}");
        }
        Command::Champions { game_id, side } => {
            let side = Side::parse(side.as_deref())?;
            let catalog = client.champion_catalog().await?;
            let document = client.match_by_id(game_id).await?;
            for name in champion_roster(&document, side, &catalog)? {
                println!("{name}");
            }
        }
        Command::Summoners { game_id, side } => {
            let side = Side::parse(side.as_deref())?;
            let document = client.match_by_id(game_id).await?;
            for name in summoner_roster(&document, side) {
                println!("{name}");
            }
        }
        Command::Catalog => {
            let catalog = client.champion_catalog().await?;
            info!("Listing {} champions", catalog.len());
            for name in catalog.all_names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}

/// Prints an aligned table, with a bold header when stdout is a terminal.
fn print_aligned(rows: &[Vec<String>]) -> Result<(), AppError> {
    let mut lines = render_aligned(rows).into_iter();
    let mut out = stdout();

    if let Some(header) = lines.next() {
        if out.is_terminal() {
            execute!(
                out,
                SetAttribute(Attribute::Bold),
                Print(header),
                SetAttribute(Attribute::Reset),
                Print("\n")
            )?;
        } else {
            writeln!(out, "{header}")?;
        }
    }
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
