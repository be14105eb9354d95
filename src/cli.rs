use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{ArgGroup, Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the invocation only touches the configuration file
pub fn is_config_operation(args: &Args) -> bool {
    args.new_region.is_some() || args.new_api_key.is_some() || args.list_config
}

/// League of Legends match statistics from the Riot API
///
/// Looks up summoners, lists their matches and extracts per-player
/// statistics from finished games. Requests are rate limited: a 429 answer
/// is retried once after a second and once more after two minutes.
///
/// Credentials are read from the config file, or from the RIOT_REGION and
/// RIOT_API_KEY environment variables.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Update the platform region (e.g. euw1, na1) in config.
    #[arg(long = "config-region", help_heading = "Configuration", global = true)]
    pub new_region: Option<String>,

    /// Update the Riot API key in config.
    #[arg(long = "config-key", help_heading = "Configuration", global = true)]
    pub new_api_key: Option<String>,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Also print log output to stderr. Logs always go to the log file.
    #[arg(long = "debug", help_heading = "Debug", global = true)]
    pub debug: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug", global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the encrypted account id of a summoner
    Summoner {
        /// Summoner name
        name: String,
    },

    /// Print the summoner name of an encrypted account id
    Account {
        account_id: String,
    },

    /// List matches of an account as a table
    Matchlist {
        account_id: String,

        /// Comma separated champion ids, e.g. "157,238"
        #[arg(long)]
        champions: Option<String>,

        /// Comma separated queue ids, e.g. "420,440"
        #[arg(long)]
        queues: Option<String>,

        /// Earliest game start, epoch milliseconds
        #[arg(long)]
        begin_time: Option<i64>,

        /// Latest game start, epoch milliseconds
        #[arg(long)]
        end_time: Option<i64>,

        /// First match index (defaults to 0 when only --end-index is given)
        #[arg(long)]
        begin_index: Option<u32>,

        /// One past the last match index (at most 100 after --begin-index)
        #[arg(long)]
        end_index: Option<u32>,

        /// Print tab separated values instead of an aligned table
        #[arg(long, help_heading = "Output")]
        tsv: bool,

        /// Show timestamps as UTC date and time
        #[arg(long, help_heading = "Output")]
        utc: bool,
    },

    /// Print a match document as JSON
    Match {
        game_id: u64,
    },

    /// Print a match timeline as JSON
    Timeline {
        game_id: u64,
    },

    /// Print one statistic of a player in a match
    ///
    /// Statistics: kills, deaths, assists, totalGold, goldPerMin, cs,
    /// csPerMin, damage, damagePerMin, kdr, champion.
    #[command(group(ArgGroup::new("player").required(true).args(["summoner", "champion"])))]
    Stat {
        game_id: u64,

        statistic: String,

        /// Select the player by summoner name
        #[arg(long)]
        summoner: Option<String>,

        /// Select the player by the champion they played
        #[arg(long)]
        champion: Option<String>,
    },

    /// List the champions played in a match
    Champions {
        game_id: u64,

        /// "blue" or "red"; both sides when omitted
        #[arg(long)]
        side: Option<String>,
    },

    /// List the summoner names in a match
    Summoners {
        game_id: u64,

        /// "blue" or "red"; both sides when omitted
        #[arg(long)]
        side: Option<String>,
    },

    /// List all champion names of the current game version
    Catalog,
}
