use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::process::ExitCode;

use plank::commands::{BoardOptions, cmd_board, cmd_config_get, cmd_config_set, cmd_config_show};
use plank::types::{GroupingMode, SortingMode, VALID_GROUPINGS, VALID_SORTINGS};

#[derive(Parser)]
#[command(name = "plank")]
#[command(about = "Kanban board view over a remote ticket feed")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the ticket feed and render the grouped board
    #[command(visible_alias = "b")]
    Board {
        /// Group columns by: status, user, priority (persisted)
        #[arg(short, long, value_parser = parse_grouping)]
        group_by: Option<GroupingMode>,

        /// Order tickets by: priority, title (persisted)
        #[arg(short, long, value_parser = parse_sorting)]
        order_by: Option<SortingMode>,

        /// Override the ticket feed endpoint
        #[arg(long)]
        endpoint: Option<String>,

        /// Show the display-options panel above the board
        #[arg(long)]
        show_options: bool,

        /// Print per-group ticket counts instead of full columns
        #[arg(long)]
        summary: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or edit the persisted view preferences
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print a preference value (grouping or sorting)
    Get { key: String },

    /// Set a preference value
    Set { key: String, value: String },

    /// Show all preferences
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn parse_grouping(s: &str) -> Result<GroupingMode, String> {
    s.parse()
        .map_err(|_| format!("must be one of: {}", VALID_GROUPINGS.join(", ")))
}

fn parse_sorting(s: &str) -> Result<SortingMode, String> {
    s.parse()
        .map_err(|_| format!("must be one of: {}", VALID_SORTINGS.join(", ")))
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Board {
            group_by,
            order_by,
            endpoint,
            show_options,
            summary,
            json,
        } => {
            cmd_board(BoardOptions {
                group_by,
                order_by,
                endpoint,
                show_options,
                summary,
                json,
            })
            .await
        }
        Commands::Config { action } => match action {
            ConfigAction::Get { key } => cmd_config_get(&key),
            ConfigAction::Set { key, value } => cmd_config_set(&key, &value),
            ConfigAction::Show { json } => cmd_config_show(json),
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
