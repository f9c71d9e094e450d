use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "fitness-tracker",
    about = "Compute distance, speed and calories from workout sensor packages"
)]
pub struct Cli {
    /// Package given inline as CODE=V1,V2,... (repeatable).
    ///
    /// Codes: SWM (action,duration,weight,pool_length,pool_count),
    /// RUN (action,duration,weight), WLK (action,duration,weight,height).
    #[arg(short = 'p', long = "package", value_name = "CODE=V1,V2,...")]
    pub packages: Vec<String>,

    /// JSON file with an array of [code, [readings...]] pairs.
    ///
    /// Without --package or --file the built-in demo packages are used.
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Print one JSON object per package instead of the text summary.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_packages() {
        let cli = Cli::try_parse_from([
            "fitness-tracker",
            "-p",
            "RUN=15000,1,75",
            "--package",
            "WLK=9000,1,75,180",
            "--json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.packages, vec!["RUN=15000,1,75", "WLK=9000,1,75,180"]);
        assert!(cli.file.is_none());
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.quiet, 0);
    }
}
