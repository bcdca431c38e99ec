use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "smj",
    about = "Sort-merge join: full outer join of two key/value files",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Full outer join two files of `key<delimiter>value` lines by key
    Join(JoinArgs),
}

#[derive(Args)]
pub struct JoinArgs {
    pub left: PathBuf,
    pub right: PathBuf,
    /// Separator between key and value on each line
    #[arg(short, long, default_value = "\t")]
    pub delimiter: char,
    /// TOML file with join settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_join() {
        let cli = Cli::try_parse_from(["smj", "join", "a.tsv", "b.tsv"]).unwrap();
        let Command::Join(args) = cli.command;
        assert_eq!(args.left, PathBuf::from("a.tsv"));
        assert_eq!(args.right, PathBuf::from("b.tsv"));
        assert_eq!(args.delimiter, '\t');
        assert!(args.config.is_none());
    }

    #[test]
    fn parse_join_delimiter_and_config() {
        let cli = Cli::try_parse_from([
            "smj", "join", "-d", ",", "--config", "join.toml", "a.csv", "b.csv",
        ])
        .unwrap();
        let Command::Join(args) = cli.command;
        assert_eq!(args.delimiter, ',');
        assert_eq!(args.config, Some(PathBuf::from("join.toml")));
    }

    #[test]
    fn parse_join_requires_both_files() {
        assert!(Cli::try_parse_from(["smj", "join", "a.tsv"]).is_err());
    }

    #[test]
    fn parse_multichar_delimiter_rejected() {
        assert!(Cli::try_parse_from(["smj", "join", "-d", "::", "a", "b"]).is_err());
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["smj", "--verbose", "join", "a", "b"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["smj", "join", "a", "b", "--format", "json"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }
}
