use std::path::PathBuf;

use clap::{Parser, ValueHint};
use tree_tally_engine::DEFAULT_ROOT;

use crate::options::OutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "tree_tally",
    version = crate::VERSION,
    about = "Count lines, files, folders and bytes under a directory tree"
)]
pub struct Args {
    /// Directory (or single file) to scan
    #[arg(default_value = DEFAULT_ROOT, value_hint = ValueHint::AnyPath)]
    pub path: PathBuf,

    /// Do not narrate every visited entry
    #[arg(short, long)]
    pub quiet: bool,

    /// Follow symbolic links instead of counting them as plain files
    #[arg(short = 'L', long)]
    pub follow: bool,

    /// Skip entries that cannot be read and report them after the summary
    #[arg(long)]
    pub keep_going: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn no_arguments_scan_default_root_verbosely() {
        let args = Args::try_parse_from(["tree_tally"]).unwrap();
        assert_eq!(args.path, PathBuf::from("toBeCounted"));
        assert!(!args.quiet);
        assert!(!args.keep_going);
        assert_eq!(args.format, OutputFormat::Text);
    }

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "tree_tally",
            "src",
            "--quiet",
            "-L",
            "--keep-going",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(args.path, PathBuf::from("src"));
        assert!(args.quiet && args.follow && args.keep_going);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn command_definition_is_valid() {
        Args::command().debug_assert();
    }
}
