use clap::error::ErrorKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "treetally",
    version,
    about = "Crawl a directory tree and watch entry counts and extensions add up live"
)]
pub struct Cli {
    /// Directory to crawl
    pub folder_path: PathBuf,

    /// Log crawler and renderer activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse arguments. Usage errors print to stderr and exit with status 1;
    /// `--help` and `--version` exit 0 as usual.
    pub fn parse_or_exit() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
                _ => {
                    let _ = err.print();
                    std::process::exit(1);
                }
            },
        }
    }
}
