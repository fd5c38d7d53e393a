use clap::Parser;
use ja_bpe_prep::cli::{diagnostic, execute_prepare, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(error) = execute_prepare(cli.into()) {
        eprintln!("{}", diagnostic(&error));
        std::process::exit(1);
    }
}
