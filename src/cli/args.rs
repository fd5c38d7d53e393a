use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "ja_bpe_prep")]
#[command(about = "Tokenize a training transcript by Japanese characters for BPE training")]
#[command(version)]
pub struct Cli {
    /// Output directory. The generated transcript_chars.txt is saved to this directory.
    #[arg(long)]
    pub lang_dir: PathBuf,

    /// Training transcript.
    #[arg(long)]
    pub text: PathBuf,

    /// Do not print progress
    #[arg(short, long)]
    pub quiet: bool,
}
