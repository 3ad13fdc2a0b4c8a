//! CLI argument definitions using clap.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    /// Base revision (tag, branch or commit) the comparison starts from
    pub base: String,

    /// Head revision (tag, branch or commit) the comparison ends at
    pub head: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
