use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Solves corridor puzzles: minimum-cost token sorting and virus containment.", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Command,

    /// Suppress verbose log output, only printing results or errors.
    #[clap(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the minimal cost to sort a compartment diagram into its goal.
    Sort {
        /// Diagram file to solve
        input: PathBuf,
    },
    /// Run the containment simulation over an edge-list file.
    Contain {
        /// Edge-list file, one `node1-node2` link per line
        input: PathBuf,
    },
}
