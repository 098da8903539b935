use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::builder::rail::ApiStyle;

#[derive(Parser)]
#[command(version, about = "Railroad diagrams for the C23 grammar")]
pub struct Cli {
    /// Only render rules whose name contains this text (case-insensitive)
    #[arg(short, long, value_name = "QUERY", default_value = "")]
    pub filter: String,

    /// Only render this section (default: all of them)
    #[arg(short, long, value_name = "SECTION")]
    pub section: Option<String>,

    /// File to write the page to (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Calling convention the diagram library is driven with
    #[arg(long, value_enum, default_value_t = Style::Class)]
    pub api_style: Style,

    /// Print the names of the rules that would be rendered
    #[arg(long)]
    pub list: bool,

    /// Check rule references and section entries, then exit
    #[arg(long)]
    pub check: bool,

    /// Print random samples of RULE instead of rendering
    #[arg(long, value_name = "RULE")]
    pub sample: Option<String>,

    /// Amount of samples to generate (default: 1)
    #[arg(short = 'n', long, value_name = "AMOUNT")]
    pub amount: Option<u32>,

    /// How many levels of rule references samples expand (at most 8)
    #[arg(long, value_name = "DEPTH", default_value_t = 2, value_parser = clap::value_parser!(u8).range(..=8))]
    pub depth: u8,

    /// Seed for samples (default: random)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Log debug output to stderr
    #[arg(short, long)]
    pub verbose: bool
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Style {
    Factory,
    Class
}

impl From<Style> for ApiStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Factory => ApiStyle::Factory,
            Style::Class => ApiStyle::Class
        }
    }
}
