use clap::Parser;
use ed_types::{Cost, CostModel, TableShape};
use ed_vis::{TablePrinter, When};
use edist::EditDp;
use std::io::{stdin, stdout, Write};

/// Fill and print the weighted edit-distance cost table for two words.
#[derive(Parser)]
pub struct Cli {
    /// First word. Prompted for interactively when absent.
    #[clap(long)]
    w1: Option<String>,

    /// Second word. Prompted for interactively when absent.
    #[clap(long)]
    w2: Option<String>,

    /// Print the table after every single cell update.
    #[clap(long)]
    steps: bool,

    /// Skip printing the final table.
    #[clap(long)]
    no_final: bool,

    /// Deletion weight.
    #[clap(long, default_value_t = 1)]
    del: Cost,

    /// Insertion weight.
    #[clap(long, default_value_t = 1)]
    ins: Cost,

    /// Substitution weight.
    #[clap(long, default_value_t = 2)]
    sub: Cost,

    /// Size both table dimensions from the first word (the historical
    /// allocation; requires equal-length words).
    #[clap(long)]
    square: bool,
}

fn main() {
    let cli = Cli::parse();

    let w1 = cli.w1.unwrap_or_else(|| prompt("First word"));
    let w2 = cli.w2.unwrap_or_else(|| prompt("Second word"));

    let when = if cli.steps {
        When::All
    } else if cli.no_final {
        When::None
    } else {
        When::Last
    };
    let shape = if cli.square {
        TableShape::Square
    } else {
        TableShape::Rectangular
    };

    let dp = EditDp::with_visualizer(
        CostModel::new(cli.del, cli.ins, cli.sub),
        shape,
        TablePrinter::new(when),
    );
    dp.table(w1.as_bytes(), w2.as_bytes());
}

fn prompt(name: &str) -> String {
    print!("{name}: ");
    stdout().flush().unwrap();
    let mut line = String::new();
    stdin().read_line(&mut line).unwrap();
    line.trim_end().to_string()
}
