use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use treescope::tree::{TreeOptions, TreePrinter};
use treescope::ui::TreeColor;

#[derive(Parser)]
#[command(name = "treescope")]
#[command(version)]
#[command(about = "Directory tree printer with depth-cycled terminal colors", long_about = None)]
struct Cli {
    /// Directory to print (defaults to the current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Include hidden entries (names starting with a dot)
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Comma-separated color cycle, e.g. "white,purple,yellow"
    #[arg(long, value_delimiter = ',', value_name = "COLORS")]
    colors: Option<Vec<TreeColor>>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = TreeOptions::new(cli.path)
        .show_hidden(cli.all)
        .use_color(!cli.no_color);

    let stdout = io::stdout();
    let mut printer = match cli.colors {
        Some(colors) => TreePrinter::with_color_sequence(options, stdout.lock(), colors),
        None => TreePrinter::new(options, stdout.lock()),
    };

    printer.print_tree().context("failed to write tree output")?;
    Ok(())
}
