use std::fmt::Display;
use std::io::{self, Write};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use plain_bst::{count_trees, Tree};

#[derive(Parser)]
#[command(name = "bst-demo")]
#[command(about = "Builds a three node tree and runs every tree operation on it")]
struct Args {
    #[arg(long, default_value = "1", allow_negative_numbers = true)]
    low: i64,

    #[arg(long, default_value = "2", allow_negative_numbers = true)]
    mid: i64,

    #[arg(long, default_value = "3", allow_negative_numbers = true)]
    high: i64,

    /// Number of keys to count distinct tree shapes for. Counts from 70 keys up overflow.
    #[arg(long, default_value = "4", value_parser = clap::value_parser!(u8).range(0..70))]
    count_keys: u8,
}

/// Writes one value per line.
fn print_values<W, T>(mut out: W, values: &[&T]) -> io::Result<()>
where
    W: Write,
    T: Display,
{
    for value in values {
        writeln!(out, "{}", value)?;
    }
    Ok(())
}

/// Rejects a `--low`, `--mid`, `--high` triple that is not in ascending order.
fn check_order(args: &Args) -> Result<(), clap::Error> {
    if args.low <= args.mid && args.mid <= args.high {
        return Ok(());
    }
    Err(Args::command().error(
        ErrorKind::ValueValidation,
        format!(
            "--low, --mid and --high must be in ascending order, got {}, {}, {}",
            args.low, args.mid, args.high
        ),
    ))
}

/// Builds the tree and writes the result of every operation to `out`.
fn run(args: &Args, mut out: impl Write) -> io::Result<()> {
    let mut tree = Tree::build_123(args.low, args.mid, args.high);
    log::info!("Built tree from {}, {}, {}", args.low, args.mid, args.high);

    writeln!(out, "Binary Tree Demo")?;
    writeln!(out, "Lookup {}? {}", args.mid, tree.contains(&args.mid))?;
    writeln!(out, "Size: {}", tree.size())?;
    writeln!(out, "MaxDepth: {}", tree.max_depth())?;
    match tree.min_value() {
        Ok(min) => writeln!(out, "MinValue: {}", min)?,
        Err(e) => writeln!(out, "MinValue: {}", e)?,
    }
    writeln!(out, "Same Tree? {}", tree.same_tree(&tree))?;
    writeln!(
        out,
        "Count Trees({}): {}",
        args.count_keys,
        count_trees(usize::from(args.count_keys))
    )?;

    writeln!(out, "PrintTree:")?;
    print_values(&mut out, &tree.inorder())?;

    writeln!(out, "PrintPostOrder:")?;
    print_values(&mut out, &tree.postorder())?;

    writeln!(out, "Mirrored:")?;
    tree.mirror();
    print_values(&mut out, &tree.inorder())?;

    writeln!(out, "Mirrored Again:")?;
    tree.mirror();
    print_values(&mut out, &tree.inorder())?;

    writeln!(out, "Doubled:")?;
    tree.double_tree();
    print_values(&mut out, &tree.inorder())?;

    writeln!(out, "End of Tests")?;
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();
    if let Err(e) = check_order(&args) {
        e.exit();
    }

    let stdout = io::stdout();
    run(&args, stdout.lock())
}
