#![forbid(unsafe_code)]

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use log::info;
use structopt::StructOpt;

use rbset::{draw, toggle_values, Mode, TreePrinter, TreeSet};

////////////////////////////////////////////////////////////////////////////////

/// Builds an ordered set from generated and file-provided values and renders
/// it as a tree on stderr.
#[derive(Debug, StructOpt)]
#[structopt(name = "rbset")]
struct Opt {
    /// Number of elements to generate, or a file of hex values to add
    count_or_file: String,

    /// File of hex values to add or remove
    #[structopt(parse(from_os_str))]
    file: Option<PathBuf>,

    /// Build a plain binary search tree instead of a red-black tree
    #[structopt(long)]
    plain: bool,

    /// Silence all log output
    #[structopt(short, long)]
    quiet: bool,

    /// Increase log verbosity (-v, -vv, ...)
    #[structopt(short, long, parse(from_occurrences))]
    verbose: usize,
}

/// The generated values come from `0..POOL`, drawn without replacement.
const POOL: usize = 255;
const SEED: u64 = 0;

fn main() -> Result<()> {
    let opt = Opt::from_args();
    stderrlog::new()
        .module(module_path!())
        .quiet(opt.quiet)
        .verbosity(opt.verbose)
        .init()?;

    let count = opt.count_or_file.parse::<usize>().ok();
    let entry = match (count, &opt.file) {
        (Some(_), file) => file.clone(),
        (None, None) => Some(PathBuf::from(&opt.count_or_file)),
        (None, Some(_)) => bail!("arg1 ought to be numeric."),
    };

    let mode = if opt.plain {
        Mode::Plain
    } else {
        Mode::Balanced
    };
    let mut tree = TreeSet::new(mode);

    if let Some(n) = count {
        println!("generating {} element(s).", n);
        for value in draw(n, POOL, SEED)? {
            tree.insert(value);
        }
    }

    if let Some(path) = entry {
        let file =
            File::open(&path).with_context(|| format!("file {} not found.", path.display()))?;
        toggle_values(&mut tree, BufReader::new(file), io::stdout())?;
    }

    info!("rendering {} element(s)", tree.len());
    TreePrinter::new(&tree, io::stderr().lock()).print()?;
    Ok(())
}
