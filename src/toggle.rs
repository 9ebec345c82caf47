use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::debug;

use crate::tree::TreeSet;

////////////////////////////////////////////////////////////////////////////////

/// Value marking the end of the token stream.
const END_MARK: i64 = -1;

/// Applies whitespace-separated base-16 tokens to the tree: a new key is
/// inserted, a key already present is erased instead. Reading stops at the
/// `-1` marker. One report line per applied value goes to `out`.
///
/// The insert-else-erase policy lives here; the tree itself only reports
/// whether an insert took place.
pub fn toggle_values<R: BufRead, W: Write>(
    tree: &mut TreeSet,
    mut input: R,
    mut out: W,
) -> Result<()> {
    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .context("reading the value list")?;
    for token in text.split_whitespace() {
        let value = i64::from_str_radix(token, 16)
            .with_context(|| format!("not a base-16 number: {}", token))?;
        if value == END_MARK {
            debug!("end marker reached");
            break;
        }
        let (inserted, node) = tree.insert(value);
        if inserted {
            writeln!(out, "{:02X}:{:02X} inserted.", value, value)?;
        } else {
            tree.erase(node);
            writeln!(out, "{:02X}:{:02X} erased.", value, value)?;
        }
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////
