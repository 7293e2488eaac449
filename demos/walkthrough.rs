//! Builds a couple of trees, mutates them, and prints what happens at each step.
//!
//! Set `BST_LOG` (e.g. `BST_LOG=trace`) to see what the tree logs while it works.

use std::error::Error;
use std::io::{self, Write};
use std::str::FromStr;

use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use unbalanced_bst::Tree;

fn initialize_logging() -> Result<(), Box<dyn Error>> {
    let level = match std::env::var("BST_LOG") {
        Ok(level) => LevelFilter::from_str(&level)?,
        Err(_) => LevelFilter::Info,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    Ok(())
}

fn keys(walk: impl FnOnce(&mut dyn FnMut(&i32))) -> String {
    let mut out = Vec::new();
    walk(&mut |key: &i32| out.push(key.to_string()));
    out.join(" ")
}

fn main() -> Result<(), Box<dyn Error>> {
    initialize_logging()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut tree = Tree::new();
    writeln!(out, "Elements in the tree: {}", tree.count())?;

    writeln!(out, "Filling the tree...")?;
    for key in [5, 7, 10, 3, 4, 6, 11] {
        tree.insert(key);
    }
    tree.print(&mut out)?;
    writeln!(out)?;

    writeln!(out, "Is 13 in the tree: {}", tree.iterative_search(&13))?;
    writeln!(out, "Is 7 in the tree: {}", tree.iterative_search(&7))?;

    for key in [5, 7, 11] {
        tree.delete_key(&key);
    }
    tree.print(&mut out)?;
    writeln!(out)?;

    writeln!(out, "Tree height: {}", tree.height())?;
    writeln!(out, "{}", keys(|visit| tree.inorder_walk(visit)))?;
    writeln!(out, "{}", keys(|visit| tree.iterative_inorder_walk(visit)))?;
    writeln!(out, "{}", keys(|visit| tree.walk_by_levels(visit)))?;

    writeln!(out, "Building tree1 from the same keys")?;
    let mut tree1 = Tree::new();
    for key in [3, 4, 6, 10] {
        tree1.insert(key);
    }
    writeln!(out, "Tree and tree1 are similar: {}", tree.is_similar(&tree1))?;
    writeln!(
        out,
        "Tree and tree1 have identical key: {}",
        tree.is_identical_key(&tree1)
    )?;

    writeln!(out, "Adding 9 to tree1...")?;
    tree1.insert(9);
    writeln!(out, "Tree and tree1 are similar: {}", tree.is_similar(&tree1))?;
    writeln!(
        out,
        "Tree and tree1 have identical key: {}",
        tree.is_identical_key(&tree1)
    )?;

    Ok(())
}
