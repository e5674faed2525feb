//! Writes `nicinfo.1` plus one page per subcommand.
//!
//! Usage: `manpage [OUT_DIR]`, default `man/`.

use anyhow::Context;
use clap::CommandFactory;
use std::path::{Path, PathBuf};

fn generate(out_dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    clap_mangen::generate_to(nicinfo::cli::Cli::command(), out_dir)
        .with_context(|| format!("failed to write man pages to {}", out_dir.display()))?;

    let mut pages = Vec::new();
    for entry in std::fs::read_dir(out_dir)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "1") {
            pages.push(path);
        }
    }
    pages.sort();
    Ok(pages)
}

fn main() -> anyhow::Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("man"));

    let pages = generate(&out_dir)?;
    for page in &pages {
        println!("Generated {}", page.display());
    }
    println!("{} man page(s) in {}", pages.len(), out_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_pages() {
        let tmp = tempfile::tempdir().unwrap();
        let pages = generate(&tmp.path().join("man")).unwrap();
        let names: Vec<String> = pages
            .iter()
            .filter_map(|p| Some(p.file_name()?.to_str()?.to_string()))
            .collect();

        assert!(names.contains(&"nicinfo.1".to_string()));
        assert!(names.contains(&"nicinfo-index.1".to_string()));
    }
}
