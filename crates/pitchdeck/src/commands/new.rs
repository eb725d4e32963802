use std::path::Path;

use colored::Colorize;

use crate::deck::Layout;
use crate::deck::directory::MANIFEST_FILE;
use crate::deck::scaffold::{self, CreateOutcome};

pub fn run(dir: &Path, number: usize, title: &str, layout: Layout) -> anyhow::Result<()> {
    match scaffold::create_slide(dir, number, title, layout)? {
        CreateOutcome::AlreadyExists(path) => {
            println!(
                "{}",
                format!("Slide {number} already exists at {}", path.display()).yellow()
            );
        }
        CreateOutcome::Created(path) => {
            println!(
                "{}",
                format!("Created slide {number} at {}", path.display())
                    .green()
                    .bold()
            );
            println!("  Layout: {}", layout.name());
            println!("  Title:  {title}");
            if !scaffold::covered_by_manifest(dir, number)? {
                println!();
                println!(
                    "{}",
                    format!(
                        "Remember to set total_slides to at least {} in {MANIFEST_FILE}.",
                        number + 1
                    )
                    .yellow()
                );
            }
        }
    }
    Ok(())
}
