//! Boilerplate slide files for component decks.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::directory::{self, Manifest};
use super::{Layout, SlideDefinition};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    Created(PathBuf),
    AlreadyExists(PathBuf),
}

/// Placeholder content for a new slide with the given layout.
pub fn template(layout: Layout, title: &str) -> SlideDefinition {
    let points = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    match layout {
        Layout::Title => SlideDefinition {
            title: title.to_string(),
            subtitle: Some("Subtitle goes here".to_string()),
            content: points(&["Your content goes here", "Add more paragraphs as needed"]),
            layout,
            background: points(&["blue-600", "purple-600"]),
            text_color: Some("white".to_string()),
            ..Default::default()
        },
        Layout::Split => SlideDefinition {
            title: title.to_string(),
            subtitle: Some("Subtitle goes here".to_string()),
            content: points(&[
                "Your main content goes here. This layout works well for solutions, features, or comparisons.",
                "Add more context and details about your topic.",
            ]),
            bullets_heading: Some("Features".to_string()),
            bullets: Some(points(&[
                "Feature one",
                "Feature two",
                "Feature three",
                "Feature four",
            ])),
            layout,
            background: points(&["green-50", "emerald-50"]),
            text_color: Some("gray-800".to_string()),
            ..Default::default()
        },
        Layout::Content | Layout::ImageText => SlideDefinition {
            title: title.to_string(),
            subtitle: Some("Subtitle goes here".to_string()),
            content: points(&[
                "Your main content goes here. Explain your key points and provide context.",
                "Add additional paragraphs to elaborate on your topic.",
            ]),
            bullets_heading: Some("Key Points".to_string()),
            bullets: Some(points(&[
                "First key point",
                "Second key point",
                "Third key point",
                "Fourth key point",
            ])),
            layout,
            background: points(&["gray-50", "blue-50"]),
            text_color: Some("gray-800".to_string()),
            ..Default::default()
        },
    }
}

/// Write `slides/<number>/slide.yaml` under `root`. An existing slide is
/// never overwritten.
pub fn create_slide(
    root: &Path,
    number: usize,
    title: &str,
    layout: Layout,
) -> anyhow::Result<CreateOutcome> {
    if number >= directory::MAX_SLIDES {
        anyhow::bail!(
            "Slide number {number} is out of range (at most {} slides per deck)",
            directory::MAX_SLIDES
        );
    }
    let path = directory::slide_path(root, number);
    if path.exists() {
        return Ok(CreateOutcome::AlreadyExists(path));
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let yaml = serde_yaml::to_string(&template(layout, title))?;
    let contents = format!("# Slide {number} ({} layout)\n{yaml}", layout.name());
    std::fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))?;
    tracing::debug!(number, layout = layout.name(), "created slide");
    Ok(CreateOutcome::Created(path))
}

/// Whether the manifest's slide count already covers `number`.
pub fn covered_by_manifest(root: &Path, number: usize) -> anyhow::Result<bool> {
    let manifest = Manifest::load(root)?;
    Ok(manifest.total_slides.is_none_or(|total| number < total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Resolved, directory};

    #[test]
    fn test_create_writes_loadable_slide() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = create_slide(dir.path(), 0, "Market Analysis", Layout::Split).unwrap();
        let path = directory::slide_path(dir.path(), 0);
        assert_eq!(outcome, CreateOutcome::Created(path));

        let deck = directory::load(dir.path()).unwrap();
        let Some(Resolved::Slide(slide)) = deck.registry.get(0) else {
            panic!("scaffolded slide should load");
        };
        assert_eq!(slide.title, "Market Analysis");
        assert_eq!(slide.layout, Layout::Split);
        assert_eq!(slide.bullets_heading.as_deref(), Some("Features"));
    }

    #[test]
    fn test_create_never_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        create_slide(dir.path(), 3, "Original", Layout::Title).unwrap();
        let path = directory::slide_path(dir.path(), 3);
        let before = std::fs::read_to_string(&path).unwrap();

        let outcome = create_slide(dir.path(), 3, "Replacement", Layout::Content).unwrap();
        assert_eq!(outcome, CreateOutcome::AlreadyExists(path.clone()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_create_rejects_number_past_limit() {
        let dir = tempfile::tempdir().unwrap();
        assert!(create_slide(dir.path(), directory::MAX_SLIDES, "Too far", Layout::Title).is_err());
        assert!(!directory::slide_path(dir.path(), directory::MAX_SLIDES).exists());
    }

    #[test]
    fn test_titles_needing_quotes_survive() {
        let dir = tempfile::tempdir().unwrap();
        create_slide(dir.path(), 0, "Q3: \"growth\" # 1", Layout::Content).unwrap();
        let deck = directory::load(dir.path()).unwrap();
        assert!(matches!(
            deck.registry.get(0),
            Some(Resolved::Slide(s)) if s.title == "Q3: \"growth\" # 1"
        ));
    }

    #[test]
    fn test_templates_match_layout() {
        for layout in [Layout::Title, Layout::Content, Layout::Split, Layout::ImageText] {
            let slide = template(layout, "New Slide");
            assert_eq!(slide.layout, layout);
            assert_eq!(slide.title, "New Slide");
        }
        assert!(template(Layout::Title, "x").bullets.is_none());
    }

    #[test]
    fn test_manifest_coverage() {
        let dir = tempfile::tempdir().unwrap();
        assert!(covered_by_manifest(dir.path(), 10).unwrap());
        std::fs::write(dir.path().join(directory::MANIFEST_FILE), "total_slides: 3\n").unwrap();
        assert!(covered_by_manifest(dir.path(), 2).unwrap());
        assert!(!covered_by_manifest(dir.path(), 3).unwrap());
    }
}
