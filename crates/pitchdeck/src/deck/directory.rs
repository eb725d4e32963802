//! Component decks: a `deck.yaml` manifest plus one `slides/<n>/slide.yaml`
//! file per position. A position whose file is missing or broken still takes
//! its place in the deck as a load failure.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use super::{Deck, DeckMeta, DeckTheme, SlideDefinition, SlideRegistry};
use crate::error::LoadFailure;

pub const MANIFEST_FILE: &str = "deck.yaml";
pub const SLIDES_DIR: &str = "slides";
pub const SLIDE_FILE: &str = "slide.yaml";

/// Upper bound on slide positions in a component deck.
pub const MAX_SLIDES: usize = 1000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_slides: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<DeckTheme>,
}

impl Manifest {
    /// Read `deck.yaml` under `root`; a missing manifest means all defaults.
    pub fn load(root: &Path) -> anyhow::Result<Self> {
        let path = root.join(MANIFEST_FILE);
        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()));
            }
        };
        serde_yaml::from_str(&contents).with_context(|| format!("Invalid manifest {}", path.display()))
    }
}

pub fn slide_path(root: &Path, index: usize) -> PathBuf {
    root.join(SLIDES_DIR)
        .join(index.to_string())
        .join(SLIDE_FILE)
}

pub fn load(root: &Path) -> anyhow::Result<Deck> {
    let manifest = Manifest::load(root)?;
    let total = match manifest.total_slides {
        Some(total) if total > MAX_SLIDES => anyhow::bail!(
            "{} declares {total} slides; at most {MAX_SLIDES} are supported",
            root.join(MANIFEST_FILE).display()
        ),
        Some(total) => total,
        None => discover_count(root)?,
    };

    let entries = (0..total).map(|index| load_slide(root, index)).collect();

    let name = manifest.name.unwrap_or_else(|| {
        root.file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string()
    });

    Ok(Deck {
        meta: DeckMeta {
            name,
            description: manifest.description.unwrap_or_default(),
            theme: manifest.theme,
        },
        registry: SlideRegistry::new(entries),
    })
}

/// One past the highest numbered folder under `slides/`.
fn discover_count(root: &Path) -> anyhow::Result<usize> {
    let dir = root.join(SLIDES_DIR);
    if !dir.is_dir() {
        return Ok(0);
    }
    let mut count = 0;
    for entry in std::fs::read_dir(&dir).with_context(|| format!("Failed to list {}", dir.display()))? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let Some(index) = entry.file_name().to_str().and_then(|n| n.parse::<usize>().ok()) else {
            continue;
        };
        match index.checked_add(1) {
            Some(end) if end <= MAX_SLIDES => count = count.max(end),
            _ => tracing::warn!(
                "ignoring {}: slide folders are numbered below {MAX_SLIDES}",
                entry.path().display()
            ),
        }
    }
    Ok(count)
}

fn load_slide(root: &Path, index: usize) -> Result<SlideDefinition, LoadFailure> {
    let path = slide_path(root, index);
    let contents = std::fs::read_to_string(&path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadFailure::NotFound {
                index,
                path: path.clone(),
            }
        } else {
            LoadFailure::Malformed {
                index,
                path: path.clone(),
                reason: e.to_string(),
            }
        }
    })?;
    let slide: SlideDefinition =
        serde_yaml::from_str(&contents).map_err(|e| LoadFailure::Malformed {
            index,
            path: path.clone(),
            reason: e.to_string(),
        })?;
    let base = path.parent().unwrap_or(root);
    Ok(slide.anchor_image(base))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{Layout, Resolved};

    fn write_slide(root: &Path, index: usize, body: &str) {
        let path = slide_path(root, index);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, body).unwrap();
    }

    #[test]
    fn test_sample_component_deck_loads() {
        let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../sample-decks/ai-platform");
        let deck = load(&root).unwrap();
        assert_eq!(deck.meta.name, "AI Platform Pitch Deck");
        assert_eq!(deck.registry.count(), 3);
        assert_eq!(deck.registry.failures().count(), 0);
        let Some(Resolved::Slide(last)) = deck.registry.get(2) else {
            panic!("slide 3 should load");
        };
        assert_eq!(last.layout, Layout::Split);
    }

    #[test]
    fn test_missing_slide_becomes_load_failure() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "name: Gaps\ntotal_slides: 3\n").unwrap();
        write_slide(dir.path(), 0, "title: First\n");
        write_slide(dir.path(), 2, "title: Third\nlayout: title\n");

        let deck = load(dir.path()).unwrap();
        assert_eq!(deck.registry.count(), 3);
        assert!(matches!(deck.registry.get(0), Some(Resolved::Slide(_))));
        match deck.registry.get(1) {
            Some(Resolved::Missing(LoadFailure::NotFound { index, path })) => {
                assert_eq!(*index, 1);
                assert!(path.ends_with("slides/1/slide.yaml"));
            }
            other => panic!("expected a missing slide, got {other:?}"),
        }
        assert!(matches!(deck.registry.get(2), Some(Resolved::Slide(s)) if s.title == "Third"));
    }

    #[test]
    fn test_malformed_slide_is_isolated() {
        let dir = tempfile::tempdir().unwrap();
        write_slide(dir.path(), 0, "title: Good\n");
        write_slide(dir.path(), 1, "layout: [not, a, layout]\n");

        let deck = load(dir.path()).unwrap();
        assert_eq!(deck.registry.count(), 2);
        assert!(matches!(
            deck.registry.get(1),
            Some(Resolved::Missing(LoadFailure::Malformed { index: 1, .. }))
        ));
    }

    #[test]
    fn test_count_discovered_without_manifest() {
        let dir = tempfile::tempdir().unwrap();
        write_slide(dir.path(), 0, "title: Zero\n");
        write_slide(dir.path(), 4, "title: Four\n");
        std::fs::create_dir_all(dir.path().join(SLIDES_DIR).join("notes")).unwrap();

        let deck = load(dir.path()).unwrap();
        assert_eq!(deck.registry.count(), 5);
        assert_eq!(deck.registry.failures().count(), 3);
        let expected = dir.path().file_name().unwrap().to_string_lossy().to_string();
        assert_eq!(deck.meta.name, expected);
    }

    #[test]
    fn test_out_of_range_folder_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        write_slide(dir.path(), 1, "title: One\n");
        let slides = dir.path().join(SLIDES_DIR);
        std::fs::create_dir_all(slides.join(usize::MAX.to_string())).unwrap();
        std::fs::create_dir_all(slides.join(MAX_SLIDES.to_string())).unwrap();

        let deck = load(dir.path()).unwrap();
        assert_eq!(deck.registry.count(), 2);
    }

    #[test]
    fn test_oversized_manifest_count_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "total_slides: 100000000000\n").unwrap();
        let err = load(dir.path()).err().expect("load should fail");
        assert!(err.to_string().contains("100000000000"));
    }

    #[test]
    fn test_empty_directory_has_no_slides() {
        let dir = tempfile::tempdir().unwrap();
        let deck = load(dir.path()).unwrap();
        assert!(deck.registry.is_empty());
    }

    #[test]
    fn test_image_paths_resolve_per_slide() {
        let dir = tempfile::tempdir().unwrap();
        write_slide(dir.path(), 0, "title: Chart\nlayout: image-text\nimage: chart.png\n");
        let deck = load(dir.path()).unwrap();
        let Some(Resolved::Slide(slide)) = deck.registry.get(0) else {
            panic!("slide should load");
        };
        assert_eq!(
            slide.image.as_deref(),
            Some(slide_path(dir.path(), 0).parent().unwrap().join("chart.png").as_path())
        );
    }
}
