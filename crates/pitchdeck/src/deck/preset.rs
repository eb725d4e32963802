//! Single-file decks: every slide is a structured record in one YAML document.

use std::path::Path;

use anyhow::Context;
use serde::Deserialize;

use super::{Deck, DeckMeta, DeckTheme, SlideDefinition, SlideRegistry};

#[derive(Debug, Deserialize)]
struct PresetFile {
    #[serde(default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    theme: Option<DeckTheme>,
    #[serde(default)]
    slides: Vec<SlideDefinition>,
}

pub fn load(path: &Path) -> anyhow::Result<Deck> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read deck {}", path.display()))?;
    let base_path = path.parent().unwrap_or(Path::new("."));
    parse(&contents, base_path).with_context(|| format!("Invalid deck file {}", path.display()))
}

/// Parse a preset document. Relative image paths resolve against `base_path`.
pub fn parse(contents: &str, base_path: &Path) -> anyhow::Result<Deck> {
    let preset: PresetFile = serde_yaml::from_str(contents)?;
    if let Some(id) = &preset.id {
        tracing::debug!(id, "parsed preset");
    }
    let slides = preset
        .slides
        .into_iter()
        .map(|slide| slide.anchor_image(base_path))
        .collect();
    Ok(Deck {
        meta: DeckMeta {
            name: preset.name,
            description: preset.description,
            theme: preset.theme,
        },
        registry: SlideRegistry::from_slides(slides),
    })
}
