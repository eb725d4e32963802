pub mod directory;
pub mod preset;
pub mod scaffold;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LoadFailure;

#[derive(Debug, Clone)]
pub struct Deck {
    pub meta: DeckMeta,
    pub registry: SlideRegistry,
}

#[derive(Debug, Clone, Default)]
pub struct DeckMeta {
    pub name: String,
    pub description: String,
    pub theme: Option<DeckTheme>,
}

/// Optional colour overrides for the presentation chrome and default slide colours.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeckTheme {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    Title,
    #[default]
    Content,
    Split,
    ImageText,
}

impl Layout {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Content => "content",
            Self::Split => "split",
            Self::ImageText => "image-text",
        }
    }
}

/// One slide's content. Built once at load time and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlideDefinition {
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets: Option<Vec<String>>,

    /// Heading above the bullet list ("Key Statistics", "Features", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bullets_heading: Option<String>,

    #[serde(default)]
    pub layout: Layout,

    /// Gradient stops, drawn from the top-left to the bottom-right corner.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub background: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
}

impl SlideDefinition {
    /// Make a relative image path relative to `base` instead.
    fn anchor_image(mut self, base: &Path) -> Self {
        if let Some(image) = &self.image {
            if image.is_relative() {
                self.image = Some(base.join(image));
            }
        }
        self
    }
}

/// A slide position as the shell sees it.
#[derive(Debug, Clone, Copy)]
pub enum Resolved<'a> {
    Slide(&'a SlideDefinition),
    Missing(&'a LoadFailure),
}

/// Ordered slides of a deck, indexed `0..count()`.
#[derive(Debug, Clone, Default)]
pub struct SlideRegistry {
    entries: Vec<Result<SlideDefinition, LoadFailure>>,
}

impl SlideRegistry {
    pub fn new(entries: Vec<Result<SlideDefinition, LoadFailure>>) -> Self {
        Self { entries }
    }

    pub fn from_slides(slides: Vec<SlideDefinition>) -> Self {
        Self::new(slides.into_iter().map(Ok).collect())
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Resolved<'_>> {
        self.entries.get(index).map(|entry| match entry {
            Ok(slide) => Resolved::Slide(slide),
            Err(failure) => Resolved::Missing(failure),
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &LoadFailure> {
        self.entries.iter().filter_map(|e| e.as_ref().err())
    }
}

/// Load a deck from a preset file or a component directory.
pub fn load(path: &Path) -> anyhow::Result<Deck> {
    let deck = if path.is_dir() {
        directory::load(path)?
    } else {
        preset::load(path)?
    };

    for failure in deck.registry.failures() {
        tracing::warn!("{failure}");
    }
    tracing::info!(
        name = %deck.meta.name,
        slides = deck.registry.count(),
        "deck loaded from {}",
        path.display()
    );
    Ok(deck)
}
