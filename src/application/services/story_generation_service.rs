//! Story generation service - orchestrates outline, prose, and storage
//!
//! Generation of a story runs in three steps:
//!
//! 1. The outline generator turns the request into a [`StoryOutline`].
//! 2. Each beat is drafted in order. When the options ask for AI prose and a
//!    provider is configured, the delegation facade is tried first; any
//!    failure or unusable output falls back to the rule-based engine.
//! 3. The assembled story is persisted.
//!
//! Provider failures never surface here. A generation call fails only on
//! invalid input or an internal error such as storage, and nothing is
//! written in that case.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::instrument;

use super::ai_delegation_service::AiDelegationService;
use super::ai_settings_service::AiSettingsService;
use super::cancellation::CancellationSignal;
use crate::application::ports::outbound::{StoryRepositoryPort, TextGenerationProviderFactory};
use crate::domain::entities::{Chapter, Character, PlotBeat, Story, StoryOutline, Theme};
use crate::domain::services::allocate_word_counts;
use crate::domain::services::prose::{
    assemble_document, chapter_heading, compose_chapter, compose_chapter_body, compose_document,
};
use crate::domain::services::{
    estimate_reading_time, generate_character_arc, OutlineError, OutlineGenerator, OutlineRequest,
    PhraseChooser, RngChooser,
};
use crate::domain::value_objects::{GenerationOptions, PlotBeatId, StoryId};

/// Produces a fresh phrase chooser for each generation run
pub type ChooserFactory = Arc<dyn Fn() -> Box<dyn PhraseChooser + Send> + Send + Sync>;

/// Entropy-backed choosers for production use
pub fn entropy_choosers() -> ChooserFactory {
    Arc::new(|| Box::new(RngChooser::from_entropy()) as Box<dyn PhraseChooser + Send>)
}

#[derive(Debug, thiserror::Error)]
pub enum StoryGenerationError {
    #[error(transparent)]
    InvalidInput(#[from] OutlineError),
    #[error("Story not found: {0}")]
    NotFound(StoryId),
    #[error("Outline has no chapter {0}")]
    NoSuchChapter(u32),
    #[error("Story generation failed: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Prose drafted for an outline
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DraftedContent {
    pub content: String,
    /// Minutes, at the standard reading pace
    pub reading_time: u32,
    /// Finished chapters in beat order
    pub chapters: Vec<Chapter>,
    /// False when the run was cancelled before every beat was drafted
    pub is_complete: bool,
}

pub struct StoryGenerationService {
    repository: Arc<dyn StoryRepositoryPort>,
    ai_settings: Arc<AiSettingsService>,
    provider_factory: Arc<dyn TextGenerationProviderFactory>,
    choosers: ChooserFactory,
    generator: OutlineGenerator,
    ai_timeout: Duration,
}

impl StoryGenerationService {
    pub fn new(
        repository: Arc<dyn StoryRepositoryPort>,
        ai_settings: Arc<AiSettingsService>,
        provider_factory: Arc<dyn TextGenerationProviderFactory>,
        ai_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            ai_settings,
            provider_factory,
            choosers: entropy_choosers(),
            generator: OutlineGenerator::new(),
            ai_timeout,
        }
    }

    /// Replace the chooser source, e.g. with seeded choosers
    #[cfg(test)]
    pub fn with_choosers(mut self, choosers: ChooserFactory) -> Self {
        self.choosers = choosers;
        self
    }

    /// Generate an outline without drafting or storing anything
    #[instrument(skip_all, fields(structure = %request.structure))]
    pub fn create_outline(&self, request: &OutlineRequest) -> Result<StoryOutline, StoryGenerationError> {
        let mut chooser = (self.choosers)();
        let outline = self.generator.generate(request, &mut chooser)?;
        tracing::info!(
            outline_id = %outline.id,
            beats = outline.plot_points.len(),
            "Generated outline \"{}\"",
            outline.title
        );
        Ok(outline)
    }

    /// Five arc stages for a character under a theme
    pub fn character_arc(&self, character: &Character, theme: &Theme) -> Vec<String> {
        let mut chooser = (self.choosers)();
        generate_character_arc(character, theme, &mut chooser)
    }

    /// The whole outline as one rule-based document, never delegated
    pub fn compose_prose(&self, outline: &StoryOutline, options: &GenerationOptions) -> String {
        let mut chooser = (self.choosers)();
        compose_document(outline, options, &mut chooser)
    }

    /// One chapter block for the beat at `chapter_number` (1-based, in beat order)
    ///
    /// With AI requested and a provider configured the provider is asked
    /// once; a failed request yields a stub chapter rather than an error.
    /// Provider text comes back under the same `## Chapter N` heading as a
    /// rule-based chapter.
    #[instrument(skip(self, outline, options), fields(outline_id = %outline.id))]
    pub async fn draft_chapter(
        &self,
        outline: &StoryOutline,
        options: &GenerationOptions,
        chapter_number: u32,
    ) -> Result<String, StoryGenerationError> {
        let mut beats: Vec<&PlotBeat> = outline.plot_points.iter().collect();
        beats.sort_by_key(|b| b.order);
        let beat = chapter_number
            .checked_sub(1)
            .and_then(|index| beats.get(index as usize).copied())
            .ok_or(StoryGenerationError::NoSuchChapter(chapter_number))?;

        if options.use_ai {
            if let Some(delegation) = self.delegation().await {
                return Ok(delegation
                    .generate_chapter_or_stub(beat, outline, options, chapter_number)
                    .await);
            }
        }
        let mut chooser = (self.choosers)();
        Ok(compose_chapter(outline, beat, options, chapter_number, &mut chooser))
    }

    /// Outline, prose, and storage in one call
    ///
    /// A cancelled run still stores the chapters finished so far, marked
    /// incomplete.
    #[instrument(skip_all)]
    pub async fn generate_story(
        &self,
        request: &OutlineRequest,
        cancel: CancellationSignal,
    ) -> Result<Story, StoryGenerationError> {
        let outline = self.create_outline(request)?;
        let drafted = self
            .generate_story_content(&outline, &request.options, cancel)
            .await;

        let story = Story::new(outline, drafted.content, drafted.chapters, drafted.is_complete);
        self.repository.save(&story).await?;
        tracing::info!(
            story_id = %story.id,
            words = story.metadata.word_count,
            "Story generated"
        );
        Ok(story)
    }

    /// Draft prose for an existing outline, beat by beat
    ///
    /// Cancelling the signal abandons the in-flight provider request and
    /// returns the chapters already finished, in order.
    #[instrument(skip_all, fields(outline_id = %outline.id))]
    pub async fn generate_story_content(
        &self,
        outline: &StoryOutline,
        options: &GenerationOptions,
        mut cancel: CancellationSignal,
    ) -> DraftedContent {
        let delegation = if options.use_ai {
            self.delegation().await
        } else {
            None
        };
        let mut chooser = (self.choosers)();

        let mut beats: Vec<&PlotBeat> = outline.plot_points.iter().collect();
        beats.sort_by_key(|b| b.order);

        let mut chapters = Vec::with_capacity(beats.len());
        let mut is_complete = true;

        for (beat, chapter_number) in beats.into_iter().zip(1u32..) {
            if cancel.is_cancelled() {
                is_complete = false;
                break;
            }

            let ai_text = match &delegation {
                Some(delegation) => {
                    tokio::select! {
                        text = delegation.generate_usable_chapter(beat, outline, options, chapter_number) => text,
                        _ = cancel.cancelled() => {
                            tracing::info!(chapter = chapter_number, "Generation cancelled");
                            is_complete = false;
                            break;
                        }
                    }
                }
                None => None,
            };

            let chapter = match ai_text {
                Some(text) => Chapter::new(chapter_number, beat.title.clone(), text, beat.id).ai_generated(),
                None => {
                    let body = compose_chapter_body(outline, beat, options, &mut chooser);
                    Chapter::new(chapter_number, beat.title.clone(), body, beat.id)
                }
            };
            tracing::debug!(
                chapter = chapter_number,
                ai = chapter.ai_generated,
                words = chapter.word_count,
                "Chapter drafted"
            );
            chapters.push(chapter);
        }

        let blocks = chapters
            .iter()
            .map(|c| format!("{}\n\n{}", chapter_heading(c.order, &c.title), c.content));
        let content = assemble_document(outline, blocks);

        DraftedContent {
            reading_time: estimate_reading_time(&content),
            content,
            chapters,
            is_complete,
        }
    }

    pub async fn get_story(&self, id: StoryId) -> Result<Story, StoryGenerationError> {
        self.repository
            .get(id)
            .await?
            .ok_or(StoryGenerationError::NotFound(id))
    }

    pub async fn list_stories(&self) -> Result<Vec<Story>, StoryGenerationError> {
        Ok(self.repository.list().await?)
    }

    #[instrument(skip(self))]
    pub async fn delete_story(&self, id: StoryId) -> Result<(), StoryGenerationError> {
        if self.repository.delete(id).await? {
            tracing::info!(story_id = %id, "Story deleted");
            Ok(())
        } else {
            Err(StoryGenerationError::NotFound(id))
        }
    }

    /// Advisory word budget per beat of a stored story
    pub async fn pacing_for_story(
        &self,
        id: StoryId,
        target_word_count: Option<u32>,
    ) -> Result<HashMap<PlotBeatId, u32>, StoryGenerationError> {
        let story = self.get_story(id).await?;
        Ok(pacing_for_outline(&story.outline, target_word_count))
    }

    /// Facade for the resolved provider, if one is usable
    async fn delegation(&self) -> Option<AiDelegationService> {
        let Some(config) = self.ai_settings.resolve().await else {
            tracing::info!("No AI provider configured, using rule-based generation");
            return None;
        };

        match AiDelegationService::from_config(&config, self.provider_factory.as_ref(), self.ai_timeout) {
            Ok(delegation) => {
                tracing::debug!(provider = delegation.provider_name(), "AI delegation enabled");
                Some(delegation)
            }
            Err(e) => {
                tracing::warn!("AI provider unusable, using rule-based generation: {}", e);
                None
            }
        }
    }
}

/// Advisory word budget per beat, defaulting to the outline's own target
pub fn pacing_for_outline(outline: &StoryOutline, target_word_count: Option<u32>) -> HashMap<PlotBeatId, u32> {
    allocate_word_counts(
        target_word_count.unwrap_or(outline.word_count_target),
        &outline.plot_points,
    )
}
