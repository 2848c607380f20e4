//! AI delegation facade
//!
//! Forwards chapter requests to an external text generation provider. Every
//! call issues at most one request, bounded by a timeout; nothing is retried.
//! Provider failures are reported to the caller (or swallowed into a stub by
//! [`AiDelegationService::generate_chapter_or_stub`]) so prose generation can
//! always fall back to the rule-based engine.

use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::outbound::{
    ProviderError, TextGenerationPort, TextGenerationProviderFactory,
};
use crate::application::services::llm::build_chapter_prompt;
use crate::domain::entities::{PlotBeat, StoryOutline};
use crate::domain::services::prose::chapter_heading;
use crate::domain::value_objects::{AiProviderConfig, GenerationOptions};

/// Provider output at or below this many characters is treated as a failure
pub const MIN_USABLE_LENGTH: usize = 100;

/// Marker appended to the stub returned when direct delegation fails
pub const FALLBACK_NOTICE: &str = "[This chapter would be generated using the rule-based system as a fallback when AI generation is unavailable.]";

pub struct AiDelegationService {
    provider: Arc<dyn TextGenerationPort>,
    timeout: Duration,
}

impl AiDelegationService {
    pub fn new(provider: Arc<dyn TextGenerationPort>, timeout: Duration) -> Self {
        Self { provider, timeout }
    }

    /// Build a facade for a resolved configuration
    ///
    /// Remote providers without a credential are rejected here so that no
    /// request is ever attempted for them.
    pub fn from_config(
        config: &AiProviderConfig,
        factory: &dyn TextGenerationProviderFactory,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        if !config.is_configured() {
            return Err(ProviderError::MissingCredential(config.provider_name()));
        }
        let provider = factory.create(config, timeout)?;
        Ok(Self::new(provider, timeout))
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    /// One timeout-bounded request for a chapter
    pub async fn generate_chapter(
        &self,
        beat: &PlotBeat,
        outline: &StoryOutline,
        options: &GenerationOptions,
        chapter_number: u32,
    ) -> Result<String, ProviderError> {
        let prompt = build_chapter_prompt(beat, outline, options, chapter_number);
        tracing::debug!(
            provider = self.provider.provider_name(),
            chapter = chapter_number,
            prompt_len = prompt.len(),
            "Requesting chapter from provider"
        );

        let text = tokio::time::timeout(self.timeout, self.provider.generate(&prompt))
            .await
            .map_err(|_| ProviderError::Timeout(self.timeout))??;

        if text.trim().is_empty() {
            return Err(ProviderError::EmptyResponse(self.provider.provider_name()));
        }
        Ok(text)
    }

    /// Provider text, or `None` when the request failed or the text is too short
    pub async fn generate_usable_chapter(
        &self,
        beat: &PlotBeat,
        outline: &StoryOutline,
        options: &GenerationOptions,
        chapter_number: u32,
    ) -> Option<String> {
        match self
            .generate_chapter(beat, outline, options, chapter_number)
            .await
        {
            Ok(text) if text.chars().count() > MIN_USABLE_LENGTH => Some(text),
            Ok(text) => {
                tracing::warn!(
                    provider = self.provider.provider_name(),
                    chapter = chapter_number,
                    chars = text.chars().count(),
                    "Provider output too short, falling back to rule-based generation"
                );
                None
            }
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.provider_name(),
                    chapter = chapter_number,
                    "AI generation failed, falling back to rule-based generation: {}",
                    e
                );
                None
            }
        }
    }

    /// Provider text under its chapter heading, or a minimal stub when
    /// delegation fails
    pub async fn generate_chapter_or_stub(
        &self,
        beat: &PlotBeat,
        outline: &StoryOutline,
        options: &GenerationOptions,
        chapter_number: u32,
    ) -> String {
        match self
            .generate_chapter(beat, outline, options, chapter_number)
            .await
        {
            Ok(text) => format!("{}\n\n{}", chapter_heading(chapter_number, &beat.title), text),
            Err(e) => {
                tracing::warn!(
                    provider = self.provider.provider_name(),
                    chapter = chapter_number,
                    "AI generation failed, returning stub chapter: {}",
                    e
                );
                fallback_stub(beat, chapter_number)
            }
        }
    }
}

/// Heading, beat description, and the fallback notice
pub fn fallback_stub(beat: &PlotBeat, chapter_number: u32) -> String {
    format!(
        "# Chapter {}: {}\n\n{}\n\n{}",
        chapter_number, beat.title, beat.description, FALLBACK_NOTICE
    )
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::domain::entities::{Character, Setting, Theme};
    use crate::domain::services::{FixedChooser, OutlineGenerator, OutlineRequest};
    use crate::domain::value_objects::{CharacterRole, Genre, SettingType, ThemeTag};

    /// Provider returning a canned result and counting calls
    pub(crate) struct ScriptedProvider {
        pub reply: Result<String, u16>,
        pub delay: Option<Duration>,
        pub calls: AtomicUsize,
    }

    impl ScriptedProvider {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                delay: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                delay: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn slow(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }
    }

    #[async_trait]
    impl TextGenerationPort for ScriptedProvider {
        fn provider_name(&self) -> &'static str {
            "scripted"
        }

        async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(ProviderError::Status {
                    provider: "scripted",
                    status: *status,
                    body: String::new(),
                }),
            }
        }
    }

    pub(crate) fn sample_outline() -> StoryOutline {
        let request = OutlineRequest::new(
            vec![
                Character::new("Aria", CharacterRole::Protagonist),
                Character::new("Malachar", CharacterRole::Antagonist),
            ],
            vec![Setting::new("Whispering Woods", Genre::Fantasy, SettingType::Forest)],
            vec![Theme::new(ThemeTag::Redemption)],
            GenerationOptions::default(),
        );
        OutlineGenerator::new()
            .generate(&request, &mut FixedChooser::first())
            .unwrap()
    }

    fn facade(provider: ScriptedProvider) -> (AiDelegationService, Arc<ScriptedProvider>) {
        let provider = Arc::new(provider);
        (
            AiDelegationService::new(provider.clone(), Duration::from_secs(5)),
            provider,
        )
    }

    #[tokio::test]
    async fn test_provider_text_is_returned() {
        let outline = sample_outline();
        let (service, provider) = facade(ScriptedProvider::replying("The woods were silent."));

        let text = service
            .generate_chapter(&outline.plot_points[0], &outline, &GenerationOptions::default(), 1)
            .await
            .unwrap();
        assert_eq!(text, "The woods were silent.");
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_is_not_retried() {
        let outline = sample_outline();
        let (service, provider) = facade(ScriptedProvider::failing(500));

        let result = service
            .generate_chapter(&outline.plot_points[0], &outline, &GenerationOptions::default(), 1)
            .await;
        assert!(matches!(result, Err(ProviderError::Status { status: 500, .. })));
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_blank_output_is_an_error() {
        let outline = sample_outline();
        let (service, _) = facade(ScriptedProvider::replying("   \n"));

        let result = service
            .generate_chapter(&outline.plot_points[0], &outline, &GenerationOptions::default(), 1)
            .await;
        assert!(matches!(result, Err(ProviderError::EmptyResponse("scripted"))));
    }

    #[tokio::test]
    async fn test_slow_provider_times_out() {
        let outline = sample_outline();
        let provider = Arc::new(ScriptedProvider::replying("late").slow(Duration::from_secs(30)));
        let service = AiDelegationService::new(provider, Duration::from_millis(20));

        let result = service
            .generate_chapter(&outline.plot_points[0], &outline, &GenerationOptions::default(), 1)
            .await;
        assert!(matches!(result, Err(ProviderError::Timeout(_))));
    }

    #[tokio::test]
    async fn test_usability_threshold() {
        let outline = sample_outline();
        let beat = &outline.plot_points[0];
        let options = GenerationOptions::default();

        let (short, _) = facade(ScriptedProvider::replying(&"a".repeat(MIN_USABLE_LENGTH)));
        assert!(short.generate_usable_chapter(beat, &outline, &options, 1).await.is_none());

        let (long, _) = facade(ScriptedProvider::replying(&"a".repeat(MIN_USABLE_LENGTH + 1)));
        assert!(long.generate_usable_chapter(beat, &outline, &options, 1).await.is_some());

        // Length is measured in characters, not bytes
        let accented = "é".repeat(60);
        assert!(accented.len() > MIN_USABLE_LENGTH);
        let (multibyte, _) = facade(ScriptedProvider::replying(&accented));
        assert!(multibyte.generate_usable_chapter(beat, &outline, &options, 1).await.is_none());

        let (multibyte, _) = facade(ScriptedProvider::replying(&"é".repeat(MIN_USABLE_LENGTH + 1)));
        assert!(multibyte.generate_usable_chapter(beat, &outline, &options, 1).await.is_some());
    }

    #[tokio::test]
    async fn test_direct_call_falls_back_to_stub() {
        let outline = sample_outline();
        let beat = &outline.plot_points[1];
        let (service, _) = facade(ScriptedProvider::failing(503));

        let text = service
            .generate_chapter_or_stub(beat, &outline, &GenerationOptions::default(), 2)
            .await;
        assert_eq!(
            text,
            format!("# Chapter 2: Inciting Incident\n\n{}\n\n{}", beat.description, FALLBACK_NOTICE)
        );
    }

    #[tokio::test]
    async fn test_direct_call_puts_provider_text_under_heading() {
        let outline = sample_outline();
        let beat = &outline.plot_points[1];
        let prose = "The letter arrived at dawn, sealed in wax the colour of old blood.";
        let (service, _) = facade(ScriptedProvider::replying(prose));

        let text = service
            .generate_chapter_or_stub(beat, &outline, &GenerationOptions::default(), 2)
            .await;
        assert_eq!(text, format!("## Chapter 2: Inciting Incident\n\n{}", prose));
    }

    #[test]
    fn test_unconfigured_remote_provider_is_rejected() {
        struct NeverCalled;
        impl TextGenerationProviderFactory for NeverCalled {
            fn create(
                &self,
                _config: &AiProviderConfig,
                _timeout: Duration,
            ) -> Result<Arc<dyn TextGenerationPort>, ProviderError> {
                panic!("factory must not be reached")
            }
        }

        let config = AiProviderConfig::OpenAi {
            api_key: Some(String::new()),
            model: None,
        };
        let result = AiDelegationService::from_config(&config, &NeverCalled, Duration::from_secs(1));
        assert!(matches!(result, Err(ProviderError::MissingCredential("openai"))));
    }
}
