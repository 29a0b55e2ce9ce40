//! Outgoing-message hook
//!
//! A host calls [`MessageHook::on_send_message`] for every message before it
//! is sent and substitutes the text when it gets [`HookResult::Modify`].

use crate::error::SyncResult;
use crate::store::DictionaryStore;
use dorev::translate_message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookResult {
    /// Send this text instead of the original
    Modify(String),
    /// Send the original message untouched
    Default,
}

pub struct MessageHook {
    store: DictionaryStore,
}

impl MessageHook {
    pub fn new(store: DictionaryStore) -> Self {
        Self { store }
    }

    pub fn enabled(&self) -> bool {
        self.store.settings().enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.store.set_enabled(enabled);
    }

    /// `true` when the next message can only be translated after loading a
    /// dictionary
    pub fn needs_dictionary(&self) -> bool {
        self.enabled() && self.store.dictionary().is_none()
    }

    pub fn store(&self) -> &DictionaryStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DictionaryStore {
        &mut self.store
    }

    /// Rewrite `message`, loading the dictionary first if needed.
    ///
    /// # Errors
    /// Any failure to obtain a dictionary. The message is never sent
    /// untranslated because the dictionary is missing.
    pub async fn on_send_message(&mut self, message: &str) -> SyncResult<HookResult> {
        if !self.enabled() {
            return Ok(HookResult::Default);
        }

        let dictionary = self.store.ensure_loaded().await?;
        Ok(HookResult::Modify(translate_message(message, Some(dictionary))?))
    }

    /// Like [`on_send_message`](Self::on_send_message) but without touching
    /// the store. Returns `None` when a dictionary would have to be loaded
    /// first, so shared hosts can answer under a read lock.
    pub fn try_on_send_message(&self, message: &str) -> Option<SyncResult<HookResult>> {
        if !self.enabled() {
            return Some(Ok(HookResult::Default));
        }

        let dictionary = self.store.dictionary()?;
        Some(
            translate_message(message, Some(dictionary))
                .map(HookResult::Modify)
                .map_err(Into::into),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockMode, MockSource};
    use crate::settings::Settings;
    use dorev::Dictionary;

    fn hook(enabled: bool) -> MessageHook {
        let settings = Settings::default()
            .with_enabled(enabled)
            .with_cache_dir(std::env::temp_dir().join("dorev-hook-unused"));
        let source = MockSource::new(MockMode::Error("no network in tests".to_string()));
        let store = DictionaryStore::new(settings, Box::new(source))
            .with_dictionary(Dictionary::new().with_word("мир", "мiръ"));
        MessageHook::new(store)
    }

    #[tokio::test]
    async fn test_enabled_modifies() {
        let mut hook = hook(true);
        assert_eq!(
            hook.on_send_message("Привет, мир!").await.unwrap(),
            HookResult::Modify("Приветъ, мiръ!".to_string())
        );
    }

    #[tokio::test]
    async fn test_disabled_keeps_message() {
        let mut hook = hook(false);
        assert_eq!(
            hook.on_send_message("Привет, мир!").await.unwrap(),
            HookResult::Default
        );
    }

    #[test]
    fn test_try_without_loading() {
        let mut hook = hook(true);
        assert_eq!(
            hook.try_on_send_message("мир").unwrap().unwrap(),
            HookResult::Modify("мiръ".to_string())
        );

        hook.set_enabled(false);
        assert!(!hook.enabled());
        assert_eq!(
            hook.try_on_send_message("мир").unwrap().unwrap(),
            HookResult::Default
        );
    }

    #[test]
    fn test_try_needs_loaded_dictionary() {
        let settings = Settings::default();
        let source = MockSource::new(MockMode::Fixed("{}".to_string()));
        let hook = MessageHook::new(DictionaryStore::new(settings, Box::new(source)));
        assert!(hook.needs_dictionary());
        assert!(hook.try_on_send_message("мир").is_none());
    }
}
