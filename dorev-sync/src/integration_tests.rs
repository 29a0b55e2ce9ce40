//! End-to-end tests for the hook pipeline
//!
//! Each test wires a [`MessageHook`] to a mock source and a temporary cache
//! directory, then drives it the way a messaging host would.

#[cfg(test)]
mod tests {
    use crate::*;
    use dorev::DorevError;
    use std::collections::HashMap;
    use tempfile::TempDir;

    const DICT: &str = r#"{
        "мир": "мiръ",
        "привет": "привѣтъ",
        "лес": "лѣсъ",
        "он": "онъ"
    }"#;

    fn hook_with(dir: &TempDir, source: MockSource) -> MessageHook {
        let settings = Settings::default().with_cache_dir(dir.path());
        MessageHook::new(DictionaryStore::new(settings, Box::new(source)))
    }

    async fn send(hook: &mut MessageHook, message: &str) -> String {
        match hook.on_send_message(message).await.unwrap() {
            HookResult::Modify(text) => text,
            HookResult::Default => message.to_string(),
        }
    }

    #[tokio::test]
    async fn test_first_message_downloads_then_cache_serves_restart() {
        let dir = TempDir::new().unwrap();
        let source = MockSource::new(MockMode::Fixed(DICT.to_string()));

        let mut hook = hook_with(&dir, source.clone());
        assert_eq!(send(&mut hook, "Привет, мир!").await, "Привѣтъ, мiръ!");
        assert_eq!(send(&mut hook, "Лес и дом").await, "Лѣсъ и домъ");
        assert_eq!(source.fetch_count(), 1);

        // a fresh hook, as after an application restart
        let mut restarted = hook_with(&dir, source.clone());
        assert_eq!(send(&mut restarted, "мир").await, "мiръ");
        assert_eq!(source.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_mixed_message() {
        let dir = TempDir::new().unwrap();
        let mut hook = hook_with(&dir, MockSource::new(MockMode::Fixed(DICT.to_string())));

        assert_eq!(
            send(&mut hook, "ОН сказал: смотри https://example.com/мир , ok?").await,
            "ОНЪ сказалъ: смотри https://example.com/мир, ok?"
        );
    }

    #[tokio::test]
    async fn test_offline_without_cache_fails_loudly() {
        let dir = TempDir::new().unwrap();
        let mut hook = hook_with(&dir, MockSource::new(MockMode::Error("offline".to_string())));

        let err = hook.on_send_message("мир").await.unwrap_err();
        assert_eq!(err, SyncError::Network("offline".to_string()));
    }

    #[tokio::test]
    async fn test_disabled_never_touches_source() {
        let dir = TempDir::new().unwrap();
        let source = MockSource::new(MockMode::Error("offline".to_string()));
        let mut hook = hook_with(&dir, source.clone());
        hook.set_enabled(false);

        assert_eq!(hook.on_send_message("мир").await.unwrap(), HookResult::Default);
        assert_eq!(source.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_refresh_then_switch_url() {
        let dir = TempDir::new().unwrap();
        let custom = "https://example.com/custom.json";
        let mut map = HashMap::new();
        map.insert(DEFAULT_DICT_ADDRESS.to_string(), DICT.to_string());
        map.insert(custom.to_string(), r#"{"мир": "мѵръ"}"#.to_string());
        let source = MockSource::new(MockMode::Mappings(map));
        let mut hook = hook_with(&dir, source.clone());

        assert_eq!(send(&mut hook, "мир").await, "мiръ");
        hook.store_mut().refresh().await.unwrap();
        assert_eq!(source.fetch_count(), 2);

        hook.store_mut().change_url(custom).await.unwrap();
        assert_eq!(send(&mut hook, "Мир").await, "Мѵръ");

        let err = hook
            .store_mut()
            .change_url("https://example.com/words.txt")
            .await
            .unwrap_err();
        assert!(matches!(err, SyncError::InvalidUrl(_)));
        assert_eq!(send(&mut hook, "мир").await, "мiръ");
    }

    #[tokio::test]
    async fn test_missing_dictionary_surfaces_core_error() {
        let dir = TempDir::new().unwrap();
        let hook = hook_with(&dir, MockSource::new(MockMode::Fixed(DICT.to_string())));
        assert!(hook.try_on_send_message("мир").is_none());

        let err = dorev::translate_message("мир", hook.store().dictionary()).unwrap_err();
        assert_eq!(err, DorevError::MissingDictionary);
    }
}
