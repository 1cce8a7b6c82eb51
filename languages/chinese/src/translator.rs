use std::time::Duration;

use async_trait::async_trait;
use hanzi_config::translator::TranslatorConfig;
use hanzi_translator::{OfflineTranslator, ProviderMetadata, TranslateError, Translation, Translator};

/// Google's public `translate_a/single` endpoint (no API key)
#[derive(Clone)]
pub struct GoogleTranslator {
    client: reqwest::Client,
    api_url: String,
}

impl GoogleTranslator {
    pub fn new(api_url: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, api_url })
    }
}

/// Concatenate the translated sentence fragments of a `translate_a/single` reply
fn parse_google_response(json: &serde_json::Value) -> Result<String, TranslateError> {
    let fragments = json
        .get(0)
        .and_then(|f| f.as_array())
        .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

    let text: String = fragments
        .iter()
        .filter_map(|f| f.get(0).and_then(|t| t.as_str()))
        .collect();

    if text.trim().is_empty() {
        return Err(TranslateError::ApiError("Empty translation".to_string()));
    }

    Ok(text.trim().to_string())
}

#[async_trait]
impl Translator for GoogleTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        let params = [
            ("client", "gtx"),
            ("sl", from),
            ("tl", to),
            ("dt", "t"),
            ("q", text),
        ];

        let response = self.client.get(&self.api_url).query(&params).send().await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        Ok(Translation {
            text: parse_google_response(&json)?,
            from: from.to_string(),
            to: to.to_string(),
            provider: "google".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Google Translate".to_string(),
            requires_api_key: false,
            free_tier_available: true,
        }
    }
}

#[derive(Clone)]
pub struct DeeplTranslator {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl DeeplTranslator {
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> Result<Self, TranslateError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            api_url,
        })
    }
}

/// DeepL wants bare upper-case codes: "zh-CN" -> "ZH"
fn deepl_lang(code: &str) -> String {
    code.split(['-', '_'])
        .next()
        .unwrap_or(code)
        .to_uppercase()
}

#[async_trait]
impl Translator for DeeplTranslator {
    async fn translate(
        &self,
        text: &str,
        from: &str,
        to: &str,
    ) -> Result<Translation, TranslateError> {
        if self.api_key.is_empty() {
            return Err(TranslateError::AuthenticationError);
        }

        let source_lang = deepl_lang(from);
        let target_lang = deepl_lang(to);
        let params = [
            ("text", text),
            ("source_lang", source_lang.as_str()),
            ("target_lang", target_lang.as_str()),
        ];

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("DeepL-Auth-Key {}", self.api_key))
            .form(&params)
            .send()
            .await?;

        if response.status() == 429 {
            return Err(TranslateError::RateLimitExceeded);
        }

        if response.status() == 403 {
            return Err(TranslateError::AuthenticationError);
        }

        if !response.status().is_success() {
            return Err(TranslateError::ApiError(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let json: serde_json::Value = response.json().await.map_err(|e| {
            TranslateError::ApiError(format!("Failed to parse response: {}", e))
        })?;

        let translated_text = json["translations"]
            .get(0)
            .and_then(|t| t["text"].as_str())
            .ok_or_else(|| TranslateError::ApiError("No translation in response".to_string()))?;

        Ok(Translation {
            text: translated_text.to_string(),
            from: from.to_string(),
            to: to.to_string(),
            provider: "deepl".to_string(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "DeepL".to_string(),
            requires_api_key: true,
            free_tier_available: true,
        }
    }
}

/// Build the provider selected in the config
pub fn translator_from_config(
    config: &TranslatorConfig,
) -> Result<Box<dyn Translator>, TranslateError> {
    if !config.enabled {
        tracing::warn!("Translation disabled, every word gets a placeholder unless cached");
        return Ok(Box::new(OfflineTranslator));
    }

    let timeout = Duration::from_secs(config.timeout_seconds);

    match config.provider.as_str() {
        "google" => Ok(Box::new(GoogleTranslator::new(config.endpoint(), timeout)?)),
        "deepl" => Ok(Box::new(DeeplTranslator::new(
            config.api_key.clone(),
            config.endpoint(),
            timeout,
        )?)),
        other => Err(TranslateError::ApiError(format!(
            "Unknown translation provider: {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn joins_google_fragments() {
        let reply = json!([[["Ik hou ", "我爱", null, null, 1], ["van leren", "学习", null, null, 1]], null, "zh-CN"]);
        assert_eq!(parse_google_response(&reply).unwrap(), "Ik hou van leren");
    }

    #[test]
    fn rejects_unexpected_google_shape() {
        assert!(parse_google_response(&json!({"error": "nope"})).is_err());
        assert!(parse_google_response(&json!([[]])).is_err());
    }

    #[test]
    fn maps_language_codes_for_deepl() {
        assert_eq!(deepl_lang("zh-CN"), "ZH");
        assert_eq!(deepl_lang("nl"), "NL");
        assert_eq!(deepl_lang("pt_BR"), "PT");
    }

    #[tokio::test]
    async fn deepl_without_key_fails_before_any_request() {
        let translator = DeeplTranslator::new(
            String::new(),
            "http://127.0.0.1:9/unused".to_string(),
            Duration::from_secs(1),
        )
        .unwrap();
        let result = translator.translate("你好", "zh-CN", "nl").await;
        assert!(matches!(result, Err(TranslateError::AuthenticationError)));
    }

    #[test]
    fn picks_provider_from_config() {
        let mut config = TranslatorConfig::default();
        assert_eq!(translator_from_config(&config).unwrap().metadata().name, "Google Translate");

        config.provider = "deepl".into();
        assert_eq!(translator_from_config(&config).unwrap().metadata().name, "DeepL");

        config.enabled = false;
        assert_eq!(translator_from_config(&config).unwrap().metadata().name, "offline");

        config.enabled = true;
        config.provider = "babelfish".into();
        assert!(translator_from_config(&config).is_err());
    }
}
