use log::Level;
use serde::Deserialize;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` tag holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "lp-config";

#[cfg(debug_assertions)]
pub fn default_log_level() -> Level {
    Level::Debug // Development builds show skipped enhancers
}

#[cfg(not(debug_assertions))]
pub fn default_log_level() -> Level {
    Level::Info
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LandingConfig {
    pub header_scroll_threshold: f64,
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
    pub magnetic: MagneticConfig,
    pub smooth_scroll: SmoothScrollConfig,
    pub typing: TypingConfig,
    pub log_level: Option<String>,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            header_scroll_threshold: 50.0,
            reveal: RevealConfig::default(),
            parallax: ParallaxConfig::default(),
            magnetic: MagneticConfig::default(),
            smooth_scroll: SmoothScrollConfig::default(),
            typing: TypingConfig::default(),
            log_level: None,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct RevealConfig {
    pub selectors: Vec<String>,
    pub stagger_containers: Vec<String>,
    pub root_margin: String,
    pub threshold: f64,
    pub stagger_step_ms: u32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selectors: vec![
                ".fade-in".to_string(),
                ".fade-in-left".to_string(),
                ".fade-in-right".to_string(),
            ],
            stagger_containers: vec![".benefits-grid".to_string(), ".timeline".to_string()],
            root_margin: "0px 0px -100px 0px".to_string(),
            threshold: 0.1,
            stagger_step_ms: 100,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ParallaxConfig {
    pub background_rate: f64,
    pub particle_rate: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            background_rate: 0.4,
            particle_rate: 0.2,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct MagneticConfig {
    pub selector: String,
    pub strength: f64,
    pub init_delay_ms: u32,
}

impl Default for MagneticConfig {
    fn default() -> Self {
        Self {
            selector: ".btn".to_string(),
            strength: 0.1,
            init_delay_ms: 100,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SmoothScrollConfig {
    pub enabled: bool,
    pub duration: f64,
    pub mouse_multiplier: f64,
    pub touch_multiplier: f64,
    pub smooth_touch: bool,
}

impl Default for SmoothScrollConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            duration: 1.2,
            mouse_multiplier: 1.0,
            touch_multiplier: 2.0,
            smooth_touch: false,
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct TypingConfig {
    pub enabled: bool,
    pub selector: String,
    pub start_delay_ms: u32,
    pub interval_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            selector: ".hero-title .name".to_string(),
            start_delay_ms: 1000,
            interval_ms: 100,
        }
    }
}

impl LandingConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Reads overrides from the page. No config element means defaults.
    pub fn load(document: Option<&Document>) -> Result<Self, serde_json::Error> {
        let raw = document
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }

    pub fn level(&self) -> Level {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or_else(default_log_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_tuning() {
        let config = LandingConfig::default();
        assert_eq!(config.header_scroll_threshold, 50.0);
        assert_eq!(config.reveal.root_margin, "0px 0px -100px 0px");
        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(config.reveal.stagger_step_ms, 100);
        assert_eq!(config.parallax.background_rate, 0.4);
        assert_eq!(config.magnetic.init_delay_ms, 100);
        assert_eq!(config.smooth_scroll.duration, 1.2);
        assert_eq!(config.smooth_scroll.touch_multiplier, 2.0);
        assert!(!config.smooth_scroll.smooth_touch);
        assert!(!config.typing.enabled);
    }

    #[test]
    fn json_overrides_only_named_keys() {
        let config = LandingConfig::from_json(
            r#"{ "header_scroll_threshold": 80, "typing": { "enabled": true } }"#,
        )
        .unwrap();

        assert_eq!(config.header_scroll_threshold, 80.0);
        assert!(config.typing.enabled);
        assert_eq!(config.typing.interval_ms, 100);
        assert_eq!(config.reveal, RevealConfig::default());
    }

    #[test]
    fn missing_document_gives_defaults() {
        assert_eq!(LandingConfig::load(None).unwrap(), LandingConfig::default());
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(LandingConfig::from_json("{ not json").is_err());
    }

    #[test]
    fn log_level_override() {
        let config = LandingConfig::from_json(r#"{ "log_level": "warn" }"#).unwrap();
        assert_eq!(config.level(), Level::Warn);

        let config = LandingConfig::from_json(r#"{ "log_level": "chatty" }"#).unwrap();
        assert_eq!(config.level(), default_log_level());
    }
}
