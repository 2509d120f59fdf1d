use crate::types::{BpmStyle, PromptLayout};
use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

const CONFIG_FILE_NAME: &str = "config.toml";
const ENV_CONFIG_PATH: &str = "CADENZA_CONFIG_PATH";
const ENV_LAYOUT: &str = "CADENZA_LAYOUT";
const ENV_MAX_CHARS: &str = "CADENZA_MAX_CHARS";
const ENV_CREATIVITY: &str = "CADENZA_CREATIVITY";
const ENV_SEED: &str = "CADENZA_SEED";
const ENV_BPM_STYLE: &str = "CADENZA_BPM_STYLE";

const MAX_CREATIVITY: u8 = 100;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    layout: PromptLayout,
    max_chars: Option<usize>,
    creativity_level: u8,
    seed: Option<u64>,
    bpm_style: BpmStyle,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        let path = match config_file_override(env::var_os(ENV_CONFIG_PATH)) {
            Some(path) => Some(path),
            None => Self::default_config_path().ok(),
        };
        if let Some(path) = path.filter(|path| path.exists()) {
            let partial = read_partial(&path)?;
            config.apply_partial(partial);
            tracing::debug!("loaded config from {}", path.display());
        }

        config.apply_env(|key| env::var(key).ok())?;
        Ok(config)
    }

    pub fn layout(&self) -> PromptLayout {
        self.layout
    }

    pub fn max_chars(&self) -> Option<usize> {
        self.max_chars
    }

    pub fn creativity_level(&self) -> u8 {
        self.creativity_level
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn bpm_style(&self) -> BpmStyle {
        self.bpm_style
    }

    pub fn default_config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", "Cadenza", "Cadenza")
            .ok_or_else(|| anyhow!("unable to determine config directory"))?;
        Ok(dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    fn apply_partial(&mut self, partial: PartialConfig) {
        if let Some(layout) = partial.layout {
            self.layout = layout;
        }
        if let Some(max_chars) = partial.max_chars {
            self.max_chars = (max_chars > 0).then_some(max_chars);
        }
        if let Some(creativity) = partial.creativity_level {
            self.creativity_level = creativity.min(MAX_CREATIVITY);
        }
        if let Some(seed) = partial.seed {
            self.seed = Some(seed);
        }
        if let Some(style) = partial.bpm_style {
            self.bpm_style = style;
        }
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        if let Some(value) = var(ENV_LAYOUT) {
            self.layout =
                value.parse::<PromptLayout>().map_err(|err| anyhow!("{ENV_LAYOUT}: {err}"))?;
        }
        if let Some(value) = var(ENV_MAX_CHARS) {
            let parsed = value
                .trim()
                .parse::<usize>()
                .context("CADENZA_MAX_CHARS must be a non-negative integer")?;
            self.max_chars = (parsed > 0).then_some(parsed);
        }
        if let Some(value) = var(ENV_CREATIVITY) {
            let parsed = value
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|level| *level <= MAX_CREATIVITY)
                .ok_or_else(|| anyhow!("CADENZA_CREATIVITY must be an integer between 0-100"))?;
            self.creativity_level = parsed;
        }
        if let Some(value) = var(ENV_SEED) {
            let parsed =
                value.trim().parse::<u64>().context("CADENZA_SEED must be an unsigned integer")?;
            self.seed = Some(parsed);
        }
        if let Some(value) = var(ENV_BPM_STYLE) {
            self.bpm_style =
                value.parse::<BpmStyle>().map_err(|err| anyhow!("{ENV_BPM_STYLE}: {err}"))?;
        }
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            layout: PromptLayout::Quoted,
            max_chars: None,
            creativity_level: crate::generator::DEFAULT_CREATIVITY,
            seed: None,
            bpm_style: BpmStyle::Exact,
        }
    }
}

fn config_file_override(value: Option<OsString>) -> Option<PathBuf> {
    let value = value.filter(|value| !value.is_empty())?;
    let path = PathBuf::from(value);
    if path.is_file() || path.ends_with(CONFIG_FILE_NAME) {
        return Some(path);
    }
    if path.is_dir() {
        return Some(path.join(CONFIG_FILE_NAME));
    }
    Some(path)
}

fn read_partial(path: &Path) -> Result<PartialConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file at {}", path.display()))?;
    let partial: PartialConfig =
        toml::from_str(&contents).with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(partial)
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct PartialConfig {
    layout: Option<PromptLayout>,
    max_chars: Option<usize>,
    creativity_level: Option<u8>,
    seed: Option<u64>,
    bpm_style: Option<BpmStyle>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(key, value)| (key.to_string(), value.to_string())).collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn partial_file_overrides_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "layout = \"bracket\"\ncreativity_level = 240\nmax_chars = 900\n")
            .expect("write config");

        let mut config = AppConfig::default();
        config.apply_partial(read_partial(&path).expect("parse config"));
        assert_eq!(config.layout(), PromptLayout::Bracket);
        assert_eq!(config.creativity_level(), 100);
        assert_eq!(config.max_chars(), Some(900));
        assert_eq!(config.bpm_style(), BpmStyle::Exact);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn malformed_file_reports_its_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "layout = [").expect("write config");
        let err = read_partial(&path).err().map(|err| err.to_string()).unwrap_or_default();
        assert!(err.contains("failed to parse"));
    }

    #[test]
    fn override_accepts_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let resolved = config_file_override(Some(dir.path().as_os_str().to_owned()));
        assert_eq!(resolved, Some(dir.path().join(CONFIG_FILE_NAME)));
        assert_eq!(config_file_override(Some(OsString::new())), None);
        assert_eq!(config_file_override(None), None);
    }

    #[test]
    fn environment_wins_over_file() {
        let mut config = AppConfig::default();
        config.apply_partial(PartialConfig { seed: Some(1), ..PartialConfig::default() });
        config
            .apply_env(lookup(&[
                (ENV_SEED, "42"),
                (ENV_LAYOUT, "b"),
                (ENV_BPM_STYLE, "range"),
                (ENV_MAX_CHARS, "0"),
                (ENV_CREATIVITY, " "),
            ]))
            .expect("valid env");
        assert_eq!(config.seed(), Some(42));
        assert_eq!(config.layout(), PromptLayout::Bracket);
        assert_eq!(config.bpm_style(), BpmStyle::Range);
        assert_eq!(config.max_chars(), None);
        assert_eq!(config.creativity_level(), crate::generator::DEFAULT_CREATIVITY);
    }

    #[test]
    fn invalid_environment_values_are_errors() {
        let mut config = AppConfig::default();
        assert!(config.apply_env(lookup(&[(ENV_CREATIVITY, "101")])).is_err());
        assert!(config.apply_env(lookup(&[(ENV_SEED, "minus one")])).is_err());
        assert!(config.apply_env(lookup(&[(ENV_LAYOUT, "yaml")])).is_err());
    }
}
