// Service configuration loading
use crate::domain::layout::SlotKind;
use crate::domain::template::{builtin_templates, Template, TemplateSlot};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub backend: BackendSettings,
    pub storage: StorageSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub listen: String,
    pub public_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageSettings {
    pub dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TemplatesConfig {
    #[serde(default)]
    pub templates: Vec<TemplateConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TemplateConfig {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub slots: Vec<TemplateSlotConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TemplateSlotConfig {
    pub kind: String,
    pub width: u32,
    pub height: u32,
}

impl TemplateConfig {
    pub fn to_template(&self) -> Template {
        let slots = self
            .slots
            .iter()
            .map(|slot| {
                let kind = match slot.kind.as_str() {
                    "kpi" => SlotKind::Kpi,
                    _ => SlotKind::Chart,
                };
                TemplateSlot::new(kind, slot.width, slot.height)
            })
            .collect();
        Template::new(&self.id, &self.name, &self.description, slots)
    }
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/dashboard"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Templates from config/templates.toml, or the built-in set when the file
/// is absent, unreadable, or names no templates.
pub fn load_templates() -> Vec<Template> {
    let loaded = config::Config::builder()
        .add_source(config::File::with_name("config/templates"))
        .build()
        .and_then(|settings| settings.try_deserialize::<TemplatesConfig>());

    match loaded {
        Ok(config) if !config.templates.is_empty() => config
            .templates
            .iter()
            .map(TemplateConfig::to_template)
            .collect(),
        Ok(_) => builtin_templates(),
        Err(err) => {
            tracing::warn!("using built-in templates: {}", err);
            builtin_templates()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_config_conversion() {
        let config = TemplateConfig {
            id: "wide".to_string(),
            name: "Wide View".to_string(),
            description: String::new(),
            slots: vec![
                TemplateSlotConfig {
                    kind: "kpi".to_string(),
                    width: 12,
                    height: 1,
                },
                TemplateSlotConfig {
                    kind: "chart".to_string(),
                    width: 12,
                    height: 3,
                },
            ],
        };

        let template = config.to_template();
        assert_eq!(template.id, "wide");
        assert_eq!(template.slots[0].kind, SlotKind::Kpi);
        assert_eq!(template.slots[1].kind, SlotKind::Chart);
        assert_eq!(template.slots[1].height, 3);
    }

    #[test]
    fn test_unknown_slot_kind_defaults_to_chart() {
        let config = TemplateConfig {
            id: "t".to_string(),
            name: "T".to_string(),
            description: String::new(),
            slots: vec![TemplateSlotConfig {
                kind: "gauge".to_string(),
                width: 6,
                height: 2,
            }],
        };

        assert_eq!(config.to_template().slots[0].kind, SlotKind::Chart);
    }
}
