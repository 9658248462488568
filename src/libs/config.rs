//! Configuration for taskflow.
//!
//! The configuration is a small JSON file (`config.json`) in the platform
//! data directory resolved by [`DataStorage`]. Every section is optional:
//!
//! - **defaults**: category and priority given to new tasks that don't name one
//! - **view**: filter and sort order a session starts with
//!
//! View settings only seed a session. Filter, search and sort changes made
//! while running are never written back.
//!
//! ```rust,no_run
//! use taskflow::libs::config::Config;
//!
//! let config = Config::read()?;
//! let params = config.view_params();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use super::task::{normalize_category, Priority, SortOrder, TaskFilter, KNOWN_CATEGORIES};
use super::view::ViewParams;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultsConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewConfig {
    #[serde(default)]
    pub filter: TaskFilter,

    #[serde(default)]
    pub sort: SortOrder,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewConfig>,
}

impl Config {
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        // A missing file just means nothing was configured yet
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Initial view parameters for a session, with an empty search.
    pub fn view_params(&self) -> ViewParams {
        let view = self.view.clone().unwrap_or_default();
        ViewParams::new(view.filter, "", view.sort)
    }

    pub fn defaults(&self) -> DefaultsConfig {
        self.defaults.clone().unwrap_or_default()
    }

    /// Interactive setup wizard. Starts from the saved configuration, if any.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "defaults".to_string(),
                name: Message::ConfigModuleDefaults.to_string(),
            },
            ConfigModule {
                key: "view".to_string(),
                name: Message::ConfigModuleView.to_string(),
            },
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "defaults" => {
                    let default = config.defaults();
                    msg_print!(Message::ConfigModuleDefaults);

                    let category: String = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(format!("{} ({})", Message::PromptDefaultCategory, KNOWN_CATEGORIES.join("/")))
                        .default(default.category.unwrap_or_else(|| normalize_category(None)))
                        .interact_text()?;

                    let priorities: Vec<&str> = Priority::ALL.iter().map(|p| p.as_str()).collect();
                    let current = Priority::ALL.iter().position(|p| Some(*p) == default.priority).unwrap_or(1);
                    let priority = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultPriority.to_string())
                        .items(&priorities)
                        .default(current)
                        .interact()?;

                    config.defaults = Some(DefaultsConfig {
                        category: Some(normalize_category(Some(&category))),
                        priority: Some(Priority::ALL[priority]),
                    });
                }
                "view" => {
                    let default = config.view.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleView);

                    let filters = [TaskFilter::All, TaskFilter::Active, TaskFilter::Completed];
                    let filter = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultFilter.to_string())
                        .items(&filters.iter().map(|f| f.to_string()).collect::<Vec<_>>())
                        .default(filters.iter().position(|f| *f == default.filter).unwrap_or(0))
                        .interact()?;

                    let sorts = [SortOrder::Newest, SortOrder::Oldest, SortOrder::Alphabetical];
                    let sort = Select::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptDefaultSort.to_string())
                        .items(&sorts.iter().map(|s| s.to_string()).collect::<Vec<_>>())
                        .default(sorts.iter().position(|s| *s == default.sort).unwrap_or(0))
                        .interact()?;

                    config.view = Some(ViewConfig {
                        filter: filters[filter],
                        sort: sorts[sort],
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
