//! Static registry of the engines the deployment knows about

use serde::{Deserialize, Serialize};

/// A search engine as listed by `/api/engines`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineDescriptor {
    /// Engine name (unique identifier)
    pub name: String,
    /// Categories this engine belongs to
    pub categories: Vec<String>,
    /// Whether engine is disabled
    pub disabled: bool,
}

impl EngineDescriptor {
    pub fn new(name: &str, categories: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            disabled: false,
        }
    }
}

/// Engines configured on the aggregator side, in display order.
const BUILTIN: &[(&str, &str)] = &[
    ("bing", "general"),
    ("brave", "general"),
    ("duckduckgo", "general"),
    ("google", "general"),
    ("mojeek", "general"),
    ("startpage", "general"),
    ("wikipedia", "general"),
    ("wikidata", "general"),
    ("stackoverflow", "it"),
    ("github", "it"),
    ("reddit", "social media"),
    ("bing images", "images"),
    ("duckduckgo images", "images"),
    ("google images", "images"),
];

/// Registry of all listed search engines.
///
/// Built from code only; it never reads the environment or the network.
#[derive(Debug, Clone)]
pub struct EngineRegistry {
    engines: Vec<EngineDescriptor>,
}

impl EngineRegistry {
    /// The fixed engine list
    pub fn builtin() -> Self {
        Self {
            engines: BUILTIN
                .iter()
                .map(|&(name, category)| EngineDescriptor::new(name, &[category]))
                .collect(),
        }
    }

    /// All engines, in registry order
    pub fn all(&self) -> &[EngineDescriptor] {
        &self.engines
    }

    /// Get an engine by name
    pub fn get(&self, name: &str) -> Option<&EngineDescriptor> {
        self.engines.iter().find(|e| e.name == name)
    }

    /// Get all enabled engines in a category
    pub fn get_by_category(&self, category: &str) -> Vec<&EngineDescriptor> {
        self.engines
            .iter()
            .filter(|e| !e.disabled && e.categories.iter().any(|c| c == category))
            .collect()
    }

    /// Get all engine names
    pub fn names(&self) -> Vec<&str> {
        self.engines.iter().map(|e| e.name.as_str()).collect()
    }

    /// Check if an engine exists
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Get number of registered engines
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}

impl Default for EngineRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
