//! The glosser registry — strategy identifier to implementation.

use std::collections::HashMap;
use std::sync::Arc;

use signpose_core::SignError;

use crate::dictionary::DictionaryGlosser;
use crate::simple::SimpleGlosser;
use crate::TextToGloss;

/// Fixed table of glossing strategies, constructed at startup.
///
/// # Example
///
/// ```
/// use signpose_translate::GlosserRegistry;
///
/// let registry = GlosserRegistry::with_defaults(vec!["xin chào".to_string()]);
/// assert!(registry.get("simple").is_ok());
/// assert!(registry.get("dictionary").is_ok());
/// assert!(registry.get("nmt").is_err());
/// ```
pub struct GlosserRegistry {
    glossers: HashMap<String, Arc<dyn TextToGloss>>,
}

impl GlosserRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            glossers: HashMap::new(),
        }
    }

    /// Creates a registry holding the built-in strategies, with the
    /// dictionary glosser seeded from `vocabulary` (typically the
    /// lexicon's word keys).
    pub fn with_defaults(vocabulary: Vec<String>) -> Self {
        let mut registry = Self::new();
        registry.register("simple", Arc::new(SimpleGlosser));
        registry.register("dictionary", Arc::new(DictionaryGlosser::new(vocabulary)));
        registry
    }

    /// Registers a strategy under `name`, replacing any previous one.
    pub fn register(&mut self, name: impl Into<String>, glosser: Arc<dyn TextToGloss>) {
        self.glossers.insert(name.into(), glosser);
    }

    /// Looks up a strategy by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SignError::UnknownGlosser`] for an unregistered name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn TextToGloss>, SignError> {
        self.glossers
            .get(name)
            .cloned()
            .ok_or_else(|| SignError::UnknownGlosser {
                name: name.to_string(),
            })
    }

    /// Registered strategy identifiers, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.glossers.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for GlosserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
