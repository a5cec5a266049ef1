use crate::node::DEFAULT_NODE_COLOR;

/// Settings of a [`super::Session`], configured with the setter pattern:
///
/// ```
/// use algographs::session::SessionConfig;
///
/// let config = SessionConfig::default()
///     .history_limit(8)
///     .default_color("#2196F3");
/// assert_eq!(config.get_history_limit(), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    history_limit: usize,
    default_color: String,
    record_noop_mutations: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_limit: 32,
            default_color: DEFAULT_NODE_COLOR.to_string(),
            record_noop_mutations: false,
        }
    }
}

impl SessionConfig {
    /// Shorthand for default
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum number of earlier graphs kept for undo. `0` disables undo.
    pub fn history_limit(mut self, history_limit: usize) -> Self {
        self.history_limit = history_limit;
        self
    }

    /// Color assigned to nodes added through the session
    pub fn default_color<S>(mut self, color: S) -> Self
    where
        S: Into<String>,
    {
        self.default_color = color.into();
        self
    }

    /// If *true*, mutations that leave the structure unchanged (re-adding a node, deleting a
    /// missing edge, ...) still create an undo entry
    pub fn record_noop_mutations(mut self, record: bool) -> Self {
        self.record_noop_mutations = record;
        self
    }

    pub fn get_history_limit(&self) -> usize {
        self.history_limit
    }

    pub fn get_default_color(&self) -> &str {
        &self.default_color
    }

    pub fn get_record_noop_mutations(&self) -> bool {
        self.record_noop_mutations
    }
}
