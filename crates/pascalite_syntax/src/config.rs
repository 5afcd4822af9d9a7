//! Parser configuration.
//!
//! Defaults match the documented dialect; the builder methods exist for tooling that needs the historical
//! `WHEN` behavior or a tighter nesting bound.

/// How a `WHEN` chain reacts to `END` where another clause or `OTHERWISE` could follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WhenTermination {
    /// `END` right after a clause closes the chain; the last conditional gets no else-branch.
    #[default]
    EndTerminates,
    /// Only `OTHERWISE` closes the chain. `END` is handed to the expression parser as the next guard, which
    /// rejects it with a fatal error.
    Legacy,
}

/// Parser configuration
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// `WHEN` chain termination policy
    pub when_termination: WhenTermination,
    /// Maximum nesting of statements and parenthesized expressions before the parse is aborted
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            when_termination: WhenTermination::EndTerminates,
            max_depth: 256,
        }
    }
}

impl ParserConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `WHEN` termination policy
    pub fn with_when_termination(mut self, policy: WhenTermination) -> Self {
        self.when_termination = policy;
        self
    }

    /// Set the maximum nesting depth
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ParserConfig::default();
        assert_eq!(config.when_termination, WhenTermination::EndTerminates);
        assert_eq!(config.max_depth, 256);
    }

    #[test]
    fn test_new_equals_default() {
        let new_config = ParserConfig::new();
        let default_config = ParserConfig::default();
        assert_eq!(new_config.when_termination, default_config.when_termination);
        assert_eq!(new_config.max_depth, default_config.max_depth);
    }

    #[test]
    fn test_builder_chain() {
        let config = ParserConfig::new()
            .with_when_termination(WhenTermination::Legacy)
            .with_max_depth(8);
        assert_eq!(config.when_termination, WhenTermination::Legacy);
        assert_eq!(config.max_depth, 8);
    }

    #[test]
    fn test_builder_override() {
        let config = ParserConfig::new().with_max_depth(2).with_max_depth(64);
        assert_eq!(config.max_depth, 64); // Last value wins
    }
}
