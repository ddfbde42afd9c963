//! Recognizer configuration for TinyAda

/// Default bound on rule nesting (subprogram bodies, statements and expressions combined).
pub const DEFAULT_MAX_NESTING: usize = 128;

/// Recognizer configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecognizerConfig {
    /// Stop at the first syntax error instead of recovering
    pub fail_fast: bool,
    /// Report tokens left over after the top-level subprogram body
    pub check_end_of_input: bool,
    /// Deepest nesting of subprogram bodies, statements and expressions before the construct is abandoned
    pub max_nesting: usize,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            check_end_of_input: true,
            max_nesting: DEFAULT_MAX_NESTING,
        }
    }
}

impl RecognizerConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the first syntax error ends the session
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Set whether trailing tokens after the subprogram body are an error
    pub fn with_end_of_input_check(mut self, check: bool) -> Self {
        self.check_end_of_input = check;
        self
    }

    /// Set the nesting bound
    pub fn with_max_nesting(mut self, max_nesting: usize) -> Self {
        self.max_nesting = max_nesting;
        self
    }
}
