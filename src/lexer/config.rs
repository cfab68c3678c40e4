/// Feature gates for a scan.
///
/// The default configuration reproduces the base grammar exactly: every
/// operator character is its own token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanConfig {
    /// Emit `==`, `!=`, `<=` and `>=` as single operator tokens.
    pub compound_operators: bool,
}

impl ScanConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_compound_operators(mut self, enabled: bool) -> Self {
        self.compound_operators = enabled;
        self
    }
}
