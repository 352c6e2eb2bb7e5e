#[derive(Debug, Clone)]
pub struct Options {
    /// Reject inputs that produce diagnostics instead of degrading to
    /// partial structures.
    pub strict: bool,
    /// Nesting limit for table literals (default: 128)
    pub max_depth: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            strict: false,
            max_depth: 128,
        }
    }
}
