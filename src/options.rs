#[derive(Clone, Debug)]
pub struct Options {
    /// Root label used by the fallback reconstruction when the input never
    /// names one. The line repair always discovers the label from the text.
    pub root_label: Option<String>,
    /// Enable repair logging. Use `repair_with_log` to retrieve the entries.
    pub logging: bool,
    /// Lines of context captured on each side of a failure position.
    pub context_lines: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            root_label: None,
            logging: false,
            context_lines: 2,
        }
    }
}
