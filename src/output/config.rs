//! Output configuration types

/// Configuration for result rendering.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Emit a single JSON document instead of line-oriented text.
    pub json: bool,
}

impl OutputConfig {
    pub fn color_choice(&self) -> termcolor::ColorChoice {
        if self.use_color {
            termcolor::ColorChoice::Auto
        } else {
            termcolor::ColorChoice::Never
        }
    }
}
