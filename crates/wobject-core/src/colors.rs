//! ANSI color codes for dumps and dispatch traces.
//!
//! Three roles plus reset:
//! - Blue: member names (methods, properties, the class itself)
//! - Green: string contents and type names
//! - Dim: offsets, flags and other table plumbing

/// ANSI color palette for human-readable output.
///
/// Uses only standard 16-color codes so it reads on light and dark terminals.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub blue: &'static str,
    pub green: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    /// Colors enabled (ANSI escape codes).
    pub const ON: Self = Self {
        blue: "\x1b[34m",
        green: "\x1b[32m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    /// Colors disabled (empty strings).
    pub const OFF: Self = Self {
        blue: "",
        green: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }

    /// Wrap `text` in a member-name color.
    pub fn name(&self, text: &str) -> String {
        format!("{}{text}{}", self.blue, self.reset)
    }

    /// Wrap `text` in a type/literal color.
    pub fn literal(&self, text: &str) -> String {
        format!("{}{text}{}", self.green, self.reset)
    }

    /// Wrap `text` in the dim plumbing color.
    pub fn plumbing(&self, text: &str) -> String {
        format!("{}{text}{}", self.dim, self.reset)
    }
}
