//! Environment struct (terminal capabilities, program name)

/// Execution environment
#[derive(Debug, Clone)]
pub struct Environment {
    pub stdout_isatty: bool,
    /// Number of colours the terminal supports, 0 when colour is off
    pub colors: u32,
    pub program_name: String,
}

impl Environment {
    pub fn init() -> Self {
        Self::default()
    }

    /// Whether highlighted output should be written to stdout
    pub fn use_colors(&self) -> bool {
        self.stdout_isatty && self.colors > 0
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self {
            stdout_isatty: atty::is(atty::Stream::Stdout),
            colors: detect_color_support(),
            program_name: "grpcopy".to_string(),
        }
    }
}

/// Detect color support level
fn detect_color_support() -> u32 {
    if !atty::is(atty::Stream::Stdout) {
        return 0;
    }

    if std::env::var_os("NO_COLOR").is_some() {
        return 0;
    }

    if let Ok(colorterm) = std::env::var("COLORTERM") {
        if colorterm == "truecolor" || colorterm == "24bit" {
            return 16777216;
        }
    }

    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            return 0;
        }
        if term.contains("256") {
            return 256;
        }
    }

    256
}
