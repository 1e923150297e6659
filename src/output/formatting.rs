use std::env;
use std::io::IsTerminal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_color(&self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => detect_color_support(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FormattingConfig {
    pub color: ColorMode,
}

impl FormattingConfig {
    pub fn new(color: ColorMode) -> Self {
        Self { color }
    }

    /// Honour `NO_COLOR`, `CLICOLOR` and `CLICOLOR_FORCE`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if env::var_os("NO_COLOR").is_some() {
            config.color = ColorMode::Never;
        }
        if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
            config.color = ColorMode::Never;
        }
        if env::var("CLICOLOR_FORCE").is_ok_and(|v| v == "1") {
            config.color = ColorMode::Always;
        }

        config
    }

    /// No colours, for files and tests
    pub fn plain() -> Self {
        Self {
            color: ColorMode::Never,
        }
    }

    /// Point the global `colored` switch at this configuration
    pub fn apply(&self) {
        colored::control::set_override(self.color.should_use_color());
    }
}

fn detect_color_support() -> bool {
    if env::var("TERM").is_ok_and(|term| term == "dumb") {
        return false;
    }
    std::io::stdout().is_terminal()
}
