//! CLI configuration

use serde::{Deserialize, Serialize};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Verbosity from the `-q` flag and the number of `-v` flags
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Check if debug mode
    #[must_use]
    pub const fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }

    /// Default `tracing` filter when `RUST_LOG` is unset
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "keycalc=debug,keycalc_cli=debug",
            Self::Debug => "keycalc=trace,keycalc_cli=trace",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Whether styled output should be written
    #[must_use]
    pub fn use_color(&self) -> bool {
        self.color.should_color()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    // ===== Verbosity =====

    #[test]
    fn test_verbosity_default() {
        assert_eq!(Verbosity::default(), Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(false, 0), Verbosity::Normal);
        assert_eq!(Verbosity::from_flags(false, 1), Verbosity::Verbose);
        assert_eq!(Verbosity::from_flags(false, 5), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(true, 3), Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_predicates() {
        assert!(!Verbosity::Normal.is_verbose());
        assert!(Verbosity::Verbose.is_verbose());
        assert!(Verbosity::Debug.is_verbose());
        assert!(Verbosity::Debug.is_debug());
        assert!(!Verbosity::Verbose.is_debug());
    }

    #[test]
    fn test_filter_directive() {
        assert_eq!(Verbosity::Quiet.filter_directive(), "error");
        assert_eq!(Verbosity::Normal.filter_directive(), "warn");
        assert!(Verbosity::Verbose.filter_directive().contains("keycalc=debug"));
        assert!(Verbosity::Debug.filter_directive().contains("keycalc=trace"));
    }

    // ===== Color =====

    #[test]
    fn test_color_choice_explicit() {
        assert!(ColorChoice::Always.should_color());
        assert!(!ColorChoice::Never.should_color());
    }

    // ===== CliConfig =====

    #[test]
    fn test_config_builders() {
        let config = CliConfig::new()
            .with_verbosity(Verbosity::Debug)
            .with_color(ColorChoice::Never);
        assert_eq!(config.verbosity, Verbosity::Debug);
        assert_eq!(config.color, ColorChoice::Never);
        assert!(!config.use_color());
    }

    #[test]
    fn test_config_serialize() {
        let config = CliConfig::new().with_color(ColorChoice::Always);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("Always"));
        let back: CliConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.color, ColorChoice::Always);
    }
}
