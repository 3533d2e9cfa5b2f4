//! Session configuration.

/// How the main menu is drawn before each prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum BannerStyle {
    /// Framed multi-line menu.
    #[default]
    Boxed,
    /// One-line option summary.
    Compact,
}

/// Menu session configuration.
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// Menu banner style.
    pub banner: BannerStyle,
}
