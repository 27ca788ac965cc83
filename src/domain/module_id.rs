//! Closed registry of host-framework modules
//!
//! Module identifiers are resolved against this enum when settings are
//! loaded, so an identifier the host loader cannot find never makes it into
//! a resolved [`Settings`](super::Settings) value.

use crate::config::ValidationError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModuleId {
    /// Light/dark color-mode toggling
    ColorMode,
    /// Utility-first CSS framework integration
    Tailwind,
    /// Emoji picker component
    EmojiPicker,
}

impl ModuleId {
    /// Every known module, in default registration order.
    pub const ALL: [ModuleId; 3] = [ModuleId::ColorMode, ModuleId::Tailwind, ModuleId::EmojiPicker];

    /// The identifier the host framework's loader expects.
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleId::ColorMode => "@nuxtjs/color-mode",
            ModuleId::Tailwind => "@nuxtjs/tailwindcss",
            ModuleId::EmojiPicker => "nuxt-emoji-picker",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ModuleId::ColorMode => "color-mode toggler",
            ModuleId::Tailwind => "CSS utility framework",
            ModuleId::EmojiPicker => "emoji picker",
        }
    }

    /// Exact, case-sensitive lookup by external identifier.
    pub fn lookup(identifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|module| module.as_str() == identifier)
    }
}

impl FromStr for ModuleId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ValidationError::UnknownModule(s.to_string()))
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
