//! Keyboard chord dispatch. Four fixed chords on the platform's primary
//! modifier map to mark toggles; everything else is left to the embedder's
//! default handling.

use plume_editor_core::Mark;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub control: bool,
    pub alt: bool,
    pub shift: bool,
    /// The platform command key (cmd on macOS, win elsewhere).
    pub platform: bool,
}

impl Modifiers {
    /// The primary shortcut modifier for the current platform.
    #[cfg(target_os = "macos")]
    pub fn primary() -> Self {
        Self {
            platform: true,
            ..Self::default()
        }
    }

    #[cfg(not(target_os = "macos"))]
    pub fn primary() -> Self {
        Self {
            control: true,
            ..Self::default()
        }
    }

    fn is_primary_only(self) -> bool {
        self == Self::primary()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    /// The pressed key, lowercase ("b", "`", ...).
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyChord {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }

    /// A chord on the platform's primary modifier.
    pub fn primary(key: impl Into<String>) -> Self {
        Self::new(key, Modifiers::primary())
    }
}

pub const MARK_BINDINGS: [(&str, Mark); 4] = [
    ("b", Mark::Bold),
    ("i", Mark::Italic),
    ("u", Mark::Underlined),
    ("`", Mark::Code),
];

/// The mark to toggle for a chord, or `None` when the chord is unmapped and
/// must propagate unhandled. Matching is exact: the primary modifier alone,
/// so e.g. shift+primary+b is not intercepted.
pub fn mark_for_chord(chord: &KeyChord) -> Option<Mark> {
    if !chord.modifiers.is_primary_only() {
        return None;
    }
    MARK_BINDINGS
        .iter()
        .find(|(key, _)| *key == chord.key)
        .map(|&(_, mark)| mark)
}
