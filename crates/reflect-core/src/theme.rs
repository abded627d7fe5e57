//! Emotion presentation themes.
//!
//! Each recognized emotion maps to a two-stop color gradient and an emoji.
//! Lookup is case-insensitive; anything else gets the neutral theme.

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Linear interpolation towards `other`; `t` is clamped to [0, 1].
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
        };
        Rgb(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }
}

/// Two-stop gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub from: Rgb,
    pub to: Rgb,
}

impl Gradient {
    /// Color at position `t` in [0, 1].
    pub fn at(&self, t: f32) -> Rgb {
        self.from.lerp(self.to, t)
    }
}

/// Visual treatment for an emotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmotionTheme {
    /// Lookup key ("anxious", ..., or "neutral").
    pub key: &'static str,
    pub gradient: Gradient,
    pub emoji: &'static str,
}

// Tailwind palette stops.
const ORANGE_400: Rgb = Rgb(0xfb, 0x92, 0x3c);
const RED_400: Rgb = Rgb(0xf8, 0x71, 0x71);
const RED_500: Rgb = Rgb(0xef, 0x44, 0x44);
const RED_600: Rgb = Rgb(0xdc, 0x26, 0x26);
const YELLOW_400: Rgb = Rgb(0xfa, 0xcc, 0x15);
const GREEN_400: Rgb = Rgb(0x4a, 0xde, 0x80);
const GREEN_500: Rgb = Rgb(0x22, 0xc5, 0x5e);
const BLUE_400: Rgb = Rgb(0x60, 0xa5, 0xfa);
const BLUE_500: Rgb = Rgb(0x3b, 0x82, 0xf6);
const INDIGO_500: Rgb = Rgb(0x63, 0x66, 0xf1);
const PURPLE_400: Rgb = Rgb(0xc0, 0x84, 0xfc);
const PINK_500: Rgb = Rgb(0xec, 0x48, 0x99);
const GRAY_400: Rgb = Rgb(0x9c, 0xa3, 0xaf);
const GRAY_600: Rgb = Rgb(0x4b, 0x55, 0x63);

const fn theme(key: &'static str, from: Rgb, to: Rgb, emoji: &'static str) -> EmotionTheme {
    EmotionTheme {
        key,
        gradient: Gradient { from, to },
        emoji,
    }
}

const THEMES: &[EmotionTheme] = &[
    theme("anxious", ORANGE_400, RED_500, "😰"),
    theme("happy", YELLOW_400, GREEN_500, "😊"),
    theme("sad", BLUE_400, INDIGO_500, "😢"),
    theme("angry", RED_400, RED_600, "😠"),
    theme("calm", GREEN_400, BLUE_500, "😌"),
    theme("confident", PURPLE_400, PINK_500, "💪"),
];

/// Theme for emotions outside the table.
pub const NEUTRAL_THEME: EmotionTheme = theme("neutral", GRAY_400, GRAY_600, "🤔");

/// Returns the theme for an emotion label, ignoring case.
pub fn theme_for(emotion: &str) -> &'static EmotionTheme {
    let key = emotion.to_lowercase();
    THEMES
        .iter()
        .find(|theme| theme.key == key)
        .unwrap_or(&NEUTRAL_THEME)
}

/// All recognized emotion themes, in table order.
pub fn known_themes() -> &'static [EmotionTheme] {
    THEMES
}
