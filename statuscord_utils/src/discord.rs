use serenity::all::Colour;

/// Embed accent colors used across command replies.
pub enum Colors {
    Info,
    Success,
    Error,
}

impl From<Colors> for Colour {
    fn from(value: Colors) -> Self {
        match value {
            Colors::Info => Colour::new(0x0773D6),
            Colors::Success => Colour::new(0x3BD65D),
            Colors::Error => Colour::new(0xD61E3B),
        }
    }
}
