#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColourScheme {
    #[default]
    Classic,
    Grayscale,
    Fiery,
    Oceanic,
    Psychedelic,
    Forest,
    Rainbow,
    Fire,
}

impl ColourScheme {
    pub const ALL: &'static [Self] = &[
        Self::Classic,
        Self::Grayscale,
        Self::Fiery,
        Self::Oceanic,
        Self::Psychedelic,
        Self::Forest,
        Self::Rainbow,
        Self::Fire,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Grayscale => "grayscale",
            Self::Fiery => "fiery",
            Self::Oceanic => "oceanic",
            Self::Psychedelic => "psychedelic",
            Self::Forest => "forest",
            Self::Rainbow => "rainbow",
            Self::Fire => "fire",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "Classic",
            Self::Grayscale => "Grayscale",
            Self::Fiery => "Fiery",
            Self::Oceanic => "Oceanic",
            Self::Psychedelic => "Psychedelic",
            Self::Forest => "Forest",
            Self::Rainbow => "Rainbow",
            Self::Fire => "Fire",
        }
    }

    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let name = name.trim();

        Self::ALL
            .iter()
            .copied()
            .find(|scheme| scheme.name().eq_ignore_ascii_case(name))
    }

    /// Looks a scheme up by name, falling back to grayscale.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or(Self::Grayscale)
    }
}

impl std::fmt::Display for ColourScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
