/// Background/foreground pair for a letter pill
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PillColors {
    pub background: &'static str,
    pub foreground: &'static str,
}

/// Fixed, ordered set of pill colours
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    colors: &'static [PillColors],
}

impl Palette {
    pub const fn new(colors: &'static [PillColors]) -> Self {
        assert!(!colors.is_empty(), "palette needs at least one colour pair");
        Self { colors }
    }

    /// Colours for `name`: sum of its UTF-16 code units modulo the palette length
    pub fn pick(&self, name: &str) -> PillColors {
        let index = char_code_sum(name) % self.colors.len() as u64;
        self.colors[index as usize]
    }

    pub fn colors(&self) -> &'static [PillColors] {
        self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

/// Sum of UTF-16 code units, the unit the web client hashed names with
pub fn char_code_sum(name: &str) -> u64 {
    name.encode_utf16().map(u64::from).sum()
}

/// First character of the trimmed name, upper-cased. Empty for blank names.
pub fn pill_letter(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}
