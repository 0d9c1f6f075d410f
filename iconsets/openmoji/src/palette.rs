use smarteats_core::{Palette, PillColors};

/// Letter pill accents, design system tokens
pub static PILL_PALETTE: Palette = Palette::new(&[
    PillColors {
        background: "var(--se-info-dim)",
        foreground: "var(--se-macro-protein)",
    },
    PillColors {
        background: "var(--se-warning-dim)",
        foreground: "var(--se-macro-carbs)",
    },
    PillColors {
        background: "#FEF3EE",
        foreground: "var(--se-macro-fat)",
    },
    PillColors {
        background: "var(--se-success-dim)",
        foreground: "var(--se-success)",
    },
    PillColors {
        background: "var(--se-primary-dim)",
        foreground: "var(--se-primary)",
    },
]);
