use super::{Glyphs, Grid};
use crate::error::PatternError;

/// A rectangular block of cells read from text, one line per row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    rows: usize,
    columns: usize,
    cells: Vec<bool>,
}

impl Pattern {
    /// Parse rows of glyphs. Each line is checked in turn for being empty,
    /// for characters other than the two glyphs, and for a length that
    /// differs from the first line.
    pub fn parse<I, S>(lines: I, glyphs: Glyphs) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows = 0;
        let mut columns = 0;
        let mut cells = Vec::new();

        for (idx, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            let row = idx + 1;
            if line.is_empty() {
                return Err(PatternError::EmptyRow { row });
            }

            let mut found = 0;
            for (column, character) in line.chars().enumerate() {
                let alive = match character {
                    c if c == glyphs.alive => true,
                    c if c == glyphs.dead => false,
                    character => {
                        return Err(PatternError::IllegalCharacter {
                            row,
                            column: column + 1,
                            character,
                        });
                    }
                };
                cells.push(alive);
                found += 1;
            }

            if row == 1 {
                columns = found;
            } else if found != columns {
                return Err(PatternError::InconsistentColumns {
                    row,
                    expected: columns,
                    found,
                });
            }
            rows = row;
        }

        if rows == 0 {
            return Err(PatternError::NoRows);
        }
        Ok(Self { rows, columns, cells })
    }

    /// (rows, columns)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.columns)
    }

    pub fn is_alive(&self, y: usize, x: usize) -> bool {
        y < self.rows && x < self.columns && self.cells[y * self.columns + x]
    }

    /// Copy the pattern onto the grid with its top-left corner at (y, x).
    /// Cells falling off the grid are dropped.
    pub fn place_on(&self, grid: &mut Grid, y: usize, x: usize) {
        for (idx, &alive) in self.cells.iter().enumerate() {
            grid.set(y + idx / self.columns, x + idx % self.columns, alive);
        }
    }
}

/// Classic Game of Life patterns, drawn with `O` for alive and `.` for dead
pub mod presets {
    use super::*;

    const ART_GLYPHS: Glyphs = Glyphs::new('O', '.');

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Preset {
        pub name: &'static str,
        pub description: &'static str,
        art: &'static [&'static str],
    }

    impl Preset {
        /// Built-in art is constant and always parses
        pub fn pattern(&self) -> Pattern {
            Pattern::parse(self.art, ART_GLYPHS).expect("built-in preset art is well formed")
        }
    }

    pub const BLOCK: Preset = Preset {
        name: "block",
        description: "Still life",
        art: &["OO", "OO"],
    };

    pub const BLINKER: Preset = Preset {
        name: "blinker",
        description: "Oscillator (period 2)",
        art: &["...", "OOO", "..."],
    };

    pub const TOAD: Preset = Preset {
        name: "toad",
        description: "Oscillator (period 2)",
        art: &[".OOO", "OOO."],
    };

    pub const BEACON: Preset = Preset {
        name: "beacon",
        description: "Oscillator (period 2)",
        art: &["OO..", "O...", "...O", "..OO"],
    };

    pub const PULSAR: Preset = Preset {
        name: "pulsar",
        description: "Oscillator (period 3)",
        art: &[
            "..OOO...OOO..",
            ".............",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            "..OOO...OOO..",
            ".............",
            "..OOO...OOO..",
            "O....O.O....O",
            "O....O.O....O",
            "O....O.O....O",
            ".............",
            "..OOO...OOO..",
        ],
    };

    pub const GLIDER: Preset = Preset {
        name: "glider",
        description: "Moves diagonally (period 4)",
        art: &[".O.", "..O", "OOO"],
    };

    pub const LWSS: Preset = Preset {
        name: "lwss",
        description: "Lightweight spaceship (period 4)",
        art: &[".O..O", "O....", "O...O", "OOOO."],
    };

    pub const R_PENTOMINO: Preset = Preset {
        name: "r-pentomino",
        description: "Methuselah, stabilizes at gen 1103",
        art: &[".OO", "OO.", ".O."],
    };

    pub const ACORN: Preset = Preset {
        name: "acorn",
        description: "Methuselah, stabilizes at gen 5206",
        art: &[".O.....", "...O...", "OO..OOO"],
    };

    pub const ALL: &[Preset] = &[
        BLOCK,
        BLINKER,
        TOAD,
        BEACON,
        PULSAR,
        GLIDER,
        LWSS,
        R_PENTOMINO,
        ACORN,
    ];

    /// Look up a preset by name, ignoring case
    pub fn find(name: &str) -> Option<Preset> {
        ALL.iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
            .copied()
    }

    /// One `name  description` line per preset, for error messages
    pub fn catalog() -> String {
        let width = ALL.iter().map(|preset| preset.name.len()).max().unwrap_or(0);
        ALL.iter()
            .map(|preset| format!("  {:<width$}  {}", preset.name, preset.description))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
