use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::bail;
use minesweeper_core::{CellCount, Coord, GameConfig};

use crate::app::read_line;

/// Preset board sizes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Expert];

    pub const fn config(self) -> GameConfig {
        match self {
            Self::Beginner => GameConfig::new_unchecked(9, 9, 10),
            Self::Intermediate => GameConfig::new_unchecked(16, 16, 40),
            Self::Expert => GameConfig::new_unchecked(30, 16, 99),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Expert => "Expert",
        }
    }
}

/// Asks for a difficulty, or a custom size, until it yields a valid board.
pub fn prompt_config(input: &mut impl BufRead, output: &mut impl Write) -> anyhow::Result<GameConfig> {
    loop {
        writeln!(output, "Choose a difficulty:")?;
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            let config = difficulty.config();
            writeln!(
                output,
                "  {}) {} ({}x{}, {} mines)",
                i + 1,
                difficulty.label(),
                config.width,
                config.height,
                config.mines
            )?;
        }
        writeln!(output, "  4) Custom")?;

        let Some(choice) = read_line(input, output, "> ")? else {
            bail!("Input closed before a board was chosen");
        };

        let config = match choice.to_ascii_lowercase().as_str() {
            "1" | "beginner" => Difficulty::Beginner.config(),
            "2" | "intermediate" => Difficulty::Intermediate.config(),
            "3" | "expert" => Difficulty::Expert.config(),
            "4" | "custom" => {
                let Some(width) = prompt_number::<Coord>(input, output, "Width")? else {
                    continue;
                };
                let Some(height) = prompt_number::<Coord>(input, output, "Height")? else {
                    continue;
                };
                let Some(mines) = prompt_number::<CellCount>(input, output, "Mines")? else {
                    continue;
                };
                match GameConfig::new(width, height, mines) {
                    Ok(config) => config,
                    Err(err) => {
                        writeln!(output, "{err}, try again.")?;
                        continue;
                    }
                }
            }
            other => {
                writeln!(output, "Unknown choice `{other}`.")?;
                continue;
            }
        };

        log::debug!("Chose {:?}", config);
        return Ok(config);
    }
}

/// `None` when the answer is not a number of type `T`, an error when input is closed.
fn prompt_number<T: FromStr>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    label: &str,
) -> anyhow::Result<Option<T>> {
    let Some(answer) = read_line(input, output, &format!("{label}: "))? else {
        bail!("Input closed before a board was chosen");
    };
    Ok(match answer.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            writeln!(output, "`{answer}` is not a valid {}.", label.to_lowercase())?;
            None
        }
    })
}
