//! The interactive measurement form.
//!
//! Any field not supplied as a flag is prompted for on the terminal.
//! Categorical fields offer the closed set of choices and re-prompt on
//! anything else; numeric fields show their range and default, take the
//! default on empty input, and clamp out-of-range values to the
//! configured bounds. By the time a [`PenguinRecord`] leaves this
//! module, invalid input is impossible by construction.

use colored::Colorize;
use pinguino::schema::{
    FieldRange, Island, PenguinRecord, Sex, BODY_MASS_G, CULMEN_DEPTH_MM, CULMEN_LENGTH_MM,
    DELTA_13_C, DELTA_15_N, FLIPPER_LENGTH_MM,
};
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Field values collected from flags; `None` means "ask".
#[derive(Debug, Default)]
pub(crate) struct PartialRecord {
    pub island: Option<Island>,
    pub sex: Option<Sex>,
    pub culmen_length_mm: Option<f32>,
    pub culmen_depth_mm: Option<f32>,
    pub flipper_length_mm: Option<f32>,
    pub body_mass_g: Option<f32>,
    pub delta_15_n: Option<f32>,
    pub delta_13_c: Option<f32>,
}

impl PartialRecord {
    /// True when every field came in as a flag and no prompting is needed.
    pub(crate) fn is_complete(&self) -> bool {
        self.island.is_some()
            && self.sex.is_some()
            && self.culmen_length_mm.is_some()
            && self.culmen_depth_mm.is_some()
            && self.flipper_length_mm.is_some()
            && self.body_mass_g.is_some()
            && self.delta_15_n.is_some()
            && self.delta_13_c.is_some()
    }

    /// Clamps the numeric fields that did arrive as flags.
    pub(crate) fn clamp_flags(mut self) -> Self {
        self.culmen_length_mm = self.culmen_length_mm.map(|v| CULMEN_LENGTH_MM.clamp(v));
        self.culmen_depth_mm = self.culmen_depth_mm.map(|v| CULMEN_DEPTH_MM.clamp(v));
        self.flipper_length_mm = self.flipper_length_mm.map(|v| FLIPPER_LENGTH_MM.clamp(v));
        self.body_mass_g = self.body_mass_g.map(|v| BODY_MASS_G.clamp(v));
        self.delta_15_n = self.delta_15_n.map(|v| DELTA_15_N.clamp(v));
        self.delta_13_c = self.delta_13_c.map(|v| DELTA_13_C.clamp(v));
        self
    }
}

/// Fills the missing fields by prompting on stdin.
pub(crate) fn complete(partial: PartialRecord) -> io::Result<PenguinRecord> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    let island = match partial.island {
        Some(island) => island,
        None => prompt_choice("Island", &Island::ALL, &mut input)?,
    };
    let sex = match partial.sex {
        Some(sex) => sex,
        None => prompt_choice("Sex", &Sex::ALL, &mut input)?,
    };

    let culmen_length_mm = prompt_or(
        partial.culmen_length_mm,
        "Culmen length (mm)",
        &CULMEN_LENGTH_MM,
        &mut input,
    )?;
    let culmen_depth_mm = prompt_or(
        partial.culmen_depth_mm,
        "Culmen depth (mm)",
        &CULMEN_DEPTH_MM,
        &mut input,
    )?;
    let flipper_length_mm = prompt_or(
        partial.flipper_length_mm,
        "Flipper length (mm)",
        &FLIPPER_LENGTH_MM,
        &mut input,
    )?;
    let body_mass_g = prompt_or(partial.body_mass_g, "Body mass (g)", &BODY_MASS_G, &mut input)?;
    let delta_15_n = prompt_or(
        partial.delta_15_n,
        "Delta 15 N (o/oo)",
        &DELTA_15_N,
        &mut input,
    )?;
    let delta_13_c = prompt_or(
        partial.delta_13_c,
        "Delta 13 C (o/oo)",
        &DELTA_13_C,
        &mut input,
    )?;

    Ok(PenguinRecord {
        island,
        sex,
        culmen_length_mm,
        culmen_depth_mm,
        flipper_length_mm,
        body_mass_g,
        delta_15_n,
        delta_13_c,
    })
}

fn prompt_or(
    preset: Option<f32>,
    label: &str,
    range: &FieldRange,
    input: &mut impl BufRead,
) -> io::Result<f32> {
    match preset {
        Some(value) => Ok(value),
        None => prompt_measurement(label, range, input),
    }
}

/// Prompts for one of a closed set of choices until a valid one arrives.
fn prompt_choice<T>(label: &str, options: &[T], input: &mut impl BufRead) -> io::Result<T>
where
    T: Copy + fmt::Display + FromStr,
{
    loop {
        println!("{}", format!("{label}:").white().bold());
        for (i, option) in options.iter().enumerate() {
            println!("  {}) {option}", i + 1);
        }
        print!("> ");
        io::stdout().flush()?;

        let line = read_line(input)?;
        match parse_choice(line.trim(), options) {
            Some(choice) => return Ok(choice),
            None => println!("{}", "Please pick one of the listed options.".yellow()),
        }
    }
}

/// Prompts for a bounded measurement until a number (or blank) arrives.
fn prompt_measurement(label: &str, range: &FieldRange, input: &mut impl BufRead) -> io::Result<f32> {
    loop {
        print!(
            "{} [{} to {}, default {}]: ",
            label.white().bold(),
            range.min,
            range.max,
            range.default
        );
        io::stdout().flush()?;

        let line = read_line(input)?;
        match parse_measurement(line.trim(), range) {
            Ok(value) => return Ok(value),
            Err(msg) => println!("{}", msg.yellow()),
        }
    }
}

fn read_line(input: &mut impl BufRead) -> io::Result<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input ended before the form was complete",
        ));
    }
    Ok(line)
}

/// Parses a choice either by 1-based list position or by exact name.
pub(crate) fn parse_choice<T>(input: &str, options: &[T]) -> Option<T>
where
    T: Copy + FromStr,
{
    if let Ok(index) = input.parse::<usize>() {
        return (1..=options.len())
            .contains(&index)
            .then(|| options[index - 1]);
    }
    // FromStr on the schema enums already rejects everything outside the set.
    input.parse::<T>().ok()
}

/// Parses a measurement: blank takes the default, numbers clamp into range.
pub(crate) fn parse_measurement(input: &str, range: &FieldRange) -> Result<f32, String> {
    if input.is_empty() {
        return Ok(range.default);
    }
    let value: f32 = input
        .parse()
        .map_err(|_| format!("Not a number: {input:?}"))?;
    if !value.is_finite() {
        return Err(format!("Not a finite number: {input:?}"));
    }
    Ok(range.clamp(value))
}
