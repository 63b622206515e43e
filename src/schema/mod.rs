//! The penguin measurement schema.
//!
//! This module defines the closed categorical sets (island, sex, species),
//! the eight-field measurement record, and the bounded ranges of the six
//! numeric measurements. The categorical mappings mirror the label
//! encoding the classifier was trained with, so every code is fixed:
//! changing one silently breaks every existing model artifact.
//!
//! # Example
//!
//! ```
//! use pinguino::schema::{Island, PenguinRecord, Sex};
//!
//! let record = PenguinRecord {
//!     island: Island::Biscoe,
//!     sex: Sex::Female,
//!     culmen_length_mm: 44.0,
//!     culmen_depth_mm: 17.0,
//!     flipper_length_mm: 200.0,
//!     body_mass_g: 4200.0,
//!     delta_15_n: 8.7,
//!     delta_13_c: -25.6,
//! };
//!
//! let features = record.to_features();
//! assert_eq!(features[0], 0.0); // Biscoe
//! assert_eq!(features[5], 0.0); // Female
//! ```

use crate::error::{PinguinoError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 8;

/// Feature names in the exact column order the model was trained on.
///
/// The order is load-bearing: `PenguinRecord::to_features` must emit
/// values in this order and nothing validates it at inference time.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "island",
    "culmen_length_mm",
    "culmen_depth_mm",
    "flipper_length_mm",
    "body_mass_g",
    "sex",
    "delta_15_n",
    "delta_13_c",
];

/// Island of observation.
///
/// Closed set: the label encoder knew exactly these three islands, so
/// there is no "unknown" bucket and parsing anything else is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Island {
    /// Biscoe Islands (code 0)
    Biscoe,
    /// Dream Island (code 1)
    Dream,
    /// Torgersen Island (code 2)
    Torgersen,
}

impl Island {
    /// All islands in encoding order.
    pub const ALL: [Island; 3] = [Island::Biscoe, Island::Dream, Island::Torgersen];

    /// Integer code of this island, matching the training label encoding.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Island::Biscoe => 0,
            Island::Dream => 1,
            Island::Torgersen => 2,
        }
    }

    /// Decodes an island from its integer code.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` for codes outside {0, 1, 2}.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Island::Biscoe),
            1 => Ok(Island::Dream),
            2 => Ok(Island::Torgersen),
            _ => Err(PinguinoError::UnknownCategory {
                field: "island".to_string(),
                value: code.to_string(),
            }),
        }
    }

    /// Display name, as it appears in the form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Island::Biscoe => "Biscoe",
            Island::Dream => "Dream",
            Island::Torgersen => "Torgersen",
        }
    }
}

impl fmt::Display for Island {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Island {
    type Err = PinguinoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Biscoe" => Ok(Island::Biscoe),
            "Dream" => Ok(Island::Dream),
            "Torgersen" => Ok(Island::Torgersen),
            other => Err(PinguinoError::UnknownCategory {
                field: "island".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Penguin sex.
///
/// The dataset records sex in upper case, and the encoding follows the
/// alphabetical label order: FEMALE before MALE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    /// Female (code 0)
    Female,
    /// Male (code 1)
    Male,
}

impl Sex {
    /// Both sexes in encoding order.
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    /// Integer code of this sex, matching the training label encoding.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Sex::Female => 0,
            Sex::Male => 1,
        }
    }

    /// Decodes a sex from its integer code.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` for codes outside {0, 1}.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Sex::Female),
            1 => Ok(Sex::Male),
            _ => Err(PinguinoError::UnknownCategory {
                field: "sex".to_string(),
                value: code.to_string(),
            }),
        }
    }

    /// Display name, in the dataset's upper-case form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Sex::Female => "FEMALE",
            Sex::Male => "MALE",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sex {
    type Err = PinguinoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "FEMALE" => Ok(Sex::Female),
            "MALE" => Ok(Sex::Male),
            other => Err(PinguinoError::UnknownCategory {
                field: "sex".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Predicted penguin species.
///
/// Decodes the classifier's class index. The ordering
/// {0: Adelie, 1: Chinstrap, 2: Gentoo} is asserted by convention; it
/// matches the alphabetical label encoding used at training time and
/// cannot be verified against the artifact itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Adélie penguin (class 0)
    Adelie,
    /// Chinstrap penguin (class 1)
    Chinstrap,
    /// Gentoo penguin (class 2)
    Gentoo,
}

impl Species {
    /// All species, positionally aligned to the probability distribution.
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Chinstrap, Species::Gentoo];

    /// Class index of this species.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Species::Adelie => 0,
            Species::Chinstrap => 1,
            Species::Gentoo => 2,
        }
    }

    /// Decodes a species from a classifier output.
    ///
    /// # Errors
    ///
    /// Returns `UnknownCategory` for class indices outside {0, 1, 2}.
    /// A model emitting such an index is incompatible with this schema,
    /// never silently mapped to a default species.
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            0 => Ok(Species::Adelie),
            1 => Ok(Species::Chinstrap),
            2 => Ok(Species::Gentoo),
            _ => Err(PinguinoError::UnknownCategory {
                field: "species".to_string(),
                value: code.to_string(),
            }),
        }
    }

    /// Display name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Chinstrap => "Chinstrap",
            Species::Gentoo => "Gentoo",
        }
    }

    /// URL of an illustrative photo for this species.
    #[must_use]
    pub const fn image_url(self) -> &'static str {
        match self {
            Species::Adelie => {
                "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e2/Adelie_Penguin_composite.jpg/800px-Adelie_Penguin_composite.jpg"
            }
            Species::Chinstrap => {
                "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6f/Chinstrap_penguin_%28Pygoscelis_antarctica%29_2.jpg/800px-Chinstrap_penguin_%28Pygoscelis_antarctica%29_2.jpg"
            }
            Species::Gentoo => {
                "https://upload.wikimedia.org/wikipedia/commons/thumb/c/ca/Gentoo_Penguin_undertakes_a_long_march_to_the_sea.jpg/800px-Gentoo_Penguin_undertakes_a_long_march_to_the_sea.jpg"
            }
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Species {
    type Err = PinguinoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Adelie" => Ok(Species::Adelie),
            "Chinstrap" => Ok(Species::Chinstrap),
            "Gentoo" => Ok(Species::Gentoo),
            other => Err(PinguinoError::UnknownCategory {
                field: "species".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Bounded range of a numeric measurement field.
///
/// Mirrors the form widget configuration: minimum, maximum, default
/// value, and input step. Boundary values are in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldRange {
    /// Smallest accepted value
    pub min: f32,
    /// Largest accepted value
    pub max: f32,
    /// Default shown by the form
    pub default: f32,
    /// Input increment
    pub step: f32,
}

impl FieldRange {
    /// Returns true if `value` lies within `[min, max]` (inclusive).
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Clamps `value` into `[min, max]`.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Culmen (bill) length in millimeters.
pub const CULMEN_LENGTH_MM: FieldRange = FieldRange {
    min: 30.0,
    max: 60.0,
    default: 44.0,
    step: 0.1,
};

/// Culmen (bill) depth in millimeters.
pub const CULMEN_DEPTH_MM: FieldRange = FieldRange {
    min: 13.0,
    max: 22.0,
    default: 17.0,
    step: 0.1,
};

/// Flipper length in millimeters.
pub const FLIPPER_LENGTH_MM: FieldRange = FieldRange {
    min: 170.0,
    max: 235.0,
    default: 200.0,
    step: 1.0,
};

/// Body mass in grams.
pub const BODY_MASS_G: FieldRange = FieldRange {
    min: 2700.0,
    max: 6300.0,
    default: 4200.0,
    step: 50.0,
};

/// Nitrogen isotope ratio δ15N (‰).
pub const DELTA_15_N: FieldRange = FieldRange {
    min: 7.0,
    max: 10.0,
    default: 8.7,
    step: 0.1,
};

/// Carbon isotope ratio δ13C (‰).
pub const DELTA_13_C: FieldRange = FieldRange {
    min: -28.0,
    max: -23.0,
    default: -25.6,
    step: 0.1,
};

/// One penguin's eight measured attributes.
///
/// This is the unit of inference: a record encodes into the fixed-order
/// feature vector consumed by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PenguinRecord {
    /// Island of observation
    pub island: Island,
    /// Sex
    pub sex: Sex,
    /// Culmen length (mm)
    pub culmen_length_mm: f32,
    /// Culmen depth (mm)
    pub culmen_depth_mm: f32,
    /// Flipper length (mm)
    pub flipper_length_mm: f32,
    /// Body mass (g)
    pub body_mass_g: f32,
    /// δ15N isotope ratio (‰)
    pub delta_15_n: f32,
    /// δ13C isotope ratio (‰)
    pub delta_13_c: f32,
}

impl PenguinRecord {
    /// Encodes this record as the fixed-order feature vector.
    ///
    /// The order matches [`FEATURE_NAMES`], i.e. the column order the
    /// model was trained on. Categorical fields become their integer
    /// codes; numeric fields pass through untouched (the classifier
    /// performs no range checks).
    #[must_use]
    pub fn to_features(&self) -> [f32; FEATURE_COUNT] {
        [
            f32::from(self.island.code()),
            self.culmen_length_mm,
            self.culmen_depth_mm,
            self.flipper_length_mm,
            self.body_mass_g,
            f32::from(self.sex.code()),
            self.delta_15_n,
            self.delta_13_c,
        ]
    }
}

impl Default for PenguinRecord {
    /// A record at the form's default values.
    fn default() -> Self {
        Self {
            island: Island::Biscoe,
            sex: Sex::Female,
            culmen_length_mm: CULMEN_LENGTH_MM.default,
            culmen_depth_mm: CULMEN_DEPTH_MM.default,
            flipper_length_mm: FLIPPER_LENGTH_MM.default,
            body_mass_g: BODY_MASS_G.default,
            delta_15_n: DELTA_15_N.default,
            delta_13_c: DELTA_13_C.default,
        }
    }
}
