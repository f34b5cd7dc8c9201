//! Pure component records and their vapor pressure correlation.

use crate::errors::{EosError, EosResult};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Critical constants and Antoine coefficients for a single substance.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ComponentRecord {
    /// name of the substance
    pub name: String,
    /// critical temperature in Kelvin
    pub tc: f64,
    /// critical pressure in Pascal
    pub pc: f64,
    /// acentric factor
    pub acentric_factor: f64,
    /// Antoine coefficient A
    pub antoine_a: f64,
    /// Antoine coefficient B
    pub antoine_b: f64,
    /// Antoine coefficient C
    pub antoine_c: f64,
}

impl ComponentRecord {
    /// Create a new pure substance record.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: &str,
        tc: f64,
        pc: f64,
        acentric_factor: f64,
        antoine_a: f64,
        antoine_b: f64,
        antoine_c: f64,
    ) -> Self {
        Self {
            name: name.to_owned(),
            tc,
            pc,
            acentric_factor,
            antoine_a,
            antoine_b,
            antoine_c,
        }
    }

    /// Saturation pressure from the Antoine correlation.
    pub fn saturation_pressure(&self, temperature: f64) -> f64 {
        10.0_f64.powf(self.antoine_a - self.antoine_b / (temperature + self.antoine_c))
    }

    /// Reads a list of component records from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(file: P) -> EosResult<Vec<Self>> {
        let reader = BufReader::new(File::open(file)?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Checks that the critical constants are physically meaningful.
    pub fn validate(&self) -> EosResult<()> {
        if self.tc <= 0.0 {
            return Err(EosError::InvalidState(
                self.name.clone(),
                String::from("critical temperature"),
                self.tc,
            ));
        }
        if self.pc <= 0.0 {
            return Err(EosError::InvalidState(
                self.name.clone(),
                String::from("critical pressure"),
                self.pc,
            ));
        }
        Ok(())
    }
}

impl std::fmt::Display for ComponentRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ComponentRecord(name={}", self.name)?;
        write!(f, ", tc={} K", self.tc)?;
        write!(f, ", pc={} Pa", self.pc)?;
        write!(f, ", acentric factor={})", self.acentric_factor)
    }
}
