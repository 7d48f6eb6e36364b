//! The built-in AQI system: six pollutant inputs, one AQI output and the
//! rule base in `standard.rules`.
//!
//! [`engine`] hands out a process-wide engine that is built on first use and
//! never rebuilt. [`build_engine`] builds a separate engine around the same
//! variables with a different rule text.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

use crate::category::{Band, classify};
use crate::engine::InferenceEngine;
use crate::error::Result;
use crate::membership::MembershipFunction::{self, Trapezoidal as Trap, Triangular as Tri};
use crate::ruleset;
use crate::variable::{LinguisticVariable, Universe};

pub const RULES: &str = include_str!("standard.rules");

/// Term names, best air quality first.
pub const TERMS: [&str; 6] = ["baik", "sedang", "buruk", "tidak_sehat", "parah", "berbahaya"];

pub const INPUTS: [&str; 6] = ["PM2.5", "PM10", "CO", "NO2", "O3", "SO2"];
pub const OUTPUT: &str = "AQI";

// ------------- Pollutants -------------
/// Reference text for one input, as shown next to the calculator.
#[derive(Debug, PartialEq, Serialize)]
pub struct Pollutant {
    /// Variable name used in rules and requests.
    pub name: &'static str,
    pub full_name: &'static str,
    pub unit: &'static str,
    pub definition: &'static str,
    pub sources: &'static str,
    pub impact: &'static str,
}

/// The six inputs, in [`INPUTS`] order.
pub static POLLUTANTS: [Pollutant; 6] = [
    Pollutant {
        name: "PM2.5",
        full_name: "Particulate Matter ≤ 2.5 µm",
        unit: "µg/m³",
        definition: "Partikel halus dengan diameter 2.5 mikrometer atau lebih kecil",
        sources: "Pembakaran, kendaraan bermotor, industri",
        impact: "Dapat masuk ke dalam paru-paru dan aliran darah",
    },
    Pollutant {
        name: "PM10",
        full_name: "Particulate Matter ≤ 10 µm",
        unit: "µg/m³",
        definition: "Partikel dengan diameter 10 mikrometer atau lebih kecil",
        sources: "Debu jalan, konstruksi, industri",
        impact: "Dapat mengganggu sistem pernapasan",
    },
    Pollutant {
        name: "CO",
        full_name: "Karbon Monoksida",
        unit: "ppb",
        definition: "Gas tidak berwarna dan tidak berbau",
        sources: "Kendaraan bermotor, pembakaran tidak sempurna",
        impact: "Mengurangi kemampuan darah mengangkut oksigen",
    },
    Pollutant {
        name: "NO2",
        full_name: "Nitrogen Dioksida",
        unit: "ppb",
        definition: "Gas berwarna kecoklatan dan berbau tajam",
        sources: "Kendaraan bermotor, pembangkit listrik",
        impact: "Iritasi saluran pernapasan, memperburuk asma",
    },
    Pollutant {
        name: "O3",
        full_name: "Ozon",
        unit: "ppb",
        definition: "Gas tidak berwarna dengan bau tajam",
        sources: "Reaksi kimia polutan di udara dengan sinar matahari",
        impact: "Iritasi mata dan saluran pernapasan, memperburuk asma",
    },
    Pollutant {
        name: "SO2",
        full_name: "Sulfur Dioksida",
        unit: "ppb",
        definition: "Gas tidak berwarna dengan bau tajam",
        sources: "Pembangkit listrik, industri, kendaraan diesel",
        impact: "Iritasi saluran pernapasan, memperburuk asma",
    },
];

// (name, universe max, shapes in TERMS order); every universe starts at 0 with step 1
type Definition = (&'static str, f64, [MembershipFunction; 6]);

const DEFINITIONS: [Definition; 7] = [
    ("PM2.5", 445.0, [
        Trap(0.0, 0.0, 15.0, 45.0),
        Tri(15.0, 45.0, 75.0),
        Tri(45.0, 75.0, 105.0),
        Tri(75.0, 105.0, 135.0),
        Tri(105.0, 185.0, 265.0),
        Trap(185.0, 315.0, 445.0, 445.0),
    ]),
    // NOTE: buruk reaches past the start of tidak_sehat, and parah/berbahaya
    // are spaced differently from the other pollutants. Kept as authored.
    ("PM10", 550.0, [
        Trap(0.0, 0.0, 25.0, 75.0),
        Tri(25.0, 75.0, 125.0),
        Tri(75.0, 175.0, 275.0),
        Tri(210.0, 300.0, 390.0),
        Tri(310.0, 390.0, 470.0),
        Trap(390.0, 470.0, 550.0, 550.0),
    ]),
    ("CO", 54165.0, [
        Trap(0.0, 0.0, 4165.0, 12500.0),
        Tri(4165.0, 12500.0, 20835.0),
        Tri(12505.0, 20835.0, 29165.0),
        Tri(20835.0, 29165.0, 37495.0),
        Tri(29165.0, 37500.0, 45835.0),
        Trap(37505.0, 45835.0, 54165.0, 54165.0),
    ]),
    ("NO2", 550.0, [
        Trap(0.0, 0.0, 20.0, 60.0),
        Tri(20.0, 60.0, 100.0),
        Tri(75.0, 130.0, 185.0),
        Tri(130.0, 185.0, 240.0),
        Tri(185.0, 295.0, 405.0),
        Trap(350.0, 450.0, 550.0, 550.0),
    ]),
    ("O3", 1501.0, [
        Trap(0.0, 0.0, 25.0, 75.0),
        Tri(25.0, 75.0, 100.0),
        Tri(80.0, 134.0, 188.0),
        Tri(148.0, 188.0, 228.0),
        Tri(188.0, 470.0, 752.0),
        Trap(497.0, 999.0, 1501.0, 1501.0),
    ]),
    ("SO2", 3000.0, [
        Trap(0.0, 0.0, 20.0, 60.0),
        Tri(20.0, 60.0, 100.0),
        Tri(60.0, 230.0, 400.0),
        Tri(230.0, 590.0, 950.0),
        Tri(590.0, 1200.0, 1810.0),
        Trap(1200.0, 2100.0, 3000.0, 3000.0),
    ]),
    ("AQI", 550.0, [
        Trap(0.0, 0.0, 25.0, 75.0),
        Tri(25.0, 75.0, 125.0),
        Tri(75.0, 125.0, 175.0),
        Tri(125.0, 175.0, 225.0),
        Tri(175.0, 225.0, 275.0),
        Trap(225.0, 275.0, 325.0, 325.0),
    ]),
];

fn variable((name, max, shapes): &Definition) -> Result<LinguisticVariable> {
    let mut v = LinguisticVariable::new(name, Universe::new(0.0, *max, 1.0)?)?;
    for (term, mf) in TERMS.iter().zip(shapes) {
        v = v.term(term, *mf)?;
    }
    Ok(v)
}

/// The six pollutant variables, in [`INPUTS`] order, and the AQI variable.
pub fn variables() -> Result<(Vec<LinguisticVariable>, LinguisticVariable)> {
    let inputs = DEFINITIONS[..6].iter().map(variable).collect::<Result<Vec<_>>>()?;
    let output = variable(&DEFINITIONS[6])?;
    Ok((inputs, output))
}

/// A new engine over the built-in variables using `rule_text` as rule base.
pub fn build_engine(rule_text: &str) -> Result<InferenceEngine> {
    let (inputs, output) = variables()?;
    InferenceEngine::new(inputs, output, ruleset::parse(rule_text)?)
}

lazy_static! {
    static ref ENGINE: Result<InferenceEngine> = build_engine(RULES);
}

/// The shared built-in engine, built the first time it is asked for.
pub fn engine() -> Result<&'static InferenceEngine> {
    match &*ENGINE {
        Ok(engine) => Ok(engine),
        Err(e) => Err(e.clone()),
    }
}

// ------------- Readings -------------
/// One crisp reading per pollutant. PM in µg/m³, gases in ppb.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Readings {
    #[serde(alias = "PM2.5")]
    pub pm25: f64,
    #[serde(alias = "PM10")]
    pub pm10: f64,
    #[serde(alias = "CO")]
    pub co: f64,
    #[serde(alias = "NO2")]
    pub no2: f64,
    #[serde(alias = "O3")]
    pub o3: f64,
    #[serde(alias = "SO2")]
    pub so2: f64,
}

impl Readings {
    pub fn new(pm25: f64, pm10: f64, co: f64, no2: f64, o3: f64, so2: f64) -> Self {
        Self { pm25, pm10, co, no2, o3, so2 }
    }
    /// Values in [`INPUTS`] order.
    pub fn to_array(&self) -> [f64; 6] {
        [self.pm25, self.pm10, self.co, self.no2, self.o3, self.so2]
    }
}

/// The strongest term of one reading.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DominantTerm {
    pub pollutant: String,
    pub term: String,
    pub degree: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub aqi: f64,
    pub band: &'static Band,
    /// One entry per reading that belongs to some term, in input order.
    pub dominant: Vec<DominantTerm>,
}

/// Runs `readings` through `engine` and classifies the result.
pub fn assess_with(engine: &InferenceEngine, readings: &Readings) -> Result<Assessment> {
    let values = readings.to_array();
    let aqi = engine.compute(&values)?;
    let dominant = engine
        .inputs()
        .iter()
        .zip(values)
        .filter_map(|(variable, x)| {
            variable.dominant_term(x).map(|(term, degree)| DominantTerm {
                pollutant: variable.name().to_owned(),
                term: term.to_owned(),
                degree,
            })
        })
        .collect();
    Ok(Assessment { aqi, band: classify(aqi), dominant })
}

/// Runs `readings` through the shared built-in engine.
pub fn assess(readings: &Readings) -> Result<Assessment> {
    assess_with(engine()?, readings)
}
