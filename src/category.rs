//! The static AQI band table.
//!
//! Classification is a plain ordered lookup: the first band whose upper
//! edge exceeds the value wins. Bands are lower-inclusive and
//! upper-exclusive, so `50.0` is [`Category::Sedang`] while `49.999` is still
//! [`Category::Baik`]. Anything below zero falls into the first band and
//! anything from 250 upwards into the last.

use serde::Serialize;
// used to print out readable forms of a category
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Category {
    Baik,
    Sedang,
    Buruk,
    TidakSehat,
    SangatTidakSehat,
    Berbahaya,
}

impl Category {
    pub fn band(&self) -> &'static Band {
        &BANDS[*self as usize]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.band().label)
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct Band {
    pub category: Category,
    pub label: &'static str,
    /// Alternative label used by some displays.
    pub alias: Option<&'static str>,
    pub low: f64,
    /// Exclusive upper edge; infinite for the last band.
    #[serde(serialize_with = "finite_or_none")]
    pub high: f64,
    pub color: &'static str,
    pub color_name: &'static str,
    pub description: &'static str,
    /// Shown next to a computed result.
    pub recommendation: &'static str,
    /// Advice on outdoor activity.
    pub activity: &'static str,
}

// JSON has no infinity
fn finite_or_none<S: serde::Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        s.serialize_some(value)
    } else {
        s.serialize_none()
    }
}

impl Band {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value < self.high
    }
}

pub static BANDS: [Band; 6] = [
    Band {
        category: Category::Baik,
        label: "Baik",
        alias: None,
        low: 0.0,
        high: 50.0,
        color: "#9EFF9E",
        color_name: "green",
        description: "Kualitas udara memuaskan dan polusi udara menimbulkan risiko kecil atau tidak ada risiko.",
        recommendation: "Kualitas udara memuaskan dan polusi udara menimbulkan risiko kecil atau tidak ada risiko.",
        activity: "Lakukan aktivitas di luar ruangan seperti biasa",
    },
    Band {
        category: Category::Sedang,
        label: "Sedang",
        alias: None,
        low: 50.0,
        high: 100.0,
        color: "#FFFF9E",
        color_name: "yellow",
        description: "Kualitas udara dapat diterima namun beberapa polutan dapat menimbulkan masalah kesehatan ringan bagi sebagian kecil orang yang sangat sensitif.",
        recommendation: "Kualitas udara dapat diterima, namun bagi sebagian kecil orang yang sangat sensitif mungkin perlu berhati-hati.",
        activity: "Kurangi aktivitas fisik yang berkepanjangan di luar ruangan bagi kelompok sensitif",
    },
    Band {
        category: Category::Buruk,
        label: "Buruk",
        alias: None,
        low: 100.0,
        high: 150.0,
        color: "#FFB84D",
        color_name: "orange",
        description: "Anggota kelompok sensitif mungkin mengalami dampak kesehatan. Masyarakat umum cenderung tidak terpengaruh.",
        recommendation: "Anggota kelompok sensitif mungkin mengalami dampak kesehatan. Masyarakat umum cenderung tidak terpengaruh.",
        activity: "Kurangi aktivitas fisik yang berkepanjangan di luar ruangan",
    },
    Band {
        category: Category::TidakSehat,
        label: "Tidak Sehat",
        alias: None,
        low: 150.0,
        high: 200.0,
        color: "#FF9E9E",
        color_name: "red",
        description: "Setiap orang mungkin mulai mengalami dampak kesehatan; anggota kelompok sensitif mungkin mengalami dampak kesehatan yang lebih serius.",
        recommendation: "Setiap orang mungkin mulai mengalami dampak kesehatan. Kelompok sensitif mungkin mengalami dampak lebih serius.",
        activity: "Hindari aktivitas fisik yang berkepanjangan di luar ruangan",
    },
    Band {
        category: Category::SangatTidakSehat,
        label: "Sangat Tidak Sehat",
        alias: Some("Parah"),
        low: 200.0,
        high: 250.0,
        color: "#FF69B4",
        color_name: "pink",
        description: "Peringatan kesehatan yang mengindikasikan bahwa setiap orang dapat mengalami dampak kesehatan yang lebih serius.",
        recommendation: "Peringatan kesehatan: setiap orang dapat mengalami dampak kesehatan yang lebih serius.",
        activity: "Hindari semua aktivitas fisik di luar ruangan",
    },
    Band {
        category: Category::Berbahaya,
        label: "Berbahaya",
        alias: None,
        low: 250.0,
        high: f64::INFINITY,
        color: "#FF4D4D",
        color_name: "dark red",
        description: "Peringatan kesehatan darurat. Seluruh populasi kemungkinan terkena dampak.",
        recommendation: "Peringatan kesehatan darurat. Seluruh populasi kemungkinan terkena dampak.",
        activity: "Tetap di dalam ruangan dan tutup semua jendela",
    },
];

/// NaN is not a computed AQI and is placed in the last band, the same as
/// any value the table cannot bound.
pub fn classify(value: f64) -> &'static Band {
    if value.is_nan() {
        return &BANDS[BANDS.len() - 1];
    }
    BANDS
        .iter()
        .find(|band| value < band.high)
        .unwrap_or(&BANDS[BANDS.len() - 1])
}
