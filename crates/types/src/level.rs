//! Flood classification levels reported by the image/sensor classifier

use serde::{Deserialize, Serialize};

/// Classification level of a monitoring station
///
/// Serialized as the bare integer the classifier emits (0, 1 or 2).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum FloodLevel {
    /// No flooding detected (0)
    #[default]
    Normal,
    /// Flooding suspected, needs attention (1)
    Suspicious,
    /// Flood confirmed (2)
    Flood,
}

impl FloodLevel {
    /// All levels in ascending severity
    pub const ALL: [FloodLevel; 3] = [FloodLevel::Normal, FloodLevel::Suspicious, FloodLevel::Flood];

    /// Map a raw classifier prediction onto a level.
    ///
    /// Accepts integral numbers only, so `2` and `2.0` are both `Flood`.
    pub fn from_prediction(prediction: f64) -> Option<Self> {
        if prediction.fract() != 0.0 {
            return None;
        }
        match prediction as i64 {
            0 => Some(FloodLevel::Normal),
            1 => Some(FloodLevel::Suspicious),
            2 => Some(FloodLevel::Flood),
            _ => None,
        }
    }

    pub fn value(self) -> u8 {
        match self {
            FloodLevel::Normal => 0,
            FloodLevel::Suspicious => 1,
            FloodLevel::Flood => 2,
        }
    }

    /// Label used on dashboard cards and map popups
    pub fn label(self) -> &'static str {
        match self {
            FloodLevel::Normal => "No Flood",
            FloodLevel::Suspicious => "Suspicious",
            FloodLevel::Flood => "Flood",
        }
    }

    /// Shorter label used in written station reports
    pub fn report_label(self) -> &'static str {
        match self {
            FloodLevel::Normal => "Normal",
            FloodLevel::Suspicious => "Suspicious",
            FloodLevel::Flood => "FLOOD",
        }
    }

    /// Marker colour name understood by the map collaborator
    pub fn color(self) -> &'static str {
        match self {
            FloodLevel::Normal => "green",
            FloodLevel::Suspicious => "orange",
            FloodLevel::Flood => "red",
        }
    }
}

impl From<FloodLevel> for u8 {
    fn from(level: FloodLevel) -> Self {
        level.value()
    }
}

impl TryFrom<u8> for FloodLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        FloodLevel::from_prediction(f64::from(value))
            .ok_or_else(|| format!("invalid flood level: {}", value))
    }
}

impl std::fmt::Display for FloodLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.value())
    }
}
