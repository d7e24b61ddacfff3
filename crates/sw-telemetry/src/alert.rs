//! Alert classification.
//!
//! [`classify`] is a pure function of a [`Reading`]: the same reading always
//! yields the same [`Classification`].
//!
//! | dust          | tier       |
//! |---------------|------------|
//! | `<= 30`       | `Good`     |
//! | `31 ..= 50`   | `Moderate` |
//! | `> 50`        | `Bad`      |
//!
//! The warning flag is computed separately: `dust > 50 || rain`.  At
//! `dust == 50` the tier is `Moderate` and there is no dust warning.

use std::fmt;

use sw_core::Reading;

/// Highest dust value still rated `Good`.
pub const GOOD_DUST_MAX: u32 = 30;

/// Highest dust value still rated `Moderate`; anything above warns.
pub const MODERATE_DUST_MAX: u32 = 50;

/// Air-quality tier derived from the dust concentration.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DustTier {
    Good,
    Moderate,
    Bad,
}

impl DustTier {
    /// First matching threshold wins.
    pub fn for_dust(dust: u32) -> Self {
        if dust <= GOOD_DUST_MAX {
            DustTier::Good
        } else if dust <= MODERATE_DUST_MAX {
            DustTier::Moderate
        } else {
            DustTier::Bad
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DustTier::Good     => "good",
            DustTier::Moderate => "moderate",
            DustTier::Bad      => "bad",
        }
    }
}

impl fmt::Display for DustTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a warning was raised.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum WarningReason {
    RainDetected,
    HighDust,
}

impl fmt::Display for WarningReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningReason::RainDetected => f.write_str("rain detected"),
            WarningReason::HighDust     => f.write_str("high dust concentration"),
        }
    }
}

/// Result of classifying one reading.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Classification {
    pub dust_tier: DustTier,
    /// `true` iff `high_dust || rain_detected`.
    pub warning: bool,
    pub rain_detected: bool,
    pub high_dust: bool,
}

impl Classification {
    /// Reasons in display order (rain first, then dust).  Empty iff no warning.
    pub fn reasons(&self) -> Vec<WarningReason> {
        let mut reasons = Vec::with_capacity(2);
        if self.rain_detected {
            reasons.push(WarningReason::RainDetected);
        }
        if self.high_dust {
            reasons.push(WarningReason::HighDust);
        }
        reasons
    }

    /// The operator should close the window whenever a warning is up.
    pub fn recommends_closing(&self) -> bool {
        self.warning
    }
}

/// Derive the dust tier and warning flag for `reading`.
pub fn classify(reading: &Reading) -> Classification {
    let high_dust = reading.dust > MODERATE_DUST_MAX;
    Classification {
        dust_tier: DustTier::for_dust(reading.dust),
        warning: high_dust || reading.rain,
        rain_detected: reading.rain,
        high_dust,
    }
}
