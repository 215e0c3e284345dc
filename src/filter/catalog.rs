use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{ResizeError, ResizeResult};

const SINC_EPSILON: f64 = 1.192_092_90e-7;

/// Closed catalog of windowed resampling filters.
///
/// Each variant maps to a support radius ([`FilterKind::window`]) and an even,
/// compactly supported weight function ([`FilterKind::eval`]).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FilterKind {
    /// Nearest-neighbour box, radius 0.5. Exact ties weigh 0.5.
    Box,
    /// Hamming-windowed sinc, radius 1.
    Hamming,
    /// Lanczos with two lobes.
    Lanczos2,
    /// Lanczos with three lobes.
    #[default]
    Lanczos3,
    /// Magic Kernel Sharp 2013, radius 2.5.
    Mks2013,
}

impl FilterKind {
    /// Every catalog entry, in declaration order.
    pub const ALL: [FilterKind; 5] = [
        FilterKind::Box,
        FilterKind::Hamming,
        FilterKind::Lanczos2,
        FilterKind::Lanczos3,
        FilterKind::Mks2013,
    ];

    /// Catalog name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Box => "box",
            FilterKind::Hamming => "hamming",
            FilterKind::Lanczos2 => "lanczos2",
            FilterKind::Lanczos3 => "lanczos3",
            FilterKind::Mks2013 => "mks2013",
        }
    }

    /// Support radius in filter space. `eval` is zero for `|x| >= window`.
    pub fn window(self) -> f64 {
        match self {
            FilterKind::Box => 0.5,
            FilterKind::Hamming => 1.0,
            FilterKind::Lanczos2 => 2.0,
            FilterKind::Lanczos3 => 3.0,
            FilterKind::Mks2013 => 2.5,
        }
    }

    /// Evaluate the continuous weight function at `x`.
    pub fn eval(self, x: f64) -> f64 {
        let x = x.abs();
        match self {
            FilterKind::Box => {
                if x < 0.5 {
                    1.0
                } else if x == 0.5 {
                    // Ties split evenly between both neighbours.
                    0.5
                } else {
                    0.0
                }
            }
            FilterKind::Hamming => {
                if x >= 1.0 {
                    return 0.0;
                }
                if x < SINC_EPSILON {
                    return 1.0;
                }
                let xpi = x * PI;
                (xpi.sin() / xpi) * (0.54 + 0.46 * xpi.cos())
            }
            FilterKind::Lanczos2 => lanczos(x, 2.0),
            FilterKind::Lanczos3 => lanczos(x, 3.0),
            FilterKind::Mks2013 => {
                if x >= 2.5 {
                    0.0
                } else if x >= 1.5 {
                    -0.125 * (x - 2.5) * (x - 2.5)
                } else if x >= 0.5 {
                    0.25 * (4.0 * x * x - 11.0 * x + 7.0)
                } else {
                    1.0625 - 1.75 * x * x
                }
            }
        }
    }
}

fn lanczos(x: f64, lobes: f64) -> f64 {
    if x >= lobes {
        return 0.0;
    }
    if x < SINC_EPSILON {
        return 1.0;
    }
    let xpi = x * PI;
    (xpi.sin() / xpi) * ((xpi / lobes).sin() / (xpi / lobes))
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FilterKind {
    type Err = ResizeError;

    fn from_str(s: &str) -> ResizeResult<Self> {
        let name = s.trim().to_ascii_lowercase();
        if name.is_empty() {
            return Err(ResizeError::validation("filter name must be non-empty"));
        }
        FilterKind::ALL
            .into_iter()
            .find(|k| k.name() == name)
            .ok_or_else(|| ResizeError::validation(format!("unknown filter '{name}'")))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filter/catalog.rs"]
mod tests;
