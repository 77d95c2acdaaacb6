use thiserror::Error;

/// Number of bond angles (and likewise torsion angles) contributed by one
/// chain position. The backbone repeats the N–Cα–C triplet, so each residue
/// carries three of each.
pub const ANGLES_PER_RESIDUE: usize = 3;

/// Total number of raw values in one per-residue angle encoding:
/// three bond angles and three torsion angles, each as a (sine, cosine) pair.
pub const ENCODING_WIDTH: usize = 4 * ANGLES_PER_RESIDUE;

/// Distinguishes the two angle families carried by an encoding block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AngleKind {
    /// Angle at a backbone atom formed by its two adjacent bonds.
    Bond,
    /// Rotation around a bond axis between the two flanking atom planes.
    Torsion,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EncodingError {
    #[error("Angle encoding must contain {ENCODING_WIDTH} values, found {found}")]
    WrongWidth { found: usize },

    #[error("Degenerate (0, 0) sine/cosine pair for {kind:?} angle {index}")]
    DegeneratePair { kind: AngleKind, index: usize },
}

/// The raw angle encoding for one chain position.
///
/// An upstream predictor emits twelve real values per residue: the first six
/// encode the three bond angles as interleaved (sine, cosine) pairs, the last
/// six encode the three torsion angles the same way. Pairs need not be
/// unit-normalized; the angle is recovered from the ratio via the
/// four-quadrant arctangent, so only a `(0, 0)` pair is meaningless.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleEncoding {
    values: [f64; ENCODING_WIDTH],
}

/// The decoded angles for one chain position, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidueAngles {
    /// The three bond angles, in placement order along the backbone triplet.
    pub bond: [f64; ANGLES_PER_RESIDUE],
    /// The three torsion angles, in the same order.
    pub torsion: [f64; ANGLES_PER_RESIDUE],
}

impl AngleEncoding {
    /// Creates an encoding from a fixed-size block of raw values.
    pub fn new(values: [f64; ENCODING_WIDTH]) -> Self {
        Self { values }
    }

    /// Creates an encoding from a slice, checking its width.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::WrongWidth`] if the slice does not contain
    /// exactly [`ENCODING_WIDTH`] values.
    pub fn from_slice(values: &[f64]) -> Result<Self, EncodingError> {
        let values: [f64; ENCODING_WIDTH] = values
            .try_into()
            .map_err(|_| EncodingError::WrongWidth {
                found: values.len(),
            })?;
        Ok(Self { values })
    }

    /// Returns the raw encoded values.
    pub fn values(&self) -> &[f64; ENCODING_WIDTH] {
        &self.values
    }

    /// Returns the (sine, cosine) pair of bond angle `index` (0..3).
    pub fn bond_pair(&self, index: usize) -> (f64, f64) {
        (self.values[2 * index], self.values[2 * index + 1])
    }

    /// Returns the (sine, cosine) pair of torsion angle `index` (0..3).
    pub fn torsion_pair(&self, index: usize) -> (f64, f64) {
        (
            self.values[2 * ANGLES_PER_RESIDUE + 2 * index],
            self.values[2 * ANGLES_PER_RESIDUE + 2 * index + 1],
        )
    }

    /// Checks that no (sine, cosine) pair is exactly `(0, 0)`.
    ///
    /// Such a pair carries no directional information and would decode to an
    /// arbitrary angle, so it is rejected up front rather than propagated
    /// silently through the reconstruction.
    ///
    /// # Errors
    ///
    /// Returns [`EncodingError::DegeneratePair`] naming the first offending
    /// angle family and index.
    pub fn validate(&self) -> Result<(), EncodingError> {
        for index in 0..ANGLES_PER_RESIDUE {
            let (sin, cos) = self.bond_pair(index);
            if sin == 0.0 && cos == 0.0 {
                return Err(EncodingError::DegeneratePair {
                    kind: AngleKind::Bond,
                    index,
                });
            }
            let (sin, cos) = self.torsion_pair(index);
            if sin == 0.0 && cos == 0.0 {
                return Err(EncodingError::DegeneratePair {
                    kind: AngleKind::Torsion,
                    index,
                });
            }
        }
        Ok(())
    }

    /// Decodes the block into bond and torsion angles in radians.
    ///
    /// Each angle is the four-quadrant arctangent of its (sine, cosine) pair,
    /// so decoded values lie in `(-π, π]`. Callers that cannot rule out
    /// `(0, 0)` pairs must call [`AngleEncoding::validate`] first; a
    /// degenerate pair decodes to `atan2(0, 0)` here, which carries no
    /// meaning.
    pub fn decode(&self) -> ResidueAngles {
        let mut bond = [0.0; ANGLES_PER_RESIDUE];
        let mut torsion = [0.0; ANGLES_PER_RESIDUE];
        for index in 0..ANGLES_PER_RESIDUE {
            let (sin, cos) = self.bond_pair(index);
            bond[index] = sin.atan2(cos);
            let (sin, cos) = self.torsion_pair(index);
            torsion[index] = sin.atan2(cos);
        }
        ResidueAngles { bond, torsion }
    }
}

impl From<[f64; ENCODING_WIDTH]> for AngleEncoding {
    fn from(values: [f64; ENCODING_WIDTH]) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn encoding_for(bond: [f64; 3], torsion: [f64; 3]) -> AngleEncoding {
        let mut values = [0.0; ENCODING_WIDTH];
        for k in 0..3 {
            values[2 * k] = bond[k].sin();
            values[2 * k + 1] = bond[k].cos();
            values[6 + 2 * k] = torsion[k].sin();
            values[6 + 2 * k + 1] = torsion[k].cos();
        }
        AngleEncoding::new(values)
    }

    #[test]
    fn decode_round_trips_known_angles() {
        let bond = [1.911, 2.028, 2.124];
        let torsion = [-1.047, 3.0, PI];
        let decoded = encoding_for(bond, torsion).decode();

        for k in 0..3 {
            assert!((decoded.bond[k] - bond[k]).abs() < 1e-12);
            assert!((decoded.torsion[k] - torsion[k]).abs() < 1e-12);
        }
    }

    #[test]
    fn decode_is_invariant_under_pair_scaling() {
        let angle = 0.735_f64;
        let mut values = [1.0; ENCODING_WIDTH];
        values[0] = 3.5 * angle.sin();
        values[1] = 3.5 * angle.cos();

        let decoded = AngleEncoding::new(values).decode();
        assert!((decoded.bond[0] - angle).abs() < 1e-12);
    }

    #[test]
    fn pair_accessors_read_the_documented_layout() {
        let values: [f64; ENCODING_WIDTH] = std::array::from_fn(|i| i as f64);
        let encoding = AngleEncoding::new(values);

        assert_eq!(encoding.bond_pair(0), (0.0, 1.0));
        assert_eq!(encoding.bond_pair(2), (4.0, 5.0));
        assert_eq!(encoding.torsion_pair(0), (6.0, 7.0));
        assert_eq!(encoding.torsion_pair(2), (10.0, 11.0));
    }

    #[test]
    fn from_slice_accepts_exact_width() {
        let values = vec![0.5; ENCODING_WIDTH];
        let encoding = AngleEncoding::from_slice(&values).unwrap();
        assert_eq!(encoding.values(), &[0.5; ENCODING_WIDTH]);
    }

    #[test]
    fn from_slice_rejects_wrong_width() {
        let result = AngleEncoding::from_slice(&[1.0; 11]);
        assert_eq!(result.unwrap_err(), EncodingError::WrongWidth { found: 11 });

        let result = AngleEncoding::from_slice(&[1.0; 13]);
        assert_eq!(result.unwrap_err(), EncodingError::WrongWidth { found: 13 });
    }

    #[test]
    fn validate_accepts_unnormalized_pairs() {
        let mut values = [0.2; ENCODING_WIDTH];
        values[3] = -7.0;
        assert!(AngleEncoding::new(values).validate().is_ok());
    }

    #[test]
    fn validate_reports_first_degenerate_pair() {
        let mut values = [1.0; ENCODING_WIDTH];
        values[8] = 0.0;
        values[9] = 0.0;

        let err = AngleEncoding::new(values).validate().unwrap_err();
        assert_eq!(
            err,
            EncodingError::DegeneratePair {
                kind: AngleKind::Torsion,
                index: 1,
            }
        );
    }

    #[test]
    fn validate_reports_degenerate_bond_pair() {
        let mut values = [1.0; ENCODING_WIDTH];
        values[4] = 0.0;
        values[5] = 0.0;

        let err = AngleEncoding::new(values).validate().unwrap_err();
        assert_eq!(
            err,
            EncodingError::DegeneratePair {
                kind: AngleKind::Bond,
                index: 2,
            }
        );
    }
}
