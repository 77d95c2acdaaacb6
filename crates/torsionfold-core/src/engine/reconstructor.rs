use crate::core::models::bonds::BondGeometry;
use crate::core::models::chain::BackboneChain;
use crate::core::models::encoding::{ANGLES_PER_RESIDUE, AngleEncoding};
use crate::core::utils::geometry::{ExtensionParams, extend_chain};
use crate::engine::error::ReconstructionError;
use crate::engine::progress::{Progress, ProgressReporter};
use nalgebra::Point3;
use std::f64::consts::PI;

/// Decoded angles for a whole chain, flattened in triplet-major order:
/// residue 0's three angles, then residue 1's, and so on. Values are radians;
/// both sequences have length `3 * residues`, one entry per backbone atom.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainAngles {
    pub bond: Vec<f64>,
    pub torsion: Vec<f64>,
}

impl ChainAngles {
    /// Number of backbone atoms the chain will hold.
    pub fn atom_count(&self) -> usize {
        self.bond.len()
    }
}

/// Converts a bond angle into the polar angle used for placement.
///
/// The extension frame measures deviation from the straight-chain direction,
/// so the placement parameter is the supplement of the bond angle. This
/// convention must match the one used when the angle encodings were produced.
pub fn placement_angle(bond_angle: f64) -> f64 {
    PI - bond_angle
}

/// Decodes per-residue angle encodings into flat bond and torsion sequences.
///
/// With `validate` set, each block is first checked for degenerate `(0, 0)`
/// sine/cosine pairs and the offending chain position is reported.
pub fn decode_angles(
    encodings: &[AngleEncoding],
    validate: bool,
) -> Result<ChainAngles, ReconstructionError> {
    let mut bond = Vec::with_capacity(encodings.len() * ANGLES_PER_RESIDUE);
    let mut torsion = Vec::with_capacity(encodings.len() * ANGLES_PER_RESIDUE);

    for (position, encoding) in encodings.iter().enumerate() {
        if validate {
            encoding
                .validate()
                .map_err(|source| ReconstructionError::Encoding { position, source })?;
        }
        let angles = encoding.decode();
        bond.extend_from_slice(&angles.bond);
        torsion.extend_from_slice(&angles.torsion);
    }

    Ok(ChainAngles { bond, torsion })
}

/// Runs the extension recurrence across a whole chain.
///
/// The first three atoms are seeded from `seed`; every subsequent atom `i` is
/// placed from atoms `i-3`, `i-2`, `i-1` with the bond length arriving at
/// slot `i mod 3` of the backbone cycle, the supplement of `bond[i-1]` as
/// polar angle, and `torsion[i-1]` as torsion. The local frame is normalized
/// by the measured distance between atoms `i-2` and `i-1`, so every placed
/// atom sits at its nominal bond length exactly, regardless of seed spacing.
///
/// # Errors
///
/// Returns [`ReconstructionError::DegenerateGeometry`] with the index of the
/// atom being placed if its three reference atoms are collinear. No partial
/// chain is returned; a malformed intermediate invalidates everything built
/// downstream of it.
pub fn extend_backbone(
    angles: &ChainAngles,
    seed: &[Point3<f64>; 3],
    geometry: &BondGeometry,
    reporter: &ProgressReporter,
) -> Result<BackboneChain, ReconstructionError> {
    let total = angles.atom_count();
    let mut chain = BackboneChain::with_capacity(total.max(seed.len()));
    for position in seed {
        chain.push(*position);
    }

    reporter.report(Progress::ExtendStart {
        atoms: total.saturating_sub(seed.len()) as u64,
    });

    for index in seed.len()..total {
        let a = chain.positions()[index - 3];
        let b = chain.positions()[index - 2];
        let c = chain.positions()[index - 1];

        let params = ExtensionParams {
            frame_bond: (c - b).norm(),
            bond: geometry.length_into(index),
            theta: placement_angle(angles.bond[index - 1]),
            phi: angles.torsion[index - 1],
        };

        let next = extend_chain(&a, &b, &c, &params)
            .ok_or(ReconstructionError::DegenerateGeometry { index })?;
        chain.push(next);
        reporter.report(Progress::AtomPlaced);
    }

    reporter.report(Progress::ExtendFinish);
    Ok(chain)
}
