use crate::core::models::chain::BackboneChain;
use crate::core::models::encoding::AngleEncoding;
use crate::engine::config::ReconstructionConfig;
use crate::engine::error::ReconstructionError;
use crate::engine::predictor::AnglePredictor;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::reconstructor::{decode_angles, extend_backbone};
use nalgebra::Point3;
use tracing::{info, instrument};

/// The complete output of a reconstruction run.
#[derive(Debug, Clone)]
pub struct ReconstructionResult {
    /// Decoded bond angles in degrees, one per backbone atom, in chain order.
    pub bond_angles_deg: Vec<f64>,
    /// Decoded torsion angles in degrees, one per backbone atom, in chain order.
    pub torsion_angles_deg: Vec<f64>,
    /// The reconstructed backbone chain.
    pub chain: BackboneChain,
}

/// Reconstructs a full backbone chain from per-residue angle encodings.
///
/// The first three atoms of the chain are taken from `seed`; the rest follow
/// from the strictly sequential extension recurrence. The returned angles are
/// the decoded inputs converted to degrees, flattened in the same
/// triplet-major order as the encoding blocks.
///
/// # Errors
///
/// Returns [`ReconstructionError::EmptyChain`] for an empty encoding
/// sequence, [`ReconstructionError::Encoding`] for degenerate encodings (when
/// validation is enabled in `config`), and
/// [`ReconstructionError::DegenerateGeometry`] if any reference triplet along
/// the chain is collinear. Failures abort the whole reconstruction; no
/// partial chain is produced.
#[instrument(skip_all, name = "reconstruction_workflow")]
pub fn run(
    encodings: &[AngleEncoding],
    seed: &[Point3<f64>; 3],
    config: &ReconstructionConfig,
    reporter: &ProgressReporter,
) -> Result<ReconstructionResult, ReconstructionError> {
    if encodings.is_empty() {
        return Err(ReconstructionError::EmptyChain);
    }

    info!("Decoding angle encodings for {} residues.", encodings.len());
    reporter.report(Progress::DecodeStart {
        residues: encodings.len(),
    });
    let angles = decode_angles(encodings, config.validate_encodings)?;
    reporter.report(Progress::DecodeFinish);

    let chain = extend_backbone(&angles, seed, &config.geometry, reporter)?;
    info!("Reconstructed backbone chain with {} atoms.", chain.len());

    Ok(ReconstructionResult {
        bond_angles_deg: angles.bond.iter().map(|a| a.to_degrees()).collect(),
        torsion_angles_deg: angles.torsion.iter().map(|a| a.to_degrees()).collect(),
        chain,
    })
}

/// Predicts angle encodings from sequence features and reconstructs the chain
/// in one step.
///
/// # Errors
///
/// Returns [`ReconstructionError::Prediction`] if the predictor fails, and
/// otherwise behaves like [`run`].
#[instrument(skip_all, name = "prediction_workflow")]
pub fn run_with_predictor<P: AnglePredictor>(
    predictor: &P,
    features: &[Vec<f64>],
    seed: &[Point3<f64>; 3],
    config: &ReconstructionConfig,
    reporter: &ProgressReporter,
) -> Result<ReconstructionResult, ReconstructionError> {
    info!(
        "Predicting angle encodings for {} chain positions.",
        features.len()
    );
    let encodings = predictor
        .predict(features)
        .map_err(ReconstructionError::Prediction)?;
    run(&encodings, seed, config, reporter)
}
