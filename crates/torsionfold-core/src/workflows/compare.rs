use crate::core::models::chain::BackboneChain;
use crate::core::utils::geometry::mean_deviation;
use crate::engine::error::ReconstructionError;

/// Mean per-atom Euclidean deviation between a reconstructed chain and a
/// reference chain.
///
/// # Errors
///
/// Returns [`ReconstructionError::LengthMismatch`] if the chains hold
/// different numbers of atoms and [`ReconstructionError::EmptyChain`] if both
/// are empty.
pub fn chain_deviation(
    predicted: &BackboneChain,
    reference: &BackboneChain,
) -> Result<f64, ReconstructionError> {
    if predicted.len() != reference.len() {
        return Err(ReconstructionError::LengthMismatch {
            predicted: predicted.len(),
            reference: reference.len(),
        });
    }
    mean_deviation(predicted.positions(), reference.positions())
        .ok_or(ReconstructionError::EmptyChain)
}
