use crate::core::models::encoding::EncodingError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReconstructionError {
    #[error("Invalid angle encoding at chain position {position}: {source}")]
    Encoding {
        position: usize,
        #[source]
        source: EncodingError,
    },

    #[error("Degenerate geometry at atom {index}: the three preceding atoms are collinear")]
    DegenerateGeometry { index: usize },

    #[error("Chain must contain at least one residue")]
    EmptyChain,

    #[error("Chain length mismatch: predicted {predicted} atoms, reference {reference} atoms")]
    LengthMismatch { predicted: usize, reference: usize },

    #[error("Angle prediction failed: {0}")]
    Prediction(#[source] Box<dyn std::error::Error + Send + Sync>),
}
