use crate::core::models::encoding::AngleEncoding;

/// Error type surfaced by upstream predictors.
///
/// Predictors are typically backed by external ML runtimes with their own
/// error hierarchies, so the seam accepts any boxed error.
pub type PredictionError = Box<dyn std::error::Error + Send + Sync>;

/// Abstraction over the upstream model that maps sequence-derived features to
/// per-position angle encodings.
///
/// The reconstruction core is agnostic to how the encodings are produced; any
/// model that emits twelve real values per chain position in the documented
/// sine/cosine layout can drive it. Implementations own their feature
/// preprocessing and runtime concerns entirely.
pub trait AnglePredictor {
    /// Predicts one [`AngleEncoding`] per entry of `features`.
    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<AngleEncoding>, PredictionError>;
}
