use crate::config::FitConfig;
use crate::errors::MmmResult;
use crate::models::ModelGraph;
use crate::posterior::Posterior;

/// External probabilistic-inference engine.
///
/// The engine owns sampling entirely (it may run chains in parallel);
/// the core hands it a declarative graph and the standardized observed
/// outcome, and consumes the finished posterior mapping once. There is
/// no streaming or incremental consumption contract.
pub trait IInferenceEngine: Send + Sync {
    /// Fit posterior samples for every named parameter in the graph.
    fn sample(
        &self,
        graph: &ModelGraph,
        observed: &[f64],
        config: &FitConfig,
    ) -> MmmResult<Posterior>;
}
