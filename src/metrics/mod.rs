//! Evaluation metrics for the sales model.
//!
//! Sales are trained in `log1p` space, so the training-time metric first maps
//! predictions and labels back with `expm1` and then scores them with RMSPE.

/// A metric for evaluating model quality.
///
/// Same shape as the metric callbacks of boosting libraries: predictions and
/// labels in, one scalar out.
pub trait Metric: Send + Sync {
    fn compute(&self, preds: &[f64], labels: &[f64]) -> f64;

    /// Whether higher values indicate better performance.
    fn higher_is_better(&self) -> bool;

    /// Name of the metric (for logging and callback results).
    fn name(&self) -> &'static str;
}

/// A label-carrying evaluation set, as handed to a training callback.
pub trait LabeledData {
    fn labels(&self) -> &[f64];
}

impl LabeledData for [f64] {
    fn labels(&self) -> &[f64] {
        self
    }
}

impl LabeledData for Vec<f64> {
    fn labels(&self) -> &[f64] {
        self
    }
}

/// `(name, score)` result of a training-callback metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvalResult {
    pub name: &'static str,
    pub score: f64,
}

impl From<EvalResult> for (&'static str, f64) {
    fn from(value: EvalResult) -> Self {
        (value.name, value.score)
    }
}

// =============================================================================
// RMSPE (Root Mean Square Percentage Error)
// =============================================================================

/// Root mean square percentage error: `sqrt(mean((predicted / actual - 1)^2))`.
///
/// Not guarded: a zero in `actual` yields inf or NaN, and an empty input
/// yields NaN.
pub fn rmspe(actual: &[f64], predicted: &[f64]) -> f64 {
    debug_assert_eq!(actual.len(), predicted.len());

    let n = actual.len().min(predicted.len());
    let sum: f64 = actual
        .iter()
        .zip(predicted)
        .map(|(y, yhat)| {
            let ratio = yhat / y - 1.0;
            ratio * ratio
        })
        .sum();

    (sum / n as f64).sqrt()
}

/// RMSPE for a training callback whose values are `log1p`-encoded.
///
/// Both sides are decoded with `expm1` before scoring.
pub fn rmspe_for_training<D: LabeledData + ?Sized>(predicted_log: &[f64], data: &D) -> EvalResult {
    let actual: Vec<f64> = data.labels().iter().map(|v| v.exp_m1()).collect();
    let predicted: Vec<f64> = predicted_log.iter().map(|v| v.exp_m1()).collect();
    EvalResult {
        name: Rmspe.name(),
        score: rmspe(&actual, &predicted),
    }
}

/// RMSPE as a [`Metric`]. Lower is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rmspe;

impl Metric for Rmspe {
    fn compute(&self, preds: &[f64], labels: &[f64]) -> f64 {
        rmspe(labels, preds)
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "rmspe"
    }
}
