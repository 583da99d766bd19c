//! Sequential network: layer composition and the training loop
//!
//! A [`Network`] owns one canonical ordered list of layers. Forward passes
//! walk it front to back; backward passes walk the same list through a
//! reverse iterator, so the stored order is never mutated by training.

use ndarray::Array2;
use rand::Rng;
use tracing::{debug, info, instrument, trace};

use crate::config::{AdamStep, TrainingConfig};
use crate::error::{NetworkError, Result};
use crate::layers::{Activation, Dense, Layer, LayerKind};
use crate::loss::Loss;
use crate::matrix::Sample;
use crate::optimizers::OptimizerKind;

/// Hidden layer count used by the auto-builder when callers have no preference.
pub const DEFAULT_HIDDEN_LAYERS: usize = 2;

/// Feedforward network over an ordered sequence of layers.
///
/// # Example
///
/// ```
/// use rand::{rngs::StdRng, SeedableRng};
/// use tanh_net::layers::{Activation, Dense};
/// use tanh_net::loss::{mse, mse_prime};
/// use tanh_net::matrix::Sample;
/// use tanh_net::network::Network;
/// use tanh_net::optimizers::OptimizerKind;
/// use tanh_net::config::TrainingConfig;
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let mut net = Network::new(vec![
///     Dense::new(2, 3, OptimizerKind::Sgd, &mut rng).into(),
///     Activation::tanh().into(),
///     Dense::new(3, 1, OptimizerKind::Sgd, &mut rng).into(),
///     Activation::tanh().into(),
/// ]);
///
/// let x: Vec<Sample> = vec![[0.0, 1.0].into(), [1.0, 1.0].into()];
/// let y: Vec<Sample> = vec![[1.0].into(), [0.0].into()];
/// let errors = net.train(&x, &y, &(mse, mse_prime), &TrainingConfig::new(0.1, 5)).unwrap();
/// assert_eq!(errors.len(), 5);
/// assert_eq!(net.predict([0.0, 1.0]).unwrap().dim(), (1, 1));
/// ```
#[derive(Debug, Default)]
pub struct Network {
    layers: Vec<LayerKind>,
}

impl Network {
    /// Network over an explicit ordered list of layers.
    pub fn new(layers: Vec<LayerKind>) -> Self {
        Self { layers }
    }

    /// Stack `Dense → Tanh` blocks with a shrinking width schedule.
    ///
    /// With `o = outputs` and `h = num_hidden_layers`, the Dense widths are
    /// `o·(h+2)`, then `o·(h+2), o·(h+1), ..., o·3` for the hidden blocks,
    /// then `o`. Every Dense is followed by a Tanh.
    pub fn with_hidden_layers<R: Rng>(
        inputs: usize,
        outputs: usize,
        num_hidden_layers: usize,
        optimizer: OptimizerKind,
        rng: &mut R,
    ) -> Self {
        let mut layers: Vec<LayerKind> = Vec::with_capacity(2 * (num_hidden_layers + 2));

        let mut width = outputs * (num_hidden_layers + 2);
        layers.push(Dense::new(inputs, width, optimizer, rng).into());
        layers.push(Activation::tanh().into());

        for i in 0..num_hidden_layers {
            let next = outputs * (num_hidden_layers - i + 2);
            layers.push(Dense::new(width, next, optimizer, rng).into());
            layers.push(Activation::tanh().into());
            width = next;
        }

        layers.push(Dense::new(width, outputs, optimizer, rng).into());
        layers.push(Activation::tanh().into());

        let network = Self::new(layers);
        debug!(
            layers = network.len(),
            parameters = network.parameter_count(),
            "built network from width schedule"
        );
        network
    }

    /// Replace the layer sequence wholesale. Shapes are not checked.
    pub fn set_layers(&mut self, layers: Vec<LayerKind>) {
        self.layers = layers;
    }

    pub fn layers(&self) -> &[LayerKind] {
        &self.layers
    }

    pub fn layers_mut(&mut self) -> &mut [LayerKind] {
        &mut self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Total trainable parameters across all layers.
    pub fn parameter_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.parameter_count()).sum()
    }

    /// Run `input` through every layer in order.
    ///
    /// Flat input is treated as a column vector. Each layer caches what it
    /// saw, so a training step must call `predict` and then backpropagate
    /// before the next `predict`.
    pub fn predict<S: Into<Sample>>(&mut self, input: S) -> Result<Array2<f64>> {
        let column = input.into().to_column();
        self.forward(column)
    }

    fn forward(&mut self, input: Array2<f64>) -> Result<Array2<f64>> {
        self.layers
            .iter_mut()
            .try_fold(input, |output, layer| layer.forward(&output))
    }

    fn backward(
        &mut self,
        gradient: Array2<f64>,
        learning_rate: f64,
        step: usize,
    ) -> Result<Array2<f64>> {
        self.layers
            .iter_mut()
            .rev()
            .try_fold(gradient, |grad, layer| {
                trace!(layer = layer.name(), step, "backward");
                layer.backward(&grad, learning_rate, step)
            })
    }

    /// Train on `(x_train[i], y_train[i])` pairs, one update per example.
    ///
    /// Each epoch visits the examples in order: predict, take the loss
    /// gradient, then backpropagate through the layers in reverse order while
    /// each layer updates its parameters. The step handed to the layers is
    /// the epoch index (or a per-example counter, see [`AdamStep`]).
    ///
    /// Returns the mean loss of every epoch, `config.epochs` values in total.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` if the input and target counts differ
    /// - `EmptyDataset` if there are no examples
    /// - any layer or loss error, surfaced immediately
    #[instrument(skip_all, fields(examples = x_train.len(), epochs = config.epochs))]
    pub fn train(
        &mut self,
        x_train: &[Sample],
        y_train: &[Sample],
        loss: &dyn Loss,
        config: &TrainingConfig,
    ) -> Result<Vec<f64>> {
        let examples = paired_columns(x_train, y_train)?;

        let mut errors = Vec::with_capacity(config.epochs);
        let mut updates = 0usize;

        for epoch in 0..config.epochs {
            let mut error = 0.0;

            for (x, y) in &examples {
                let step = match config.adam_step {
                    AdamStep::PerEpoch => epoch,
                    AdamStep::PerUpdate => updates,
                };

                let output = self.forward(x.clone())?;
                let grad = loss.derivative(y, &output)?;
                error += loss.loss(y, &output)?;
                self.backward(grad, config.learning_rate, step)?;

                updates += 1;
            }

            error /= examples.len() as f64;
            errors.push(error);

            if config.verbose {
                info!("{}/{}, error={}", epoch + 1, config.epochs, error);
            }
        }

        Ok(errors)
    }

    /// Mean loss over a dataset without updating any parameters.
    pub fn evaluate(&mut self, x: &[Sample], y: &[Sample], loss: &dyn Loss) -> Result<f64> {
        let examples = paired_columns(x, y)?;
        let mut total = 0.0;
        for (input, target) in &examples {
            let output = self.forward(input.clone())?;
            total += loss.loss(target, &output)?;
        }
        Ok(total / examples.len() as f64)
    }
}

fn paired_columns(x: &[Sample], y: &[Sample]) -> Result<Vec<(Array2<f64>, Array2<f64>)>> {
    if x.len() != y.len() {
        return Err(NetworkError::LengthMismatch {
            inputs: x.len(),
            targets: y.len(),
        });
    }
    if x.is_empty() {
        return Err(NetworkError::EmptyDataset);
    }
    Ok(x.iter()
        .zip(y)
        .map(|(input, target)| (input.to_column(), target.to_column()))
        .collect())
}
