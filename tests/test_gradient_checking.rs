// Tests for numerical gradient checking using finite differences.
// These tests verify that analytical gradients match numerical approximations
// for Dense layers followed by activations under mean squared error.

use approx::assert_abs_diff_eq;
use ndarray::{array, Array2};
use tanh_net::layers::{Activation, Dense, Layer, LayerKind};
use tanh_net::loss::{mse, mse_prime};
use tanh_net::{Network, OptimizerKind};

const EPSILON: f64 = 1e-6;
const TOLERANCE: f64 = 1e-4;

fn two_layer_network(
    w1: &Array2<f64>,
    b1: &Array2<f64>,
    w2: &Array2<f64>,
    b2: &Array2<f64>,
) -> Network {
    Network::new(vec![
        Dense::from_parameters(w1.clone(), b1.clone(), OptimizerKind::Sgd).unwrap().into(),
        Activation::tanh().into(),
        Dense::from_parameters(w2.clone(), b2.clone(), OptimizerKind::Sgd).unwrap().into(),
        Activation::tanh().into(),
    ])
}

fn loss_of(network: &mut Network, x: &Array2<f64>, y: &Array2<f64>) -> f64 {
    let output = network.predict(x.clone()).unwrap();
    mse(y, &output).unwrap()
}

// Backpropagate with a zero learning rate and return the gradient that
// arrives at each layer, indexed by layer position.
fn upstream_gradients(network: &mut Network, x: &Array2<f64>, y: &Array2<f64>) -> Vec<Array2<f64>> {
    let output = network.predict(x.clone()).unwrap();
    let mut grad = mse_prime(y, &output).unwrap();
    let mut grads = vec![Array2::zeros((0, 0)); network.len()];
    for (index, layer) in network.layers_mut().iter_mut().enumerate().rev() {
        grads[index] = grad.clone();
        grad = layer.backward(&grad, 0.0, 0).unwrap();
    }
    grads
}

fn weights() -> (Array2<f64>, Array2<f64>, Array2<f64>, Array2<f64>) {
    (
        array![[0.5, -0.4], [0.3, 0.8], [-0.7, 0.2]],
        array![[0.1], [-0.2], [0.05]],
        array![[0.7, -0.6, 0.4]],
        array![[0.05]],
    )
}

// ============================================================================
// Weight Gradient Tests
// ============================================================================

mod weight_gradient_tests {
    use super::*;

    #[test]
    fn test_output_layer_weight_gradient() {
        let (w1, b1, w2, b2) = weights();
        let x = array![[0.9], [-0.3]];
        let y = array![[0.25]];

        let mut network = two_layer_network(&w1, &b1, &w2, &b2);
        let grads = upstream_gradients(&mut network, &x, &y);
        let dense = network.layers()[2].as_dense().unwrap();
        let analytical = dense.weights_gradient(&grads[2]).unwrap();

        for j in 0..w2.ncols() {
            let mut plus = w2.clone();
            plus[[0, j]] += EPSILON;
            let mut minus = w2.clone();
            minus[[0, j]] -= EPSILON;

            let loss_plus = loss_of(&mut two_layer_network(&w1, &b1, &plus, &b2), &x, &y);
            let loss_minus = loss_of(&mut two_layer_network(&w1, &b1, &minus, &b2), &x, &y);
            let numerical = (loss_plus - loss_minus) / (2.0 * EPSILON);

            assert_abs_diff_eq!(analytical[[0, j]], numerical, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn test_hidden_layer_weight_gradient() {
        let (w1, b1, w2, b2) = weights();
        let x = array![[0.4], [1.1]];
        let y = array![[-0.5]];

        let mut network = two_layer_network(&w1, &b1, &w2, &b2);
        let grads = upstream_gradients(&mut network, &x, &y);
        let dense = network.layers()[0].as_dense().unwrap();
        let analytical = dense.weights_gradient(&grads[0]).unwrap();

        for i in 0..w1.nrows() {
            for j in 0..w1.ncols() {
                let mut plus = w1.clone();
                plus[[i, j]] += EPSILON;
                let mut minus = w1.clone();
                minus[[i, j]] -= EPSILON;

                let loss_plus = loss_of(&mut two_layer_network(&plus, &b1, &w2, &b2), &x, &y);
                let loss_minus = loss_of(&mut two_layer_network(&minus, &b1, &w2, &b2), &x, &y);
                let numerical = (loss_plus - loss_minus) / (2.0 * EPSILON);

                assert_abs_diff_eq!(analytical[[i, j]], numerical, epsilon = TOLERANCE);
            }
        }
    }

    #[test]
    fn test_hidden_layer_bias_gradient() {
        let (w1, b1, w2, b2) = weights();
        let x = array![[-0.2], [0.6]];
        let y = array![[0.8]];

        let mut network = two_layer_network(&w1, &b1, &w2, &b2);
        let grads = upstream_gradients(&mut network, &x, &y);

        // For a single column the bias gradient is the upstream gradient.
        for i in 0..b1.nrows() {
            let mut plus = b1.clone();
            plus[[i, 0]] += EPSILON;
            let mut minus = b1.clone();
            minus[[i, 0]] -= EPSILON;

            let loss_plus = loss_of(&mut two_layer_network(&w1, &plus, &w2, &b2), &x, &y);
            let loss_minus = loss_of(&mut two_layer_network(&w1, &minus, &w2, &b2), &x, &y);
            let numerical = (loss_plus - loss_minus) / (2.0 * EPSILON);

            assert_abs_diff_eq!(grads[0][[i, 0]], numerical, epsilon = TOLERANCE);
        }
    }
}

// ============================================================================
// Input Gradient Tests
// ============================================================================

mod input_gradient_tests {
    use super::*;

    #[test]
    fn test_network_input_gradient() {
        let (w1, b1, w2, b2) = weights();
        let x = array![[0.3], [-0.8]];
        let y = array![[0.6]];

        let mut network = two_layer_network(&w1, &b1, &w2, &b2);
        let output = network.predict(x.clone()).unwrap();
        let mut grad = mse_prime(&y, &output).unwrap();
        for layer in network.layers_mut().iter_mut().rev() {
            grad = layer.backward(&grad, 0.0, 0).unwrap();
        }

        for i in 0..x.nrows() {
            let mut plus = x.clone();
            plus[[i, 0]] += EPSILON;
            let mut minus = x.clone();
            minus[[i, 0]] -= EPSILON;

            let mut fresh = two_layer_network(&w1, &b1, &w2, &b2);
            let loss_plus = loss_of(&mut fresh, &plus, &y);
            let loss_minus = loss_of(&mut fresh, &minus, &y);
            let numerical = (loss_plus - loss_minus) / (2.0 * EPSILON);

            assert_abs_diff_eq!(grad[[i, 0]], numerical, epsilon = TOLERANCE);
        }
    }

    #[test]
    fn test_sigmoid_layer_input_gradient() {
        let mut layers: Vec<LayerKind> = vec![
            Dense::from_parameters(array![[0.6, -1.2]], array![[0.3]], OptimizerKind::Sgd)
                .unwrap()
                .into(),
            Activation::sigmoid().into(),
        ];
        let x = array![[0.5], [0.25]];
        let y = array![[1.0]];

        let forward = |layers: &mut Vec<LayerKind>, input: &Array2<f64>| {
            layers
                .iter_mut()
                .fold(input.clone(), |out, layer| layer.forward(&out).unwrap())
        };

        let output = forward(&mut layers, &x);
        let mut grad = mse_prime(&y, &output).unwrap();
        for layer in layers.iter_mut().rev() {
            grad = layer.backward(&grad, 0.0, 0).unwrap();
        }

        for i in 0..x.nrows() {
            let mut plus = x.clone();
            plus[[i, 0]] += EPSILON;
            let mut minus = x.clone();
            minus[[i, 0]] -= EPSILON;
            let loss_plus = mse(&y, &forward(&mut layers, &plus)).unwrap();
            let loss_minus = mse(&y, &forward(&mut layers, &minus)).unwrap();
            let numerical = (loss_plus - loss_minus) / (2.0 * EPSILON);

            assert_abs_diff_eq!(grad[[i, 0]], numerical, epsilon = TOLERANCE);
        }
    }
}
