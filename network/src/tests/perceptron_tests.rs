use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::gates::{self, AND, OR, XOR};
use crate::{LabeledExample, NetworkError, Perceptron, DEFAULT_LEARNING_RATE};

const EPSILON: f64 = 1e-12;

#[test]
fn test_construction_draws_bias_plus_one_weight_per_input() {
    let mut rng = StdRng::seed_from_u64(3);
    let perceptron = Perceptron::with_rng(4, DEFAULT_LEARNING_RATE, &mut rng).unwrap();

    assert_eq!(perceptron.input_width(), 4);
    assert_eq!(perceptron.weights().len(), 5);
    assert!(perceptron
        .weights()
        .iter()
        .all(|w| (-1.0..=1.0).contains(w)));
    assert_eq!(perceptron.learning_rate(), 0.1);
}

#[test]
fn test_construction_rejects_bad_parameters() {
    assert_eq!(
        Perceptron::new(0, 0.1).unwrap_err(),
        NetworkError::InvalidWidth {
            what: "perceptron input"
        }
    );
    assert_eq!(
        Perceptron::new(2, 0.0).unwrap_err(),
        NetworkError::InvalidLearningRate(0.0)
    );
    assert!(matches!(
        Perceptron::new(2, f64::NAN),
        Err(NetworkError::InvalidLearningRate(_))
    ));
    assert!(Perceptron::from_weights(vec![0.5], 0.1).is_err());
}

#[test]
fn test_predict_fires_on_zero_sum() {
    // bias -1 exactly cancels the single input of 1
    let perceptron = Perceptron::from_weights(vec![-1.0, 1.0], 0.1).unwrap();
    assert!(perceptron.predict(&[1.0]).unwrap());
    assert!(!perceptron.predict(&[0.999]).unwrap());
}

#[test]
fn test_predict_is_deterministic() {
    let perceptron = Perceptron::with_rng(3, 0.1, &mut StdRng::seed_from_u64(11)).unwrap();
    let inputs = [0.3, -0.7, 0.9];
    let first = perceptron.predict(&inputs).unwrap();
    for _ in 0..10 {
        assert_eq!(perceptron.predict(&inputs).unwrap(), first);
    }
}

#[test]
fn test_train_one_applies_perceptron_rule() {
    let mut perceptron = Perceptron::from_weights(vec![0.2, -0.4, 0.1], 0.1).unwrap();

    // 0.2 - 0.4 + 0.05 < 0, so the unit stays off while the target is on
    perceptron.train_one(&[1.0, 0.5], true).unwrap();

    let expected = [0.3, -0.3, 0.15];
    for (w, e) in perceptron.weights().iter().zip(expected) {
        assert!((w - e).abs() < EPSILON, "{} != {}", w, e);
    }

    // 0.3 - 0.15 + 0.15 fires while the target is off
    perceptron.train_one(&[0.5, 1.0], false).unwrap();
    let expected = [0.2, -0.35, 0.05];
    for (w, e) in perceptron.weights().iter().zip(expected) {
        assert!((w - e).abs() < EPSILON, "{} != {}", w, e);
    }
}

#[test]
fn test_train_one_is_noop_when_correct() {
    let mut perceptron = Perceptron::from_weights(vec![0.5, 1.0, 1.0], 0.1).unwrap();
    let before = perceptron.clone();

    perceptron.train_one(&[1.0, 1.0], true).unwrap();

    assert_eq!(perceptron, before);
}

#[test]
fn test_shape_mismatch_leaves_weights_untouched() {
    let mut perceptron = Perceptron::from_weights(vec![0.0, -0.2, 0.4], 0.1).unwrap();
    let before = perceptron.clone();

    assert_eq!(
        perceptron.train_one(&[1.0], true).unwrap_err(),
        NetworkError::ShapeMismatch {
            what: "perceptron input",
            expected: 2,
            actual: 1,
        }
    );

    // The good example would move the weights if training had started
    let examples = vec![
        LabeledExample::new([1.0, 1.0], false),
        LabeledExample::new([1.0, 1.0, 1.0], true),
    ];
    assert!(perceptron.train(&examples, 10).is_err());
    assert_eq!(perceptron, before);
}

#[test]
fn test_learns_linearly_separable_gates() {
    for seed in 0..32 {
        for table in [AND, OR] {
            let examples = gates::labeled(table);
            let mut rng = StdRng::seed_from_u64(seed);
            let mut perceptron = Perceptron::with_rng(2, 0.1, &mut rng).unwrap();

            perceptron.train(&examples, 100).unwrap();

            assert_eq!(
                perceptron.accuracy(&examples).unwrap(),
                1.0,
                "seed {} did not converge on {:?}",
                seed,
                table
            );
        }
    }
}

#[test]
fn test_cannot_learn_xor() {
    let examples = gates::labeled(XOR);

    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut perceptron = Perceptron::with_rng(2, 0.1, &mut rng).unwrap();

        perceptron.train(&examples, 200).unwrap();

        assert!(perceptron.accuracy(&examples).unwrap() < 1.0);
    }
}

#[test]
fn test_accuracy_of_empty_set_is_zero() {
    let perceptron = Perceptron::from_weights(vec![0.0, 1.0], 0.1).unwrap();
    assert_eq!(perceptron.accuracy(&[]).unwrap(), 0.0);
}
