use itertools::Itertools;

use crate::error::{Error, Result};
use crate::predictor::Predictor;

/// Fraction of predictions matching ground truth.
///
/// Single linear scan, no weighting.
pub fn accuracy_score<L: PartialEq>(y_true: &[L], y_pred: &[L]) -> Result<f32> {
    if y_true.len() != y_pred.len() {
        return Err(Error::DimensionMismatch(format!(
            "{} labels but {} predictions",
            y_true.len(),
            y_pred.len()
        )));
    }
    if y_true.is_empty() {
        return Err(Error::InvalidArgument(
            "cannot compute accuracy over an empty label sequence".to_owned(),
        ));
    }

    let matches = y_true
        .iter()
        .zip_eq(y_pred.iter())
        .filter(|(label, prediction)| label == prediction)
        .count();
    Ok(matches as f32 / y_true.len() as f32)
}

fn split_accuracy<P, X, L>(predictor: &P, features: &[X], labels: &[L], split: &str) -> Result<f32>
where
    P: Predictor<X, L>,
    L: PartialEq,
{
    if labels.len() != features.len() {
        return Err(Error::DimensionMismatch(format!(
            "{} split has {} feature rows but {} labels",
            split,
            features.len(),
            labels.len()
        )));
    }
    if features.is_empty() {
        return Err(Error::InvalidArgument(format!("{split} split is empty")));
    }

    let predictions = predictor
        .predict(features)
        .map_err(|e| Error::InvocationError(e.to_string()))?;
    if predictions.len() != features.len() {
        return Err(Error::DimensionMismatch(format!(
            "predictor returned {} labels for {} {} rows",
            predictions.len(),
            features.len(),
            split
        )));
    }

    accuracy_score(labels, &predictions)
}

/// Evaluate the model, both training and testing accuracies are reported.
///
/// The predictor is invoked once per split and its output compared
/// element-wise against the split's labels. Returns
/// `(train_accuracy, test_accuracy)`, each in [0, 1].
pub fn evaluate_model<P, X, L>(
    predictor: &P,
    x_train: &[X],
    y_train: &[L],
    x_test: &[X],
    y_test: &[L],
) -> Result<(f32, f32)>
where
    P: Predictor<X, L>,
    L: PartialEq,
{
    let train_accuracy = split_accuracy(predictor, x_train, y_train, "train")?;
    let test_accuracy = split_accuracy(predictor, x_test, y_test, "test")?;

    Ok((train_accuracy, test_accuracy))
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use approx::assert_relative_eq;

    use super::*;

    fn identity_predictor(features: &[u8]) -> std::result::Result<Vec<u8>, Infallible> {
        Ok(features.to_vec())
    }

    #[test]
    fn test_accuracy_score() {
        let accuracy = accuracy_score(&[0, 1, 0, 1], &[0, 1, 1, 1]).unwrap();
        assert_relative_eq!(accuracy, 0.75);
    }

    #[test]
    fn test_accuracy_score_rejects_mismatched_lengths() {
        let result = accuracy_score(&[0, 1, 0], &[0, 1]);
        assert!(matches!(result, Err(Error::DimensionMismatch(_))));
    }

    #[test]
    fn test_accuracy_score_rejects_empty_input() {
        let result = accuracy_score::<u8>(&[], &[]);
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_evaluate_model_reports_both_splits() {
        // Predictor flips nothing, so accuracy is the match rate of labels
        // against the features themselves.
        let x_train = [0_u8, 1, 1, 1];
        let y_train = [0_u8, 1, 0, 1];
        let x_test = [1_u8, 1];
        let y_test = [1_u8, 1];

        let (train_accuracy, test_accuracy) =
            evaluate_model(&identity_predictor, &x_train, &y_train, &x_test, &y_test).unwrap();
        assert_relative_eq!(train_accuracy, 0.75);
        assert_relative_eq!(test_accuracy, 1.0);
    }

    #[test]
    fn test_evaluate_model_zero_accuracy() {
        let negate = |features: &[bool]| -> std::result::Result<Vec<bool>, Infallible> {
            Ok(features.iter().map(|f| !f).collect())
        };
        let x = [true, false, true];
        let y = [true, false, true];

        let (train_accuracy, test_accuracy) = evaluate_model(&negate, &x, &y, &x, &y).unwrap();
        assert_relative_eq!(train_accuracy, 0.0);
        assert_relative_eq!(test_accuracy, 0.0);
    }

    #[test]
    fn test_accuracy_invariant_under_row_permutation() {
        let x = [3_u8, 1, 4, 1, 5];
        let y = [3_u8, 0, 4, 1, 0];
        let x_permuted = [5_u8, 1, 1, 4, 3];
        let y_permuted = [0_u8, 0, 1, 4, 3];

        let (original, _) = evaluate_model(&identity_predictor, &x, &y, &x, &y).unwrap();
        let (permuted, _) = evaluate_model(
            &identity_predictor,
            &x_permuted,
            &y_permuted,
            &x_permuted,
            &y_permuted,
        )
        .unwrap();
        assert_relative_eq!(original, permuted);
    }

    #[test]
    fn test_evaluate_model_rejects_label_length_mismatch() {
        let result = evaluate_model(&identity_predictor, &[0, 1], &[0, 1, 1], &[0], &[0]);
        assert!(matches!(result, Err(Error::DimensionMismatch(_))));
    }

    #[test]
    fn test_evaluate_model_rejects_short_predictor_output() {
        let truncating = |features: &[u8]| -> std::result::Result<Vec<u8>, Infallible> {
            Ok(features[..features.len() - 1].to_vec())
        };
        let result = evaluate_model(&truncating, &[0, 1], &[0, 1], &[0, 1], &[0, 1]);
        assert!(matches!(result, Err(Error::DimensionMismatch(_))));
    }

    #[test]
    fn test_evaluate_model_surfaces_predictor_failure() {
        let failing =
            |_features: &[u8]| -> std::result::Result<Vec<u8>, String> { Err("no model loaded".to_owned()) };
        let result = evaluate_model(&failing, &[0, 1], &[0, 1], &[0, 1], &[0, 1]);
        match result {
            Err(Error::InvocationError(message)) => assert!(message.contains("no model loaded")),
            other => panic!("expected invocation error, got {:?}", other),
        }
    }
}
