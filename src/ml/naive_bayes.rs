//! Multinomial Naive Bayes scoring over stored parameters.

use crate::artifact::schema::NaiveBayesParams;

/// A multinomial Naive Bayes classifier built from pre-trained parameters.
///
/// Scoring only; fitting happens offline. The joint log-likelihood of class
/// `c` is `class_log_prior[c] + sum_j features[j] * feature_log_prob[c][j]`.
/// Posteriors are obtained by subtracting the row maximum before
/// exponentiating (numerical stabilization) and normalizing.
#[derive(Debug, Clone)]
pub struct MultinomialNb {
    classes: Vec<i64>,
    class_log_prior: Vec<f64>,
    feature_log_prob: Vec<Vec<f64>>,
    alpha: f64,
}

impl MultinomialNb {
    /// Create a classifier from stored artifact parameters.
    pub fn from_params(params: &NaiveBayesParams) -> Self {
        MultinomialNb {
            classes: params.classes.clone(),
            class_log_prior: params.class_log_prior.clone(),
            feature_log_prob: params.feature_log_prob.clone(),
            alpha: params.alpha,
        }
    }

    /// The ordered class identifiers.
    pub fn classes(&self) -> &[i64] {
        &self.classes
    }

    /// The smoothing constant the model was fit with (provenance only).
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Compute the joint log-likelihood of each class.
    pub fn joint_log_likelihood(&self, features: &[f64]) -> Vec<f64> {
        self.class_log_prior
            .iter()
            .zip(self.feature_log_prob.iter())
            .map(|(prior, row)| {
                let log_likelihood: f64 = features
                    .iter()
                    .zip(row.iter())
                    .map(|(x, log_prob)| x * log_prob)
                    .sum();
                prior + log_likelihood
            })
            .collect()
    }

    /// Compute the posterior probability of each class, aligned with
    /// [`classes`](Self::classes).
    ///
    /// Values are non-negative and sum to 1.0 within floating-point
    /// tolerance.
    pub fn predict_proba(&self, features: &[f64]) -> Vec<f64> {
        let log_joint = self.joint_log_likelihood(features);

        // Subtract the maximum before exponentiating to avoid overflow.
        let max_log = log_joint.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let mut proba: Vec<f64> = log_joint.iter().map(|&lj| (lj - max_log).exp()).collect();
        let sum: f64 = proba.iter().sum();
        for p in &mut proba {
            *p /= sum;
        }

        proba
    }

    /// Predict the class with the maximum joint log-likelihood.
    ///
    /// Ties go to the earlier class in `classes` order. The monotonic
    /// softmax transform preserves ordering, so this is also the class with
    /// the maximum posterior.
    pub fn predict(&self, features: &[f64]) -> i64 {
        let log_joint = self.joint_log_likelihood(features);

        let mut best_idx = 0;
        for (idx, &value) in log_joint.iter().enumerate() {
            if value > log_joint[best_idx] {
                best_idx = idx;
            }
        }

        self.classes[best_idx]
    }
}
