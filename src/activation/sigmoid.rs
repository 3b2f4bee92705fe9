/// Logistic function `1 / (1 + e^-x)`. No clamping is applied, so very large
/// negative inputs overflow `e^-x` to infinity and yield exactly 0.
pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// `σ'(x) = σ(x)(1 - σ(x))`, evaluated at the pre-activation `x`.
pub fn sigmoid_derivative(x: f64) -> f64 {
    let fx = sigmoid(x);
    fx * (1.0 - fx)
}

pub fn sigmoid_vec(v: &[f64]) -> Vec<f64> {
    v.iter().map(|&x| sigmoid(x)).collect()
}

pub fn sigmoid_derivative_vec(v: &[f64]) -> Vec<f64> {
    v.iter().map(|&x| sigmoid_derivative(x)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_known_values() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!((sigmoid(7.0) - 0.99908895).abs() < 1e-8);
        assert!((sigmoid(1.0) - 0.73105858).abs() < 1e-8);
        assert!((sigmoid(-2.80123456) - 0.0572575).abs() < 1e-6);
    }

    #[test]
    fn sigmoid_is_symmetric() {
        for &x in &[0.1, 1.0, 3.5, 12.0] {
            assert!((sigmoid(x) + sigmoid(-x) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn derivative_peaks_at_zero() {
        assert_eq!(sigmoid_derivative(0.0), 0.25);
        assert!(sigmoid_derivative(2.0) < 0.25);
        assert!((sigmoid_derivative(2.0) - sigmoid_derivative(-2.0)).abs() < 1e-15);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let h = 1e-6;
        for &x in &[-3.0, -0.5, 0.0, 0.8, 4.0] {
            let numeric = (sigmoid(x + h) - sigmoid(x - h)) / (2.0 * h);
            assert!((numeric - sigmoid_derivative(x)).abs() < 1e-8);
        }
    }

    #[test]
    fn extreme_inputs_saturate() {
        assert_eq!(sigmoid(-1000.0), 0.0);
        assert_eq!(sigmoid(1000.0), 1.0);
        assert_eq!(sigmoid_derivative(-1000.0), 0.0);
    }

    #[test]
    fn vector_forms_keep_length() {
        let v = [7.0, 1.0, 9.0];
        let s = sigmoid_vec(&v);
        let d = sigmoid_derivative_vec(&v);
        assert_eq!(s.len(), 3);
        assert_eq!(d.len(), 3);
        assert_eq!(s[1], sigmoid(1.0));
        assert_eq!(d[2], sigmoid_derivative(9.0));
    }
}
