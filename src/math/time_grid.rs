// src/math/time_grid.rs

use crate::math::error::MathError;

/// 1回の `simulate` で扱えるステップ数の上限
pub const MAX_STEPS: usize = 100_000_000;

/// 半開区間 `[0, total_time)` に含まれる `t = i * time_step` の個数
///
/// `ceil(total_time / time_step)` を 0 で下限クリップした値。
/// `time_step` が正の有限値でない場合、またはステップ数が `MAX_STEPS` を
/// 超える（非有限を含む）場合はエラー。
pub fn step_count(total_time: f64, time_step: f64) -> Result<usize, MathError> {
    if !(time_step > 0.0) || !time_step.is_finite() {
        return Err(MathError::InvalidTimeStep(time_step));
    }
    let steps = (total_time / time_step).ceil();
    if steps.is_nan() || steps <= 0.0 {
        return Ok(0);
    }
    if !steps.is_finite() || steps > MAX_STEPS as f64 {
        return Err(MathError::TooManySteps(steps));
    }
    Ok(steps as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_count_exact_multiple_excludes_endpoint() {
        assert_eq!(step_count(20.0, 0.1).unwrap(), 200);
        assert_eq!(step_count(20.0, 0.05).unwrap(), 400);
        assert_eq!(step_count(1.0, 0.25).unwrap(), 4);
    }

    #[test]
    fn test_step_count_partial_step_is_included() {
        // t = 0.0, 0.3, 0.6, 0.9
        assert_eq!(step_count(1.0, 0.3).unwrap(), 4);
    }

    #[test]
    fn test_step_count_large_step() {
        assert_eq!(step_count(20.0, 20.0).unwrap(), 1);
        assert_eq!(step_count(20.0, 30.0).unwrap(), 1);
    }

    #[test]
    fn test_step_count_non_positive_total_time() {
        assert_eq!(step_count(0.0, 0.1).unwrap(), 0);
        assert_eq!(step_count(-5.0, 0.1).unwrap(), 0);
    }

    #[test]
    fn test_step_count_small_step() {
        assert_eq!(step_count(1.0, 1e-4).unwrap(), 10_000);
    }

    #[test]
    fn test_step_count_rejects_too_many_steps() {
        let at_limit = MAX_STEPS as f64 * 0.25;
        assert_eq!(step_count(at_limit, 0.25).unwrap(), MAX_STEPS);
        assert_eq!(
            step_count(at_limit + 0.25, 0.25),
            Err(MathError::TooManySteps(MAX_STEPS as f64 + 1.0))
        );
        assert!(matches!(
            step_count(20.0, 1e-300),
            Err(MathError::TooManySteps(_))
        ));
        assert!(matches!(
            step_count(f64::MAX, 1e-300),
            Err(MathError::TooManySteps(steps)) if steps.is_infinite()
        ));
    }

    #[test]
    fn test_step_count_rejects_bad_time_step() {
        assert_eq!(step_count(1.0, 0.0), Err(MathError::InvalidTimeStep(0.0)));
        assert_eq!(step_count(1.0, -0.1), Err(MathError::InvalidTimeStep(-0.1)));
        assert!(step_count(1.0, f64::NAN).is_err());
        assert!(step_count(1.0, f64::INFINITY).is_err());
    }
}
