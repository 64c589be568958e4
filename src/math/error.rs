// src/math/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("時間ステップは正の有限値である必要があります: {0}")]
    InvalidTimeStep(f64),
    #[error("ステップ数が上限を超えています: {0}")]
    TooManySteps(f64),
}
