// src/config/parameters.rs

use std::fmt;

use serde::Deserialize;

/// 2D 円形加速器モデルのパラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AngularParameters {
    pub radius: f64,           // 加速器の半径
    pub initial_position: f64, // 初期位置（弧長）
    pub initial_velocity: f64, // 初速
    pub mass: f64,             // 質量
    pub energy_increment: f64, // 1ステップあたりのエネルギー増分
    pub total_time: f64,       // シミュレーション時間
    pub time_step: f64,        // 時間ステップ
}

impl Default for AngularParameters {
    fn default() -> Self {
        AngularParameters {
            radius: 10.0,
            initial_position: 0.0,
            initial_velocity: 0.5,
            mass: 1.0,
            energy_increment: 0.1,
            total_time: 20.0,
            time_step: 0.1,
        }
    }
}

/// 3D 螺旋加速器モデルのパラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpiralParameters {
    pub radius: f64,                // 加速器の半径
    pub length: f64,                // 加速器の長さ（力の計算には未使用）
    pub initial_position: [f64; 3], // 初期位置 [x, y, z]
    pub initial_velocity: [f64; 3], // 初速度 [vx, vy, vz]
    pub mass: f64,                  // 質量
    pub energy_increment: f64,      // 1ステップあたりのエネルギー増分
    pub total_time: f64,            // シミュレーション時間
    pub time_step: f64,             // 時間ステップ
}

impl Default for SpiralParameters {
    fn default() -> Self {
        SpiralParameters {
            radius: 10.0,
            length: 50.0,
            initial_position: [10.0, 0.0, 0.0],
            initial_velocity: [0.0, 1.0, 0.1],
            mass: 1.0,
            energy_increment: 0.1,
            total_time: 20.0,
            time_step: 0.05,
        }
    }
}

/// YAML の `model` キーで選択するモデル
///
/// ```yaml
/// model: centripetal_spiral_3d
/// radius: 10.0
/// initial_velocity: [0.0, 1.0, 0.1]
/// ```
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "model")]
pub enum ModelParameters {
    #[serde(rename = "angular_2d")]
    Angular2D(AngularParameters),
    #[serde(rename = "centripetal_spiral_3d")]
    CentripetalSpiral3D(SpiralParameters),
}

/// 検査せずにそのまま実行されるパラメータ上の危険
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterHazard {
    ZeroRadius,
    ZeroMass,
    StartOnAxis,
}

impl fmt::Display for ParameterHazard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterHazard::ZeroRadius => write!(f, "半径が 0 のため角度・力の計算がゼロ除算になります"),
            ParameterHazard::ZeroMass => write!(f, "質量が 0 のため加速度の計算がゼロ除算になります"),
            ParameterHazard::StartOnAxis => {
                write!(f, "初期位置が Z 軸上のため向心方向が定義できません")
            }
        }
    }
}

impl ModelParameters {
    pub fn total_time(&self) -> f64 {
        match self {
            ModelParameters::Angular2D(p) => p.total_time,
            ModelParameters::CentripetalSpiral3D(p) => p.total_time,
        }
    }

    pub fn time_step(&self) -> f64 {
        match self {
            ModelParameters::Angular2D(p) => p.time_step,
            ModelParameters::CentripetalSpiral3D(p) => p.time_step,
        }
    }

    /// 実行時に NaN/Inf を生む可能性のある設定の一覧
    pub fn hazards(&self) -> Vec<ParameterHazard> {
        let mut hazards = Vec::new();
        match self {
            ModelParameters::Angular2D(p) => {
                if p.radius == 0.0 {
                    hazards.push(ParameterHazard::ZeroRadius);
                }
            }
            ModelParameters::CentripetalSpiral3D(p) => {
                if p.radius == 0.0 {
                    hazards.push(ParameterHazard::ZeroRadius);
                }
                if p.mass == 0.0 {
                    hazards.push(ParameterHazard::ZeroMass);
                }
                if p.initial_position[0] == 0.0 && p.initial_position[1] == 0.0 {
                    hazards.push(ParameterHazard::StartOnAxis);
                }
            }
        }
        hazards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let angular = AngularParameters::default();
        assert_eq!(angular.radius, 10.0);
        assert_eq!(angular.initial_position, 0.0);
        assert_eq!(angular.initial_velocity, 0.5);
        assert_eq!(angular.time_step, 0.1);

        let spiral = SpiralParameters::default();
        assert_eq!(spiral.length, 50.0);
        assert_eq!(spiral.initial_position, [10.0, 0.0, 0.0]);
        assert_eq!(spiral.initial_velocity, [0.0, 1.0, 0.1]);
        assert_eq!(spiral.time_step, 0.05);
        assert_eq!(spiral.total_time, 20.0);
    }

    #[test]
    fn test_deserialize_partial_yaml_uses_defaults() {
        let yaml = "model: centripetal_spiral_3d\nradius: 5.0\nmass: 2.0\n";
        let params: ModelParameters = serde_yaml::from_str(yaml).unwrap();

        let expected = SpiralParameters {
            radius: 5.0,
            mass: 2.0,
            ..SpiralParameters::default()
        };
        assert_eq!(params, ModelParameters::CentripetalSpiral3D(expected));
        assert_eq!(params.time_step(), 0.05);
    }

    #[test]
    fn test_deserialize_angular() {
        let yaml = "model: angular_2d\ntime_step: 0.2\ntotal_time: 4.0\n";
        let params: ModelParameters = serde_yaml::from_str(yaml).unwrap();

        assert!(matches!(params, ModelParameters::Angular2D(_)));
        assert_eq!(params.time_step(), 0.2);
        assert_eq!(params.total_time(), 4.0);
    }

    #[test]
    fn test_deserialize_rejects_unknown_model() {
        let yaml = "model: linac\nradius: 5.0\n";
        assert!(serde_yaml::from_str::<ModelParameters>(yaml).is_err());
    }

    #[test]
    fn test_hazards() {
        let safe = ModelParameters::CentripetalSpiral3D(SpiralParameters::default());
        assert!(safe.hazards().is_empty());

        let risky = ModelParameters::CentripetalSpiral3D(SpiralParameters {
            radius: 0.0,
            mass: 0.0,
            initial_position: [0.0, 0.0, 3.0],
            ..SpiralParameters::default()
        });
        assert_eq!(
            risky.hazards(),
            vec![
                ParameterHazard::ZeroRadius,
                ParameterHazard::ZeroMass,
                ParameterHazard::StartOnAxis
            ]
        );

        let ring = ModelParameters::Angular2D(AngularParameters {
            radius: 0.0,
            mass: 0.0,
            ..AngularParameters::default()
        });
        // 2D モデルでは質量は計算に使われない
        assert_eq!(ring.hazards(), vec![ParameterHazard::ZeroRadius]);
    }
}
