// src/simulation/mod.rs

pub mod load_parameters;
pub mod csv;
pub mod framework;

use crate::config::ModelParameters;
use crate::math::MathError;
use crate::models::{
    AngularParticle, Point2, Point3, RingAccelerator, SpiralAccelerator, SpiralParticle,
    Trajectory,
};

/// 実行するモデルと、それが単独で所有する加速器・粒子
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationModel {
    Angular2D(RingAccelerator),
    CentripetalSpiral3D(SpiralAccelerator),
}

/// モデルごとの記録済み軌跡
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedTrajectory {
    Planar(Trajectory<Point2>),
    Spatial(Trajectory<Point3>),
}

impl RecordedTrajectory {
    pub fn len(&self) -> usize {
        match self {
            RecordedTrajectory::Planar(t) => t.len(),
            RecordedTrajectory::Spatial(t) => t.len(),
        }
    }

    pub fn dimension(&self) -> usize {
        match self {
            RecordedTrajectory::Planar(_) => 2,
            RecordedTrajectory::Spatial(_) => 3,
        }
    }

    pub fn first_non_finite(&self) -> Option<usize> {
        match self {
            RecordedTrajectory::Planar(t) => t.first_non_finite(),
            RecordedTrajectory::Spatial(t) => t.first_non_finite(),
        }
    }
}

impl SimulationModel {
    /// パラメータから加速器と粒子を組み立てる
    pub fn from_parameters(params: &ModelParameters) -> Self {
        match params {
            ModelParameters::Angular2D(p) => SimulationModel::Angular2D(RingAccelerator::new(
                p.radius,
                AngularParticle::new(p.initial_position, p.initial_velocity, p.mass),
                p.energy_increment,
            )),
            ModelParameters::CentripetalSpiral3D(p) => {
                SimulationModel::CentripetalSpiral3D(SpiralAccelerator::new(
                    p.radius,
                    p.length,
                    SpiralParticle::new(p.initial_position, p.initial_velocity, p.mass),
                    p.energy_increment,
                ))
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SimulationModel::Angular2D(_) => "angular_2d",
            SimulationModel::CentripetalSpiral3D(_) => "centripetal_spiral_3d",
        }
    }

    pub fn simulate(
        &mut self,
        total_time: f64,
        time_step: f64,
    ) -> Result<RecordedTrajectory, MathError> {
        match self {
            SimulationModel::Angular2D(acc) => {
                acc.simulate(total_time, time_step).map(RecordedTrajectory::Planar)
            }
            SimulationModel::CentripetalSpiral3D(acc) => {
                acc.simulate(total_time, time_step).map(RecordedTrajectory::Spatial)
            }
        }
    }

    /// 粒子の累積エネルギー
    pub fn energy(&self) -> f64 {
        match self {
            SimulationModel::Angular2D(acc) => acc.particle().energy,
            SimulationModel::CentripetalSpiral3D(acc) => acc.particle().energy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AngularParameters, SpiralParameters};

    #[test]
    fn test_from_parameters_selects_variant() {
        let ring = SimulationModel::from_parameters(&ModelParameters::Angular2D(
            AngularParameters::default(),
        ));
        assert_eq!(ring.name(), "angular_2d");

        let spiral = SimulationModel::from_parameters(&ModelParameters::CentripetalSpiral3D(
            SpiralParameters::default(),
        ));
        assert_eq!(spiral.name(), "centripetal_spiral_3d");
        match spiral {
            SimulationModel::CentripetalSpiral3D(acc) => {
                assert_eq!(acc.length, 50.0);
                assert_eq!(acc.particle().position, [10.0, 0.0, 0.0]);
                assert_eq!(acc.particle().energy, 0.0);
            }
            _ => panic!("螺旋モデルが生成されていません"),
        }
    }

    #[test]
    fn test_simulate_returns_matching_dimension() {
        let mut ring = SimulationModel::from_parameters(&ModelParameters::Angular2D(
            AngularParameters::default(),
        ));
        let planar = ring.simulate(20.0, 0.1).unwrap();
        assert_eq!(planar.dimension(), 2);
        assert_eq!(planar.len(), 200);

        let mut spiral = SimulationModel::from_parameters(&ModelParameters::CentripetalSpiral3D(
            SpiralParameters::default(),
        ));
        let spatial = spiral.simulate(20.0, 0.05).unwrap();
        assert_eq!(spatial.dimension(), 3);
        assert_eq!(spatial.len(), 400);
        assert_eq!(spatial.first_non_finite(), None);
    }

    #[test]
    fn test_energy_after_n_steps() {
        let mut model = SimulationModel::from_parameters(&ModelParameters::Angular2D(
            AngularParameters::default(),
        ));
        for n in 1..=5 {
            model.simulate(0.1, 0.1).unwrap();
            let expected = (0..n).fold(0.0, |energy, _| energy + 0.1);
            assert_eq!(model.energy(), expected);
        }
    }
}
