// src/simulation/framework.rs

use log::{info, warn};

use crate::config::ModelParameters;
use crate::math::MathError;
use crate::simulation::{RecordedTrajectory, SimulationModel};

/// 1回の実行結果
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRun {
    pub model: SimulationModel,
    pub trajectory: RecordedTrajectory,
}

/// シミュレーションの初期化
///
/// 実行時にゼロ除算となる設定は警告するだけで拒否しない。
pub fn initialize_simulation(params: &ModelParameters) -> SimulationModel {
    for hazard in params.hazards() {
        warn!("パラメータ警告: {}", hazard);
    }
    let model = SimulationModel::from_parameters(params);
    info!(
        "モデル {} を初期化: total_time={} time_step={}",
        model.name(),
        params.total_time(),
        params.time_step()
    );
    model
}

/// パラメータに従って1回のシミュレーションを実行する
pub fn run_simulation(params: &ModelParameters) -> Result<SimulationRun, MathError> {
    let mut model = initialize_simulation(params);
    let trajectory = model.simulate(params.total_time(), params.time_step())?;

    info!(
        "{} ステップ完了: 最終エネルギー={}",
        trajectory.len(),
        model.energy()
    );
    if let Some(step) = trajectory.first_non_finite() {
        warn!("ステップ {} 以降の軌跡に NaN/Inf が含まれます", step);
    }

    Ok(SimulationRun { model, trajectory })
}
