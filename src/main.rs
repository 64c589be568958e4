// src/main.rs

use std::error::Error;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;

use config::{AngularParameters, ModelParameters, SpiralParameters};
use render::render_trajectory_svg;
use simulation::csv::write_trajectory_csv;
use simulation::framework::run_simulation;
use simulation::load_parameters::load_parameters;

mod config;
mod math;
mod models;
mod render;
mod simulation;

/// 既定パラメータで実行するモデル
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum ModelChoice {
    #[value(name = "angular-2d")]
    Angular2d,
    #[value(name = "centripetal-spiral-3d")]
    CentripetalSpiral3d,
}

#[derive(Parser, Debug)]
#[command(about = "円形加速器内の荷電粒子の軌跡シミュレーション")]
struct Args {
    /// モデルとパラメータを記述した YAML ファイル
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// `--config` がない場合に既定値で実行するモデル
    #[arg(short, long, value_enum, default_value_t = ModelChoice::Angular2d)]
    model: ModelChoice,

    /// 軌跡の CSV 出力先
    #[arg(long)]
    csv: Option<PathBuf>,

    /// 軌跡の SVG 出力先
    #[arg(long)]
    plot: Option<PathBuf>,
}

fn select_parameters(args: &Args) -> Result<ModelParameters, Box<dyn Error>> {
    match &args.config {
        Some(path) => {
            info!("パラメータを読み込み: {}", path.display());
            load_parameters(path)
        }
        None => Ok(match args.model {
            ModelChoice::Angular2d => ModelParameters::Angular2D(AngularParameters::default()),
            ModelChoice::CentripetalSpiral3d => {
                ModelParameters::CentripetalSpiral3D(SpiralParameters::default())
            }
        }),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    // パラメータの決定
    let params = select_parameters(&args)?;

    // シミュレーションの実行
    let run = run_simulation(&params)?;

    // 出力
    if let Some(path) = &args.csv {
        write_trajectory_csv(path, &run.trajectory, params.time_step())?;
        info!("CSV を出力: {}", path.display());
    }
    if let Some(path) = &args.plot {
        render_trajectory_svg(path, &run.trajectory)?;
        info!("SVG を出力: {}", path.display());
    }

    Ok(())
}
