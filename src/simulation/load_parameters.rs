// src/simulation/load_parameters.rs

use std::error::Error;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_yaml::from_reader;

use crate::config::ModelParameters;

/// モデルパラメータの読み込み
pub fn load_parameters<P: AsRef<Path>>(path: P) -> Result<ModelParameters, Box<dyn Error>> {
    let file = File::open(path)?;
    let params: ModelParameters = from_reader(BufReader::new(file))?;
    Ok(params)
}
