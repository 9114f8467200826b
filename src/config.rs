use serde::Serialize;
use serde_json;
use std::fs::File;
use std::path::Path;

#[derive(Serialize)]
pub struct RunConfig {
    pub sampler: SamplerConfig,
    pub run: RunInfo,
}

#[derive(Serialize)]
pub struct SamplerConfig {
    /// Input to the avalanche hash; the scramble seed is derived from it.
    pub seed_input: u32,
    pub scramble: u32,
    pub index_start: u32,
    /// Length scale applied to the random reference direction.
    pub reference_scale: f32,
}

#[derive(Serialize)]
pub struct RunInfo {
    pub binary: String,
    pub run_id: String,
}

impl RunConfig {
    pub fn write_to_dir(&self, out_dir: &Path) -> std::io::Result<()> {
        let path = out_dir.join("config.json");
        let file = File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }
}
