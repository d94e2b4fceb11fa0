//! 场景加载
//!
//! 支持两种格式：六行文本格式，以及扩展名为 `.json` 的 JSON 格式。
//! 两者都在构建世界之前做完整校验，不合法的内容直接报错。

mod text;

use crate::error::{SimError, SimResult};
use crate::game::{Pos, World, check_bounds};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

pub use text::parse_text;

/// 初始场景：网格半径、迭代预算与双方初始坐标。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub n: u32,
    pub iterations: u32,
    #[serde(default)]
    pub astronauts: Vec<Pos>,
    #[serde(default)]
    pub impostors: Vec<Pos>,
}

impl Scenario {
    /// 从文件加载；`.json` 扩展名按 JSON 解析，其余按文本格式解析。
    #[tracing::instrument]
    pub fn load(path: &Path) -> SimResult<Scenario> {
        let raw = fs::read_to_string(path).map_err(|source| SimError::ScenarioFileUnreadable {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let scenario = if is_json {
            debug!("按 JSON 解析场景");
            Scenario::from_json(&raw).map_err(|source| SimError::ScenarioJson {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            parse_text(&raw)?
        };
        scenario.validate()?;

        info!(
            astronauts = scenario.astronauts.len(),
            impostors = scenario.impostors.len(),
            n = scenario.n,
            iterations = scenario.iterations,
            "场景已加载"
        );
        Ok(scenario)
    }

    pub fn from_json(raw: &str) -> Result<Scenario, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// 坐标必须落在 `[0, 2N]` 内。
    pub fn validate(&self) -> SimResult<()> {
        check_bounds(self.n, &self.astronauts, &self.impostors).map(|_| ())
    }

    pub fn into_world(self) -> SimResult<World> {
        World::new(self.n, self.iterations, self.astronauts, self.impostors)
    }
}
