//! Python 綁定實現
//!
//! 輸入輸出皆為 JSON 字串：參數為扁平參數袋，構件與單價為陣列。

use anyhow::Context;
use ghbom_calc::{
    border_purlin_summary, clamps_size_summary, CalculationDetail, ClampCalculator, ClampWarning,
    ComponentIndex, DetailBuilder, Materializer,
};
use ghbom_core::{
    Category, ComponentRecord, EngineConfig, OutputLine, ParameterBag, RateEntry, RateTable,
    StructuralParameters,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use rust_decimal::Decimal;
use serde::Serialize;

/// 回傳給 Python 的計算結果
#[derive(Debug, Serialize)]
struct CalculationResponse {
    project_id: String,
    lines: Vec<OutputLine>,
    details: Vec<CalculationDetail>,
    warnings: Vec<ClampWarning>,
    clamps_size_summary: String,
    border_purlin_summary: String,
    calculation_time_ms: Option<u128>,
}

fn to_py_err(err: anyhow::Error) -> PyErr {
    PyValueError::new_err(format!("{err:#}"))
}

/// 解析輸入並執行完整流程
fn run_calculation(
    config: EngineConfig,
    params_json: &str,
    components_json: &str,
    rates_json: &str,
    project_id: &str,
) -> anyhow::Result<String> {
    let bag = ParameterBag::from_json(params_json).context("參數 JSON 解析失敗")?;
    let params = StructuralParameters::from_bag(&bag);
    params.validate().context("參數配置無效")?;

    let components: Vec<ComponentRecord> =
        serde_json::from_str(components_json).context("構件 JSON 解析失敗")?;
    let rates: Vec<RateEntry> = serde_json::from_str(rates_json).context("單價 JSON 解析失敗")?;

    let index = ComponentIndex::from_records(components);
    let rates = RateTable::from_entries(rates);
    let calculator = ClampCalculator::new(config);

    let result = calculator
        .calculate(&params, &index)
        .with_context(|| format!("專案 {project_id} 夾具計算失敗"))?;

    let config = calculator.config();
    let lines = Materializer::materialize(project_id, &result.accumulator, &rates, config);
    let details = DetailBuilder::build(&result.sections, &rates, config);

    let response = CalculationResponse {
        project_id: project_id.to_string(),
        clamps_size_summary: clamps_size_summary(&lines),
        border_purlin_summary: border_purlin_summary(&params),
        lines,
        details,
        warnings: result.warnings,
        calculation_time_ms: result.calculation_time_ms,
    };

    Ok(serde_json::to_string(&response)?)
}

/// 以預設配置計算夾具
#[pyfunction]
#[pyo3(signature = (params_json, components_json, rates_json="[]", project_id=""))]
pub fn calculate_clamps(
    params_json: &str,
    components_json: &str,
    rates_json: &str,
    project_id: &str,
) -> PyResult<String> {
    run_calculation(EngineConfig::default(), params_json, components_json, rates_json, project_id)
        .map_err(to_py_err)
}

/// Python 引擎配置
#[pyclass(name = "EngineConfig")]
#[derive(Clone)]
pub struct PyEngineConfig {
    #[pyo3(get, set)]
    pub category: String, // "clamps", "nutbolts", ...
    #[pyo3(get, set)]
    pub default_unit_price: f64,
    #[pyo3(get, set)]
    pub separate_tagged_lines: bool,
    #[pyo3(get, set)]
    pub include_arch_middle_purlin: bool,
    #[pyo3(get, set)]
    pub include_asc_support_pipe: bool,
}

#[pymethods]
impl PyEngineConfig {
    #[new]
    #[pyo3(signature = (category="clamps", default_unit_price=0.0, separate_tagged_lines=true))]
    fn new(category: &str, default_unit_price: f64, separate_tagged_lines: bool) -> Self {
        Self {
            category: category.to_string(),
            default_unit_price,
            separate_tagged_lines,
            include_arch_middle_purlin: true,
            include_asc_support_pipe: true,
        }
    }
}

/// 內部方法實現（不暴露給 Python）
impl PyEngineConfig {
    /// 轉換為 Rust EngineConfig
    pub(crate) fn to_rust_config(&self) -> PyResult<EngineConfig> {
        let category = match self.category.as_str() {
            "clamps" => Category::Clamps,
            "nutbolts" => Category::Nutbolts,
            "profiles" => Category::Profiles,
            "covering" => Category::Covering,
            "brackets" => Category::Brackets,
            "wires" => Category::Wires,
            other => {
                return Err(PyValueError::new_err(format!("Invalid category: {other}")));
            }
        };

        let default_unit_price = Decimal::try_from(self.default_unit_price).map_err(|e| {
            PyValueError::new_err(format!("Invalid default_unit_price {}: {e}", self.default_unit_price))
        })?;

        let mut config = EngineConfig::new()
            .with_default_unit_price(default_unit_price)
            .with_separate_tagged_lines(self.separate_tagged_lines)
            .with_arch_middle_purlin(self.include_arch_middle_purlin)
            .with_asc_support_pipe(self.include_asc_support_pipe);
        config.category = category;
        Ok(config)
    }
}

/// Python 夾具計算器
#[pyclass(name = "ClampCalculator")]
pub struct PyClampCalculator {
    config: EngineConfig,
}

#[pymethods]
impl PyClampCalculator {
    #[new]
    #[pyo3(signature = (config=None))]
    fn new(config: Option<PyRef<'_, PyEngineConfig>>) -> PyResult<Self> {
        let config = match config {
            Some(config) => config.to_rust_config()?,
            None => EngineConfig::default(),
        };
        Ok(Self { config })
    }

    /// 執行夾具計算，回傳 JSON（明細行、計算明細、警告、摘要）
    #[pyo3(signature = (params_json, components_json, rates_json="[]", project_id=""))]
    fn calculate(
        &self,
        params_json: &str,
        components_json: &str,
        rates_json: &str,
        project_id: &str,
    ) -> PyResult<String> {
        run_calculation(self.config.clone(), params_json, components_json, rates_json, project_id)
            .map_err(to_py_err)
    }

    /// 規則區段標題，依執行順序
    fn sections(&self) -> Vec<&'static str> {
        ClampCalculator::new(self.config.clone()).sections()
    }
}
