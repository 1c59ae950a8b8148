//! Canopy estimator as a WASM module for the browser dashboard.
//!
//! This crate exposes the estimator, catalog and report export via
//! `wasm-bindgen`. Every export returns a JSON envelope so that the
//! dashboard never has to catch exceptions.
//!
//! # Usage (JavaScript)
//!
//! ```js
//! import init, { compute_time_series, compute_totals } from 'canopy-wasm';
//!
//! await init();
//!
//! const selections = JSON.stringify([{ name: "Neem", quantity: 3, survival_rate: 0.92 }]);
//! const series = JSON.parse(compute_time_series(selections, 20, "annual"));
//! // { success: true, data: [{ year: 1, values: { Neem: 48 } }, ...], error: null }
//! ```

mod envelope;

use canopy_catalog::Catalog;
use canopy_estimator::{BarDatum, GrowthModel, Totals, YearlyDataPoint};
use canopy_report::Report;
use canopy_types::{CanopyError, Category, Selection, ViewMode};
use wasm_bindgen::prelude::*;

pub use envelope::Envelope;
use envelope::{horizon, parse_selections, respond};

/// Yearly CO₂ series for a JSON selection array.
///
/// `mode` is `"cumulative"` or `"annual"`. On success `data` is an array of
/// `{ year, values: { <species>: kg } }`, one per year.
#[wasm_bindgen]
pub fn compute_time_series(selections_json: &str, horizon_years: i32, mode: &str) -> String {
    respond(time_series_result(selections_json, horizon_years, mode))
}

/// Closed-form totals: per species, trees, CO₂ and mean survival rate.
#[wasm_bindgen]
pub fn compute_totals(selections_json: &str, horizon_years: i32) -> String {
    respond(totals_result(selections_json, horizon_years))
}

/// Per-species total bars with palette colors.
#[wasm_bindgen]
pub fn bar_data(selections_json: &str, horizon_years: i32) -> String {
    respond(bar_data_result(selections_json, horizon_years))
}

/// Survival-rate bars with High/Medium/Low bands.
#[wasm_bindgen]
pub fn survival_bars(selections_json: &str) -> String {
    respond(parse_selections(selections_json).and_then(|s| canopy_estimator::survival_bars(&s)))
}

/// The full species catalog in display order.
#[wasm_bindgen]
pub fn catalog() -> String {
    let catalog = Catalog::builtin();
    respond(Ok(catalog.iter().collect::<Vec<_>>()))
}

/// Catalog entries whose name contains `term` (case-insensitive),
/// restricted to `category` unless it is `"all"`.
#[wasm_bindgen]
pub fn search_catalog(term: &str, category: &str) -> String {
    let catalog = Catalog::builtin();
    respond(Category::parse_filter(category).map(|c| catalog.search(term, c)))
}

/// Build the printable report. `data` holds `{ report, text }`.
#[wasm_bindgen]
pub fn render_report(selections_json: &str, horizon_years: i32) -> String {
    respond(report_result(selections_json, horizon_years))
}

/// Totals taking and returning JavaScript values directly.
///
/// Rejects with the structured error object on failure.
#[wasm_bindgen]
pub fn compute_totals_value(
    selections: JsValue,
    horizon_years: i32,
) -> Result<JsValue, JsValue> {
    let to_js = |e: CanopyError| {
        serde_wasm_bindgen::to_value(&e).unwrap_or_else(|_| JsValue::from_str(&e.to_string()))
    };
    let selections: Vec<Selection> = serde_wasm_bindgen::from_value(selections)
        .map_err(|e| JsValue::from_str(&format!("invalid selections: {e}")))?;
    let years = horizon(horizon_years).map_err(to_js)?;
    let totals = canopy_estimator::compute_totals(&selections, years).map_err(to_js)?;
    serde_wasm_bindgen::to_value(&totals).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Return the estimator version string.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// ══════════════════════════════════════════════════════════════════════════════
// Result-returning bodies of the exports
// ══════════════════════════════════════════════════════════════════════════════

fn time_series_result(
    selections_json: &str,
    horizon_years: i32,
    mode: &str,
) -> canopy_types::Result<Vec<YearlyDataPoint>> {
    let selections = parse_selections(selections_json)?;
    let mode: ViewMode = mode.parse()?;
    canopy_estimator::compute_time_series(&selections, horizon(horizon_years)?, mode)
}

fn totals_result(selections_json: &str, horizon_years: i32) -> canopy_types::Result<Totals> {
    let selections = parse_selections(selections_json)?;
    canopy_estimator::compute_totals(&selections, horizon(horizon_years)?)
}

fn bar_data_result(
    selections_json: &str,
    horizon_years: i32,
) -> canopy_types::Result<Vec<BarDatum>> {
    let selections = parse_selections(selections_json)?;
    canopy_estimator::bar_data(&selections, horizon(horizon_years)?)
}

fn report_result(
    selections_json: &str,
    horizon_years: i32,
) -> canopy_types::Result<serde_json::Value> {
    let selections = parse_selections(selections_json)?;
    let report = Report::build(
        &Catalog::builtin(),
        &selections,
        horizon(horizon_years)?,
        &GrowthModel::default(),
    )?;
    let text = report.render_text();
    Ok(serde_json::json!({ "report": report, "text": text }))
}
