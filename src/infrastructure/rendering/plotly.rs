//! Bridge to the Plotly.js widget loaded by the host page.

use gloo::utils::format::JsValueSerdeExt;
use js_sys::{Array, Function, Reflect};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};

use crate::domain::chart::Figure;
use crate::domain::errors::RenderError;
use crate::domain::logging::LogComponent;
use crate::log_debug;

const WIDGET_GLOBAL: &str = "Plotly";

/// Widget options passed as the fourth argument of `Plotly.react`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlotConfig {
    pub responsive: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self { responsive: true }
    }
}

/// Draw `figure` into the element with id `element_id`, replacing any previous plot.
pub fn render_figure(
    element_id: &str,
    figure: &Figure,
    config: &PlotConfig,
) -> Result<(), RenderError> {
    let (widget, react) = widget_method("react")?;

    let data = to_js(&figure.data)?;
    let layout = to_js(&figure.layout)?;
    let config = to_js(config)?;
    let args = Array::of4(&JsValue::from_str(element_id), &data, &layout, &config);

    react
        .apply(&widget, &args)
        .map_err(|e| RenderError::Widget(format!("{e:?}")))?;

    log_debug!(
        LogComponent::Infrastructure("Plotly"),
        "rendered {} trace(s) into #{element_id}",
        figure.data.len()
    );
    Ok(())
}

/// Remove the plot from `element_id`, if one was drawn.
pub fn purge_figure(element_id: &str) -> Result<(), RenderError> {
    let (widget, purge) = widget_method("purge")?;
    purge
        .call1(&widget, &JsValue::from_str(element_id))
        .map_err(|e| RenderError::Widget(format!("{e:?}")))?;
    Ok(())
}

fn widget_method(name: &str) -> Result<(JsValue, Function), RenderError> {
    let widget = Reflect::get(&js_sys::global(), &JsValue::from_str(WIDGET_GLOBAL))
        .ok()
        .filter(|value| !value.is_undefined() && !value.is_null())
        .ok_or(RenderError::WidgetMissing(WIDGET_GLOBAL))?;
    let method = Reflect::get(&widget, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or(RenderError::WidgetMissing(WIDGET_GLOBAL))?;
    Ok((widget, method))
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, RenderError> {
    JsValue::from_serde(value).map_err(|e| RenderError::Serialize(e.to_string()))
}
