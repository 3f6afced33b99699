use std::str::FromStr;

use leptos::*;
use strum::IntoEnumIterator;

use crate::{
    application::ChartViewService,
    domain::{
        chart::{ChartType, Figure, PlotPayload},
        errors::RenderError,
        logging::LogComponent,
        market_data::ChartDataSource,
        state::ChartViewState,
    },
    infrastructure::{
        config::BackendConfig,
        http::HttpChartDataSource,
        rendering::{PlotConfig, purge_figure, render_figure},
    },
    log_error, log_warn,
};

/// Id of the element the plotting widget draws into.
pub const PLOT_ELEMENT_ID: &str = "stock-graph-plot";

/// Run the submit transition and, when it yields a request, execute it in
/// the background and fold the outcome back into `state`.
///
/// Overlapping submits are not cancelled; the token check in
/// [`ChartViewState::resolve`] drops whichever one is no longer current.
pub fn dispatch_submit<S: ChartDataSource + 'static>(
    state: RwSignal<ChartViewState>,
    service: &ChartViewService<S>,
) {
    let (next, request) = state.with_untracked(ChartViewState::submit);
    state.set(next);

    if let Some(request) = request {
        let service = service.clone();
        spawn_local(async move {
            let outcome = service.execute(request).await;
            state.update(|current| *current = current.resolve(outcome));
        });
    }
}

/// 🦀 Stock graph viewer root
#[component]
pub fn App() -> impl IntoView {
    let state = create_rw_signal(ChartViewState::new());
    let service = ChartViewService::new(HttpChartDataSource::new(BackendConfig::load()));

    view! {
        <style>
            {r#"
            .stock-graph-app {
                padding: 20px;
                font-family: Arial, sans-serif;
            }

            .field {
                margin-bottom: 20px;
            }

            .field-label {
                display: block;
                margin-bottom: 10px;
            }

            .field-input {
                padding: 10px;
                width: 100%;
                max-width: 400px;
                border: 1px solid #ccc;
                border-radius: 4px;
            }

            .suggestions {
                padding-left: 0;
                margin-top: 10px;
                border: 1px solid #ccc;
                border-radius: 4px;
                list-style: none;
                max-width: 400px;
            }

            .suggestion {
                padding: 10px;
                cursor: pointer;
                background-color: #f9f9f9;
            }

            .suggestion:hover {
                background-color: #eee;
            }

            .fetch-btn {
                padding: 10px 20px;
                background-color: #007bff;
                color: white;
                border: none;
                border-radius: 4px;
                cursor: pointer;
            }

            .error {
                color: red;
                margin-top: 20px;
            }

            .plot-panel {
                margin-top: 40px;
            }

            .plot {
                width: 100%;
            }
            "#}
        </style>
        <div class="stock-graph-app">
            <h1>"Stock Graph Viewer"</h1>
            <SymbolInput state=state />
            <ChartTypeSelect state=state />
            <FetchButton state=state service=service />
            <ErrorBanner state=state />
            <PlotPanel state=state />
        </div>
    }
}

/// Ticker input with the suggestion list underneath
#[component]
fn SymbolInput(state: RwSignal<ChartViewState>) -> impl IntoView {
    view! {
        <div class="field">
            <label class="field-label">"Select Stock Symbol:"</label>
            <input
                type="text"
                class="field-input"
                placeholder="Search symbol (e.g., AAPL)"
                prop:value=move || state.with(|s| s.selection.symbol.clone())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    state.update(|s| *s = s.set_symbol(text));
                }
            />
            <SuggestionList state=state />
        </div>
    }
}

/// Shown only while something is typed.
#[component]
fn SuggestionList(state: RwSignal<ChartViewState>) -> impl IntoView {
    let suggestions = create_memo(move |_| state.with(ChartViewState::suggestions));
    let has_input = move || state.with(|s| !s.selection.symbol.is_empty());

    view! {
        <Show when=has_input>
            <ul class="suggestions">
                <For
                    each=move || suggestions.get()
                    key=|symbol| *symbol
                    children=move |symbol: &'static str| {
                        view! {
                            <li
                                class="suggestion"
                                on:click=move |_| state.update(|s| *s = s.select_suggestion(symbol))
                            >
                                {symbol}
                            </li>
                        }
                    }
                />
            </ul>
        </Show>
    }
}

#[component]
fn ChartTypeSelect(state: RwSignal<ChartViewState>) -> impl IntoView {
    let on_change = move |ev: ev::Event| {
        let value = event_target_value(&ev);
        match ChartType::from_str(&value) {
            Ok(chart_type) => state.update(|s| *s = s.set_chart_type(chart_type)),
            Err(_) => log_warn!(
                LogComponent::Presentation("ChartTypeSelect"),
                "unknown chart type option `{value}`"
            ),
        }
    };

    view! {
        <div class="field">
            <label class="field-label">"Select Graph Type:"</label>
            <select class="field-input" on:change=on_change>
                {ChartType::iter()
                    .map(|chart_type| {
                        view! {
                            <option
                                value=chart_type.as_wire_str().to_string()
                                selected=move || state.with(|s| s.selection.chart_type == chart_type)
                            >
                                {chart_type.to_string()}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}

#[component]
fn FetchButton(
    state: RwSignal<ChartViewState>,
    service: ChartViewService<HttpChartDataSource>,
) -> impl IntoView {
    let is_loading = move || state.with(|s| s.fetch.is_loading());

    view! {
        <button class="fetch-btn" on:click=move |_| dispatch_submit(state, &service)>
            {move || if is_loading() { "Loading..." } else { "Fetch Graph" }}
        </button>
    }
}

#[component]
fn ErrorBanner(state: RwSignal<ChartViewState>) -> impl IntoView {
    move || {
        state
            .with(|s| s.fetch.failure().map(str::to_string))
            .map(|message| view! { <p class="error">{message}</p> })
    }
}

/// Hands the current figure to the plotting widget whenever it changes.
#[component]
fn PlotPanel(state: RwSignal<ChartViewState>) -> impl IntoView {
    let figure = create_memo(move |_| state.with(|s| s.fetch.payload().map(PlotPayload::figure)));

    create_effect(move |_| {
        figure.with(|figure| {
            if let Err(e) = draw(figure.as_ref()) {
                log_error!(LogComponent::Presentation("PlotPanel"), "{e}");
            }
        })
    });

    view! {
        <div
            class="plot-panel"
            style:display=move || if figure.with(Option::is_some) { "block" } else { "none" }
        >
            <h2>"Graph:"</h2>
            <div id=PLOT_ELEMENT_ID class="plot"></div>
        </div>
    }
}

fn draw(figure: Option<&Figure>) -> Result<(), RenderError> {
    match figure {
        Some(figure) => render_figure(PLOT_ELEMENT_ID, figure, &PlotConfig::default()),
        // nothing was drawn yet if the widget never loaded
        None => match purge_figure(PLOT_ELEMENT_ID) {
            Err(RenderError::WidgetMissing(_)) => Ok(()),
            other => other,
        },
    }
}
