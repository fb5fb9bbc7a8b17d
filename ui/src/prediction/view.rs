use api::HttpPredictionClient;
use dioxus::prelude::*;
use tracing::warn;

use crate::core::geo::Coordinate;
use crate::core::platform;
use crate::t;

use super::flow::{build_request, request_prediction, PredictionError, PredictionState};
use super::form::{SoilField, SoilForm, SoilType};
use super::map::LocationPicker;
use super::results::PredictionResults;

fn field_label(field: SoilField) -> String {
    match field {
        SoilField::Nitrogen => t!("predict-nitrogen"),
        SoilField::Phosphorus => t!("predict-phosphorus"),
        SoilField::Potassium => t!("predict-potassium"),
        SoilField::Ph => t!("predict-ph"),
        SoilField::WaterSources => t!("predict-water-sources"),
    }
}

/// Text of the blocking alert for a refused or failed submit.
pub fn alert_text(err: &PredictionError) -> String {
    match err {
        PredictionError::MissingLocation => t!("alert-select-location"),
        PredictionError::Api(_) => t!("alert-prediction-error", message = err.to_string()),
    }
}

/// Soil form, farm location and ranked crop results.
#[component]
pub fn CropPredictor() -> Element {
    crate::i18n::use_language();
    let location = use_signal(|| Option::<Coordinate>::None);
    let mut form = use_signal(SoilForm::default);
    let mut state = use_signal(PredictionState::default);
    let client = use_hook(HttpPredictionClient::default);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let request = match build_request(&form.read(), location()) {
            Ok(request) => request,
            Err(err) => {
                warn!("prediction blocked: {err}");
                platform::alert(&alert_text(&err));
                return;
            }
        };
        if !state.write().begin() {
            return;
        }
        let client = client.clone();
        spawn(async move {
            let outcome = request_prediction(&client, &request).await;
            let finished = state.write().finish(outcome);
            if let Err(err) = finished {
                platform::alert(&alert_text(&err));
            }
        });
    };

    let loading = state.read().loading;
    let results = state.read().results.clone();
    let current_soil = form.read().soil_type;
    let water_field = SoilField::WaterSources;

    rsx! {
        div { class: "predictor",
            form { class: "predictor__form", onsubmit: on_submit,
                h3 { class: "predictor__heading", {t!("predict-soil-heading")} }

                div { class: "predictor__grid",
                    for field in SoilField::NUMERIC {
                        div { key: "{field:?}", class: "form-field",
                            label { r#for: field.id(), {field_label(field)} }
                            input {
                                id: field.id(),
                                name: field.id(),
                                r#type: "number",
                                step: "any",
                                required: true,
                                placeholder: field.placeholder(),
                                value: form.read().field(field).to_string(),
                                oninput: move |evt| *form.write().field_mut(field) = evt.value(),
                            }
                        }
                    }
                }

                div { class: "form-field",
                    label { r#for: "soil_type", {t!("predict-soil-type")} }
                    select {
                        id: "soil_type",
                        name: "soil_type",
                        onchange: move |evt| {
                            if let Ok(soil) = evt.value().parse::<SoilType>() {
                                form.write().soil_type = soil;
                            }
                        },
                        for soil in SoilType::ALL {
                            option {
                                key: "{soil}",
                                value: soil.as_str(),
                                selected: soil == current_soil,
                                "{soil}"
                            }
                        }
                    }
                }

                div { class: "form-field",
                    label { r#for: water_field.id(), {field_label(water_field)} }
                    input {
                        id: water_field.id(),
                        name: water_field.id(),
                        r#type: "text",
                        required: true,
                        placeholder: water_field.placeholder(),
                        value: form.read().water_sources.clone(),
                        oninput: move |evt| form.write().water_sources = evt.value(),
                    }
                }

                h3 { class: "predictor__heading", {t!("predict-location-heading")} }
                LocationPicker { location }

                button {
                    r#type: "submit",
                    class: "button button--primary predictor__submit",
                    disabled: loading,
                    if loading { {t!("predict-submitting")} } else { {t!("predict-submit")} }
                }
            }

            if !results.is_empty() {
                PredictionResults { crops: results }
            }
        }
    }
}
