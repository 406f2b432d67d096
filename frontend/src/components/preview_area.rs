use super::super::Model;
use yew::prelude::*;

/// Side-by-side original preview and annotated result.
pub fn render_image_panels(model: &Model) -> Html {
    if model.selected.is_none() && model.result.is_none() {
        return html! {};
    }

    html! {
        <div class="image-panels">
            { render_original_preview(model) }
            { render_annotated_result(model) }
        </div>
    }
}

fn render_original_preview(model: &Model) -> Html {
    match &model.selected {
        Some(selected) => html! {
            <div class="image-panel">
                <h3>{"Uploaded Image"}</h3>
                <img id="image-preview"
                    src={selected.preview.to_string()}
                    alt={selected.file.name()} />
            </div>
        },
        None => html! {},
    }
}

fn render_annotated_result(model: &Model) -> Html {
    match &model.result {
        Some(result) => html! {
            <div class="image-panel">
                <h3>{"Detection Result"}</h3>
                <img id="result-image"
                    src={result.annotated_url.clone()}
                    alt="Annotated detection result" />
            </div>
        },
        None => html! {},
    }
}
