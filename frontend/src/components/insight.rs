use super::super::Model;
use yew::prelude::*;

/// Educational paragraph for the top detected soil class.
pub fn render_insight(model: &Model) -> Html {
    match model.insight {
        Some(text) => html! {
            <div class="insight-panel">
                <h3><i class="fa-solid fa-seedling"></i>{" Soil Insight"}</h3>
                <p>{ text }</p>
            </div>
        },
        None => html! {},
    }
}
