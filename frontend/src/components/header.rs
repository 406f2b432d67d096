use super::super::{Model, Msg};
use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-leaf"></i>{" Soil & Vegetation Detection"}</h1>
            <p class="subtitle">{"Upload a field image and run a remote detection model"}</p>
        </header>
    }
}

pub fn render_theme_toggle(model: &Model, ctx: &Context<Model>) -> Html {
    let link = ctx.link();

    html! {
        <div class="top-right">
            <button
                id="theme-toggle"
                class="theme-toggle"
                onclick={link.callback(|_| Msg::ToggleTheme)}
                title={ if model.theme == "light" { "Switch to Dark Mode" } else { "Switch to Light Mode" } }
            >
                { if model.theme == "light" { "☀" } else { "🌙" } }
            </button>
        </div>
    }
}
