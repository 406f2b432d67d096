use gloo_events::EventListener;
use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{DetectionSummary, ModelKind};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, DragEvent};
use yew::prelude::*;

mod api;
mod components;

use api::ApiError;
use components::handlers;

// Models
/// The user's current image plus its renderable preview. Dropping a value
/// revokes the preview's object URL.
struct SelectedImage {
    file: GlooFile,
    preview: ObjectUrl,
}

impl SelectedImage {
    fn new(file: GlooFile) -> Self {
        let preview = ObjectUrl::from(file.clone());
        Self { file, preview }
    }
}

/// Annotated output of the last completed submission.
#[derive(Debug, Clone, PartialEq)]
struct Detection {
    annotated_url: String,
    summary: Option<DetectionSummary>,
}

// Yew msg components
enum Msg {
    // Image selection
    ImageSelected(GlooFile),
    HandleDrop(DragEvent),
    HandlePaste(ClipboardEvent),
    SetDragging(bool),

    // Detection flow
    ModelChanged(ModelKind),
    Submit,
    Finished(Result<Detection, ApiError>),

    // UI states
    ToggleTheme,
}

// Main component
struct Model {
    selected: Option<SelectedImage>,
    model: ModelKind,
    loading: bool,
    result: Option<Detection>,
    insight: Option<&'static str>,
    error: Option<String>,
    is_dragging: bool,
    theme: String,
    paste_listener: Option<EventListener>,
}

impl Model {
    fn new() -> Self {
        Self {
            selected: None,
            model: ModelKind::default(),
            loading: false,
            result: None,
            insight: None,
            error: None,
            is_dragging: false,
            theme: "light".to_string(),
            paste_listener: None,
        }
    }
}

// Yew component implementation
impl Component for Model {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut model = Self::new();

        let link = ctx.link().clone();
        let window = web_sys::window().expect("no global `window` exists");
        let listener = EventListener::new(&window, "paste", move |event| {
            if let Some(clipboard_event) = event.dyn_ref::<ClipboardEvent>() {
                link.send_message(Msg::HandlePaste(clipboard_event.clone()));
            }
        });
        model.paste_listener = Some(listener);

        model
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            // Image selection
            Msg::ImageSelected(file) => handlers::handle_image_selected(self, file),
            Msg::HandleDrop(event) => handlers::handle_drop(self, ctx, event),
            Msg::HandlePaste(event) => handlers::handle_paste(self, ctx, event),
            Msg::SetDragging(is_dragging) => {
                self.is_dragging = is_dragging;
                true
            }

            // Detection flow
            Msg::ModelChanged(choice) => handlers::handle_model_changed(self, choice),
            Msg::Submit => {
                if let Some(file) = handlers::handle_submit(self) {
                    api::spawn_predict(ctx, self.model, file);
                }
                true
            }
            Msg::Finished(outcome) => handlers::handle_finished(self, outcome),

            // UI states
            Msg::ToggleTheme => handlers::handle_toggle_theme(self),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="container">
                { components::header::render_header() }
                { components::header::render_theme_toggle(self, ctx) }

                <main class="main-content">
                    { components::upload_section::render_upload_section(self, ctx) }
                    { components::preview_area::render_image_panels(self) }
                    { components::results::render_summary(self) }
                    { components::insight::render_insight(self) }
                </main>

                <footer class="app-footer">
                    <p>{"Soil & Vegetation Detection | Rust WASM Frontend"}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("App starting...");
    yew::Renderer::<Model>::new().render();
}
