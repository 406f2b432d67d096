use super::super::{Detection, Model, Msg, SelectedImage};
use crate::api::ApiError;
use crate::components::utils::{alert, first_image_file};
use gloo_file::File as GlooFile;
use shared::{ModelKind, insight_for};
use web_sys::{ClipboardEvent, DragEvent, FileList};
use yew::prelude::*;

pub const NO_IMAGE_MSG: &str = "Please select an image before running detection.";
pub const NOT_AN_IMAGE_MSG: &str = "Only image files are supported.";
pub const TRANSPORT_MSG: &str =
    "Detection failed. Please check that the detection service is running.";

/// Replaces the selection and invalidates everything derived from the
/// previous one. The old preview URL is revoked when it is dropped here.
pub fn handle_image_selected(model: &mut Model, file: GlooFile) -> bool {
    model.selected = Some(SelectedImage::new(file));
    model.result = None;
    model.insight = None;
    model.error = None;
    true
}

pub fn handle_model_changed(model: &mut Model, choice: ModelKind) -> bool {
    // An already displayed result stays visible across a model change.
    model.model = choice;
    true
}

/// Validates a submission and flips the loading flag. Returns the file to
/// send, or `None` when nothing may be dispatched.
pub fn handle_submit(model: &mut Model) -> Option<GlooFile> {
    if model.loading {
        // The submit button is disabled while a request is in flight; this
        // also guards programmatic re-entry.
        return None;
    }

    match &model.selected {
        Some(selected) => {
            model.loading = true;
            model.error = None;
            Some(selected.file.clone())
        }
        None => {
            model.error = Some(NO_IMAGE_MSG.to_string());
            alert(NO_IMAGE_MSG);
            None
        }
    }
}

/// Terminal transition for a submission.
pub fn handle_finished(model: &mut Model, outcome: Result<Detection, ApiError>) -> bool {
    match outcome {
        Ok(detection) => {
            model.insight = detection
                .summary
                .as_ref()
                .and_then(|summary| insight_for(model.model, &summary.detected_classes));
            model.result = Some(detection);
            model.error = None;
        }
        Err(err) => {
            log::error!("detection request failed: {err}");
            let message = match &err {
                ApiError::EmptyResult => err.to_string(),
                _ => TRANSPORT_MSG.to_string(),
            };
            alert(&message);
            model.error = Some(message);
        }
    }

    // Cleared last on every path so the busy indicator can never stick.
    model.loading = false;
    true
}

pub fn handle_drop(model: &mut Model, ctx: &Context<Model>, event: DragEvent) -> bool {
    event.prevent_default();
    model.is_dragging = false;

    if let Some(data_transfer) = event.data_transfer() {
        if let Some(file_list) = data_transfer.files() {
            offer_file_list(ctx, file_list);
        }
    }

    true
}

pub fn handle_paste(_model: &mut Model, ctx: &Context<Model>, event: ClipboardEvent) -> bool {
    if let Some(data_transfer) = event.clipboard_data() {
        if let Some(file_list) = data_transfer.files() {
            event.prevent_default();
            offer_file_list(ctx, file_list);
            return true;
        }
    }
    false
}

/// Convergence point for the drop and paste entry points. Both bypass the
/// picker's `accept` filter, so the image type check happens here. Only the
/// first image is taken; batch uploads are out of scope.
pub fn offer_file_list(ctx: &Context<Model>, file_list: FileList) {
    if file_list.length() > 1 {
        log::warn!("multiple files provided; using the first image only");
    }

    match first_image_file(&file_list) {
        Some(file) => ctx.link().send_message(Msg::ImageSelected(file)),
        None if file_list.length() > 0 => {
            log::warn!("no image file among the provided files");
            alert(NOT_AN_IMAGE_MSG);
        }
        None => {}
    }
}

pub fn handle_toggle_theme(model: &mut Model) -> bool {
    let body = web_sys::window().unwrap().document().unwrap().body().unwrap();

    if model.theme == "light" {
        model.theme = "dark".to_string();
        body.class_list().add_1("dark-mode").unwrap();
    } else {
        model.theme = "light".to_string();
        body.class_list().remove_1("dark-mode").unwrap();
    }

    true
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use shared::{DetectionSummary, SOIL_INSIGHTS};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn image(name: &str) -> GlooFile {
        GlooFile::new_with_options(name, &b"not really a png"[..], Some("image/png"), None)
    }

    fn detection(classes: &[&str]) -> Detection {
        Detection {
            annotated_url: "http://127.0.0.1:8000/out/1.png".to_string(),
            summary: Some(DetectionSummary {
                detected_classes: classes.iter().map(|c| c.to_string()).collect(),
                ..Default::default()
            }),
        }
    }

    #[wasm_bindgen_test]
    fn selecting_an_image_clears_stale_results() {
        let mut model = Model::new();
        model.result = Some(detection(&["Black Soil"]));
        model.insight = Some(SOIL_INSIGHTS[2].1);
        model.error = Some("old".to_string());

        handle_image_selected(&mut model, image("field.png"));

        assert!(model.selected.is_some());
        assert!(model.result.is_none());
        assert!(model.insight.is_none());
        assert!(model.error.is_none());
    }

    #[wasm_bindgen_test]
    fn preview_derives_from_the_selected_file() {
        let mut model = Model::new();
        handle_image_selected(&mut model, image("field.png"));

        let selected = model.selected.as_ref().unwrap();
        assert_eq!(selected.file.name(), "field.png");
        assert!(selected.preview.to_string().starts_with("blob:"));
    }

    #[wasm_bindgen_test]
    fn submit_without_an_image_is_rejected() {
        let mut model = Model::new();

        assert!(handle_submit(&mut model).is_none());
        assert!(!model.loading);
        assert_eq!(model.error.as_deref(), Some(NO_IMAGE_MSG));
    }

    #[wasm_bindgen_test]
    fn submit_is_a_no_op_while_loading() {
        let mut model = Model::new();
        handle_image_selected(&mut model, image("field.png"));
        model.loading = true;

        assert!(handle_submit(&mut model).is_none());
        assert!(model.error.is_none());
    }

    #[wasm_bindgen_test]
    fn submit_with_an_image_starts_loading() {
        let mut model = Model::new();
        handle_image_selected(&mut model, image("field.png"));

        let file = handle_submit(&mut model);

        assert_eq!(file.map(|f| f.name()).as_deref(), Some("field.png"));
        assert!(model.loading);
    }

    #[wasm_bindgen_test]
    fn success_stores_result_and_soil_insight() {
        let mut model = Model::new();
        handle_image_selected(&mut model, image("field.png"));
        handle_submit(&mut model);

        handle_finished(&mut model, Ok(detection(&["Black Soil"])));

        assert!(!model.loading);
        assert!(model.result.is_some());
        assert_eq!(model.insight, Some(SOIL_INSIGHTS[2].1));
    }

    #[wasm_bindgen_test]
    fn vegetation_results_carry_no_insight() {
        let mut model = Model::new();
        handle_model_changed(&mut model, ModelKind::Vegetation);
        handle_image_selected(&mut model, image("field.png"));
        handle_submit(&mut model);

        handle_finished(&mut model, Ok(detection(&["Black Soil"])));

        assert!(model.result.is_some());
        assert!(model.insight.is_none());
    }

    #[wasm_bindgen_test]
    fn failure_clears_loading_and_keeps_no_result() {
        let mut model = Model::new();
        handle_image_selected(&mut model, image("field.png"));
        handle_submit(&mut model);

        handle_finished(&mut model, Err(ApiError::Status(500)));

        assert!(!model.loading);
        assert!(model.result.is_none());
        assert_eq!(model.error.as_deref(), Some(TRANSPORT_MSG));
    }

    #[wasm_bindgen_test]
    fn empty_result_reports_its_own_message() {
        let mut model = Model::new();
        handle_image_selected(&mut model, image("field.png"));
        handle_submit(&mut model);

        handle_finished(&mut model, Err(ApiError::EmptyResult));

        assert!(!model.loading);
        assert_eq!(
            model.error.as_deref(),
            Some("no detection result was returned for this image")
        );
    }

    #[wasm_bindgen_test]
    fn changing_model_keeps_an_existing_result() {
        let mut model = Model::new();
        handle_image_selected(&mut model, image("field.png"));
        handle_submit(&mut model);
        handle_finished(&mut model, Ok(detection(&["Black Soil"])));

        handle_model_changed(&mut model, ModelKind::Vegetation);

        assert_eq!(model.model, ModelKind::Vegetation);
        assert!(model.result.is_some());
        assert_eq!(model.insight, Some(SOIL_INSIGHTS[2].1));
    }
}
