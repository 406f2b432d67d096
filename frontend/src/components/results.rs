use super::super::Model;
use shared::DetectionSummary;
use yew::prelude::*;

pub fn render_summary(model: &Model) -> Html {
    let Some(result) = &model.result else {
        return html! {};
    };
    let Some(summary) = &result.summary else {
        return html! {
            <p class="no-results-message">{"No summary available for this detection."}</p>
        };
    };

    html! {
        <div class="results-container">
            <div class="result-header">
                <h2><i class="fa-solid fa-chart-simple"></i>{" Detection Summary"}</h2>
            </div>
            { render_class_counts(summary) }
            { render_confidence_bars(summary) }
        </div>
    }
}

fn render_class_counts(summary: &DetectionSummary) -> Html {
    if summary.class_counts.is_empty() {
        return html! {};
    }

    html! {
        <div class="class-counts">
            <h3>{"Detected Classes"}</h3>
            <ul>
                { for summary.class_counts.iter().map(|(class, count)| html! {
                    <li key={class.clone()}>
                        <span class="count-label">{ class }</span>
                        <span class="count-value">{ *count }</span>
                    </li>
                })}
            </ul>
        </div>
    }
}

fn render_confidence_bars(summary: &DetectionSummary) -> Html {
    if summary.detailed.is_empty() {
        return html! {};
    }

    html! {
        <div class="detailed-results">
            <h3>{"Per-Detection Confidence"}</h3>
            <div class="result-bars">
                { for summary.detailed.iter().enumerate().map(|(i, record)| html! {
                    <div class="result-item" key={i.to_string()}>
                        <div class="result-label">{ &record.class }</div>
                        <div class="result-bar-container">
                            <div class="result-bar" style={format!("width: {}%", record.confidence)}></div>
                        </div>
                        <div class="result-value">{ format!("{:.1}%", record.confidence) }</div>
                    </div>
                })}
            </div>
        </div>
    }
}
