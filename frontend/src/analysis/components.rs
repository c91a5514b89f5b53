use crate::analysis::analysis_options::{ModelPicker, OptionToggle};
use crate::analysis::controller::FieldUpdate;
use crate::models::{AnalysisRequest, AnalysisResult};
use crate::utils::{
    comment_preview, transcript_preview, COMMENT_PREVIEW_COUNT, TRANSCRIPT_PREVIEW_CHARS,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

pub const RESULTS_ELEMENT_ID: &str = "results";

#[derive(Properties, PartialEq)]
pub struct InputSectionProps {
    pub request: AnalysisRequest,
    pub loading: bool,
    pub on_update: Callback<FieldUpdate>,
    pub on_generate: Callback<()>,
}

#[function_component(InputSection)]
pub fn input_section(props: &InputSectionProps) -> Html {
    let on_input = {
        let on_update = props.on_update.clone();
        Callback::from(move |e: InputEvent| {
            let input_value = e.target_unchecked_into::<HtmlInputElement>().value();
            on_update.emit(FieldUpdate::VideoUrl(input_value));
        })
    };

    let on_comments_toggle = props.on_update.reform(FieldUpdate::IncludeComments);
    let on_transcript_toggle = props.on_update.reform(FieldUpdate::IncludeTranscript);
    let on_model_select = props.on_update.reform(FieldUpdate::Model);

    let on_submit = {
        let on_generate = props.on_generate.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default(); // no page reload
            on_generate.emit(());
        })
    };

    let disabled = !props.request.is_submittable() || props.loading;

    html! {
        <section id="input-section" class="py-12">
            <form onsubmit={on_submit} class="backdrop-blur-sm bg-white/5 rounded-2xl p-6 md:p-8 border border-white/10 shadow-xl">
                <div class="relative mb-6">
                    <input
                        type="text"
                        class="block w-full px-3 py-4 bg-gray-900/60 text-white rounded-xl border border-gray-700 focus:ring-2 focus:ring-blue-500"
                        placeholder="Paste YouTube video URL here (e.g., https://www.youtube.com/watch?v=dQw4w9WgXcQ)"
                        value={props.request.video_url.clone()}
                        oninput={on_input}
                    />
                </div>

                <div class="grid md:grid-cols-2 gap-6 mb-8">
                    <div class="space-y-4">
                        <h3 class="text-lg font-medium text-gray-300 mb-3">{"Analysis Options"}</h3>
                        <OptionToggle
                            label="Comments Analysis"
                            checked={props.request.include_comments}
                            on_toggle={on_comments_toggle}
                        />
                        <OptionToggle
                            label="Transcript Analysis"
                            checked={props.request.include_transcript}
                            on_toggle={on_transcript_toggle}
                        />
                    </div>

                    <div class="space-y-4">
                        <h3 class="text-lg font-medium text-gray-300 mb-3">{"Select AI Model"}</h3>
                        <ModelPicker selected={props.request.model} on_select={on_model_select} />
                    </div>
                </div>

                <button
                    type="submit"
                    class="w-full py-4 px-6 rounded-xl font-medium text-lg bg-gradient-to-r from-blue-600 to-purple-600 disabled:opacity-60"
                    {disabled}
                >
                    { generate_label(props.loading) }
                </button>
            </form>
        </section>
    }
}

pub fn generate_label(loading: bool) -> &'static str {
    if loading {
        "Generating Insights..."
    } else {
        "Generate Insights"
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="text-red-400 text-center my-4">{ msg }</div>
        }
    } else {
        html! {}
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultsSectionProps {
    pub result: AnalysisResult,
}

#[function_component(ResultsSection)]
pub fn results_section(props: &ResultsSectionProps) -> Html {
    let result = &props.result;
    let (shown_comments, remaining_comments) =
        comment_preview(&result.comments, COMMENT_PREVIEW_COUNT);

    html! {
        <section id={RESULTS_ELEMENT_ID} class="py-12">
            <div class="backdrop-blur-md bg-white/5 rounded-2xl p-6 md:p-8 border border-white/10 shadow-xl">
                <h2 class="text-2xl font-bold mb-8">{"Generated Insights"}</h2>

                <h3 class="text-xl font-semibold mb-2 text-blue-300">{"Video Title"}</h3>
                <div class="text-gray-200 mb-4">{ &result.video_title }</div>

                {
                    match result.transcript.as_deref().filter(|t| !t.is_empty()) {
                        Some(transcript) => html! {
                            <>
                                <h3 class="text-lg font-semibold mb-2 text-purple-300">
                                    { format!("Transcript (first {TRANSCRIPT_PREVIEW_CHARS} chars)") }
                                </h3>
                                <div class="text-gray-300 mb-4 whitespace-pre-line">
                                    { transcript_preview(transcript, TRANSCRIPT_PREVIEW_CHARS) }
                                </div>
                            </>
                        },
                        None => html! {},
                    }
                }

                {
                    if shown_comments.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <>
                                <h3 class="text-lg font-semibold mb-2 text-emerald-300">{"Sample Comments"}</h3>
                                <ul class="list-disc pl-6 text-gray-300 mb-4">
                                    { for shown_comments.iter().map(|comment| html! { <li>{ comment }</li> }) }
                                    {
                                        if remaining_comments > 0 {
                                            html! { <li>{ format!("...and {remaining_comments} more") }</li> }
                                        } else {
                                            html! {}
                                        }
                                    }
                                </ul>
                            </>
                        }
                    }
                }

                <h3 class="text-lg font-semibold mb-2 text-pink-300">{"AI Analysis"}</h3>
                <div class="text-gray-100 whitespace-pre-line border border-pink-400/20 rounded-lg p-4 bg-pink-900/10">
                    { &result.analysis }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_label_follows_loading_flag() {
        assert_eq!(generate_label(true), "Generating Insights...");
        assert_eq!(generate_label(false), "Generate Insights");
    }
}
