use js_sys::Reflect;
use wasm_bindgen::JsValue;
use web_sys::MouseEvent;
use yew::{classes, function_component, html, Callback, Html, Properties};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiModel {
    Gemini,
    #[default]
    Nvidia,
}

impl AiModel {
    /// Name the backend looks up in its model table. Must stay verbatim.
    pub fn display_name(&self) -> &'static str {
        match self {
            AiModel::Gemini => "Google Gemini",
            AiModel::Nvidia => "LLama-Nvidia",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            AiModel::Gemini => "gemini",
            AiModel::Nvidia => "nvidia",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "gemini" => Some(AiModel::Gemini),
            "nvidia" => Some(AiModel::Nvidia),
            _ => None,
        }
    }

    pub fn all_variants() -> Vec<Self> {
        vec![AiModel::Gemini, AiModel::Nvidia]
    }

    fn button_label(&self) -> &'static str {
        match self {
            AiModel::Gemini => "Gemini",
            AiModel::Nvidia => "NVIDIA",
        }
    }

    fn tagline(&self) -> &'static str {
        match self {
            AiModel::Gemini => "⚡ Fast & Sharp",
            AiModel::Nvidia => "🧠 Deep & Detailed • Free",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisMode {
    Both,
    CommentsOnly,
    TranscriptOnly,
}

impl AnalysisMode {
    // (false, false) has no label of its own and falls through to
    // TranscriptOnly; the backend only knows these three values.
    pub fn from_options(include_comments: bool, include_transcript: bool) -> Self {
        match (include_comments, include_transcript) {
            (true, true) => AnalysisMode::Both,
            (true, false) => AnalysisMode::CommentsOnly,
            _ => AnalysisMode::TranscriptOnly,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AnalysisMode::Both => "Both",
            AnalysisMode::CommentsOnly => "Comments Only",
            AnalysisMode::TranscriptOnly => "Transcript Only",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToggleProps {
    pub label: &'static str,
    pub checked: bool,
    pub on_toggle: Callback<bool>,
}

#[function_component(OptionToggle)]
pub fn option_toggle(props: &ToggleProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        let checked = props.checked;
        Callback::from(move |_| on_toggle.emit(!checked))
    };

    html! {
        <label class="flex items-center space-x-3 cursor-pointer group" {onclick}>
            <div class={classes!(
                "w-12", "h-6", "flex", "items-center", "rounded-full", "p-1",
                if props.checked { "bg-purple-600" } else { "bg-gray-700" }
            )}>
                <div class={classes!(
                    "bg-white", "w-4", "h-4", "rounded-full", "shadow-md",
                    props.checked.then_some("translate-x-6")
                )}></div>
            </div>
            <span class="text-gray-300 group-hover:text-white">{ props.label }</span>
        </label>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModelPickerProps {
    pub selected: AiModel,
    pub on_select: Callback<AiModel>,
}

// Reads the "value" of the element the handler is attached to.
fn button_value(e: &MouseEvent) -> Option<String> {
    let target = e.current_target()?;
    let js_value = Reflect::get(target.as_ref(), &JsValue::from_str("value")).ok()?;
    js_value.as_string()
}

#[function_component(ModelPicker)]
pub fn model_picker(props: &ModelPickerProps) -> Html {
    let on_click = {
        let on_select = props.on_select.clone();
        Callback::from(move |e: MouseEvent| {
            match button_value(&e).as_deref().and_then(AiModel::from_key) {
                Some(model) => on_select.emit(model),
                None => log::warn!("Ignoring selection of an unknown model"),
            }
        })
    };

    html! {
        <div class="grid grid-cols-2 gap-3">
            {
                for AiModel::all_variants().into_iter().map(|model| {
                    let is_selected = model == props.selected;
                    html! {
                        <button
                            type="button"
                            key={model.key()}
                            value={model.key()}
                            onclick={on_click.clone()}
                            class={classes!(
                                "flex", "items-center", "gap-2", "px-4", "py-3", "rounded-xl", "border",
                                if is_selected { "border-blue-500/50 bg-blue-600/40" } else { "border-gray-700/50 bg-gray-800/40" }
                            )}
                        >
                            <div class="text-left">
                                <div class={if is_selected { "font-medium text-blue-400" } else { "font-medium text-gray-300" }}>
                                    { model.button_label() }
                                </div>
                                <div class="text-xs text-gray-400">{ model.tagline() }</div>
                            </div>
                        </button>
                    }
                })
            }
        </div>
    }
}
