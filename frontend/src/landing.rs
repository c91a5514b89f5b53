use crate::env_variable_utils::get_app_name;
use crate::utils::current_year;
use yew::prelude::*;

struct Step {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static STEPS: [Step; 4] = [
    Step {
        icon: "▶️",
        title: "Paste YouTube URL",
        description: "Simply copy & paste any YouTube video URL to get started",
    },
    Step {
        icon: "📄",
        title: "Select Analysis Options",
        description: "Choose to analyze the video transcript, comments, or both",
    },
    Step {
        icon: "✨",
        title: "Pick AI Model",
        description: "Select Gemini for speed or NVIDIA for in-depth analysis",
    },
    Step {
        icon: "💬",
        title: "Get Deep Insights",
        description: "Receive structured insights, summaries and key takeaways",
    },
];

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="py-6 relative z-10">
            <div class="flex items-center justify-between">
                <span class="text-xl font-bold bg-clip-text text-transparent bg-gradient-to-r from-blue-400 via-purple-400 to-emerald-400">
                    { get_app_name() }
                </span>
                <nav>
                    <ul class="flex items-center gap-6">
                        <li><a href="#how-it-works" class="text-gray-300 hover:text-white">{"How it Works"}</a></li>
                        <li>
                            <a href="#input-section" class="px-4 py-2 bg-blue-600 hover:bg-blue-500 rounded-full text-white font-medium">
                                {"Get Started"}
                            </a>
                        </li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    html! {
        <section class="py-16 md:py-24 text-center">
            <h1 class="text-4xl md:text-6xl font-bold leading-tight mb-6 max-w-3xl mx-auto">
                <span class="bg-clip-text text-transparent bg-gradient-to-r from-blue-400 via-purple-400 to-emerald-400">
                    {"AI-Powered Insights"}
                </span>
                {" from any YouTube Video"}
            </h1>
            <p class="text-lg md:text-xl text-gray-300 max-w-2xl mx-auto mb-8">
                {"Extract deep, meaningful insights from videos in seconds. Analyze transcripts, comments, and more with state-of-the-art AI models."}
            </p>
            <a href="#input-section" class="inline-flex items-center gap-2 border-b-2 border-blue-400 text-blue-400 hover:text-blue-300">
                {"Try it now ↓"}
            </a>
        </section>
    }
}

#[function_component(HowItWorks)]
pub fn how_it_works() -> Html {
    html! {
        <section id="how-it-works" class="py-16">
            <h2 class="text-2xl md:text-3xl font-bold mb-8 text-center">{"How It Works"}</h2>
            <div class="grid md:grid-cols-4 gap-6">
                { for STEPS.iter().map(|step| html! {
                    <div class="backdrop-blur-sm bg-white/5 rounded-xl p-6 border border-white/10 h-full">
                        <div class="flex flex-col items-center text-center">
                            <div class="w-12 h-12 rounded-full flex items-center justify-center bg-gray-800/80 mb-4">
                                { step.icon }
                            </div>
                            <h3 class="text-lg font-medium mb-2">{ step.title }</h3>
                            <p class="text-gray-400 text-sm">{ step.description }</p>
                        </div>
                    </div>
                })}
            </div>
        </section>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let app_name = get_app_name();

    html! {
        <footer class="py-12 border-t border-gray-800/50">
            <div class="flex flex-col md:flex-row justify-between items-center">
                <span class="text-lg font-bold">{ &app_name }</span>
                <div class="text-gray-400 text-sm">
                    { format!("© {} {} • All rights reserved", current_year(), app_name) }
                </div>
            </div>
        </footer>
    }
}
