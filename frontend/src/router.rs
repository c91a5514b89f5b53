use crate::analysis::api::HttpAnalysisClient;
use crate::analysis::components::{ErrorMessage, InputSection, ResultsSection, RESULTS_ELEMENT_ID};
use crate::analysis::controller::{run_submission, FieldUpdate, SubmissionController};
use crate::landing::{Footer, Header, HeroSection, HowItWorks};
use crate::utils::scroll_into_view;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <LandingPage /> },
        Route::NotFound => html! {
            <div class="min-h-screen flex items-center justify-center bg-slate-900">
                <div class="bg-white p-8 rounded-lg shadow-lg text-center">
                    <h1 class="text-2xl font-bold text-gray-800 mb-4">{"404 - Page Not Found"}</h1>
                    <Link<Route> to={Route::Home} classes="text-blue-600 hover:underline">
                        {"Go back to the analyzer"}
                    </Link<Route>>
                </div>
            </div>
        },
    }
}

#[function_component(LandingPage)]
pub fn landing_page() -> Html {
    // The controller lives here; children only see snapshots and callbacks.
    let controller = use_mut_ref(SubmissionController::new);
    let redraw = use_force_update();
    let client = use_memo((), |_| HttpAnalysisClient::from_env());

    let on_update = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        Callback::from(move |update: FieldUpdate| {
            controller.borrow_mut().update_field(update);
            redraw.force_update();
        })
    };

    let on_generate = {
        let controller = controller.clone();
        let redraw = redraw.clone();
        let client = client.clone();
        Callback::from(move |_: ()| {
            let controller = controller.clone();
            let redraw = redraw.clone();
            let client = Rc::clone(&client);

            wasm_bindgen_futures::spawn_local(async move {
                let succeeded =
                    run_submission(&controller, &*client, || redraw.force_update()).await;
                if succeeded {
                    scroll_into_view(RESULTS_ELEMENT_ID);
                }
            });
        })
    };

    let (request, loading, error_message, result) = {
        let current = controller.borrow();
        (
            current.request().clone(),
            current.is_in_flight(),
            current.error_message().map(str::to_string),
            current.result().cloned(),
        )
    };

    html! {
        <div class="min-h-screen bg-gradient-to-br from-slate-900 to-indigo-950 text-white font-sans">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative">
                <Header />
                <main class="relative">
                    <HeroSection />

                    <InputSection
                        request={request}
                        loading={loading}
                        on_update={on_update}
                        on_generate={on_generate}
                    />

                    <HowItWorks />

                    <ErrorMessage error_message={error_message} />
                    {
                        if let Some(result) = result {
                            html! { <ResultsSection result={result} /> }
                        } else {
                            html! {}
                        }
                    }
                </main>
                <Footer />
            </div>
        </div>
    }
}
