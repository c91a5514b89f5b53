mod analysis;
mod env_variable_utils;
mod landing;
mod logging;
mod models;
mod router;
mod utils;

use crate::analysis::api::HttpAnalysisClient;
use crate::env_variable_utils::{get_app_name, is_debug_mode};
use crate::router::{switch, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let debug_mode = is_debug_mode();
    logging::init(debug_mode);

    yew::Renderer::<App>::new().render();

    log::info!(
        "NAME: \"{}\", API: \"{}\" DEBUG: \"{}\"",
        get_app_name(),
        HttpAnalysisClient::from_env().endpoint(),
        debug_mode
    );
}
