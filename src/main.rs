use yew::prelude::*;
use yew_router::prelude::*;
use log::{error, info, Level};

mod config;
mod catalog {
    pub mod models;
    pub mod fixtures;
    pub mod filter;
}
mod checkout {
    pub mod deposit;
    pub mod gateway;
    pub mod session;
}
mod components {
    pub mod theme;
    pub mod site_header;
    pub mod deposit_chart;
}
mod storefront {
    pub mod country_browser;
    pub mod purchase_panel;
    pub mod transaction_dialogs;
}
mod pages {
    pub mod landing;
    pub mod buy_data;
}

use checkout::gateway::GatewayHandle;
use pages::{buy_data::BuyData, landing::Landing};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/buy-data")]
    BuyData,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Landing => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        },
        Route::BuyData => {
            info!("Rendering Buy Data page");
            html! { <BuyData /> }
        },
        Route::NotFound => {
            info!("Rendering Not Found page");
            html! {
                <div style="min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1rem; font-family: sans-serif;">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Landing}>{"Back to GeSIM"}</Link<Route>>
                </div>
            }
        },
    }
}

#[function_component]
fn App() -> Html {
    let gateway = use_memo(|_| GatewayHandle(config::payment_gateway()), ());

    info!("Using {} payment gateway", gateway.0.name());

    html! {
        <ContextProvider<GatewayHandle> context={(*gateway).clone()}>
            <BrowserRouter>
                <Switch<Route> render={switch} />
            </BrowserRouter>
        </ContextProvider<GatewayHandle>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(e) = console_log::init_with_level(Level::Info) {
        error!("error initializing log: {}", e);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
