//! Root component: loads the runtime configuration, then renders the page
//! for the current path inside the shared layout.

use gloo_net::http::Request;
use yew::platform::spawn_local;
use yew::{html, Callback, Component, Context, Html, MouseEvent};

use common::config::{ClientConfig, CONFIG_PATH};
use common::routes::Route;

use crate::components::admin::AdminDashboard;
use crate::components::landing::Landing;
use crate::components::login::LoginPage;
use crate::components::onboarding::OnboardingPage;
use crate::components::registration::PartnerRegistration;
use crate::helpers::{current_path, go_back, navigate, toast_error};
use crate::logger;

pub enum Msg {
    ConfigLoaded(ClientConfig),
}

pub struct App {
    route: Route,
    config: Option<ClientConfig>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(load_config().await));
        });
        Self {
            route: Route::from_path(&current_path()),
            config: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(config) => {
                let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
                logger::init(level);
                log::info!("rendering {}", self.route);
                self.config = Some(config);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let Some(config) = &self.config else {
            return html! { <div class="loading">{ "Loading..." }</div> };
        };
        let page = page(&self.route, config);

        if !self.route.shows_layout() {
            return html! { <main>{ page }{ back_button(&self.route) }</main> };
        }

        html! {
            <div class="layout">
                { navbar() }
                <main>{ page }{ back_button(&self.route) }</main>
                <footer class="footer">{ "Newra Solar" }</footer>
            </div>
        }
    }
}

/// Fetches the configuration served next to the app. Anything unusable falls
/// back to the defaults.
async fn load_config() -> ClientConfig {
    let fetched = match Request::get(CONFIG_PATH).send().await {
        Ok(response) if response.ok() => response.json::<ClientConfig>().await.map_err(|e| e.to_string()),
        Ok(response) => Err(format!("{} {}", response.status(), response.status_text())),
        Err(err) => Err(err.to_string()),
    };

    match fetched {
        Ok(config) => match config.validate() {
            Ok(()) => config,
            Err(err) => {
                toast_error(&format!("Invalid configuration: {}", err));
                ClientConfig::default()
            }
        },
        Err(err) => {
            log::warn!("{} unavailable ({}); using defaults", CONFIG_PATH, err);
            ClientConfig::default()
        }
    }
}

fn page(route: &Route, config: &ClientConfig) -> Html {
    let config = config.clone();
    match route {
        Route::PartnerRegistration => html! { <PartnerRegistration {config} /> },
        Route::AdminDashboard => html! { <AdminDashboard {config} /> },
        Route::Login => html! { <LoginPage {config} /> },
        Route::AssociateDashboard => html! { <OnboardingPage {config} /> },
        other => html! { <Landing route={other.clone()} /> },
    }
}

fn navbar() -> Html {
    let links = [
        ("Home", Route::Home),
        ("Energy Partner", Route::PartnerRegistration),
        ("Login", Route::Login),
    ];
    html! {
        <nav class="navbar">
            <span class="brand">{ "Newra" }</span>
            { for links.into_iter().map(|(label, route)| {
                let href = route.path().to_string();
                let onclick = Callback::from(move |e: MouseEvent| {
                    e.prevent_default();
                    navigate(&route);
                });
                html! { <a key={label} {href} {onclick}>{ label }</a> }
            }) }
        </nav>
    }
}

fn back_button(route: &Route) -> Html {
    if !route.shows_back_button() {
        return html! {};
    }
    html! {
        <button class="btn back-button" onclick={Callback::from(|_: MouseEvent| go_back())}>
            { "Back" }
        </button>
    }
}
