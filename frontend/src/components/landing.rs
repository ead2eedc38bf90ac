//! Pages without behavior of their own: home, account type choice, the
//! signed-in landing pages and the not-found page.

use yew::{html, Callback, Component, Context, Html, MouseEvent, Properties};

use common::admin::display::text_or;
use common::routes::Route;

use crate::helpers::{navigate, session_get, ASSOCIATE_SESSION_KEY};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub route: Route,
}

pub struct Landing;

impl Component for Landing {
    type Message = ();
    type Properties = LandingProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Landing
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match &ctx.props().route {
            Route::Home => home(),
            Route::ChooseAccountType => choose_account_type(),
            Route::AdminLogin => admin_login(),
            Route::ConsumerProfile => signed_in("consumer", "Consumer Profile"),
            Route::PartnerDashboard => signed_in("partner", "Partner Dashboard"),
            Route::AssociateProfile => signed_in(ASSOCIATE_SESSION_KEY, "Associate Profile"),
            Route::NotFound(path) => not_found(path),
            other => {
                log::warn!("{} has its own page", other);
                not_found(other.path())
            }
        }
    }
}

fn go(route: Route) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| navigate(&route))
}

fn home() -> Html {
    html! {
        <section class="hero">
            <h1>{ "Clean energy, connected" }</h1>
            <p>{ "Register solar projects, onboard consumers and track capacity in one place." }</p>
            <button class="btn primary" onclick={go(Route::ChooseAccountType)}>{ "Get Started" }</button>
        </section>
    }
}

fn choose_account_type() -> Html {
    html! {
        <section class="account-types">
            <h2>{ "Choose your account type" }</h2>
            <CardRow />
        </section>
    }
}

/// Entry points of the account type page.
struct CardRow;

impl Component for CardRow {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CardRow
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let cards = [
            ("Energy Partner", "Register a solar project", Route::PartnerRegistration),
            ("Sign In", "Consumers, partners and associates", Route::Login),
            ("Administrator", "Manage registrations", Route::AdminLogin),
        ];
        html! {
            <div class="card-grid">
                { for cards.into_iter().map(|(title, description, route)| html! {
                    <div class="card" key={title}>
                        <h3>{ title }</h3>
                        <p class="muted">{ description }</p>
                        <button class="btn" onclick={go(route)}>{ "Continue" }</button>
                    </div>
                }) }
            </div>
        }
    }
}

fn admin_login() -> Html {
    html! {
        <section class="card login-card">
            <h2>{ "Admin Login" }</h2>
            <p class="muted">{ "Administrators sign in through the operations portal." }</p>
            <button class="btn primary" onclick={go(Route::AdminDashboard)}>{ "Open Dashboard" }</button>
        </section>
    }
}

fn signed_in(session_key: &str, title: &str) -> Html {
    let user = session_get(session_key);
    let name = user
        .as_ref()
        .map(|u| {
            let data = u.get("data").filter(|d| d.is_object()).unwrap_or(u);
            text_or(data, "name", "there")
        })
        .unwrap_or_else(|| "there".to_string());

    html! {
        <section class="card">
            <h2>{ title.to_string() }</h2>
            <p>{ format!("Hello, {}!", name) }</p>
            <button class="btn link" onclick={go(Route::ChooseAccountType)}>{ "Back to home" }</button>
        </section>
    }
}

fn not_found(path: &str) -> Html {
    html! {
        <section class="empty">
            <h2>{ "Page not found" }</h2>
            <p class="muted">{ format!("Nothing lives at {}", path) }</p>
            <button class="btn" onclick={go(Route::Home)}>{ "Go home" }</button>
        </section>
    }
}
