use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::admin::display::text_or;
use common::routes::Route;

use crate::helpers::navigate;

use super::messages::Msg;
use super::state::OnboardingPage;

pub fn view(component: &OnboardingPage, ctx: &Context<OnboardingPage>) -> Html {
    if component.associate.is_none() {
        return html! {
            <div class="empty">
                <p>{ "Please sign in as an associate to onboard consumers." }</p>
                <button class="btn primary" onclick={Callback::from(|_: MouseEvent| navigate(&Route::Login))}>
                    { "Go to login" }
                </button>
            </div>
        };
    }

    let link = ctx.link();
    html! {
        <div class="onboarding-page">
            <header class="dashboard-header">
                <h2>{ format!("Welcome, {}", component.associate_name()) }</h2>
                <button
                    class="btn danger"
                    disabled={component.logging_out}
                    onclick={link.callback(|_| Msg::Logout)}
                >
                    { if component.logging_out { "Logging out..." } else { "Logout" } }
                </button>
            </header>
            { capacity(component) }
            { roster(component, ctx) }
            { onboarded(component) }
        </div>
    }
}

fn capacity(component: &OnboardingPage) -> Html {
    let summary = component.capacity();
    let remaining_class = if summary.remaining_mw < 0.0 { "stat-value danger" } else { "stat-value" };
    html! {
        <section class="stat-tiles">
            <div class="stat-tile">
                <div class="stat-value">{ format!("{} MW", summary.contract_mw) }</div>
                <div class="stat-label">{ "Contract Capacity" }</div>
            </div>
            <div class="stat-tile">
                <div class="stat-value">{ format!("{} MW", summary.used_mw) }</div>
                <div class="stat-label">{ "Used Load" }</div>
            </div>
            <div class="stat-tile">
                <div class={remaining_class}>{ format!("{} MW", summary.remaining_mw) }</div>
                <div class="stat-label">{ "Remaining" }</div>
            </div>
        </section>
    }
}

fn roster(component: &OnboardingPage, ctx: &Context<OnboardingPage>) -> Html {
    let link = ctx.link();
    let removable = component.roster.len() > 1;

    let rows = component.roster.rows().iter().enumerate().map(|(index, row)| {
        let on_name = link.callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetName(index, input.value())
        });
        let on_load = link.callback(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            Msg::SetLoad(index, input.value())
        });
        html! {
            <div class="roster-row" key={index}>
                <span class="muted">{ format!("Consumer {}", index + 1) }</span>
                <input
                    type="text"
                    placeholder="Consumer name"
                    value={row.consumer_name.clone()}
                    oninput={on_name}
                />
                <input
                    type="number"
                    step="any"
                    placeholder="Load capacity (MW)"
                    value={row.consumer_load_capacity.clone()}
                    oninput={on_load}
                />
                <button
                    type="button"
                    class="btn link"
                    disabled={!removable}
                    onclick={link.callback(move |_| Msg::RemoveRow(index))}
                >
                    { "Remove" }
                </button>
            </div>
        }
    });

    html! {
        <section class="card roster">
            <h3>{ "Onboard Consumers" }</h3>
            { for rows }
            <div class="actions">
                <button type="button" class="btn" onclick={link.callback(|_| Msg::AddRow)}>
                    { "Add Consumer" }
                </button>
                <button
                    type="button"
                    class="btn primary"
                    disabled={component.submitting}
                    onclick={link.callback(|_| Msg::Submit)}
                >
                    { if component.submitting { "Submitting..." } else { "Submit" } }
                </button>
            </div>
        </section>
    }
}

fn onboarded(component: &OnboardingPage) -> Html {
    if component.loading_profile {
        return html! { <div class="muted">{ "Loading onboarded consumers..." }</div> };
    }
    let consumers = component.onboarded();
    if consumers.is_empty() {
        return html! { <div class="muted">{ "No consumers onboarded yet" }</div> };
    }

    html! {
        <section class="card">
            <h3>{ format!("Onboarded Consumers ({})", consumers.len()) }</h3>
            <table class="table">
                <thead>
                    <tr><th>{ "#" }</th><th>{ "Name" }</th><th>{ "Load (MW)" }</th></tr>
                </thead>
                <tbody>
                    { for consumers.iter().enumerate().map(|(index, consumer)| html! {
                        <tr key={index}>
                            <td>{ (index + 1).to_string() }</td>
                            <td>{ text_or(consumer, "consumerName", "-") }</td>
                            <td>{ text_or(consumer, "consumerLoadCapacity", "0") }</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </section>
    }
}
