use serde_json::Value;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::admin::display::{
    display_name, files_count, format_mobile, role_label, text_or, NOT_AVAILABLE,
};
use common::admin::EntityKind;

use crate::card_grid::CardGrid;

use super::dialogs::details::details_dialog;
use super::dialogs::document::document_dialog;
use super::helpers::{format_capacity, format_count};
use super::messages::Msg;
use super::state::{AdminDashboard, ViewMode};

pub fn view(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    html! {
        <div class="admin-dashboard">
            { header(component, ctx) }
            { stats_panel(component, ctx) }
            { tabs(component, ctx) }
            { toolbar(component, ctx) }
            { records(component, ctx) }
            { details_dialog(component, ctx) }
            { document_dialog(component, ctx) }
        </div>
    }
}

fn header(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let link = ctx.link();
    let refreshing = !component.loading.is_empty();
    html! {
        <header class="dashboard-header">
            <h2>{ "Admin Dashboard" }</h2>
            <div class="actions">
                <button
                    class="btn"
                    disabled={refreshing}
                    onclick={link.callback(|_| Msg::Reload)}
                >
                    { if refreshing { "Refreshing..." } else { "Refresh" } }
                </button>
                <button
                    class="btn danger"
                    disabled={component.logging_out}
                    onclick={link.callback(|_| Msg::Logout)}
                >
                    { if component.logging_out { "Logging out..." } else { "Logout" } }
                </button>
            </div>
        </header>
    }
}

fn stats_panel(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let toggle = ctx.link().callback(|_| Msg::ToggleStats);
    if !component.show_stats {
        return html! {
            <button class="btn link" onclick={toggle}>{ "Show statistics" }</button>
        };
    }

    let stats = component.stats();
    let tiles = [
        ("Total Users", format_count(stats.total_users)),
        ("Partners", format_count(stats.total_partners)),
        ("Associates", format_count(stats.total_associates)),
        ("Consumers", format_count(stats.total_consumers)),
        ("Solar Farms", format_count(stats.total_solar_farms)),
        ("Total Capacity", format_capacity(stats.total_capacity_mw)),
        ("Active Consumers", format_count(stats.active_consumers)),
    ];

    html! {
        <section class="stats">
            <button class="btn link" onclick={toggle}>{ "Hide statistics" }</button>
            <div class="stat-tiles">
                { for tiles.into_iter().map(|(label, value)| html! {
                    <div class="stat-tile" key={label}>
                        <div class="stat-value">{ value }</div>
                        <div class="stat-label">{ label }</div>
                    </div>
                }) }
            </div>
        </section>
    }
}

fn tabs(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    html! {
        <nav class="tabs">
            { for EntityKind::ALL.into_iter().map(|kind| {
                let class = if kind == component.tab { "tab active" } else { "tab" };
                let loading = component.loading.contains(&kind);
                let count = if loading {
                    "...".to_string()
                } else {
                    format_count(component.list(kind).len())
                };
                html! {
                    <button
                        key={kind.as_str()}
                        {class}
                        onclick={ctx.link().callback(move |_| Msg::SetTab(kind))}
                    >
                        { format!("{} ({})", kind.label(), count) }
                    </button>
                }
            }) }
        </nav>
    }
}

fn toolbar(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let link = ctx.link();
    let oninput = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetSearch(input.value())
    });
    let mode_button = |mode: ViewMode, label: &'static str| {
        let class = if component.view_mode == mode { "btn active" } else { "btn" };
        html! {
            <button {class} onclick={link.callback(move |_| Msg::SetViewMode(mode))}>{ label }</button>
        }
    };

    html! {
        <div class="toolbar">
            <input
                type="search"
                placeholder={format!("Search {}...", component.tab.as_str())}
                value={component.search.clone()}
                {oninput}
            />
            <div class="view-modes">
                { mode_button(ViewMode::Grid, "Grid") }
                { mode_button(ViewMode::List, "List") }
            </div>
        </div>
    }
}

fn records(component: &AdminDashboard, ctx: &Context<AdminDashboard>) -> Html {
    let kind = component.tab;
    let total = component.list(kind).len();

    if component.loading.contains(&kind) && total == 0 {
        return html! { <div class="empty">{ format!("Loading {}...", kind.as_str()) }</div> };
    }

    let visible = component.visible();
    let summary = html! {
        <div class="muted">{ format!("Showing {} of {} {}", visible.len(), total, kind.as_str()) }</div>
    };

    if visible.is_empty() {
        let message = if component.search.trim().is_empty() {
            format!("No {} found", kind.as_str())
        } else {
            format!("No {} match \"{}\"", kind.as_str(), component.search.trim())
        };
        return html! { <>{ summary }<div class="empty">{ message }</div></> };
    }

    let items = visible
        .into_iter()
        .enumerate()
        .map(|(index, record)| record_card(kind, index, record, ctx));

    let body = match component.view_mode {
        ViewMode::Grid => html! { <CardGrid>{ for items }</CardGrid> },
        ViewMode::List => html! { <div class="record-list">{ for items }</div> },
    };

    html! { <>{ summary }{ body }</> }
}

fn record_card(kind: EntityKind, index: usize, record: &Value, ctx: &Context<AdminDashboard>) -> Html {
    let selected = record.clone();
    let onclick = ctx
        .link()
        .callback(move |_| Msg::OpenDetails(kind, selected.clone()));

    let extra = match kind {
        EntityKind::Partners => html! {
            <div>{ format!("Project: {}", text_or(record, "projectName", NOT_AVAILABLE)) }</div>
        },
        EntityKind::Associates => html! {
            <div>{ format!("Company: {}", text_or(record, "companyName", NOT_AVAILABLE)) }</div>
        },
        EntityKind::Consumers => html! {
            <div>{ format!("Files: {}", files_count(record)) }</div>
        },
    };

    html! {
        <div class="record-card" key={index}>
            <div class="record-title">
                <strong>{ display_name(kind, record) }</strong>
                <span class="badge">{ role_label(kind, record) }</span>
            </div>
            <div>{ text_or(record, "email", NOT_AVAILABLE) }</div>
            <div>{ format_mobile(record) }</div>
            { extra }
            <button class="btn" {onclick}>{ "View Details" }</button>
        </div>
    }
}
