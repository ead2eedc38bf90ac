use web_sys::HtmlInputElement;
use yew::prelude::*;

use common::auth::LoginRole;
use common::routes::Route;

use crate::helpers::navigate;

use super::messages::Msg;
use super::state::LoginPage;

pub fn view(component: &LoginPage, ctx: &Context<LoginPage>) -> Html {
    let link = ctx.link();

    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });
    let on_email = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetEmail(input.value())
    });
    let on_password = link.callback(|e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        Msg::SetPassword(input.value())
    });
    let password_type = if component.show_password { "text" } else { "password" };

    html! {
        <div class="login-page">
            <div class="card login-card">
                <h2>{ component.role.title() }</h2>

                <nav class="tabs">
                    { for LoginRole::ALL.into_iter().map(|role| {
                        let class = if role == component.role { "tab active" } else { "tab" };
                        html! {
                            <button
                                key={role.as_str()}
                                type="button"
                                {class}
                                onclick={link.callback(move |_| Msg::SelectRole(role))}
                            >
                                { capitalize(role.as_str()) }
                            </button>
                        }
                    }) }
                </nav>

                <form {onsubmit}>
                    <label for="login-email">{ "Email" }</label>
                    <input
                        id="login-email"
                        type="email"
                        required={true}
                        value={component.credentials.email.clone()}
                        oninput={on_email}
                    />

                    <label for="login-password">{ "Password" }</label>
                    <div class="password-row">
                        <input
                            id="login-password"
                            type={password_type}
                            required={true}
                            value={component.credentials.password.clone()}
                            oninput={on_password}
                        />
                        <button type="button" class="btn link" onclick={link.callback(|_| Msg::TogglePassword)}>
                            { if component.show_password { "Hide" } else { "Show" } }
                        </button>
                    </div>

                    <button class="btn primary" type="submit" disabled={component.submitting}>
                        { if component.submitting { "Signing in..." } else { "Sign In" } }
                    </button>
                </form>

                <div class="quick-login">
                    <span class="muted">{ "Demo accounts:" }</span>
                    { for LoginRole::ALL.into_iter().map(|role| html! {
                        <button
                            key={role.as_str()}
                            type="button"
                            class="btn link"
                            onclick={link.callback(move |_| Msg::QuickLogin(role))}
                        >
                            { capitalize(role.as_str()) }
                        </button>
                    }) }
                </div>

                <button
                    type="button"
                    class="btn link"
                    onclick={Callback::from(|_: MouseEvent| navigate(&Route::ChooseAccountType))}
                >
                    { "Back to account selection" }
                </button>
            </div>
        </div>
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
