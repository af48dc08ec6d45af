//! Sign-In Page Component
//!
//! Two cards (email, password) driven by a [`SignInFlow`]. The component
//! renders static markup with the ids the flow addresses; every state change
//! after that goes through the flow.

use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mailmock_core::sign_in::{ids, Field, SignInFlow, SignInLink};
use mailmock_core::{ActionResult, SignInConfig};

use crate::events::{key_input, selected_label};
use crate::host::browser_host;
use crate::store::use_toast_store;

const LANGUAGES: [(&str, &str); 4] = [
    ("en", "English (United States)"),
    ("es", "Español"),
    ("fr", "Français"),
    ("de", "Deutsch"),
];

fn report(result: ActionResult) {
    if let Err(e) = result {
        log::debug!("[SIGNIN] {}", e);
    }
}

fn language_options() -> impl IntoView {
    LANGUAGES
        .iter()
        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
        .collect_view()
}

#[component]
pub fn SignInPage(config: SignInConfig) -> impl IntoView {
    let flow = StoredValue::new_local(SignInFlow::new(browser_host(use_toast_store()), config));

    // Render initial state, then catch browser autofill which lands late
    Effect::new(move |_| {
        let f = flow.get_value();
        f.mount();
        spawn_local(async move {
            TimeoutFuture::new(100).await;
            f.sync_filled_fields();
            TimeoutFuture::new(400).await;
            f.sync_filled_fields();
        });
    });

    let keys = window_event_listener(ev::keydown, move |ev| {
        let Some(f) = flow.try_get_value() else {
            return;
        };
        let Some(shortcut) = f.shortcut_for(&key_input(&ev)) else {
            return;
        };
        if shortcut.prevents_default() {
            ev.prevent_default();
        }
        spawn_local(async move { report(f.run_shortcut(shortcut).await) });
    });

    on_cleanup(move || {
        keys.remove();
        flow.try_with_value(|f| f.teardown());
    });

    let submit_identifier = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let f = flow.get_value();
        spawn_local(async move { report(f.submit_identifier().await) });
    };
    let submit_password = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let f = flow.get_value();
        spawn_local(async move { report(f.submit_password().await) });
    };
    let go_back = move |_| {
        let f = flow.get_value();
        spawn_local(async move { report(f.go_back().await) });
    };
    let link = move |link: SignInLink| {
        move |ev: ev::MouseEvent| {
            ev.prevent_default();
            flow.with_value(|f| f.follow_link(link));
        }
    };
    let language = move |source: &'static str| {
        move |ev: ev::Event| {
            let value = event_target_value(&ev);
            let label = selected_label(&ev);
            flow.with_value(|f| f.change_language(source, &value, &label));
        }
    };

    view! {
        <div class="signin-container">
            <div class="signin-card">
                <header class="signin-header">
                    <div class="logo">"Mailmock"</div>
                    <select id=ids::LANGUAGE_SELECT class="language-select" on:change=language(ids::LANGUAGE_SELECT)>
                        {language_options()}
                    </select>
                </header>

                // Step 1: email or phone
                <section id=ids::EMAIL_STEP class="step">
                    <h1>"Sign in"</h1>
                    <p class="subtitle">"to continue to Mailmock"</p>
                    <form novalidate=true on:submit=submit_identifier>
                        <div id=ids::EMAIL_WRAPPER class="input-wrapper">
                            <input
                                id=ids::EMAIL_INPUT
                                type="text"
                                autocomplete="username"
                                on:input=move |_| flow.with_value(|f| f.on_field_input(Field::Identifier))
                                on:focus=move |_| flow.with_value(|f| f.on_field_focus(Field::Identifier))
                                on:blur=move |_| flow.with_value(|f| f.on_field_blur(Field::Identifier))
                            />
                            <label for=ids::EMAIL_INPUT>"Email or phone"</label>
                        </div>
                        <div id=ids::EMAIL_ERROR class="error-message" role="alert"></div>
                        <a href="#" class="link" on:click=link(SignInLink::ForgotEmail)>"Forgot email?"</a>
                        <p class="guest-info">
                            "Not your computer? Use Guest mode to sign in privately. "
                            <a href="#" class="link" on:click=link(SignInLink::LearnMore)>"Learn more"</a>
                        </p>
                        <div class="actions">
                            <a href="#" class="link" on:click=link(SignInLink::CreateAccount)>"Create account"</a>
                            <button id=ids::NEXT_BUTTON type="submit" class="primary">"Next"</button>
                        </div>
                    </form>
                </section>

                // Step 2: password
                <section id=ids::PASSWORD_STEP class="step" style="display: none">
                    <h1>"Welcome"</h1>
                    <button id=ids::SWITCH_ACCOUNT type="button" class="account-chip" on:click=go_back>
                        <span id=ids::USER_INITIAL class="avatar"></span>
                        <span id=ids::USER_EMAIL></span>
                    </button>
                    <form novalidate=true on:submit=submit_password>
                        <div id=ids::PASSWORD_WRAPPER class="input-wrapper">
                            <input
                                id=ids::PASSWORD_INPUT
                                type="password"
                                autocomplete="current-password"
                                on:input=move |_| flow.with_value(|f| f.on_field_input(Field::Password))
                                on:focus=move |_| flow.with_value(|f| f.on_field_focus(Field::Password))
                                on:blur=move |_| flow.with_value(|f| f.on_field_blur(Field::Password))
                            />
                            <label for=ids::PASSWORD_INPUT>"Enter your password"</label>
                            <button
                                id=ids::SHOW_PASSWORD
                                type="button"
                                class="show-password"
                                on:click=move |_| {
                                    flow.with_value(|f| {
                                        f.toggle_secret_visibility();
                                    })
                                }
                            >
                                <span class="material-icons">"visibility"</span>
                            </button>
                        </div>
                        <div id=ids::PASSWORD_ERROR class="error-message" role="alert"></div>
                        <a href="#" class="link" on:click=link(SignInLink::ForgotPassword)>"Forgot password?"</a>
                        <div class="actions">
                            <button id=ids::BACK_BUTTON type="button" on:click=go_back>"Back"</button>
                            <button id=ids::SIGN_IN_BUTTON type="submit" class="primary">"Sign in"</button>
                        </div>
                    </form>
                </section>

                <div id=ids::LOADING_OVERLAY class="loading-overlay">
                    <div class="spinner"></div>
                </div>
            </div>

            <footer class="signin-footer">
                <select id=ids::LANGUAGE_FOOTER class="language-select" on:change=language(ids::LANGUAGE_FOOTER)>
                    {language_options()}
                </select>
                <a href="#">"Help"</a>
                <a href="#">"Privacy"</a>
                <a href="#">"Terms"</a>
            </footer>

            <div id=ids::ANNOUNCER class="sr-only"></div>
        </div>
    }
}
