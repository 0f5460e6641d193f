use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api;
use crate::components::button::{Button, ButtonVariant};
use crate::components::modal::Modal;
use crate::model::{CreateUserRequest, Domain, LICENSE_TYPES, license_monthly_cost};
use crate::util::cerror;

#[derive(Properties, PartialEq, Clone)]
pub struct CreateUserModalProps {
    pub show: bool,
    pub on_close: Callback<()>,
    pub on_created: Callback<()>,
}

const INPUT: &str = "width:100%; box-sizing:border-box; padding:8px 10px; \
                     border:1px solid #d0d7de; border-radius:6px; font-size:14px;";
const LABEL: &str = "display:block; font-size:14px; color:#374151; margin-bottom:4px;";

#[function_component(CreateUserModal)]
pub fn create_user_modal(props: &CreateUserModalProps) -> Html {
    let full_name = use_state(String::new);
    let username = use_state(String::new);
    let selected_domain = use_state(String::new);
    let department = use_state(String::new);
    let manager_email = use_state(String::new);
    let license_type = use_state(|| LICENSE_TYPES[0].to_string());
    let domains = use_state(Vec::<Domain>::new);
    let loading = use_state(|| false);
    let error = use_state(String::new);

    // Fetch domains each time the modal opens, defaulting the select to
    // the first verified entry.
    {
        let domains = domains.clone();
        let selected_domain = selected_domain.clone();
        let error = error.clone();
        use_effect_with(props.show, move |show| {
            if *show {
                spawn_local(async move {
                    match api::get_domains().await {
                        Ok(fetched) => {
                            if let Some(first) = fetched.first() {
                                selected_domain.set(first.name.clone());
                            }
                            domains.set(fetched);
                        }
                        Err(err) => {
                            cerror(&format!("load domains: {err}"));
                            error.set("Failed to load domains".to_string());
                        }
                    }
                });
            }
            || ()
        });
    }

    let reset_and_close = {
        let full_name = full_name.clone();
        let username = username.clone();
        let department = department.clone();
        let manager_email = manager_email.clone();
        let license_type = license_type.clone();
        let error = error.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            full_name.set(String::new());
            username.set(String::new());
            department.set(String::new());
            manager_email.set(String::new());
            license_type.set(LICENSE_TYPES[0].to_string());
            error.set(String::new());
            on_close.emit(());
        })
    };

    let onsubmit = {
        let full_name = full_name.clone();
        let username = username.clone();
        let selected_domain = selected_domain.clone();
        let department = department.clone();
        let manager_email = manager_email.clone();
        let license_type = license_type.clone();
        let loading = loading.clone();
        let error = error.clone();
        let on_created = props.on_created.clone();
        let reset_and_close = reset_and_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = CreateUserRequest {
                full_name: (*full_name).clone(),
                username: (*username).clone(),
                domain: (*selected_domain).clone(),
                department: Some((*department).clone()).filter(|s| !s.is_empty()),
                manager_email: Some((*manager_email).clone()).filter(|s| !s.is_empty()),
                license_type: (*license_type).clone(),
            };
            let loading = loading.clone();
            let error = error.clone();
            let on_created = on_created.clone();
            let reset_and_close = reset_and_close.clone();
            loading.set(true);
            error.set(String::new());
            spawn_local(async move {
                match api::create_user(&request).await {
                    Ok(_) => {
                        on_created.emit(());
                        reset_and_close.emit(());
                    }
                    Err(api::ApiError::Http { body, .. }) if !body.is_empty() => {
                        error.set(body);
                    }
                    Err(err) => {
                        cerror(&format!("create user: {err}"));
                        error.set("Failed to create user".to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    let text_input = |state: &UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                state.set(input.value());
            }
        })
    };

    let on_domain_change = {
        let selected_domain = selected_domain.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                selected_domain.set(select.value());
            }
        })
    };
    let on_license_change = {
        let license_type = license_type.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                license_type.set(select.value());
            }
        })
    };

    let estimated = license_monthly_cost(&license_type);
    let cancel_cb = {
        let reset_and_close = reset_and_close.clone();
        Callback::from(move |_: MouseEvent| reset_and_close.emit(()))
    };

    html! {
        <Modal show={props.show} title="Create New User" on_close={reset_and_close.clone()}>
            <form {onsubmit} style="display:flex; flex-direction:column; gap:14px;">
                if !error.is_empty() {
                    <div style="background:#fef2f2; border:1px solid #fecaca; color:#991b1b; padding:8px 12px; border-radius:6px; font-size:13px;">
                        { (*error).clone() }
                    </div>
                }

                <div>
                    <label style={LABEL}>{"Full Name"}</label>
                    <input type="text" style={INPUT} required=true
                        value={(*full_name).clone()} oninput={text_input(&full_name)} />
                </div>

                <div>
                    <label style={LABEL}>{"Email"}</label>
                    <div style="display:flex; gap:8px; align-items:center;">
                        <input type="text" style={INPUT} required=true placeholder="username"
                            value={(*username).clone()} oninput={text_input(&username)} />
                        <span style="color:#6b7280;">{"@"}</span>
                        <select onchange={on_domain_change} style={INPUT}>
                            {
                                domains.iter().map(|d| html! {
                                    <option value={d.name.clone()} selected={*selected_domain == d.name}>
                                        { &d.name }
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                </div>

                <div>
                    <label style={LABEL}>{"Department (Optional)"}</label>
                    <input type="text" style={INPUT}
                        value={(*department).clone()} oninput={text_input(&department)} />
                </div>

                <div>
                    <label style={LABEL}>{"Manager Email (Optional)"}</label>
                    <input type="email" style={INPUT}
                        value={(*manager_email).clone()} oninput={text_input(&manager_email)} />
                </div>

                <div>
                    <label style={LABEL}>{"License Type"}</label>
                    <select onchange={on_license_change} style={INPUT}>
                        {
                            LICENSE_TYPES.iter().map(|lt| html! {
                                <option value={*lt} selected={*license_type == *lt}>{ *lt }</option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>

                <div style="background:#f9fafb; border:1px solid #e5e7eb; border-radius:6px; padding:8px 12px; font-size:13px;">
                    <span style="font-weight:500;">{"Estimated cost: "}</span>
                    { format!("${estimated:.2}/month") }
                </div>

                <div style="display:flex; justify-content:flex-end; gap:10px; padding-top:12px; border-top:1px solid #e5e7eb;">
                    <Button variant={ButtonVariant::Secondary} onclick={cancel_cb}>{"Cancel"}</Button>
                    <Button variant={ButtonVariant::Primary} button_type="submit" disabled={*loading}>
                        { if *loading { "Creating…" } else { "Create User" } }
                    </Button>
                </div>
            </form>
        </Modal>
    }
}
