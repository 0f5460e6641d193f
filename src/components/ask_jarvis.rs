use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

use crate::api;
use crate::components::button::{Button, ButtonVariant};
use crate::util::cerror;

#[function_component(AskJarvis)]
pub fn ask_jarvis() -> Html {
    let question = use_state(String::new);
    let response = use_state(String::new);
    let recommendations = use_state(Vec::<String>::new);
    let loading = use_state(|| false);
    let analyzing = use_state(|| false);

    let onsubmit = {
        let question = question.clone();
        let response = response.clone();
        let recommendations = recommendations.clone();
        let loading = loading.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let q = (*question).clone();
            let response = response.clone();
            let recommendations = recommendations.clone();
            let loading = loading.clone();
            loading.set(true);
            response.set(String::new());
            recommendations.set(Vec::new());
            spawn_local(async move {
                match api::ask_jarvis(&q, None).await {
                    Ok(reply) => response.set(reply.response),
                    Err(err) => {
                        cerror(&format!("ask jarvis: {err}"));
                        response.set("Failed to get response from JARVIS".to_string());
                    }
                }
                loading.set(false);
            });
        })
    };

    let on_analyze = {
        let response = response.clone();
        let recommendations = recommendations.clone();
        let analyzing = analyzing.clone();
        Callback::from(move |_| {
            let response = response.clone();
            let recommendations = recommendations.clone();
            let analyzing = analyzing.clone();
            analyzing.set(true);
            response.set(String::new());
            recommendations.set(Vec::new());
            spawn_local(async move {
                match api::analyze_users().await {
                    Ok(analysis) => {
                        response.set(analysis.response);
                        recommendations.set(analysis.recommendations.unwrap_or_default());
                    }
                    Err(err) => {
                        cerror(&format!("analyze users: {err}"));
                        response.set("Failed to analyze users".to_string());
                    }
                }
                analyzing.set(false);
            });
        })
    };

    let on_question = {
        let question = question.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                question.set(area.value());
            }
        })
    };

    html! {
        <div style="display:flex; flex-direction:column; gap:16px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h2 style="margin:0; font-size:20px;">{"Ask JARVIS"}</h2>
                <Button variant={ButtonVariant::Secondary} onclick={on_analyze} disabled={*analyzing}>
                    { if *analyzing { "Analyzing…" } else { "Analyze Users" } }
                </Button>
            </div>

            <form {onsubmit} style="display:flex; flex-direction:column; gap:12px;">
                <div>
                    <label style="display:block; font-size:14px; color:#374151; margin-bottom:6px;">
                        {"What would you like to know?"}
                    </label>
                    <textarea
                        rows="4"
                        required=true
                        placeholder="e.g., Which users should I consider removing?"
                        value={(*question).clone()}
                        oninput={on_question}
                        style="width:100%; box-sizing:border-box; padding:10px 12px; border:1px solid #d0d7de; border-radius:6px; font-size:14px; font-family:inherit;"
                    />
                </div>
                <div>
                    <Button variant={ButtonVariant::Primary} button_type="submit" disabled={*loading}>
                        { if *loading { "Thinking…" } else { "Ask JARVIS" } }
                    </Button>
                </div>
            </form>

            if !response.is_empty() {
                <div style="background:#f9fafb; border:1px solid #e5e7eb; border-radius:8px; padding:16px;">
                    <h3 style="margin:0 0 8px 0; font-size:15px;">{"Response:"}</h3>
                    <p style="margin:0; white-space:pre-wrap; font-size:14px;">{ (*response).clone() }</p>
                    if !recommendations.is_empty() {
                        <ul style="margin:12px 0 0 0; padding-left:20px; font-size:14px;">
                            {
                                recommendations.iter().map(|r| html! {
                                    <li style="margin-bottom:4px;">{ r }</li>
                                }).collect::<Html>()
                            }
                        </ul>
                    }
                </div>
            }
        </div>
    }
}
