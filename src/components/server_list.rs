use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};

/// Placeholder tab; server management is not wired to any provider yet.
#[function_component(ServerList)]
pub fn server_list() -> Html {
    html! {
        <div style="display:flex; flex-direction:column; gap:16px;">
            <div style="display:flex; justify-content:space-between; align-items:center;">
                <h2 style="margin:0; font-size:20px;">{"Servers"}</h2>
                <Button variant={ButtonVariant::Primary} disabled=true>{"+ New Server"}</Button>
            </div>
            <div style="border:1px solid #e5e7eb; border-radius:8px; padding:48px; text-align:center; color:#6b7280;">
                {"Server management coming soon…"}
            </div>
        </div>
    }
}
