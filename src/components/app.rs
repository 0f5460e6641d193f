use yew::prelude::*;

use crate::components::ask_jarvis::AskJarvis;
use crate::components::server_list::ServerList;
use crate::components::user_list::UserList;

const TAB_KEY: &str = "jarvis_active_tab";

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Users,
    Servers,
    Ask,
}

impl Tab {
    fn as_str(self) -> &'static str {
        match self {
            Tab::Users => "users",
            Tab::Servers => "servers",
            Tab::Ask => "ask",
        }
    }

    fn from_str(value: &str) -> Option<Self> {
        match value {
            "users" => Some(Tab::Users),
            "servers" => Some(Tab::Servers),
            "ask" => Some(Tab::Ask),
            _ => None,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Tab::Users => "Users",
            Tab::Servers => "Servers",
            Tab::Ask => "Ask JARVIS",
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let active_tab = use_state(|| {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(TAB_KEY).ok().flatten())
            .and_then(|v| Tab::from_str(&v))
            .unwrap_or(Tab::Users)
    });

    // Persist the active tab so a reload lands where the user left off.
    {
        let tab = *active_tab;
        use_effect_with(tab.as_str(), move |name| {
            if let Some(store) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = store.set_item(TAB_KEY, name);
            }
            || ()
        });
    }

    let nav_button = |tab: Tab| {
        let active = *active_tab == tab;
        let onclick = {
            let active_tab = active_tab.clone();
            Callback::from(move |_| active_tab.set(tab))
        };
        let style = if active {
            "padding:12px 0; border:none; border-bottom:2px solid #111; background:none; \
             color:#111; font-weight:500; cursor:pointer; font-size:14px;"
        } else {
            "padding:12px 0; border:none; border-bottom:2px solid transparent; background:none; \
             color:#6b7280; cursor:pointer; font-size:14px;"
        };
        html! { <button {onclick} {style}>{ tab.label() }</button> }
    };

    let content = match *active_tab {
        Tab::Users => html! { <UserList /> },
        Tab::Servers => html! { <ServerList /> },
        Tab::Ask => html! { <AskJarvis /> },
    };

    html! {
        <div style="min-height:100vh; background:#fff; font-family:system-ui, sans-serif; color:#111;">
            <header style="border-bottom:1px solid #e5e7eb;">
                <div style="max-width:1120px; margin:0 auto; padding:16px 24px; display:flex; justify-content:space-between; align-items:baseline;">
                    <div>
                        <h1 style="margin:0; font-size:24px; letter-spacing:-0.02em;">{"JARVIS"}</h1>
                        <p style="margin:2px 0 0 0; font-size:13px; color:#6b7280;">
                            {"Just-in-time Autonomic Response & Virtualization Infrastructure System"}
                        </p>
                    </div>
                </div>
            </header>

            <nav style="border-bottom:1px solid #e5e7eb;">
                <div style="max-width:1120px; margin:0 auto; padding:0 24px; display:flex; gap:32px;">
                    { nav_button(Tab::Users) }
                    { nav_button(Tab::Servers) }
                    { nav_button(Tab::Ask) }
                </div>
            </nav>

            <main style="max-width:1120px; margin:0 auto; padding:32px 24px;">
                { content }
            </main>
        </div>
    }
}
