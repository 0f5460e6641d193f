use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::api;
use crate::components::button::{Button, ButtonVariant};
use crate::components::create_user_modal::CreateUserModal;
use crate::components::pull_to_refresh::{PullToRefresh, RefreshFn, RefreshFuture};
use crate::components::table::UserTable;
use crate::model::{Domain, SortKey, User, filter_users, sort_users};
use crate::util::{cerror, download_csv, users_to_csv};

const DOMAIN_FILTER_KEY: &str = "jarvis_domain_filter";

/// Deleting is destructive: only an explicit "OK" proceeds. A missing
/// window or a failed confirm dialog aborts.
fn confirmation_allows_delete(answer: Option<bool>) -> bool {
    answer.unwrap_or(false)
}

#[function_component(UserList)]
pub fn user_list() -> Html {
    let users = use_state(Vec::<User>::new);
    let domains = use_state(Vec::<Domain>::new);
    let selected_domain = use_state(|| {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(DOMAIN_FILTER_KEY).ok().flatten())
            .unwrap_or_default()
    });
    let search = use_state(String::new);
    let sort_key = use_state(|| SortKey::Name);
    let ascending = use_state(|| true);
    let total = use_state(|| 0usize);
    let monthly_cost = use_state(|| 0.0f64);
    let loading = use_state(|| true);
    let error = use_state(String::new);
    let show_create = use_state(|| false);

    let reload_users = {
        let users = users.clone();
        let total = total.clone();
        let monthly_cost = monthly_cost.clone();
        let loading = loading.clone();
        let error = error.clone();
        let selected_domain = selected_domain.clone();
        Callback::from(move |_: ()| {
            let users = users.clone();
            let total = total.clone();
            let monthly_cost = monthly_cost.clone();
            let loading = loading.clone();
            let error = error.clone();
            let domain = (*selected_domain).clone();
            loading.set(true);
            spawn_local(async move {
                let filter = if domain.is_empty() {
                    None
                } else {
                    Some(domain.as_str())
                };
                match api::get_users(filter).await {
                    Ok(resp) => {
                        users.set(resp.users);
                        total.set(resp.total);
                        monthly_cost.set(resp.monthly_cost);
                        error.set(String::new());
                    }
                    Err(err) => {
                        cerror(&format!("load users: {err}"));
                        error.set(
                            "Failed to load users. Please check your API connection.".to_string(),
                        );
                    }
                }
                loading.set(false);
            });
        })
    };

    // Load the domain dropdown once.
    {
        let domains = domains.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api::get_domains().await {
                    Ok(d) => domains.set(d),
                    Err(err) => cerror(&format!("load domains: {err}")),
                }
            });
            || ()
        });
    }

    // Reload on mount and whenever the domain filter changes; persist
    // the filter alongside.
    {
        let reload = reload_users.clone();
        use_effect_with((*selected_domain).clone(), move |domain| {
            if let Some(store) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
                let _ = store.set_item(DOMAIN_FILTER_KEY, domain);
            }
            reload.emit(());
            || ()
        });
    }

    // Refresh operation handed to the pull-to-refresh wrapper. Memoized
    // per domain so the gesture listeners only rebind when it changes.
    let on_refresh = {
        let users = users.clone();
        let total = total.clone();
        let monthly_cost = monthly_cost.clone();
        let error = error.clone();
        use_memo((*selected_domain).clone(), move |domain| {
            let domain = domain.clone();
            RefreshFn::new(move || -> RefreshFuture {
                let users = users.clone();
                let total = total.clone();
                let monthly_cost = monthly_cost.clone();
                let error = error.clone();
                let domain = domain.clone();
                Box::pin(async move {
                    let filter = if domain.is_empty() {
                        None
                    } else {
                        Some(domain.as_str())
                    };
                    match api::get_users(filter).await {
                        Ok(resp) => {
                            users.set(resp.users);
                            total.set(resp.total);
                            monthly_cost.set(resp.monthly_cost);
                            error.set(String::new());
                            Ok(())
                        }
                        Err(err) => {
                            error.set(
                                "Failed to load users. Please check your API connection."
                                    .to_string(),
                            );
                            Err(err)
                        }
                    }
                })
            })
        })
    };

    let on_sort = {
        let sort_key = sort_key.clone();
        let ascending = ascending.clone();
        Callback::from(move |key: SortKey| {
            if *sort_key == key {
                ascending.set(!*ascending);
            } else {
                sort_key.set(key);
                ascending.set(true);
            }
        })
    };

    let on_disable = {
        let reload = reload_users.clone();
        Callback::from(move |user_id: String| {
            let reload = reload.clone();
            spawn_local(async move {
                if let Err(err) = api::disable_user(&user_id).await {
                    cerror(&format!("disable user: {err}"));
                }
                reload.emit(());
            });
        })
    };

    let on_delete = {
        let reload = reload_users.clone();
        Callback::from(move |user_id: String| {
            let answer = web_sys::window().and_then(|win| {
                win.confirm_with_message(
                    "This will permanently delete the user and release their license. Are you sure?",
                )
                .ok()
            });
            if !confirmation_allows_delete(answer) {
                return;
            }
            let reload = reload.clone();
            spawn_local(async move {
                if let Err(err) = api::delete_user(&user_id).await {
                    cerror(&format!("delete user: {err}"));
                }
                reload.emit(());
            });
        })
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
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

    let mut view = filter_users(&users, &search);
    sort_users(&mut view, *sort_key, *ascending);
    let visible: Vec<User> = view.into_iter().cloned().collect();

    let export_csv = {
        let visible = visible.clone();
        Callback::from(move |_| {
            let refs: Vec<&User> = visible.iter().collect();
            download_csv("users.csv", &users_to_csv(&refs));
        })
    };

    let open_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(true))
    };
    let close_create = {
        let show_create = show_create.clone();
        Callback::from(move |_| show_create.set(false))
    };
    let on_created = {
        let reload = reload_users.clone();
        Callback::from(move |_| reload.emit(()))
    };

    html! {
        <PullToRefresh on_refresh={(*on_refresh).clone()}>
            <div style="display:flex; flex-direction:column; gap:16px;">
                <div style="display:flex; justify-content:space-between; align-items:center; gap:12px; flex-wrap:wrap;">
                    <div style="display:flex; align-items:center; gap:12px;">
                        <label style="font-size:14px; color:#374151;">{"Filter by domain:"}</label>
                        <select
                            value={(*selected_domain).clone()}
                            onchange={on_domain_change}
                            style="padding:8px 10px; border:1px solid #d0d7de; border-radius:6px;"
                        >
                            <option value="" selected={selected_domain.is_empty()}>{"All Domains"}</option>
                            {
                                domains.iter().map(|d| html! {
                                    <option value={d.name.clone()} selected={*selected_domain == d.name}>
                                        { &d.name }
                                    </option>
                                }).collect::<Html>()
                            }
                        </select>
                        <input
                            type="text"
                            placeholder="Search users…"
                            value={(*search).clone()}
                            oninput={on_search}
                            style="padding:8px 10px; border:1px solid #d0d7de; border-radius:6px; min-width:220px;"
                        />
                    </div>
                    <div style="display:flex; gap:10px;">
                        <Button variant={ButtonVariant::Secondary} onclick={export_csv}>{"Export CSV"}</Button>
                        <Button variant={ButtonVariant::Primary} onclick={open_create}>{"+ New User"}</Button>
                    </div>
                </div>

                <div style="display:flex; gap:24px; font-size:14px;">
                    <div>
                        <span style="color:#6b7280;">{"Total Users: "}</span>
                        <span style="font-weight:600;">{ *total }</span>
                    </div>
                    <div>
                        <span style="color:#6b7280;">{"Monthly Cost: "}</span>
                        <span style="font-weight:600;">{ format!("${:.2}", *monthly_cost) }</span>
                    </div>
                </div>

                if !error.is_empty() {
                    <div style="background:#fef2f2; border:1px solid #fecaca; color:#991b1b; padding:12px 16px; border-radius:6px;">
                        { (*error).clone() }
                    </div>
                }

                if *loading {
                    <div style="text-align:center; padding:48px; color:#6b7280;">{"Loading users…"}</div>
                } else {
                    <UserTable
                        users={visible}
                        sort_key={*sort_key}
                        ascending={*ascending}
                        on_sort={on_sort}
                        on_disable={on_disable}
                        on_delete={on_delete}
                    />
                }

                <CreateUserModal
                    show={*show_create}
                    on_close={close_create}
                    on_created={on_created}
                />
            </div>
        </PullToRefresh>
    }
}

#[cfg(test)]
mod tests {
    use super::confirmation_allows_delete;

    #[test]
    fn delete_requires_an_explicit_ok() {
        assert!(confirmation_allows_delete(Some(true)));
        assert!(!confirmation_allows_delete(Some(false)));
        // No window (or a confirm that errored) must abort, not proceed.
        assert!(!confirmation_allows_delete(None));
    }
}
