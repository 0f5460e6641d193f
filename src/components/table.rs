use yew::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::model::{SortKey, User};
use crate::util::format_date;

#[derive(Properties, PartialEq, Clone)]
pub struct UserTableProps {
    /// Rows to show, already filtered and sorted by the parent.
    pub users: Vec<User>,
    pub sort_key: SortKey,
    pub ascending: bool,
    pub on_sort: Callback<SortKey>,
    pub on_disable: Callback<String>,
    pub on_delete: Callback<String>,
}

const TH: &str = "padding:10px 14px; text-align:left; font-size:12px; color:#6b7280; \
                  text-transform:uppercase; letter-spacing:0.04em; white-space:nowrap;";
const TD: &str = "padding:10px 14px; font-size:14px; white-space:nowrap;";

fn sort_marker(active: bool, ascending: bool) -> &'static str {
    match (active, ascending) {
        (false, _) => "",
        (true, true) => " ▲",
        (true, false) => " ▼",
    }
}

#[function_component(UserTable)]
pub fn user_table(props: &UserTableProps) -> Html {
    let header = |label: &str, key: SortKey| {
        let on_sort = props.on_sort.clone();
        let onclick = Callback::from(move |_| on_sort.emit(key));
        let marker = sort_marker(props.sort_key == key, props.ascending);
        html! {
            <th style={format!("{TH} cursor:pointer;")} {onclick}>{ format!("{label}{marker}") }</th>
        }
    };

    let rows = if props.users.is_empty() {
        html! {
            <tr>
                <td colspan="6" style="padding:32px; text-align:center; color:#6b7280;">
                    {"No users to show"}
                </td>
            </tr>
        }
    } else {
        props
            .users
            .iter()
            .map(|user| {
                let status = if user.account_enabled {
                    html! { <span style="background:#dcfce7; color:#166534; border-radius:4px; padding:2px 8px; font-size:12px;">{"Active"}</span> }
                } else {
                    html! { <span style="background:#f3f4f6; color:#374151; border-radius:4px; padding:2px 8px; font-size:12px;">{"Disabled"}</span> }
                };
                let disable = {
                    let cb = props.on_disable.clone();
                    let id = user.id.clone();
                    Callback::from(move |_| cb.emit(id.clone()))
                };
                let delete = {
                    let cb = props.on_delete.clone();
                    let id = user.id.clone();
                    Callback::from(move |_| cb.emit(id.clone()))
                };
                html! {
                    <tr style="border-top:1px solid #e5e7eb;">
                        <td style={format!("{TD} font-weight:500;")}>{ &user.display_name }</td>
                        <td style={TD}>{ &user.email }</td>
                        <td style={TD}>{ &user.domain }</td>
                        <td style={TD}>{ format_date(user.last_sign_in.as_deref()) }</td>
                        <td style={TD}>{ status }</td>
                        <td style={format!("{TD} display:flex; gap:6px;")}>
                            if user.account_enabled {
                                <Button variant={ButtonVariant::Secondary} onclick={disable}>{"Disable"}</Button>
                            }
                            <Button variant={ButtonVariant::Danger} onclick={delete}>{"Delete"}</Button>
                        </td>
                    </tr>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div style="border:1px solid #e5e7eb; border-radius:8px; overflow-x:auto;">
            <table style="border-collapse:collapse; width:100%;">
                <thead>
                    <tr style="background:#f9fafb;">
                        { header("Name", SortKey::Name) }
                        { header("Email", SortKey::Email) }
                        <th style={TH}>{"Domain"}</th>
                        { header("Last Sign-in", SortKey::LastSignIn) }
                        <th style={TH}>{"Status"}</th>
                        <th style={TH}>{"Actions"}</th>
                    </tr>
                </thead>
                <tbody>{ rows }</tbody>
            </table>
        </div>
    }
}
