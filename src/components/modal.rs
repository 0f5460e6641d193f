use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ModalProps {
    pub show: bool,
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div style="position:fixed; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.45); z-index:50;">
            <div style="background:#fff; border:1px solid #d0d7de; border-radius:10px; padding:20px 24px; min-width:360px; max-width:520px; display:flex; flex-direction:column; gap:14px;">
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <h3 style="margin:0; font-size:18px;">{ props.title.clone() }</h3>
                    <button onclick={close_cb} style="padding:4px 8px; border:none; background:none; cursor:pointer; font-size:16px;">{"✕"}</button>
                </div>
                { props.children.clone() }
            </div>
        </div>
    }
}
