use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Danger,
}

#[derive(Properties, PartialEq, Clone)]
pub struct ButtonProps {
    #[prop_or(ButtonVariant::Primary)]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or(AttrValue::Static("button"))]
    pub button_type: AttrValue,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let base = "padding:8px 14px; border-radius:6px; font-size:14px; cursor:pointer;";
    let variant = match props.variant {
        ButtonVariant::Primary => "background:#111; color:#fff; border:1px solid #111;",
        ButtonVariant::Secondary => "background:#fff; color:#111; border:1px solid #d0d7de;",
        ButtonVariant::Danger => "background:#fff; color:#b42318; border:1px solid #f0b4ad;",
    };
    let disabled_style = if props.disabled {
        "opacity:0.5; cursor:not-allowed;"
    } else {
        ""
    };
    html! {
        <button
            type={props.button_type.clone()}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
            style={format!("{base} {variant} {disabled_style}")}
        >
            { props.children.clone() }
        </button>
    }
}
