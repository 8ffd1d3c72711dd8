use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct SoundToggleProps {
    pub sound: bool,
    pub on_toggle: Callback<()>,
}

#[function_component(SoundToggle)]
pub fn sound_toggle(props: &SoundToggleProps) -> Html {
    let cb = {
        let cb = props.on_toggle.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let label = if props.sound { "Sound: on" } else { "Sound: off" };
    html! {
        <button onclick={cb} style="position:fixed; bottom:12px; right:12px; z-index:60; padding:6px 12px; font-size:12px; color:#e5e7eb; background:rgba(22,27,34,0.8); border:1px solid #30363d; border-radius:8px;">
            { label }
        </button>
    }
}
