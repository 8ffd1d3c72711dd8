use super::{sound_toggle::SoundToggle, welcome::Welcome};
use crate::config::GameConfig;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(GameConfig::load);

    use_effect_with((), move |_| {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            doc.set_title("Player Turn");
        }
        || ()
    });

    let toggle_sound = {
        let config = config.clone();
        Callback::from(move |_| {
            let mut next = (*config).clone();
            next.sound = !next.sound;
            if let Err(e) = next.save() {
                log::warn!("sound setting not persisted: {}", e);
            }
            config.set(next);
        })
    };

    html! {
        <ContextProvider<GameConfig> context={(*config).clone()}>
            <Welcome />
            <SoundToggle sound={config.sound} on_toggle={toggle_sound} />
        </ContextProvider<GameConfig>>
    }
}
