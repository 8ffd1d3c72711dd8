use yew::prelude::*;

use super::touch_glow::TouchGlow;
use crate::config::GameConfig;
use crate::util::format_delay;

#[function_component(Welcome)]
pub fn welcome() -> Html {
    let config = use_context::<GameConfig>().unwrap_or_default();
    html! {
        <TouchGlow style="min-height:100vh; width:100%;">
            <main style="display:flex; align-items:center; justify-content:center; padding:64px 16px 16px; min-height:100vh; box-sizing:border-box; pointer-events:none;">
                <div style="text-align:center;">
                    <h1 style="font-size:36px; font-weight:700; color:#fff; margin:0 0 16px 0;">{"Welcome to Player Turn"}</h1>
                    <p style="font-size:18px; color:#e5e7eb; margin:0;">
                        {"Touch with multiple fingers or hold the mouse button to see the magic! ✨"}<br />
                        <span style="font-size:14px; color:#d1d5db;">
                            { format!(
                                "Each finger gets a random color. After {} with fingers down, only one random finger stays glowing!",
                                format_delay(config.pick_delay_ms)
                            ) }
                        </span>
                    </p>
                </div>
            </main>
        </TouchGlow>
    }
}
