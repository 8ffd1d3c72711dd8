use yew::prelude::*;

use crate::model::TouchPoint;

#[derive(Properties, PartialEq, Clone)]
pub struct GlowMarkerProps {
    pub point: TouchPoint,
    /// Set on the finger that won the pick.
    #[prop_or_default]
    pub chosen: bool,
}

const CENTERED: &str = "position:absolute; left:50%; top:50%; border-radius:50%;";

#[function_component(GlowMarker)]
pub fn glow_marker(props: &GlowMarkerProps) -> Html {
    let p = props.point;
    let glow = p.glow;
    let scale = if props.chosen { 1.25 } else { 1.0 };
    html! {
        <div style={format!("position:absolute; pointer-events:none; left:{}px; top:{}px; transform:translate(-50%, -50%) translateZ(0) scale({});", p.x, p.y, scale)}>
            <div style={format!("{} width:160px; height:160px; border:2px solid {}; animation:ripple-ping 2s cubic-bezier(0, 0, 0.2, 1) infinite;", CENTERED, glow.rgba(0.3))}></div>
            <div style={format!("{} width:128px; height:128px; border:2px solid {}; animation:ripple-ping 1.5s cubic-bezier(0, 0, 0.2, 1) 0.3s infinite;", CENTERED, glow.rgba(0.5))}></div>
            <div style={format!("{} width:96px; height:96px; transform:translate(-50%, -50%); background:{}; opacity:0.8; filter:blur(12px); box-shadow:0 25px 50px -12px rgba(0,0,0,0.25);", CENTERED, glow.gradient())}></div>
            <div style={format!("{} width:40px; height:40px; transform:translate(-50%, -50%); background:{};", CENTERED, glow.gradient())}></div>
        </div>
    }
}
