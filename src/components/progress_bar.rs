use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ProgressBarProps {
    pub duration_ms: u32,
}

/// Drains from full to empty once; remount (new key) to restart.
#[function_component(ProgressBar)]
pub fn progress_bar(props: &ProgressBarProps) -> Html {
    html! {
        <div style="position:fixed; top:0; left:0; z-index:50; width:100%; height:4px; background:#e5e7eb;">
            <div style={format!("height:100%; width:100%; background:#3b82f6; animation:progress-drain {}ms ease-in-out forwards;", props.duration_ms)}></div>
        </div>
    }
}
