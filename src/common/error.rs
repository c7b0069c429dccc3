use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContentWarningProps {
    pub message: String,
}

/// Inline, non-fatal warning shown when a content fetch fails and the
/// section keeps rendering its defaults.
#[function_component(ContentWarning)]
pub fn content_warning(props: &ContentWarningProps) -> Html {
    log::warn!("Displaying content warning to user: {}", props.message);

    html! {
        <div class="text-sm text-yellow-600 mb-2">
            {format!("⚠️ {} (using default content)", props.message)}
        </div>
    }
}
