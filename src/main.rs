mod anim;
mod content;
mod floating;
mod portfolio;

use dioxus::prelude::*;

use portfolio::Portfolio;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Portfolio {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    let icon_css = content::ICON_STYLESHEET;
    rsx! {
        document::Link { rel: "stylesheet", href: "{icon_css}" }
        div {
            id: "main",
            Router::<Route> {}
        }
    }
}

fn main() {
    console_error_panic_hook::set_once();
    dioxus::launch(App);
}
