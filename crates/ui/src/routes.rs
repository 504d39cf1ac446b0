use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::{FinishedView, QuestionView, StartView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", StartView)] Start {},
        #[route("/question/:ordinal", QuestionView)] Question { ordinal: u32 },
        #[route("/finished", FinishedView)] Finished {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "app-header",
                h1 { "Knowledge Test" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
