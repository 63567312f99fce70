//! Home page - entry point to SrefHub.

use dioxus::prelude::*;

use crate::app::Route;
use crate::components::{NavHeader, NavLocation};

#[component]
pub fn Home() -> Element {
    let navigator = use_navigator();

    rsx! {
        NavHeader { current: NavLocation::Home }

        main { class: "landing",
            header { class: "landing-header",
                h1 { class: "page-title", "SrefHub" }
                p { class: "tagline",
                    "Style references, prompts and a curated gallery of AI generations"
                }

                div { class: "landing-actions",
                    button {
                        class: "btn-primary btn-large",
                        onclick: move |_| {
                            navigator.push(Route::Explore {});
                        },
                        "Explore styles"
                    }
                    button {
                        class: "btn-secondary btn-large",
                        onclick: move |_| {
                            navigator.push(Route::Gallery {});
                        },
                        "Open the gallery"
                    }
                }
            }

            section { class: "feature-grid",
                div { class: "feature",
                    h2 { class: "section-header", "--sref codes" }
                    p { class: "body-text",
                        "Browse Midjourney style references with example images and copy the parameter in one click."
                    }
                }
                div { class: "feature",
                    h2 { class: "section-header", "Gallery" }
                    p { class: "body-text",
                        "Filter curated images and videos by model or tag, then like, favorite or copy their prompts."
                    }
                }
                div { class: "feature",
                    h2 { class: "section-header", "Dashboard" }
                    p { class: "body-text",
                        "Keep track of your posts, prompts, favorites and the people you follow."
                    }
                }
            }
        }
    }
}
