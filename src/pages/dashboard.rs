//! Dashboard page - the signed-in user's content and network.
//!
//! Everything loads at once through `load_dashboard`; a resource that fails
//! shows up empty while the rest render. Posts and prompts page
//! independently. Edits, deletes and unfollows hit the server first and
//! only then patch the local state.

use dioxus::prelude::*;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};
use srefhub_core::{
    load_dashboard, load_posts_page, load_prompts_page, DashboardState, DashboardStore,
    PostUpdate, StylePost, UserSummary,
};
use srefhub_ui::{Button, ButtonVariant, Input, Pager, StatsGrid, TextArea};

use crate::app::Route;
use crate::components::{copy_to_clipboard, NavHeader, NavLocation, PromptCard};
use crate::context::{use_app, use_feedback};

/// Dashboard state held in a signal, written only between awaits
struct SignalStore(Signal<DashboardState>);

impl DashboardStore for SignalStore {
    fn update<R>(&mut self, f: impl FnOnce(&mut DashboardState) -> R) -> R {
        f(&mut *self.0.write())
    }
}

/// Dashboard sections
#[derive(Clone, Copy, PartialEq, Debug)]
enum Tab {
    Posts,
    Prompts,
    Favorites,
    Network,
}

impl Tab {
    const ALL: [Tab; 4] = [Tab::Posts, Tab::Prompts, Tab::Favorites, Tab::Network];

    fn label(&self) -> &'static str {
        match self {
            Tab::Posts => "My styles",
            Tab::Prompts => "My prompts",
            Tab::Favorites => "Favorites",
            Tab::Network => "Network",
        }
    }
}

/// Post being edited inline
#[derive(Clone, PartialEq, Debug)]
struct Draft {
    id: String,
    title: String,
    description: String,
}

/// Ask before destroying something. Runs the native dialog off the UI thread.
async fn confirm(title: &'static str, description: String) -> bool {
    let answer = tokio::task::spawn_blocking(move || {
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(description)
            .set_buttons(MessageButtons::YesNo)
            .show()
    })
    .await;

    matches!(answer, Ok(MessageDialogResult::Yes))
}

fn stats_rows(state: &DashboardState) -> Vec<(String, u64)> {
    let stats = &state.user_stats;
    vec![
        ("Styles".to_string(), stats.total_posts),
        ("Prompts".to_string(), stats.total_prompts()),
        ("Likes".to_string(), stats.total_likes),
        ("Views".to_string(), stats.total_views),
        ("Followers".to_string(), stats.total_followers),
        ("Following".to_string(), stats.total_following),
    ]
}

#[component]
pub fn Dashboard() -> Element {
    let ctx = use_app();
    let feedback = use_feedback();
    let page_size = ctx.config.page_size;
    let session_version = feedback.session_version;

    let session_api = ctx.api.clone();
    let user_id = use_memo(move || {
        let _ = session_version();
        session_api.session().user_id()
    });

    let mut state = use_signal(DashboardState::loading);
    let mut tab = use_signal(|| Tab::Posts);
    let mut draft: Signal<Option<Draft>> = use_signal(|| None);

    // Full load whenever the signed-in user changes
    let load_api = ctx.api.clone();
    use_effect(move || {
        let Some(user) = user_id() else {
            state.set(DashboardState::default());
            return;
        };
        state.set(DashboardState::loading());
        let api = load_api.clone();
        spawn(async move {
            let loaded = load_dashboard(&api, &user, page_size).await;
            state.set(loaded);
        });
    });

    let posts_api = ctx.api.clone();
    let change_posts_page = move |page: u32| {
        let Some(user) = user_id() else { return };
        let api = posts_api.clone();
        spawn(async move {
            let mut store = SignalStore(state);
            if let Err(e) = load_posts_page(&mut store, &api, &user, page, page_size).await {
                feedback.error("Could not load styles", &e);
            }
        });
    };

    let prompts_api = ctx.api.clone();
    let change_prompts_page = move |page: u32| {
        let Some(user) = user_id() else { return };
        let api = prompts_api.clone();
        spawn(async move {
            let mut store = SignalStore(state);
            if let Err(e) = load_prompts_page(&mut store, &api, &user, page, page_size).await {
                feedback.error("Could not load prompts", &e);
            }
        });
    };

    let delete_post_api = ctx.api.clone();
    let delete_post = move |id: String| {
        let api = delete_post_api.clone();
        spawn(async move {
            if !confirm("Delete style", "Delete this style reference? This cannot be undone.".to_string()).await {
                return;
            }
            match api.delete_post(&id).await {
                Ok(()) => {
                    state.write().remove_post(&id);
                    feedback.success("Style deleted");
                }
                Err(e) => feedback.error("Delete failed", &e),
            }
        });
    };

    let delete_prompt_api = ctx.api.clone();
    let delete_prompt = move |id: String| {
        let api = delete_prompt_api.clone();
        spawn(async move {
            if !confirm("Delete prompt", "Delete this prompt? This cannot be undone.".to_string()).await {
                return;
            }
            match api.delete_prompt(&id).await {
                Ok(()) => {
                    state.write().remove_prompt(&id);
                    feedback.success("Prompt deleted");
                }
                Err(e) => feedback.error("Delete failed", &e),
            }
        });
    };

    let save_api = ctx.api.clone();
    let save_draft = move |_: ()| {
        let Some(current) = draft() else { return };
        let api = save_api.clone();
        spawn(async move {
            let update = PostUpdate {
                title: Some(current.title.trim().to_string()),
                description: Some(current.description.clone()),
                ..Default::default()
            };
            match api.update_post(&current.id, &update).await {
                Ok(post) => {
                    state.write().update_post(&current.id, post);
                    draft.set(None);
                    feedback.success("Style updated");
                }
                Err(e) => feedback.error("Update failed", &e),
            }
        });
    };

    let unfollow_api = ctx.api.clone();
    let unfollow = move |user: UserSummary| {
        let api = unfollow_api.clone();
        spawn(async move {
            match api.unfollow(&user.id).await {
                Ok(()) => {
                    state.write().remove_following(&user.id);
                    feedback.success(format!("Unfollowed {}", user.display_name()));
                }
                Err(e) => feedback.error("Unfollow failed", &e),
            }
        });
    };

    if user_id().is_none() {
        return rsx! {
            NavHeader { current: NavLocation::Dashboard }
            main { class: "page dashboard-page",
                div { class: "empty-state",
                    h2 { class: "section-title", "Sign in to see your dashboard" }
                    p { class: "body-text", "Your dashboard needs a token and your user id." }
                    Link { to: Route::Login {}, class: "btn-primary", "Sign in" }
                }
            }
        };
    }

    let snapshot = state.read().clone();

    rsx! {
        NavHeader { current: NavLocation::Dashboard }

        main { class: "page dashboard-page",
            if snapshot.loading {
                div { class: "list-status",
                    div { class: "loading-spinner" }
                    "Loading dashboard..."
                }
            } else {
                StatsGrid {
                    title: "Overview".to_string(),
                    stats: stats_rows(&snapshot),
                }

                nav { class: "tab-bar", role: "tablist",
                    for t in Tab::ALL {
                        button {
                            r#type: "button",
                            role: "tab",
                            class: if tab() == t { "tab active" } else { "tab" },
                            "aria-selected": if tab() == t { "true" } else { "false" },
                            onclick: move |_| tab.set(t),
                            "{t.label()}"
                        }
                    }
                }

                {match tab() {
                    Tab::Posts => rsx! {
                        section { class: "dashboard-section",
                            if snapshot.user_posts.is_empty() {
                                p { class: "empty-text", "You haven't shared any styles yet." }
                            }
                            for post in snapshot.user_posts.iter().cloned() {
                                PostRow {
                                    key: "{post.id}",
                                    post: post.clone(),
                                    editing: draft().filter(|d| d.id == post.id).is_some(),
                                    on_edit: move |p: StylePost| draft.set(Some(Draft {
                                        id: p.id.clone(),
                                        title: p.title.clone(),
                                        description: p.description.clone(),
                                    })),
                                    on_delete: delete_post.clone(),
                                }
                            }
                            if let Some(current) = draft() {
                                div { class: "edit-panel",
                                    h3 { class: "section-header", "Edit style" }
                                    Input {
                                        label: "Title".to_string(),
                                        value: current.title.clone(),
                                        oninput: move |value: String| {
                                            if let Some(d) = draft.write().as_mut() {
                                                d.title = value;
                                            }
                                        },
                                    }
                                    TextArea {
                                        label: "Description".to_string(),
                                        value: current.description.clone(),
                                        oninput: move |value: String| {
                                            if let Some(d) = draft.write().as_mut() {
                                                d.description = value;
                                            }
                                        },
                                    }
                                    div { class: "form-actions",
                                        Button { variant: ButtonVariant::Primary, onclick: save_draft.clone(), "Save" }
                                        Button { variant: ButtonVariant::Ghost, onclick: move |_| draft.set(None), "Cancel" }
                                    }
                                }
                            }
                            Pager { state: snapshot.posts_page, on_change: change_posts_page.clone() }
                        }
                    },
                    Tab::Prompts => rsx! {
                        section { class: "dashboard-section",
                            if snapshot.user_prompts.is_empty() {
                                p { class: "empty-text", "You haven't shared any prompts yet." }
                            }
                            for prompt in snapshot.user_prompts.iter().cloned() {
                                PromptCard {
                                    key: "{prompt.id}",
                                    prompt,
                                    on_delete: delete_prompt.clone(),
                                }
                            }
                            Pager { state: snapshot.prompts_page, on_change: change_prompts_page.clone() }
                        }
                    },
                    Tab::Favorites => rsx! {
                        section { class: "dashboard-section",
                            h3 { class: "section-header", "Styles" }
                            if snapshot.favorites_posts.is_empty() {
                                p { class: "empty-text", "No favorite styles yet." }
                            }
                            for post in snapshot.favorites_posts.iter().cloned() {
                                PostRow { key: "{post.id}", post }
                            }
                            h3 { class: "section-header", "Prompts" }
                            if snapshot.favorites_prompts.is_empty() {
                                p { class: "empty-text", "No favorite prompts yet." }
                            }
                            for prompt in snapshot.favorites_prompts.iter().cloned() {
                                PromptCard { key: "{prompt.id}", prompt }
                            }
                        }
                    },
                    Tab::Network => rsx! {
                        section { class: "dashboard-section network-columns",
                            div {
                                h3 { class: "section-header", "Following ({snapshot.following_users.len()})" }
                                for user in snapshot.following_users.iter().cloned() {
                                    UserRow {
                                        key: "{user.id}",
                                        user,
                                        on_unfollow: unfollow.clone(),
                                    }
                                }
                            }
                            div {
                                h3 { class: "section-header", "Followers ({snapshot.follower_users.len()})" }
                                for user in snapshot.follower_users.iter().cloned() {
                                    UserRow { key: "{user.id}", user }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}

/// One style reference in a dashboard list
#[component]
fn PostRow(
    post: StylePost,
    #[props(default)] editing: bool,
    #[props(default)] on_edit: Option<EventHandler<StylePost>>,
    #[props(default)] on_delete: Option<EventHandler<String>>,
) -> Element {
    let feedback = use_feedback();
    let parameter = post.sref_parameter();
    let edited = post.clone();
    let id = post.id.clone();

    rsx! {
        div { class: if editing { "post-row editing" } else { "post-row" },
            div { class: "post-row-main",
                h4 { class: "card-title", "{post.title}" }
                code { class: "sref-code", "{parameter}" }
                span { class: "card-counts", "\u{2665} {post.likes} \u{00b7} {post.views} views" }
            }
            div { class: "card-actions",
                Button {
                    variant: ButtonVariant::Ghost,
                    onclick: move |_| {
                        if copy_to_clipboard(&parameter) {
                            feedback.success("Copied");
                        }
                    },
                    "Copy"
                }
                if let Some(handler) = on_edit {
                    Button {
                        variant: ButtonVariant::Secondary,
                        onclick: move |_| handler.call(edited.clone()),
                        "Edit"
                    }
                }
                if let Some(handler) = on_delete {
                    Button {
                        variant: ButtonVariant::Danger,
                        onclick: move |_| handler.call(id.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

/// A followed or following user
#[component]
fn UserRow(user: UserSummary, #[props(default)] on_unfollow: Option<EventHandler<UserSummary>>) -> Element {
    let name = user.display_name();
    let initial = name.chars().next().unwrap_or('?').to_uppercase().to_string();
    let target = user.clone();

    rsx! {
        div { class: "user-row",
            div { class: "avatar", "{initial}" }
            div { class: "user-row-main",
                span { class: "user-name", "{name}" }
                if let Some(bio) = user.bio.as_ref().filter(|b| !b.is_empty()) {
                    span { class: "user-bio", "{bio}" }
                }
            }
            if let Some(handler) = on_unfollow {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| handler.call(target.clone()),
                    "Unfollow"
                }
            }
        }
    }
}
