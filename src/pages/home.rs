//! Home feed page: nav sidebar, composer + sample feed, suggestions.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::avatar::{Avatar, AvatarStyle};
use crate::components::button::{Button, ButtonVariant};
use crate::components::card::{Card, CardContent};
use crate::components::header::Header;
use crate::components::input::Input;
use crate::components::scroll_region::ScrollRegion;
use crate::feed::{SamplePost, sample_posts};

/// Left-sidebar navigation labels, in display order.
pub const NAV_ITEMS: [&str; 5] = ["Home", "Friends", "Groups", "Marketplace", "Watch"];

/// Index into [`NAV_ITEMS`] of the item marked active.
pub const ACTIVE_NAV_INDEX: usize = 0;

/// Right-sidebar suggestion entries.
pub const SUGGESTIONS: [&str; 3] = ["User A", "User B", "User C"];

/// Home page — header bar over three columns: navigation, the feed, and
/// suggestions. The feed is the generated sample sequence from
/// [`crate::feed`].
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Header/>

            <div class="home-page__columns">
                <aside class="home-page__nav">
                    <Card>
                        <CardContent>
                            <ul class="nav-list">
                                {NAV_ITEMS
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, label)| {
                                        let active = i == ACTIVE_NAV_INDEX;
                                        view! {
                                            <li
                                                class="nav-list__item"
                                                class:nav-list__item--active=move || active
                                            >
                                                {label}
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </CardContent>
                    </Card>
                </aside>

                <main class="home-page__feed">
                    <Composer/>

                    <ScrollRegion>
                        {sample_posts()
                            .into_iter()
                            .map(|post| view! { <PostCard post=post/> })
                            .collect::<Vec<_>>()}
                    </ScrollRegion>
                </main>

                <aside class="home-page__suggestions">
                    <Card>
                        <CardContent>
                            <div class="suggestions__title">"Suggestions"</div>
                            <ul class="suggestions__list">
                                {SUGGESTIONS
                                    .into_iter()
                                    .map(|name| view! { <li class="suggestions__item">{name}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </CardContent>
                    </Card>
                </aside>
            </div>
        </div>
    }
}

/// Create-post card: viewer avatar, free-text input, submit button.
/// Presentational only.
#[component]
fn Composer() -> impl IntoView {
    view! {
        <Card>
            <CardContent>
                <div class="composer">
                    <Avatar style=AvatarStyle::Viewer>"U"</Avatar>
                    <Input placeholder="What's on your mind?"/>
                </div>
                <div class="composer__actions">
                    <Button variant=ButtonVariant::Default>"Post"</Button>
                </div>
            </CardContent>
        </Card>
    }
}

/// One generated post in the sample feed.
#[component]
fn PostCard(post: SamplePost) -> impl IntoView {
    view! {
        <Card>
            <CardContent>
                <div class="post-card__byline">
                    <Avatar style=AvatarStyle::Poster>{post.avatar_label()}</Avatar>
                    <div>
                        <div class="post-card__name">{post.display_name()}</div>
                        <div class="post-card__time">{post.posted_ago()}</div>
                    </div>
                </div>

                <div class="post-card__body">{post.body()}</div>

                <div class="post-card__actions">
                    <Button variant=ButtonVariant::Ghost>"Like"</Button>
                    <Button variant=ButtonVariant::Ghost>"Comment"</Button>
                    <Button variant=ButtonVariant::Ghost>"Share"</Button>
                </div>
            </CardContent>
        </Card>
    }
}
