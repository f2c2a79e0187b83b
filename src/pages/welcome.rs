//! Welcome/landing page: brand intro, feature cards, and the login aside.

#[cfg(test)]
#[path = "welcome_test.rs"]
mod welcome_test;

use leptos::prelude::*;

use crate::components::avatar::{Avatar, AvatarStyle};
use crate::components::card::Card;
use crate::components::footer::Footer;
use crate::components::login_panel::LoginPanel;

/// Brand tagline shown on the landing and login views.
pub const TAGLINE: &str = "Explore. Connect. Innovate.";

const LEAD: &str = "Discover communities, engage with people worldwide, and unlock \
                    futuristic features. Simple, secure, and cutting-edge.";

/// Icon identifiers for the welcome feature cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
    Globe,
    Users,
    MessageCircle,
}

/// One feature card on the welcome page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub icon: FeatureIcon,
    pub title: &'static str,
    pub description: &'static str,
}

/// The fixed feature-card set, in display order.
pub const FEATURES: [Feature; 3] = [
    Feature {
        icon: FeatureIcon::Globe,
        title: "Global Reach",
        description: "Connect with people from around the world effortlessly.",
    },
    Feature {
        icon: FeatureIcon::Users,
        title: "Communities",
        description: "Join groups that match your interests and collaborate.",
    },
    Feature {
        icon: FeatureIcon::MessageCircle,
        title: "Instant Chat",
        description: "Stay in touch with friends and colleagues seamlessly.",
    },
];

/// Welcome page — two columns: brand intro with feature cards on the
/// left, the login panel on the right, footer below.
#[component]
pub fn WelcomePage() -> impl IntoView {
    view! {
        <div class="welcome-page">
            <div class="welcome-page__columns">
                <div class="welcome-page__intro">
                    <div class="welcome-page__brand">
                        <Avatar style=AvatarStyle::Brand>"W"</Avatar>
                        <span class="welcome-page__wordmark">"Pho Bo"</span>
                    </div>

                    <h1 class="welcome-page__tagline">{TAGLINE}</h1>
                    <p class="welcome-page__lead">{LEAD}</p>

                    <div class="welcome-page__features">
                        {FEATURES
                            .into_iter()
                            .map(|feature| view! { <FeatureCard feature=feature/> })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <aside class="welcome-page__aside">
                    <LoginPanel/>
                </aside>
            </div>

            <Footer/>
        </div>
    }
}

/// A single icon + title + description card in the features grid.
#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <Card>
            <div class="feature-card">
                <span class="feature-card__icon">
                    <FeatureGlyph icon=feature.icon/>
                </span>
                <div>
                    <h3 class="feature-card__title">{feature.title}</h3>
                    <p class="feature-card__description">{feature.description}</p>
                </div>
            </div>
        </Card>
    }
}

/// Inline SVG for a [`FeatureIcon`].
#[component]
fn FeatureGlyph(icon: FeatureIcon) -> impl IntoView {
    match icon {
        FeatureIcon::Globe => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <circle cx="12" cy="12" r="9"></circle>
                <line x1="3" y1="12" x2="21" y2="12"></line>
                <ellipse cx="12" cy="12" rx="4" ry="9"></ellipse>
            </svg>
        }
        .into_any(),
        FeatureIcon::Users => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <circle cx="9" cy="8" r="3.5"></circle>
                <path d="M3 20c0-3.3 2.7-6 6-6s6 2.7 6 6"></path>
                <circle cx="17" cy="9" r="2.5"></circle>
                <path d="M16.5 14.5c2.6 0.4 4.5 2.7 4.5 5.5"></path>
            </svg>
        }
        .into_any(),
        FeatureIcon::MessageCircle => view! {
            <svg viewBox="0 0 24 24" aria-hidden="true">
                <path d="M21 11.5a8.5 8.5 0 0 1-12.4 7.6L3 21l1.9-5.6A8.5 8.5 0 1 1 21 11.5z"></path>
            </svg>
        }
        .into_any(),
    }
}
