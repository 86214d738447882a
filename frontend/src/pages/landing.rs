use log::{info, warn};
use yew::prelude::*;
use yew_hooks::use_mount;

use crate::chat::transcript::bundled_transcript;
use crate::components::anchor_link::AnchorLink;
use crate::components::chat_demo::ChatDemo;
use crate::components::fallback_image::FallbackImage;
use crate::components::scroll_top::ScrollTop;
use crate::components::stats::{Stat, StatsGrid};
use crate::hooks::{use_fade_in_reveal, use_hero_parallax};

fn stats() -> Vec<Stat> {
    vec![
        Stat { value: "120+", label: "Sites launched" },
        Stat { value: "98%", label: "Happy clients" },
        Stat { value: "4.9★", label: "Average rating" },
        Stat { value: "24/7", label: "Support" },
    ]
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let hero = use_node_ref();
    let hero_content = use_node_ref();
    let hero_chat = use_node_ref();

    let transcript = use_memo(
        |_| {
            bundled_transcript().unwrap_or_else(|e| {
                warn!("Chat demo disabled: {}", e);
                Vec::new()
            })
        },
        (),
    );

    use_mount(|| info!("Landing page mounted"));
    use_fade_in_reveal();
    use_hero_parallax(hero_content.clone(), hero_chat.clone());

    html! {
        <div class="landing-page">
            <section class="hero" id="hero" ref={hero.clone()}>
                <div class="hero-content" ref={hero_content}>
                    <h1>{"Landing pages that feel native on every phone"}</h1>
                    <p class="hero-subtitle">
                        {"Fast, polished sites for small businesses. From first message to launch in days."}
                    </p>
                    <AnchorLink href="#pricing" class="hero-cta">{"See pricing"}</AnchorLink>
                </div>
                <div class="hero-chat" ref={hero_chat}>
                    <ChatDemo messages={transcript} host={hero} />
                </div>
            </section>

            <section class="features" id="features">
                <h2 class="fade-in">{"What you get"}</h2>
                <div class="features-grid">
                    <div class="feature-item fade-in">
                        <FallbackImage src="/assets/design.png" alt="Design mockup" class="feature-image" />
                        <h3>{"Custom design"}</h3>
                        <p>{"Every page is drawn for your brand, not picked from a template."}</p>
                    </div>
                    <div class="feature-item fade-in">
                        <FallbackImage src="/assets/mobile.png" alt="Phone preview" class="feature-image" />
                        <h3>{"Mobile first"}</h3>
                        <p>{"Smooth scrolling and touch-friendly layouts on every screen size."}</p>
                    </div>
                    <div class="feature-item fade-in">
                        <FallbackImage src="/assets/speed.png" alt="Speed report" class="feature-image" />
                        <h3>{"Fast loading"}</h3>
                        <p>{"Lean pages that open instantly, even on a slow connection."}</p>
                    </div>
                </div>
            </section>

            <section class="stats" id="stats">
                <StatsGrid stats={stats()} />
            </section>

            <section class="pricing" id="pricing">
                <h2 class="fade-in">{"Pricing"}</h2>
                <div class="pricing-grid">
                    <div class="pricing-card fade-in">
                        <h3>{"Landing page"}</h3>
                        <p class="price">{"from $400"}</p>
                    </div>
                    <div class="pricing-card fade-in">
                        <h3>{"Multi-page site"}</h3>
                        <p class="price">{"from $900"}</p>
                    </div>
                </div>
            </section>

            <section class="contact" id="contact">
                <h2 class="fade-in">{"Let's talk"}</h2>
                <p class="fade-in">{"Tell me about your project and I'll reply within a day."}</p>
            </section>

            <ScrollTop />
        </div>
    }
}
