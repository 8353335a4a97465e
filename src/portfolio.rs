//! The portfolio page - hero, about, education, skills, stats, socials
//!
//! Each animated value is driven by a pure state machine from `anim`,
//! clocked by a spawned timeout loop. The loops are owned by this
//! component's scope, so navigating away cancels them.

use dioxus::prelude::*;

use crate::anim::{Counter, Typewriter, group_thousands};
use crate::content::{
    ABOUT, EDUCATION_DEGREE, EDUCATION_YEARS, EMAIL, FOOTER, NAME_FIRST, NAME_LAST, RESUME_PATH,
    ROLES, SKILL_PANELS, SOCIAL_LINKS, STATS, TAGLINE,
};
use crate::floating::FloatingIcons;

const TYPING_MS: u32 = 80;
const DELETING_MS: u32 = 40;
const PAUSE_MS: u32 = 2000;
const STAT_DURATION_MS: u32 = 5000;

/// Rotating role text, one character change per timer tick
fn use_typewriter(phrases: &'static [&'static str]) -> Signal<String> {
    let mut text = use_signal(String::new);
    use_effect(move || {
        spawn(async move {
            let mut machine = Typewriter::new(phrases, TYPING_MS, DELETING_MS, PAUSE_MS);
            let mut delay = TYPING_MS;
            loop {
                gloo_timers::future::TimeoutFuture::new(delay).await;
                delay = machine.step();
                text.set(machine.text());
            }
        });
    });
    text
}

/// Count-up from 0 to `target`, sampled at the counter's frame rate
fn use_counter(target: u32, duration_ms: u32) -> Signal<u32> {
    let mut value = use_signal(|| 0u32);
    use_effect(move || {
        spawn(async move {
            let mut counter = Counter::new(target, duration_ms);
            while !counter.done() {
                gloo_timers::future::TimeoutFuture::new(Counter::FRAME_MS).await;
                if let Some(v) = counter.tick() {
                    value.set(v);
                }
            }
        });
    });
    value
}

const PAGE_CSS: &str = r#"
@keyframes blink { 0%, 100% { opacity: 1; } 50% { opacity: 0; } }

#floating-icons-container { position: fixed; inset: 0; overflow: hidden; pointer-events: none; z-index: 0; }
.floating-icon { position: absolute; font-size: 24px; color: rgba(126, 255, 161, 0.12); }

.grain {
  position: fixed; inset: 0; pointer-events: none; z-index: 0;
  background-image: url("data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='100' height='100' viewBox='0 0 100 100'%3E%3Cfilter id='grain'%3E%3CfeTurbulence type='fractalNoise' baseFrequency='0.7' numOctaves='3' stitchTiles='stitch'/%3E%3C/filter%3E%3Crect width='100%25' height='100%25' filter='url(%23grain)' opacity='0.04'/%3E%3C/svg%3E");
}

.hover-card { transition: transform 0.3s ease; }
.hover-card:hover { transform: scale(1.05); }

.social-link { color: #9ca3af; font-size: 24px; text-decoration: none; transition: transform 0.3s ease, color 0.3s ease; }
.social-link:hover { transform: scale(1.25); color: #ffffff; }

.social-rail {
  position: fixed; top: 50%; right: 16px; transform: translateY(-50%);
  display: flex; flex-direction: column; align-items: center; gap: 16px; z-index: 50;
}
.social-dock { display: none; }
@media (max-width: 768px) {
  .social-rail { display: none; }
  .social-dock {
    position: fixed; bottom: 64px; left: 50%; transform: translateX(-50%);
    display: flex; gap: 24px; z-index: 50;
    background: rgba(25, 25, 25, 0.8); padding: 12px 24px; border-radius: 9999px;
    backdrop-filter: blur(4px);
  }
}

.vertical-tag {
  margin-top: 16px; font-size: 13px; letter-spacing: 0.2em; color: #6b7280;
  text-transform: uppercase; writing-mode: vertical-rl; transform: rotate(180deg);
}
"#;

#[component]
pub fn Portfolio() -> Element {
    let typed = use_typewriter(ROLES);
    let counts: Vec<Signal<u32>> = STATS
        .iter()
        .map(|stat| use_counter(stat.target, STAT_DURATION_MS))
        .collect();

    let typed_text = typed();
    let stat_cards: Vec<(&str, String)> = STATS
        .iter()
        .zip(counts.iter())
        .map(|(stat, count)| {
            let v = *count.read();
            let shown = if stat.grouped { group_thousands(v) } else { v.to_string() };
            (stat.label, shown)
        })
        .collect();
    let css = PAGE_CSS;

    rsx! {
        style { "{css}" }

        div {
            style: "min-height: 100vh; background: #191919; color: white; font-family: system-ui, -apple-system, sans-serif; position: relative; overflow: hidden;",

            div { class: "grain" }
            FloatingIcons {}

            // Main content
            div {
                style: "position: relative; z-index: 10; padding: 48px 16px 128px; min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center;",
                div {
                    style: "max-width: 1152px; width: 100%; margin: 0 auto; display: flex; flex-wrap: wrap; justify-content: center; align-items: center; gap: 56px;",

                    // Left column - personal info
                    div {
                        style: "flex: 1; max-width: 576px; min-width: 300px;",
                        h1 {
                            style: "font-size: 72px; line-height: 1; font-weight: 800; color: #616161; margin: 0;",
                            "{NAME_FIRST}"
                            br {}
                            span { style: "color: white;", "{NAME_LAST}" }
                        }

                        div {
                            style: "font-size: 18px; font-weight: 300; color: #d1d5db; margin-top: 24px; height: 28px; display: flex; align-items: center;",
                            span { "{typed_text}" }
                            span {
                                style: "margin-left: 4px; color: #7effa1; animation: blink 1s step-start infinite;",
                                "|"
                            }
                        }

                        div {
                            class: "hover-card",
                            style: "background: #2e2e2e; border-radius: 12px; padding: 24px; margin-top: 48px; box-shadow: 0 10px 20px rgba(0,0,0,0.3);",
                            h2 {
                                style: "font-size: 20px; margin: 0 0 16px 0; font-weight: 700;",
                                "ABOUT ME"
                            }
                            p {
                                style: "color: #d1d5db; line-height: 1.6; font-size: 15px; margin: 0;",
                                "{ABOUT}"
                            }
                            div {
                                style: "margin-top: 24px; display: flex; justify-content: space-between; align-items: center;",
                                a {
                                    href: "mailto:{EMAIL}",
                                    style: "display: inline-flex; align-items: center; gap: 8px; color: #7effa1; font-size: 16px; font-weight: 300; padding: 8px 16px; text-decoration: none;",
                                    i { class: "uil uil-envelope", style: "font-size: 20px;" }
                                    "Let's Talk"
                                }
                                a {
                                    href: "{RESUME_PATH}",
                                    download: "",
                                    class: "social-link",
                                    style: "color: #7effa1;",
                                    i { class: "uil uil-import" }
                                }
                            }
                        }
                    }

                    // Right column - education, skills, stats
                    div {
                        style: "flex: 1; max-width: 576px; min-width: 300px; width: 100%;",
                        div {
                            style: "margin-bottom: 40px;",
                            h2 { style: "font-size: 20px; font-weight: 700; margin: 0;", "EDUCATION" }
                            p {
                                style: "color: #d1d5db; margin: 8px 0 0 0; font-size: 14px; line-height: 1.4;",
                                "{EDUCATION_DEGREE}"
                            }
                            div {
                                style: "display: inline-block; margin-top: 8px; background: #2e2e2e; color: #e5e7eb; font-size: 12px; padding: 4px 12px; border-radius: 9999px;",
                                "{EDUCATION_YEARS}"
                            }
                        }

                        h2 { style: "font-size: 20px; font-weight: 700; margin: 0 0 16px 0;", "SKILLS" }
                        div {
                            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 24px;",
                            for (icon, items) in SKILL_PANELS.iter() {
                                div {
                                    key: "{icon}",
                                    class: "hover-card",
                                    style: "background: #2e2e2e; border-radius: 16px; padding: 16px; box-shadow: 0 10px 20px rgba(0,0,0,0.3);",
                                    div {
                                        style: "margin-bottom: 12px; color: #7effa1;",
                                        i { class: "uil {icon}", style: "font-size: 24px;" }
                                    }
                                    p { style: "font-size: 14px; color: #d1d5db; margin: 0;", "{items}" }
                                }
                            }
                        }

                        div {
                            style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-top: 32px;",
                            for (label, value) in stat_cards {
                                div {
                                    key: "{label}",
                                    class: "hover-card",
                                    style: "background: #2e2e2e; border-radius: 16px; padding: 12px; text-align: center; box-shadow: 0 6px 12px rgba(0,0,0,0.3);",
                                    div { style: "font-size: 18px; font-weight: 700; color: #7effa1;", "{value}" }
                                    p { style: "font-size: 12px; color: #d1d5db; margin: 4px 0 0 0;", "{label}" }
                                }
                            }
                        }
                    }
                }
            }

            // Social rail (desktop) with vertical tagline
            div {
                class: "social-rail",
                for link in SOCIAL_LINKS.iter() {
                    a {
                        key: "{link.name}",
                        class: "social-link",
                        href: "{link.href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "{link.name}",
                        i { class: "uil {link.icon}" }
                    }
                }
                div { class: "vertical-tag", "{TAGLINE}" }
            }

            // Social dock (mobile)
            div {
                class: "social-dock",
                for link in SOCIAL_LINKS.iter() {
                    a {
                        key: "{link.name}",
                        class: "social-link",
                        href: "{link.href}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        aria_label: "{link.name}",
                        i { class: "uil {link.icon}" }
                    }
                }
            }

            footer {
                style: "position: fixed; bottom: 0; left: 0; width: 100%; text-align: center; font-size: 12px; color: #6b7280; padding: 12px 0; background: rgba(25, 25, 25, 0.9); backdrop-filter: blur(4px); z-index: 40; border-top: 1px solid rgba(55, 65, 81, 0.5);",
                "{FOOTER}"
            }
        }
    }
}
