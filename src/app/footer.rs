use chrono::{DateTime, Datelike, FixedOffset};
use leptos::prelude::*;

const BUILD_TIME: &str = env!("BUILD_TIME");

fn build_time() -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(BUILD_TIME).ok()
}

fn copyright(name: &str, built: Option<DateTime<FixedOffset>>) -> String {
    match built {
        Some(t) => format!("© {} {name}. All rights reserved.", t.year()),
        None => format!("© {name}. All rights reserved."),
    }
}

fn last_updated(built: Option<DateTime<FixedOffset>>) -> Option<String> {
    built.map(|t| format!("Last updated {}", t.format("%b %e, %Y")))
}

#[component]
pub fn Footer(name: &'static str) -> impl IntoView {
    let built = build_time();
    view! {
        <footer class="border-t border-white/10 py-8 px-4">
            <div class="max-w-6xl mx-auto flex flex-col sm:flex-row items-center justify-between gap-3 text-sm text-white/50">
                <p>{copyright(name, built)}</p>
                <p>{last_updated(built)} " · Built with Rust & Leptos"</p>
                <a href="#content" class="hover:text-white transition-colors duration-200">
                    "Back to top ↑"
                </a>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_time_is_stamped() {
        assert!(build_time().is_some());
    }

    #[test]
    fn test_footer_text() {
        let t = DateTime::parse_from_rfc3339("2025-11-02T10:00:00+00:00").ok();
        assert_eq!(copyright("Ada", t), "© 2025 Ada. All rights reserved.");
        assert_eq!(copyright("Ada", None), "© Ada. All rights reserved.");
        assert_eq!(last_updated(t).as_deref(), Some("Last updated Nov  2, 2025"));
        assert_eq!(last_updated(None), None);
    }
}
