use crate::core::hover;

pub const CARD_SELECTOR: &str = ".project-card";

const BASE_CSS: &str = r#"*, *::before, *::after { box-sizing: border-box; }
body { margin: 0; min-height: 100vh; background: #0a0a0a; color: #f5f5f5; font-family: ui-sans-serif, system-ui, -apple-system, "Segoe UI", Roboto, sans-serif; -webkit-font-smoothing: antialiased; }
a { color: inherit; text-decoration: none; }
h1, h2, h3, h4, p { margin: 0; }
.icon { display: inline-block; vertical-align: middle; }
.icon-sm { width: 1rem; height: 1rem; }
.icon-md { width: 1.25rem; height: 1.25rem; }
.layout { max-width: 1400px; margin: 0 auto; padding: 3rem 1.5rem; }
@media (min-width: 1024px) {
  .layout { display: grid; grid-template-columns: repeat(12, minmax(0, 1fr)); gap: 2rem; }
  .sidebar { grid-column: span 4 / span 4; position: sticky; top: 1.5rem; align-self: start; }
  .content { grid-column: span 8 / span 8; margin-top: 0; }
}
.profile-card { backdrop-filter: blur(4px); background: rgba(23, 23, 23, 0.9); border: 1px solid #262626; border-radius: 1rem; padding: 1.5rem; box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); }
.identity { display: flex; flex-wrap: wrap; align-items: center; gap: 1rem; }
.avatar { width: 5rem; height: 5rem; border-radius: 9999px; object-fit: cover; box-shadow: 0 0 0 1px #262626; }
.identity h1 { font-size: 1.5rem; font-weight: 600; letter-spacing: -0.025em; }
.muted { color: #a3a3a3; font-size: 0.875rem; }
.tagline { margin-top: 1rem; color: #d4d4d4; line-height: 1.625; }
.actions { margin-top: 1.5rem; display: grid; gap: 0.75rem; }
.btn { display: inline-flex; align-items: center; gap: 0.5rem; padding: 0.5rem 0.75rem; border-radius: 0.375rem; font-size: 0.875rem; }
.btn-primary { justify-content: center; background: #059669; color: #000; font-weight: 500; }
.btn-primary:hover { background: #10b981; }
.btn-outline { border: 1px solid #262626; color: #e5e5e5; }
.btn-outline:hover { border-color: #059669; }
.btn-dark { background: #262626; border: 1px solid #404040; color: #e5e5e5; }
.btn-dark:hover { border-color: #059669; }
.skills { margin-top: 1.5rem; }
.skills h4 { font-size: 0.75rem; color: #a3a3a3; text-transform: uppercase; letter-spacing: 0.025em; }
.tags { margin-top: 0.5rem; display: flex; flex-wrap: wrap; gap: 0.5rem; }
.tag { font-size: 0.75rem; padding: 0.25rem 0.5rem; border-radius: 0.375rem; background: #171717; border: 1px solid #262626; color: #d4d4d4; }
.tag-dark { background: #262626; border-color: #404040; }
.socials { margin-top: 1.5rem; display: flex; align-items: center; gap: 0.75rem; }
.socials a { color: #e5e5e5; }
.socials a:hover { color: #34d399; }
.availability { margin-top: 1.5rem; font-size: 0.75rem; color: #737373; }
.content { margin-top: 3rem; }
.intro { margin-bottom: 2rem; }
.intro h2, .contact h2 { font-size: 1.25rem; font-weight: 600; }
.intro p, .contact > p { margin-top: 0.5rem; color: #a3a3a3; }
.gallery { position: relative; }
.gallery-scroll { overflow-x: auto; scroll-snap-type: x mandatory; padding: 1.5rem 0; -ms-overflow-style: none; scrollbar-width: none; }
.gallery-scroll::-webkit-scrollbar { display: none; }
.gallery-track { display: flex; gap: 2rem; align-items: flex-start; padding-bottom: 1.5rem; }
.spacer { width: 10px; flex-shrink: 0; }
.project { scroll-snap-align: start; flex-shrink: 0; width: 300px; }
@media (min-width: 640px) { .project { width: 360px; } }
@media (min-width: 768px) { .project { width: 420px; } }
.project-card { position: relative; background-size: cover; background-position: center; border-radius: 16px; }
.project-body { position: relative; border-radius: 1rem; border: 1px solid #262626; background: rgba(23, 23, 23, 0.9); padding: 1.25rem; box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1); }
.project-body h3 { font-size: 1.125rem; font-weight: 600; }
.project-body p { margin-top: 0.75rem; color: #d4d4d4; line-height: 1.625; }
.project-body .tags { margin-top: 1rem; }
.project-links { margin-top: 1rem; display: flex; gap: 0.5rem; }
.timeline { margin-top: 1rem; display: flex; align-items: center; gap: 0.75rem; font-size: 0.875rem; color: #737373; }
.timeline-dot { width: 1.5rem; height: 1.5rem; border-radius: 9999px; background: #262626; border: 1px solid #404040; display: flex; align-items: center; justify-content: center; font-size: 0.75rem; }
.timeline-line { flex: 1; border-top: 1px solid #262626; }
.gallery-edge { display: none; position: absolute; right: 0; top: 0; bottom: 0; width: 2px; background: rgba(38, 38, 38, 0.4); }
@media (min-width: 768px) { .gallery-edge { display: block; } }
.contact { margin-top: 1.25rem; }
.contact form { margin-top: 1.5rem; display: grid; gap: 1rem; max-width: 36rem; }
.contact input, .contact textarea { width: 100%; padding: 0.5rem 1rem; border-radius: 0.375rem; background: #262626; border: 1px solid #404040; color: #e5e5e5; font: inherit; }
.contact input::placeholder, .contact textarea::placeholder { color: #a3a3a3; }
.contact input:focus, .contact textarea:focus { outline: none; box-shadow: 0 0 0 1px #059669; }
.sr-only { position: absolute; width: 1px; height: 1px; padding: 0; margin: -1px; overflow: hidden; clip: rect(0, 0, 0, 0); white-space: nowrap; border: 0; }
footer { padding: 2rem 0; }
footer .footer-inner { max-width: 1400px; margin: 0 auto; padding: 0 1.5rem; text-align: center; color: #737373; font-size: 0.875rem; }
"#;

pub fn stylesheet() -> String {
    let mut css = String::from(BASE_CSS);
    css.push_str(&hover::hover_css(CARD_SELECTOR));
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_hides_gallery_scrollbar_and_snaps() {
        let css = stylesheet();
        assert!(css.contains("scroll-snap-type: x mandatory"));
        assert!(css.contains(".gallery-scroll::-webkit-scrollbar { display: none; }"));
        assert!(css.contains(".project-card:hover"));
    }
}
