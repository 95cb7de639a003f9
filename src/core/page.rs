use crate::core::contact::{InputKind, CONTACT_FIELDS};
use crate::core::icons::Icon;
use crate::core::style;
use crate::domain::model::{Portfolio, Project, SkillTag};
use crate::utils::html::{css_url, escape};

/// The single page of the site. Rendering is pure: the same portfolio,
/// endpoint and year always give the same markup.
pub struct PortfolioPage<'a> {
    portfolio: &'a Portfolio,
    form_endpoint: &'a str,
    year: i32,
}

impl<'a> PortfolioPage<'a> {
    pub fn new(portfolio: &'a Portfolio, form_endpoint: &'a str, year: i32) -> Self {
        Self {
            portfolio,
            form_endpoint,
            year,
        }
    }

    pub fn render(&self) -> String {
        let profile = &self.portfolio.profile;
        let mut out = String::with_capacity(16 * 1024);
        out.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\">\n");
        out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
        out.push_str(&format!(
            "<title>{} — {}</title>\n",
            escape(&profile.name),
            escape(&profile.role)
        ));
        out.push_str("<style>\n");
        out.push_str(&style::stylesheet());
        out.push_str("</style>\n</head>\n<body>\n");

        out.push_str("<div class=\"layout\">\n");
        out.push_str(&self.render_sidebar());
        out.push_str("<main class=\"content\">\n");
        out.push_str(&self.render_intro());
        out.push_str(&self.render_gallery());
        out.push_str(&self.render_contact_form());
        out.push_str("</main>\n</div>\n");
        out.push_str(&self.render_footer());
        out.push_str("</body>\n</html>\n");
        out
    }

    pub fn render_sidebar(&self) -> String {
        let p = &self.portfolio.profile;
        let mut out = String::new();
        out.push_str("<aside class=\"sidebar\">\n<div class=\"profile-card\">\n");

        out.push_str("<div class=\"identity\">\n");
        out.push_str(&format!(
            "<img class=\"avatar\" src=\"{}\" alt=\"avatar\">\n",
            escape(&p.avatar)
        ));
        out.push_str(&format!(
            "<div><h1>{}</h1><p class=\"muted\">{} • {}</p></div>\n",
            escape(&p.name),
            escape(&p.role),
            escape(&p.location)
        ));
        out.push_str("</div>\n");
        out.push_str(&format!("<p class=\"tagline\">{}</p>\n", escape(&p.tagline)));

        out.push_str("<div class=\"actions\">\n");
        out.push_str(&format!(
            "<a class=\"btn btn-primary\" href=\"{}\" download=\"{}\">{} Resume</a>\n",
            escape(&p.resume),
            escape(&p.resume_filename),
            Icon::FileDown.svg("icon-sm")
        ));
        out.push_str(&format!(
            "<a class=\"btn btn-outline\" href=\"mailto:{}\">{} {}</a>\n",
            escape(&p.email),
            Icon::Mail.svg("icon-sm"),
            escape(&p.email)
        ));
        out.push_str("</div>\n");

        out.push_str("<div class=\"skills\">\n<h4>Skills</h4>\n");
        out.push_str(&render_skills(&self.portfolio.skills, "tag"));
        out.push_str("</div>\n");

        out.push_str("<div class=\"socials\">\n");
        out.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\" aria-label=\"GitHub\">{}</a>\n",
            escape(&p.github),
            Icon::Github.svg("icon-md")
        ));
        out.push_str(&format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noreferrer\" aria-label=\"LinkedIn\">{}</a>\n",
            escape(&p.linkedin),
            Icon::Linkedin.svg("icon-md")
        ));
        out.push_str("</div>\n");

        out.push_str(&format!(
            "<p class=\"availability\">{}</p>\n",
            escape(&p.availability)
        ));
        out.push_str("</div>\n</aside>\n");
        out
    }

    fn render_intro(&self) -> String {
        concat!(
            "<section class=\"intro\">\n",
            "<h2>Selected Work</h2>\n",
            "<p>A hand-picked collection of projects with notes on impact and tech.</p>\n",
            "</section>\n"
        )
        .to_string()
    }

    pub fn render_gallery(&self) -> String {
        let mut out = String::new();
        out.push_str("<section class=\"gallery\">\n<div class=\"gallery-scroll\">\n<div class=\"gallery-track\">\n");
        out.push_str("<div class=\"spacer\"></div>\n");
        for project in &self.portfolio.projects {
            out.push_str(&render_project_card(project));
        }
        out.push_str("<div class=\"spacer\"></div>\n");
        out.push_str("</div>\n</div>\n<div class=\"gallery-edge\"></div>\n</section>\n");
        out
    }

    pub fn render_contact_form(&self) -> String {
        let mut out = String::new();
        out.push_str("<section class=\"contact\">\n<h2>Get in Touch</h2>\n");
        out.push_str("<p>Have a question or want to work together? Send me a message!</p>\n");
        out.push_str(&format!(
            "<form action=\"{}\" method=\"POST\">\n",
            escape(self.form_endpoint)
        ));

        for field in CONTACT_FIELDS.iter() {
            let required = if field.required { " required" } else { "" };
            out.push_str("<div>\n");
            out.push_str(&format!(
                "<label for=\"{}\" class=\"sr-only\">{}</label>\n",
                field.id, field.label
            ));
            match field.kind {
                InputKind::Text | InputKind::Email => {
                    let input_type = if field.kind == InputKind::Email {
                        "email"
                    } else {
                        "text"
                    };
                    out.push_str(&format!(
                        "<input type=\"{}\" name=\"{}\" id=\"{}\" placeholder=\"{}\"{}>\n",
                        input_type, field.name, field.id, field.placeholder, required
                    ));
                }
                InputKind::TextArea { rows } => {
                    out.push_str(&format!(
                        "<textarea name=\"{}\" id=\"{}\" rows=\"{}\" placeholder=\"{}\"{}></textarea>\n",
                        field.name, field.id, rows, field.placeholder, required
                    ));
                }
            }
            out.push_str("</div>\n");
        }

        out.push_str("<button type=\"submit\" class=\"btn btn-primary\">Send Message</button>\n");
        out.push_str("</form>\n</section>\n");
        out
    }

    pub fn render_footer(&self) -> String {
        format!(
            "<footer><div class=\"footer-inner\">© {} {}. Crafted with attention to detail.</div></footer>\n",
            self.year,
            escape(&self.portfolio.profile.name)
        )
    }
}

/// One tag element per skill, declaration order.
pub fn render_skills(skills: &[SkillTag], class: &str) -> String {
    let mut out = String::from("<div class=\"tags\">\n");
    for skill in skills {
        out.push_str(&format!(
            "<span class=\"{}\">{}</span>\n",
            class,
            escape(skill.label())
        ));
    }
    out.push_str("</div>\n");
    out
}

pub fn render_project_card(project: &Project) -> String {
    let stack: Vec<SkillTag> = project.stack.iter().map(|s| SkillTag::new(s.as_str())).collect();

    let mut out = String::new();
    out.push_str(&format!(
        "<article class=\"project\" data-project-id=\"{}\">\n",
        escape(&project.id)
    ));
    out.push_str(&format!(
        "<div class=\"project-card\" style=\"background-image: url('{}')\">\n",
        escape(&css_url(&project.image))
    ));
    out.push_str("<div class=\"project-body\">\n");
    out.push_str(&format!("<h3>{}</h3>\n", escape(&project.title)));
    out.push_str(&format!("<p>{}</p>\n", escape(&project.description)));
    out.push_str(&render_skills(&stack, "tag tag-dark"));
    out.push_str("<div class=\"project-links\">\n");
    out.push_str(&format!(
        "<a class=\"btn btn-dark\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{} Code</a>\n",
        escape(&project.github),
        Icon::Github.svg("icon-sm")
    ));
    out.push_str(&format!(
        "<a class=\"btn btn-primary\" href=\"{}\" target=\"_blank\" rel=\"noreferrer\">{} Live</a>\n",
        escape(&project.live),
        Icon::ExternalLink.svg("icon-sm")
    ));
    out.push_str("</div>\n</div>\n</div>\n");
    out.push_str("<div class=\"timeline\"><div class=\"timeline-dot\">•</div><div class=\"timeline-line\"></div></div>\n");
    out.push_str("</article>\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::contact::DEFAULT_FORM_ENDPOINT;
    use crate::domain::content;

    fn page_for(portfolio: &Portfolio) -> PortfolioPage<'_> {
        PortfolioPage::new(portfolio, DEFAULT_FORM_ENDPOINT, 2026)
    }

    #[test]
    fn test_skills_rendered_in_order() {
        let skills = content::skills();
        let html = render_skills(&skills, "tag");
        assert_eq!(html.matches("<span class=\"tag\">").count(), skills.len());

        let mut cursor = 0;
        for skill in &skills {
            let needle = format!(">{}</span>", escape(skill.label()));
            let pos = html[cursor..].find(&needle).expect("skill missing or out of order");
            cursor += pos + needle.len();
        }
    }

    #[test]
    fn test_duplicate_skills_are_not_collapsed() {
        let skills = vec![SkillTag::from("CSS"), SkillTag::from("CSS")];
        assert_eq!(render_skills(&skills, "tag").matches(">CSS</span>").count(), 2);
    }

    #[test]
    fn test_sidebar_has_download_mailto_and_socials() {
        let portfolio = content::portfolio();
        let html = page_for(&portfolio).render_sidebar();
        assert!(html.contains("href=\"/shameem.docx\" download=\"shameem.docx\""));
        assert!(html.contains("href=\"mailto:me.muhammedshameem@gmail.com\""));
        assert!(html.contains("<h1>Muhammed Shameem P</h1>"));
        assert!(html.contains("Frontend Developer • India"));
        assert!(html.contains(
            "href=\"https://github.com/mushameem\" target=\"_blank\" rel=\"noreferrer\""
        ));
        assert!(html.contains(
            "href=\"https://www.linkedin.com/in/mushameem\" target=\"_blank\" rel=\"noreferrer\""
        ));
        assert!(html.contains("React &amp; Next.js"));
    }

    #[test]
    fn test_card_links_are_verbatim() {
        let project = content::projects()
            .into_iter()
            .find(|p| p.id == "multi-wallet-connect")
            .unwrap();
        let html = render_project_card(&project);
        assert!(html.contains("href=\"web3-token-farm-ntmg.vercel.app\""));
        assert!(html.contains("href=\"https://github.com/shameem8ods/Web3-multiWalletConnect\""));
        assert!(html.contains("background-image: url('image/multi.png')"));
    }

    #[test]
    fn test_card_background_survives_apostrophe_in_image_name() {
        let mut project = content::projects().remove(0);
        project.image = "image/it's (v2).png".to_string();
        let html = render_project_card(&project);
        assert!(html.contains("style=\"background-image: url('image/it%27s%20%28v2%29.png')\""));
        assert!(!html.contains("&#39;"));
    }

    #[test]
    fn test_contact_form_fields_are_required() {
        let portfolio = content::portfolio();
        let html = page_for(&portfolio).render_contact_form();
        assert!(html.contains("<form action=\"https://formspree.io/f/mrbaynvy\" method=\"POST\">"));
        assert!(html.contains("<input type=\"text\" name=\"name\" id=\"name\" placeholder=\"Your Name\" required>"));
        assert!(html.contains("<input type=\"email\" name=\"_replyto\" id=\"email\" placeholder=\"Your Email\" required>"));
        assert!(html.contains("<textarea name=\"message\" id=\"message\" rows=\"5\" placeholder=\"Your Message\" required></textarea>"));
        assert_eq!(html.matches(" required").count(), 3);
    }

    #[test]
    fn test_footer_uses_given_year() {
        let portfolio = content::portfolio();
        let footer = page_for(&portfolio).render_footer();
        assert!(footer.contains("© 2026 Muhammed Shameem P. Crafted with attention to detail."));
    }
}
