// SPDX-License-Identifier: PMPL-1.0-or-later

//! Home, about and contact pages

use crate::content::{self, Feature, Milestone, Testimonial};
use crate::i18n::{LocaleContext, Messages};
use serde::{Deserialize, Serialize};

/// Countries highlighted on the home page map, with their fill colour.
pub const MAP_COUNTRIES: [(&str, &str); 6] = [
    ("jp", "#ec4899"),
    ("kr", "#f97316"),
    ("vn", "#f97316"),
    ("sg", "#f97316"),
    ("my", "#f97316"),
    ("cn", "#f97316"),
];

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub h1: String,
    pub h2: String,
    pub h3: String,
    pub p: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValueProps {
    pub heading: String,
    pub items: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Testimonials {
    pub eyebrow: String,
    pub heading: String,
    pub highlight: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MapCountry {
    pub key: String,
    pub color: String,
    pub tooltip: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LegendEntry {
    pub color: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AsiaMap {
    pub eyebrow: String,
    pub heading: String,
    pub tagline: String,
    pub fallback_title: String,
    pub fallback_desc: String,
    pub countries: Vec<MapCountry>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub hero: Hero,
    pub value_props: ValueProps,
    pub asia_map: AsiaMap,
    pub testimonials: Testimonials,
}

/// Founder profile on the about page. Every field is optional in the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Ceo {
    pub title: String,
    pub highlight: String,
    pub quote: String,
    pub name: String,
    pub position: String,
    pub date: String,
    pub paragraphs: Vec<String>,
    pub badges: Vec<String>,
    pub photo: String,
    pub photo_alt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AboutPage {
    pub story_title: String,
    pub story_desc: String,
    pub milestones: Vec<Milestone>,
    pub vision_title: String,
    pub vision_desc: String,
    pub mission_title: String,
    pub mission_items: Vec<String>,
    pub ceo: Ceo,
}

#[derive(Debug, Clone, Serialize)]
pub struct Field {
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactPage {
    pub heading: String,
    pub phone_label: String,
    pub email_label: String,
    pub form_title: String,
    pub fields: Vec<Field>,
    pub submit: String,
    pub success_title: String,
    pub success_desc: String,
    pub company_name: String,
    pub company_address: String,
    pub hours: String,
}

fn asia_map(messages: &Messages<'_>) -> AsiaMap {
    let countries: Vec<MapCountry> = MAP_COUNTRIES
        .iter()
        .map(|(key, color)| MapCountry {
            key: key.to_string(),
            color: color.to_string(),
            tooltip: messages.t(&format!("countries.{}", key)),
        })
        .collect();

    let others: Vec<&str> = countries
        .iter()
        .skip(1)
        .map(|country| country.tooltip.as_str())
        .collect();
    let legend = vec![
        LegendEntry {
            color: MAP_COUNTRIES[0].1.to_string(),
            label: messages.t("legend.jp"),
        },
        LegendEntry {
            color: MAP_COUNTRIES[1].1.to_string(),
            label: format!("{}: {}", messages.t("legend.others"), others.join(", ")),
        },
    ];

    AsiaMap {
        eyebrow: messages.t("eyebrow"),
        heading: messages.t("heading"),
        tagline: messages.t("tagline"),
        fallback_title: messages.t("fallback.title"),
        fallback_desc: messages.t("fallback.desc"),
        countries,
        legend,
    }
}

pub fn home(ctx: &LocaleContext<'_>) -> HomePage {
    let hero = ctx.scope("hero");
    let root = ctx.messages();
    let testimonials = ctx.scope("testimonials");

    HomePage {
        hero: Hero {
            h1: hero.t("h1"),
            h2: hero.t("h2"),
            h3: hero.t("h3"),
            p: hero.t("p"),
        },
        value_props: ValueProps {
            heading: root.t("valueProps.heading"),
            items: content::records(root.raw("valueProps.items")),
        },
        asia_map: asia_map(&ctx.scope("asiaPromote")),
        testimonials: Testimonials {
            eyebrow: testimonials.t("eyebrow"),
            heading: testimonials.t("heading"),
            highlight: testimonials.t("highlight"),
            items: content::records(testimonials.raw("items")),
        },
    }
}

pub fn about(ctx: &LocaleContext<'_>) -> AboutPage {
    let about = ctx.scope("about");
    let mut ceo: Ceo = about.raw("ceo").unwrap_or_default();
    if ceo.title.is_empty() {
        ceo.title = about.t("ceo.title");
    }
    if ceo.photo_alt.is_empty() {
        ceo.photo_alt = if ceo.title.is_empty() {
            "CEO".to_string()
        } else {
            ceo.title.clone()
        };
    }

    AboutPage {
        story_title: about.t("story.title"),
        story_desc: about.t("story.desc"),
        milestones: content::records(about.raw("story.milestones")),
        vision_title: about.t("vision.title"),
        vision_desc: about.t("vision.desc"),
        mission_title: about.t("mission.title"),
        mission_items: about.raw("mission.items").unwrap_or_default(),
        ceo,
    }
}

pub fn contact(ctx: &LocaleContext<'_>) -> ContactPage {
    let page = ctx.scope("contactPage");
    let form = ctx.scope("contact");
    let company = ctx.scope("footer.company");

    let fields = ["firstName", "lastName", "email", "phone", "message"]
        .iter()
        .map(|name| Field {
            name: name.to_string(),
            label: form.t(name),
        })
        .collect();

    ContactPage {
        heading: page.t("heading"),
        phone_label: page.t("phone"),
        email_label: page.t("email"),
        form_title: form.t("formTitle"),
        fields,
        submit: form.t("submit"),
        success_title: page.t("successTitle"),
        success_desc: page.t("successDesc"),
        company_name: company.t("name"),
        company_address: company.t("address"),
        hours: ctx.scope("topbar").t("hours"),
    }
}
