//! The demo portfolio document: element tree, layout declaration, and the
//! geometry both visibility observers work from.

use portfolio_core::{PageLayout, RevealTarget, SectionGeometry, StatCard};

use super::document::Document;

/// Vertical extent of one observed element.
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub top: i64,
    pub height: i64,
}

pub struct DemoPage {
    pub document: Document,
    pub layout: PageLayout,
    /// Elements watched by the reveal observer (10%, 50px bottom margin).
    pub reveal_rects: Vec<(String, Rect)>,
    /// Stat cards watched by the stats observer (50%).
    pub stat_rects: Vec<(String, Rect)>,
    /// Observed cards in document order, for animation-delay seeding.
    pub card_order: Vec<String>,
}

const HERO_SUBTITLE: &str = "Building reliable systems, one component at a time";

pub fn build_demo_page() -> DemoPage {
    let sections = [
        ("hero", 0, 900),
        ("about", 900, 700),
        ("competencies", 1600, 800),
        ("stats", 2400, 600),
        ("experience", 3000, 900),
        ("contact", 3900, 800),
    ];

    let mut document = Document::new();
    document.insert("navbar");
    for (id, _, _) in sections {
        document.insert(id);
        document.insert(format!("nav-link-{id}"));
    }
    document.insert("hero-subtitle").text = HERO_SUBTITLE.to_string();
    document.insert("hero-particles");

    let competency_cards = ["competency-card-1", "competency-card-2", "competency-card-3"];
    let timeline_items = ["timeline-item-1", "timeline-item-2", "timeline-item-3"];
    let achievement_cards = ["achievement-card-1", "achievement-card-2"];
    for id in competency_cards
        .iter()
        .chain(timeline_items.iter())
        .chain(achievement_cards.iter())
    {
        document.insert(*id);
    }
    document.insert("tech-tag-1").text = "Rust".to_string();

    let stat_cards = [
        ("stat-projects", "150", 2450),
        ("stat-clients", "50+", 2450),
        ("stat-years", "12", 2450),
        ("stat-rank", "Top 5", 2450),
    ];
    for (id, text, _) in stat_cards {
        document.insert(id).text = text.to_string();
    }

    for field in ["name", "email", "subject", "message"] {
        document.insert(field);
    }
    document.insert("submit-button").text = "Send Message".to_string();

    let layout = PageLayout {
        sections: sections
            .iter()
            .map(|&(id, top, height)| SectionGeometry {
                id: id.to_string(),
                top,
                height,
            })
            .collect(),
        reveal_targets: sections
            .iter()
            .map(|&(id, _, _)| RevealTarget {
                id: id.to_string(),
                stagger_children: match id {
                    "competencies" => competency_cards.iter().map(|s| s.to_string()).collect(),
                    "experience" => timeline_items.iter().map(|s| s.to_string()).collect(),
                    _ => Vec::new(),
                },
            })
            .chain(achievement_cards.iter().map(|id| RevealTarget {
                id: id.to_string(),
                stagger_children: Vec::new(),
            }))
            .collect(),
        stat_cards: stat_cards
            .iter()
            .map(|&(id, text, _)| StatCard {
                id: id.to_string(),
                display_text: text.to_string(),
            })
            .collect(),
        hero_subtitle: Some(HERO_SUBTITLE.to_string()),
        has_contact_form: true,
    };

    let mut reveal_rects: Vec<(String, Rect)> = sections
        .iter()
        .map(|&(id, top, height)| (id.to_string(), Rect { top, height }))
        .collect();
    reveal_rects.extend(achievement_cards.iter().enumerate().map(|(i, id)| {
        (
            id.to_string(),
            Rect {
                top: 1700 + i as i64 * 250,
                height: 200,
            },
        )
    }));

    let stat_rects = stat_cards
        .iter()
        .map(|&(id, _, top)| (id.to_string(), Rect { top, height: 200 }))
        .collect();

    let card_order = competency_cards
        .iter()
        .chain(achievement_cards.iter())
        .map(|s| s.to_string())
        .chain(stat_cards.iter().map(|&(id, _, _)| id.to_string()))
        .chain(timeline_items.iter().map(|s| s.to_string()))
        .collect();

    DemoPage {
        document,
        layout,
        reveal_rects,
        stat_rects,
        card_order,
    }
}
