use portfolio_core::{card_tilt, NotificationKind, PageViewModel};

use super::document::Document;

const SUBMIT_LABEL: &str = "Send Message";
const SENDING_LABEL: &str = "Sending...";

/// Maps the core view-model onto the in-memory document.
///
/// All mutations are idempotent: rendering the same view twice leaves the
/// document unchanged.
pub struct Presenter {
    sections: Vec<String>,
}

impl Presenter {
    pub fn new(sections: Vec<String>) -> Self {
        Self { sections }
    }

    pub fn render(&self, doc: &mut Document, view: &PageViewModel) {
        self.render_nav(doc, view);
        render_hero(doc, view);
        render_form(doc, view);
        render_notifications(doc, view);
        render_reveals(doc, view);
        render_counters(doc, view);
    }

    fn render_nav(&self, doc: &mut Document, view: &PageViewModel) {
        if view.nav.scrolled {
            doc.add_class("navbar", "scrolled");
        } else {
            doc.remove_class("navbar", "scrolled");
        }
        for section in &self.sections {
            let link = format!("nav-link-{section}");
            if view.nav.active_section.as_deref() == Some(section.as_str()) {
                doc.add_class(&link, "active");
            } else {
                doc.remove_class(&link, "active");
            }
        }
    }

    /// Seeds the entrance-animation delay of each observed card, in document
    /// order, before anything is revealed.
    pub fn seed_animation_delays(&self, doc: &mut Document, card_ids: &[String]) {
        for (index, id) in card_ids.iter().enumerate() {
            doc.set_style(id, "animation-delay", format!("{:.1}s", index as f64 * 0.1));
        }
    }

    /// Pointer-over-card 3D effect; coordinates are relative to the card.
    pub fn apply_card_tilt(
        &self,
        doc: &mut Document,
        id: &str,
        width: f64,
        height: f64,
        x: f64,
        y: f64,
    ) {
        let (rotate_x, rotate_y) = card_tilt(width, height, x, y);
        doc.set_style(
            id,
            "transform",
            format!("perspective(1000px) rotateX({rotate_x}deg) rotateY({rotate_y}deg) translateZ(10px)"),
        );
    }

    pub fn clear_card_tilt(&self, doc: &mut Document, id: &str) {
        doc.set_style(
            id,
            "transform",
            "perspective(1000px) rotateX(0) rotateY(0) translateZ(0)",
        );
    }

    pub fn apply_tag_hover(&self, doc: &mut Document, id: &str, entered: bool) {
        let transform = if entered {
            "scale(1.05) translateY(-2px)"
        } else {
            "scale(1) translateY(0)"
        };
        doc.set_style(id, "transform", transform);
    }
}

fn render_hero(doc: &mut Document, view: &PageViewModel) {
    if let Some(subtitle) = &view.hero.subtitle {
        doc.set_text("hero-subtitle", subtitle.clone());
    }
    let mut transform = format!("translateY({}px)", view.hero.particle_offset_y);
    if let Some((x, y)) = view.hero.pointer_shift {
        transform.push_str(&format!(" translate({x}px, {y}px)"));
    }
    doc.set_style("hero-particles", "transform", transform);
}

fn render_form(doc: &mut Document, view: &PageViewModel) {
    let Some(form) = &view.form else {
        return;
    };
    for field_view in &form.fields {
        let field_id = field_view.field.key();
        let error_id = format!("{field_id}-error");
        doc.set_text(field_id, field_view.value.clone());
        match field_view.error {
            Some(message) => {
                doc.add_class(field_id, "error");
                let node = doc.insert(error_id.clone());
                node.classes.insert("error-message".to_string());
                node.text = message.to_string();
            }
            None => {
                doc.remove_class(field_id, "error");
                doc.remove(&error_id);
            }
        }
    }
    if form.sending {
        doc.add_class("submit-button", "disabled");
        doc.set_text("submit-button", SENDING_LABEL);
    } else {
        doc.remove_class("submit-button", "disabled");
        doc.set_text("submit-button", SUBMIT_LABEL);
    }
}

fn render_notifications(doc: &mut Document, view: &PageViewModel) {
    // Drop banners whose entity is gone.
    for id in doc.ids_with_prefix("notification-") {
        let numeric = id.trim_start_matches("notification-");
        let live = numeric
            .parse::<u64>()
            .is_ok_and(|n| view.notifications.iter().any(|toast| toast.id == n));
        if !live {
            doc.remove(&id);
        }
    }
    for toast in &view.notifications {
        let id = format!("notification-{}", toast.id);
        let element = doc.insert(id.clone());
        element.text = toast.message.clone();
        element.classes.insert("notification".to_string());
        element.classes.insert(kind_class(toast.kind).to_string());
        if toast.exiting {
            doc.add_class(&id, "notification--exit");
        }
    }
}

fn render_reveals(doc: &mut Document, view: &PageViewModel) {
    for id in &view.revealed {
        doc.add_class(id, "animate-in");
    }
}

fn render_counters(doc: &mut Document, view: &PageViewModel) {
    for counter in &view.counters {
        doc.set_text(&counter.id, counter.text.clone());
    }
}

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "notification--info",
        NotificationKind::Success => "notification--success",
        NotificationKind::Error => "notification--error",
    }
}
