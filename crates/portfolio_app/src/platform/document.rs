use std::collections::{BTreeMap, BTreeSet};

/// One element of the in-memory document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    pub classes: BTreeSet<String>,
    pub text: String,
    pub styles: BTreeMap<String, String>,
}

/// A flat stand-in for the host DOM: elements addressed by id.
///
/// Mutators on absent ids are deliberate no-ops, matching the page's
/// missing-element tolerance.
#[derive(Debug, Clone, Default)]
pub struct Document {
    elements: BTreeMap<String, Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element (or returns the existing one) under `id`.
    pub fn insert(&mut self, id: impl Into<String>) -> &mut Element {
        self.elements.entry(id.into()).or_default()
    }

    pub fn remove(&mut self, id: &str) -> bool {
        self.elements.remove(id).is_some()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn add_class(&mut self, id: &str, class: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.classes.insert(class.to_string());
        }
    }

    pub fn remove_class(&mut self, id: &str, class: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.classes.remove(class);
        }
    }

    pub fn has_class(&self, id: &str, class: &str) -> bool {
        self.elements
            .get(id)
            .is_some_and(|element| element.classes.contains(class))
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(id) {
            element.text = text.into();
        }
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|element| element.text.as_str())
    }

    pub fn set_style(&mut self, id: &str, property: &str, value: impl Into<String>) {
        if let Some(element) = self.elements.get_mut(id) {
            element.styles.insert(property.to_string(), value.into());
        }
    }

    pub fn style(&self, id: &str, property: &str) -> Option<&str> {
        self.elements
            .get(id)
            .and_then(|element| element.styles.get(property))
            .map(String::as_str)
    }

    /// Ids of all elements whose id starts with `prefix`, in order.
    pub fn ids_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.elements
            .range(prefix.to_string()..)
            .take_while(|(id, _)| id.starts_with(prefix))
            .map(|(id, _)| id.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::Document;

    #[test]
    fn mutations_on_missing_elements_are_noops() {
        let mut doc = Document::new();
        doc.add_class("ghost", "error");
        doc.set_text("ghost", "boo");
        doc.set_style("ghost", "transform", "none");

        assert!(!doc.contains("ghost"));
        assert!(!doc.has_class("ghost", "error"));
        assert_eq!(doc.text("ghost"), None);
    }

    #[test]
    fn classes_are_a_set() {
        let mut doc = Document::new();
        doc.insert("field");
        doc.add_class("field", "error");
        doc.add_class("field", "error");

        assert_eq!(doc.get("field").unwrap().classes.len(), 1);

        doc.remove_class("field", "error");
        assert!(!doc.has_class("field", "error"));
    }

    #[test]
    fn prefix_query_returns_matching_ids_in_order() {
        let mut doc = Document::new();
        doc.insert("notification-2");
        doc.insert("notification-10");
        doc.insert("navbar");

        assert_eq!(
            doc.ids_with_prefix("notification-"),
            vec!["notification-10".to_string(), "notification-2".to_string()]
        );
    }
}
