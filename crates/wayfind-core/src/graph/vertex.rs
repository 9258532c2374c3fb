use serde::Serialize;
use std::fmt;

/// Associative combination of two vertex elements, used when contracting.
///
/// The result should differ from every element still in the graph;
/// `Graph::contract` refuses a merge that would land on an unrelated vertex.
pub trait Combine {
    fn combined(&self, other: &Self) -> Self;
}

/// Labels are joined with `-`
impl Combine for String {
    fn combined(&self, other: &Self) -> Self {
        format!("{self}-{other}")
    }
}

impl<T: Clone> Combine for Vec<T> {
    fn combined(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        merged.extend(other.iter().cloned());
        merged
    }
}

/// Graph vertex identified by the value of its element
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Vertex<E> {
    element: E,
}

impl<E> Vertex<E> {
    pub fn new(element: E) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn into_element(self) -> E {
        self.element
    }
}

impl<E: Combine> Vertex<E> {
    pub fn combined(&self, other: &Vertex<E>) -> Vertex<E> {
        Vertex::new(self.element.combined(&other.element))
    }
}

impl<E: fmt::Display> fmt::Display for Vertex<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.element, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_element_equality() {
        assert_eq!(Vertex::new("a".to_string()), Vertex::new("a".to_string()));
        assert_ne!(Vertex::new(1), Vertex::new(2));
    }

    #[test]
    fn test_string_combine() {
        let a = Vertex::new("jqt".to_string());
        let b = Vertex::new("rhn".to_string());
        assert_eq!(a.combined(&b).element(), "jqt-rhn");
    }

    #[test]
    fn test_vec_combine() {
        let merged = vec![1, 2].combined(&vec![3]);
        assert_eq!(merged, vec![1, 2, 3]);
    }

    #[test]
    fn test_display_and_serialize() {
        let v = Vertex::new("hfx".to_string());
        assert_eq!(v.to_string(), "hfx");
        assert_eq!(serde_json::to_value(&v).unwrap(), "hfx");
    }
}
