//! Element collections returned by multi-element queries

use crate::element::Element;

/// Snapshot of matched elements, in document order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Elements {
    items: Vec<Element>,
}

impl Elements {
    pub(crate) fn new(items: Vec<Element>) -> Self {
        Self { items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Element> {
        self.items.get(index)
    }

    pub fn first(&self) -> Option<&Element> {
        self.items.first()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Element> {
        self.items.iter()
    }

    /// Call `callback(element, index)` for each element
    pub fn each(&self, mut callback: impl FnMut(&Element, usize)) -> &Self {
        for (index, element) in self.items.iter().enumerate() {
            callback(element, index);
        }
        self
    }

    pub fn to_vec(&self) -> Vec<Element> {
        self.items.clone()
    }
}

impl IntoIterator for Elements {
    type Item = Element;
    type IntoIter = std::vec::IntoIter<Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Elements {
    type Item = &'a Element;
    type IntoIter = std::slice::Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
