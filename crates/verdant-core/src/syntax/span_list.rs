//! Read-only lists that know where each of their elements starts
//!
//! Offsets are computed once, at construction, as a prefix sum over the
//! element lengths. Every later lookup is O(1), and finding the element that
//! covers an offset is a binary search.

use super::green::GreenSymbol;
use std::ops::Index;
use std::sync::Arc;

/// Anything that spans a fixed number of source bytes
pub trait Spanned {
    fn length(&self) -> usize;
}

impl<T: Spanned + ?Sized> Spanned for Arc<T> {
    fn length(&self) -> usize {
        (**self).length()
    }
}

fn prefix_starts<T: Spanned>(elements: &[T], separator_length: usize) -> (Box<[usize]>, usize) {
    let mut starts = Vec::with_capacity(elements.len());
    let mut length = 0;
    for (i, element) in elements.iter().enumerate() {
        if i > 0 {
            length += separator_length;
        }
        starts.push(length);
        length += element.length();
    }
    (starts.into_boxed_slice(), length)
}

/// Position of the element containing `offset`, given the element starts
fn covering_index(starts: &[usize], offset: usize) -> usize {
    starts.partition_point(|&start| start <= offset) - 1
}

/// An immutable sequence of spanned elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanList<T> {
    elements: Box<[T]>,
    starts: Box<[usize]>,
    length: usize,
}

impl<T: Spanned> SpanList<T> {
    pub fn new(elements: Vec<T>) -> Self {
        let (starts, length) = prefix_starts(&elements, 0);
        Self {
            elements: elements.into_boxed_slice(),
            starts,
            length,
        }
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Total length of all elements
    pub fn length(&self) -> usize {
        self.length
    }

    /// Offset of element `index` from the start of the list
    pub fn element_offset(&self, index: usize) -> usize {
        self.starts[index]
    }

    /// Index of the element covering `offset`, if the offset is inside the list
    pub fn child_index_at(&self, offset: usize) -> Option<usize> {
        (offset < self.length).then(|| covering_index(&self.starts, offset))
    }
}

impl<T> Index<usize> for SpanList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<'a, T> IntoIterator for &'a SpanList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

/// One child of a [`SeparatedSpanList`] in interleaved order
#[derive(Debug, Clone, Copy)]
pub enum SeparatedChild<'a, T> {
    Element(&'a T),
    Separator(&'a GreenSymbol),
}

/// A non-empty sequence of elements joined by copies of one separator symbol
///
/// Stores N elements and implies N - 1 separators between them. Children
/// are addressed in interleaved order: element 0, separator 0, element 1, ...
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatedSpanList<T> {
    elements: Box<[T]>,
    separator: GreenSymbol,
    starts: Box<[usize]>,
    length: usize,
}

impl<T: Spanned> SeparatedSpanList<T> {
    /// Panics if `elements` is empty.
    pub fn new(elements: Vec<T>, separator: GreenSymbol) -> Self {
        assert!(
            !elements.is_empty(),
            "a separated list needs at least one element"
        );
        let (starts, length) = prefix_starts(&elements, separator.length());
        Self {
            elements: elements.into_boxed_slice(),
            separator,
            starts,
            length,
        }
    }

    /// Number of elements, not counting separators
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    pub fn separator(&self) -> &GreenSymbol {
        &self.separator
    }

    pub fn separator_count(&self) -> usize {
        self.elements.len() - 1
    }

    /// Total length of elements and separators
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn element_offset(&self, index: usize) -> usize {
        self.starts[index]
    }

    /// Offset of separator `index`, which follows element `index`
    pub fn separator_offset(&self, index: usize) -> usize {
        assert!(
            index < self.separator_count(),
            "separator index {index} out of range"
        );
        self.starts[index] + self.elements[index].length()
    }

    /// Number of elements plus separators
    pub fn all_children_count(&self) -> usize {
        self.elements.len() * 2 - 1
    }

    /// Child `index` in interleaved order
    pub fn child(&self, index: usize) -> SeparatedChild<'_, T> {
        if index % 2 == 0 {
            SeparatedChild::Element(&self.elements[index / 2])
        } else {
            assert!(index / 2 < self.separator_count());
            SeparatedChild::Separator(&self.separator)
        }
    }

    /// Offset of child `index` in interleaved order
    pub fn child_offset(&self, index: usize) -> usize {
        if index % 2 == 0 {
            self.element_offset(index / 2)
        } else {
            self.separator_offset(index / 2)
        }
    }

    /// Interleaved index of the child covering `offset`
    pub fn child_index_at(&self, offset: usize) -> Option<usize> {
        if offset >= self.length {
            return None;
        }
        let element = covering_index(&self.starts, offset);
        if offset < self.starts[element] + self.elements[element].length() {
            Some(element * 2)
        } else {
            Some(element * 2 + 1)
        }
    }
}

impl<T> Index<usize> for SeparatedSpanList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Chunk(usize);

    impl Spanned for Chunk {
        fn length(&self) -> usize {
            self.0
        }
    }

    fn chunks(lengths: &[usize]) -> Vec<Chunk> {
        lengths.iter().copied().map(Chunk).collect()
    }

    #[test]
    fn test_span_list_offsets() {
        let list = SpanList::new(chunks(&[2, 0, 3, 1]));
        assert_eq!(list.length(), 6);
        assert_eq!(list.element_offset(0), 0);
        assert_eq!(list.element_offset(1), 2);
        assert_eq!(list.element_offset(2), 2);
        assert_eq!(list.element_offset(3), 5);
    }

    #[test]
    fn test_span_list_child_index_skips_empty_elements() {
        let list = SpanList::new(chunks(&[2, 0, 3, 1]));
        assert_eq!(list.child_index_at(0), Some(0));
        assert_eq!(list.child_index_at(2), Some(2));
        assert_eq!(list.child_index_at(5), Some(3));
        assert_eq!(list.child_index_at(6), None);
    }

    #[test]
    fn test_empty_span_list() {
        let list = SpanList::<Chunk>::new(Vec::new());
        assert!(list.is_empty());
        assert_eq!(list.length(), 0);
        assert_eq!(list.child_index_at(0), None);
    }

    #[test]
    fn test_separator_offsets_match_rendered_text() {
        // "ab,,cde,f"
        let text = "ab,,cde,f";
        let list = SeparatedSpanList::new(chunks(&[2, 0, 3, 1]), GreenSymbol::comma());

        assert_eq!(list.length(), text.len());
        assert_eq!(list.all_children_count(), 7);
        let commas: Vec<usize> = text.match_indices(',').map(|(i, _)| i).collect();
        for (i, expected) in commas.into_iter().enumerate() {
            assert_eq!(list.separator_offset(i), expected);
        }
    }

    #[test]
    fn test_separated_child_index_at() {
        let list = SeparatedSpanList::new(chunks(&[2, 0, 3]), GreenSymbol::comma());
        // "ab,,cde"
        assert_eq!(list.child_index_at(1), Some(0));
        assert_eq!(list.child_index_at(2), Some(1));
        assert_eq!(list.child_index_at(3), Some(3));
        assert_eq!(list.child_index_at(4), Some(4));
        assert_eq!(list.child_index_at(7), None);
    }

    #[test]
    fn test_interleaved_children() {
        let list = SeparatedSpanList::new(chunks(&[1, 1]), GreenSymbol::colon());
        assert!(matches!(list.child(0), SeparatedChild::Element(Chunk(1))));
        assert!(matches!(list.child(1), SeparatedChild::Separator(s) if *s == GreenSymbol::colon()));
        assert_eq!(list.child_offset(2), 2);
    }

    #[test]
    #[should_panic(expected = "at least one element")]
    fn test_empty_separated_list_fails_fast() {
        SeparatedSpanList::<Chunk>::new(Vec::new(), GreenSymbol::comma());
    }
}
