//! Corpus abstraction
//!
//! The engine never owns the items it ranks. A host application exposes its
//! live collection through [`Corpus`]; every index generation snapshots the
//! `Arc`s it was built from, so items stay alive for as long as a query may
//! return them.

use std::sync::Arc;

use parking_lot::RwLock;

/// Anything with a title the engine can index.
pub trait Item {
    /// Display title; the only text the engine reads.
    fn title(&self) -> &str;
}

impl Item for String {
    fn title(&self) -> &str {
        self
    }
}

/// Read access to the current collection of items.
///
/// Implementations must return items in a stable order: the order is the
/// tiebreak between equally ranked results.
pub trait Corpus {
    type Item: Item;

    /// Snapshot of the items to index.
    fn items(&self) -> Vec<Arc<Self::Item>>;
}

impl<T: Item> Corpus for Vec<Arc<T>> {
    type Item = T;

    fn items(&self) -> Vec<Arc<T>> {
        self.clone()
    }
}

/// Shared, host-mutable collection.
impl<T: Item> Corpus for RwLock<Vec<Arc<T>>> {
    type Item = T;

    fn items(&self) -> Vec<Arc<T>> {
        self.read().clone()
    }
}

impl<C: Corpus + ?Sized> Corpus for Arc<C> {
    type Item = C::Item;

    fn items(&self) -> Vec<Arc<Self::Item>> {
        (**self).items()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct App {
        name: &'static str,
    }

    impl Item for App {
        fn title(&self) -> &str {
            self.name
        }
    }

    #[test]
    fn test_vec_corpus_keeps_order() {
        let corpus = vec![Arc::new(App { name: "b" }), Arc::new(App { name: "a" })];
        let titles: Vec<&str> = corpus.items().iter().map(|i| i.name).collect();
        assert_eq!(titles, vec!["b", "a"]);
    }

    #[test]
    fn test_shared_corpus_sees_updates() {
        let corpus = Arc::new(RwLock::new(vec![Arc::new("first".to_string())]));
        assert_eq!(corpus.items().len(), 1);

        corpus.write().push(Arc::new("second".to_string()));
        let items = corpus.items();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title(), "second");
    }
}
