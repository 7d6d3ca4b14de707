//! Ranked search over a list of items.
//!
//! A [`Finder`] owns the candidates, projects each one to its searchable
//! text through a selector, runs the configured algorithm, and returns the
//! matches ordered by score and tiebreakers.

use std::borrow::Cow;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use thread_local::ThreadLocal;

use crate::fuzzy_matcher::MatchIndices;
use crate::fuzzy_matcher::slab::Slab;
use crate::item::Tiebreak;
use crate::options::FinderOptions;

/// Projects an item to the text it is searched by. `None` skips the item.
pub type SelectFn<'s, T> = dyn Fn(&T) -> Option<Cow<'_, str>> + Send + Sync + 's;

/// Shared handle to a [`SelectFn`]
pub type Selector<'s, T> = Arc<SelectFn<'s, T>>;

fn identity<T: AsRef<str>>(item: &T) -> Option<Cow<'_, str>> {
    Some(Cow::Borrowed(item.as_ref()))
}

/// A matched item
#[derive(Debug)]
pub struct ResultEntry<'a, T> {
    /// The matched item
    pub item: &'a T,
    /// Match score, higher is better
    pub score: i32,
    /// Position of the item in the finder's list
    pub index: usize,
    /// Rune count of the selected text
    pub length: usize,
    /// First rune of the match, `None` for an empty query
    pub start: Option<usize>,
    /// One past the last rune of the match, `None` for an empty query
    pub end: Option<usize>,
    /// Matched rune indices, when requested
    pub positions: Option<MatchIndices>,
}

/// Fuzzy finder over a fixed list of items
///
/// `'s` bounds the selector, so items may borrow from a local buffer.
pub struct Finder<'s, T> {
    items: Vec<T>,
    options: FinderOptions,
    selector: Selector<'s, T>,
    tiebreaks: Vec<Tiebreak<T>>,
    slab: ThreadLocal<RefCell<Slab>>,
}

impl<'s, T: AsRef<str> + 's> Finder<'s, T> {
    /// Finder with default options searching the items' own text.
    pub fn new(items: Vec<T>) -> Self {
        Self::with_options(items, FinderOptions::default())
    }

    /// Finder searching the items' own text.
    pub fn with_options(items: Vec<T>, options: FinderOptions) -> Self {
        Self::custom(items, options, identity::<T>)
    }
}

impl<'s, T> Finder<'s, T> {
    /// Finder for items searched through `selector`.
    pub fn custom<F>(items: Vec<T>, options: FinderOptions, selector: F) -> Self
    where
        F: Fn(&T) -> Option<Cow<'_, str>> + Send + Sync + 's,
    {
        debug!(
            "finder: {} items, algorithm {}, casing {}",
            items.len(),
            options.algorithm,
            options.casing
        );
        let tiebreaks = options.tiebreak.iter().copied().map(Tiebreak::from).collect();
        Self {
            items,
            options,
            selector: Arc::new(selector),
            tiebreaks,
            slab: ThreadLocal::new(),
        }
    }

    /// Replace the selector.
    pub fn with_selector<F>(mut self, selector: F) -> Self
    where
        F: Fn(&T) -> Option<Cow<'_, str>> + Send + Sync + 's,
    {
        self.selector = Arc::new(selector);
        self
    }

    /// Append a tiebreaker, applied after the ones already configured. It
    /// also receives the selector, to compare the searched text.
    pub fn with_tiebreaker<F>(mut self, tiebreak: F) -> Self
    where
        F: Fn(&ResultEntry<'_, T>, &ResultEntry<'_, T>, &SelectFn<'_, T>) -> Ordering
            + Send
            + Sync
            + 'static,
    {
        self.tiebreaks.push(Tiebreak::custom(tiebreak));
        self
    }

    /// The candidates, in their original order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The options this finder was built with.
    pub fn options(&self) -> &FinderOptions {
        &self.options
    }

    fn selected_len(&self, item: &T) -> usize {
        (self.selector)(item).map_or(0, |text| text.chars().count())
    }

    fn compare(&self, a: &ResultEntry<'_, T>, b: &ResultEntry<'_, T>) -> Ordering {
        b.score.cmp(&a.score).then_with(|| {
            self.tiebreaks
                .iter()
                .map(|tiebreak| tiebreak.compare(a, b, &*self.selector))
                .find(|ord| ord.is_ne())
                .unwrap_or(Ordering::Equal)
        })
    }

    /// Search the items for `query`.
    ///
    /// An empty query returns every item, unscored and in original order.
    ///
    /// The selector and tiebreakers may search this finder again.
    pub fn find(&self, query: &str) -> Vec<ResultEntry<'_, T>> {
        if query.is_empty() {
            return self
                .items
                .iter()
                .enumerate()
                .map(|(index, item)| ResultEntry {
                    item,
                    score: 0,
                    index,
                    length: self.selected_len(item),
                    start: None,
                    end: None,
                    positions: None,
                })
                .collect();
        }

        let pattern: Vec<char> = query.chars().collect();
        let case_sensitive = self.options.casing.is_case_sensitive(query);
        let normalize = !case_sensitive;
        let algorithm = self.options.algorithm;
        let with_positions = self.options.with_positions;
        // the start must not depend on whether positions were asked for
        let trace = with_positions || algorithm.start_needs_trace();
        let slab = self
            .slab
            .get_or(|| RefCell::new(Slab::new(self.options.slab_size16, self.options.slab_size32)));

        let mut text = Vec::new();
        let mut results = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            let Some(selected) = (self.selector)(item) else {
                continue;
            };
            if selected.is_empty() {
                continue;
            }
            text.clear();
            text.extend(selected.chars());

            let (result, positions) = algorithm.run(
                case_sensitive,
                normalize,
                true,
                &text,
                &pattern,
                trace,
                &mut slab.borrow_mut(),
            );
            let Some(span) = result.span() else {
                continue;
            };
            results.push(ResultEntry {
                item,
                score: result.score,
                index,
                length: text.len(),
                start: Some(span.start),
                end: Some(span.end),
                positions: positions.filter(|_| with_positions),
            });
        }

        let matched = results.len();
        if self.options.sort {
            results.sort_by(|a, b| self.compare(a, b));
        }
        if let Some(limit) = self.options.limit {
            results.truncate(limit);
        }
        debug!(
            "find {:?}: {} of {} items matched, returning {}",
            query,
            matched,
            self.items.len(),
            results.len()
        );
        results
    }
}

impl<T> Debug for Finder<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Finder")
            .field("items", &self.items.len())
            .field("options", &self.options)
            .field("tiebreaks", &self.tiebreaks)
            .finish()
    }
}
