use std::cmp::Ordering;

use crate::pipeline::context::{Movie, TvShow};

/// Anything ordered by TMDB popularity
pub trait Ranked {
    fn popularity(&self) -> f64;
}

impl Ranked for Movie {
    fn popularity(&self) -> f64 {
        self.popularity
    }
}

impl Ranked for TvShow {
    fn popularity(&self) -> f64 {
        self.popularity
    }
}

/// Most popular first. Stable: equal popularity keeps input order.
pub fn sort_by_popularity<T: Ranked>(items: &mut [T]) {
    items.sort_by(|a, b| descending(rank(a), rank(b)));
}

fn rank<T: Ranked>(item: &T) -> f64 {
    let p = item.popularity();
    if p.is_finite() {
        p
    } else {
        0.0
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    // -0.0 and 0.0 must tie
    if a == b {
        Ordering::Equal
    } else {
        b.total_cmp(&a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item(&'static str, f64);

    impl Ranked for Item {
        fn popularity(&self) -> f64 {
            self.1
        }
    }

    fn names(items: &[Item]) -> Vec<&'static str> {
        items.iter().map(|i| i.0).collect()
    }

    #[test]
    fn test_descending() {
        let mut items = vec![Item("a", 1.0), Item("b", 30.5), Item("c", 7.0)];
        sort_by_popularity(&mut items);
        assert_eq!(names(&items), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_encounter_order() {
        let mut items = vec![
            Item("first", 5.0),
            Item("high", 9.0),
            Item("second", 5.0),
            Item("zero", 0.0),
            Item("third", 5.0),
        ];
        sort_by_popularity(&mut items);
        assert_eq!(names(&items), vec!["high", "first", "second", "third", "zero"]);
    }

    #[test]
    fn test_non_finite_ranked_as_zero() {
        let mut items = vec![
            Item("nan", f64::NAN),
            Item("one", 1.0),
            Item("zero", 0.0),
            Item("inf", f64::INFINITY),
        ];
        sort_by_popularity(&mut items);
        assert_eq!(names(&items), vec!["one", "nan", "zero", "inf"]);
    }
}
