// SPDX-License-Identifier: MPL-2.0
//! Title search over the currently loaded page.
//!
//! Search never spans pages: it only narrows what was last fetched.

use crate::domain::gallery::Photo;

/// Returns the photos whose title contains `term`, ignoring case, in their
/// original order. A blank term keeps every photo.
#[must_use]
pub fn filter_by_title<'a>(photos: &'a [Photo], term: &str) -> Vec<&'a Photo> {
    photos
        .iter()
        .filter(|photo| photo.title_matches(term))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gallery::PhotoId;

    fn photo(id: &str, title: &str) -> Photo {
        Photo {
            id: PhotoId::new(id),
            image: format!("/{id}.jpg"),
            title: title.into(),
            category: "general".into(),
            order: 0,
        }
    }

    fn sample() -> Vec<Photo> {
        vec![
            photo("1", "Graduation Day"),
            photo("2", "Sports EVENT"),
            photo("3", "Campus"),
            photo("4", "Event night"),
        ]
    }

    #[test]
    fn empty_term_keeps_everything() {
        let photos = sample();
        assert_eq!(filter_by_title(&photos, "").len(), 4);
    }

    #[test]
    fn match_is_case_insensitive_substring() {
        let photos = sample();
        let ids: Vec<&str> = filter_by_title(&photos, "eVeNt")
            .into_iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "4"]);
    }

    #[test]
    fn result_is_subset_of_input_for_every_term() {
        let photos = sample();
        for term in ["a", "day", "x", " ", "CAMPUS", "ent n"] {
            let filtered = filter_by_title(&photos, term);
            let expected = photos
                .iter()
                .filter(|p| p.title.to_lowercase().contains(&term.to_lowercase()))
                .count();
            assert_eq!(filtered.len(), expected, "term {term:?}");
            assert!(filtered.iter().all(|p| photos.contains(p)));
        }
    }
}
