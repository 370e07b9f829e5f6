//! Track domain types and the fuzzy-match rules used by reconciliation.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::CoreError;

/// Raw track candidate as returned by the external metadata provider.
///
/// Transient: mapped into [`NewTrack`] and discarded after persistence.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTrack {
    pub name: String,
    pub duration_ms: i32,
    pub isrc: String,
    pub artists: Vec<RawArtist>,
    pub album: RawAlbum,
}

/// Artist entry inside a [`RawTrack`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawArtist {
    pub name: String,
}

/// Album entry inside a [`RawTrack`].
#[derive(Debug, Clone, Deserialize)]
pub struct RawAlbum {
    /// Release date as `YYYY-MM-DD`.
    pub release_date: String,
}

/// Validated input for inserting a track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrack {
    pub name: String,
    pub artist_names: Vec<String>,
    pub duration_ms: i32,
    pub isrc: String,
    pub release_date: NaiveDate,
}

impl NewTrack {
    /// Normalize a provider candidate into creation input.
    ///
    /// Artist names are extracted from `artists[].name`, the duration is
    /// copied from `duration_ms`, and the release date is parsed from
    /// `album.release_date`. A release date the provider did not format as
    /// `YYYY-MM-DD` is a provider payload fault, not caller input, and is
    /// surfaced as [`CoreError::ExternalSource`].
    pub fn from_raw(raw: RawTrack) -> Result<Self, CoreError> {
        let release_date =
            NaiveDate::parse_from_str(&raw.album.release_date, "%Y-%m-%d").map_err(|e| {
                CoreError::ExternalSource(format!(
                    "Invalid release date '{}' in provider response: {e}",
                    raw.album.release_date
                ))
            })?;

        Ok(Self {
            name: raw.name,
            artist_names: raw.artists.into_iter().map(|a| a.name).collect(),
            duration_ms: raw.duration_ms,
            isrc: raw.isrc,
            release_date,
        })
    }
}

/// Partial update for a track. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackPatch {
    pub name: Option<String>,
    pub artist_names: Option<Vec<String>>,
    pub duration_ms: Option<i32>,
    pub isrc: Option<String>,
    pub release_date: Option<NaiveDate>,
}

impl TrackPatch {
    /// Whether the patch carries at least one field to apply.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.artist_names.is_none()
            && self.duration_ms.is_none()
            && self.isrc.is_none()
            && self.release_date.is_none()
    }
}

/// Case-insensitive substring match in either direction.
fn names_overlap(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}

/// Whether any queried artist name matches any stored artist name.
///
/// A match is a case-insensitive substring hit in either direction, so a
/// query for `"Art"` finds a track credited to `"Artist2"`, and a query for
/// `"The Beatles"` finds a track credited to `"Beatles"`.
pub fn artist_names_match(stored: &[String], queried: &[String]) -> bool {
    queried
        .iter()
        .any(|q| stored.iter().any(|s| names_overlap(s, q)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn query_substring_of_stored_matches() {
        assert!(artist_names_match(&strings(&["Artist2"]), &strings(&["Art"])));
    }

    #[test]
    fn stored_substring_of_query_matches() {
        assert!(artist_names_match(
            &strings(&["Beatles"]),
            &strings(&["The Beatles"])
        ));
    }

    #[test]
    fn match_is_case_insensitive() {
        assert!(artist_names_match(
            &strings(&["ARTIST ONE"]),
            &strings(&["artist one"])
        ));
    }

    #[test]
    fn one_hit_among_many_is_enough() {
        assert!(artist_names_match(
            &strings(&["Someone Else", "Artist2"]),
            &strings(&["Nobody", "Art"])
        ));
    }

    #[test]
    fn disjoint_names_do_not_match() {
        assert!(!artist_names_match(
            &strings(&["Artist2"]),
            &strings(&["Band"])
        ));
    }

    #[test]
    fn from_raw_maps_all_fields() {
        let raw = RawTrack {
            name: "Test Track".to_string(),
            duration_ms: 300_000,
            isrc: "USABC1234567".to_string(),
            artists: vec![
                RawArtist {
                    name: "Artist1".to_string(),
                },
                RawArtist {
                    name: "Artist2".to_string(),
                },
            ],
            album: RawAlbum {
                release_date: "2021-01-01".to_string(),
            },
        };

        let track = NewTrack::from_raw(raw).expect("normalization should succeed");
        assert_eq!(track.name, "Test Track");
        assert_eq!(track.artist_names, vec!["Artist1", "Artist2"]);
        assert_eq!(track.duration_ms, 300_000);
        assert_eq!(track.isrc, "USABC1234567");
        assert_eq!(
            track.release_date,
            NaiveDate::from_ymd_opt(2021, 1, 1).expect("valid date")
        );
    }

    #[test]
    fn from_raw_rejects_malformed_release_date() {
        let raw = RawTrack {
            name: "Test Track".to_string(),
            duration_ms: 1000,
            isrc: "X".to_string(),
            artists: vec![RawArtist {
                name: "Artist1".to_string(),
            }],
            album: RawAlbum {
                release_date: "01/01/2021".to_string(),
            },
        };

        let err = NewTrack::from_raw(raw).expect_err("malformed date must fail");
        assert!(matches!(err, CoreError::ExternalSource(_)));
    }
}
