//! Validation for track creation, update, and resolution input.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::track::{NewTrack, TrackPatch};
use crate::validation::FieldViolation;

/// Minimum length for track and artist names.
const MIN_NAME_LEN: usize = 3;

/// Minimum length for an ISRC.
const MIN_ISRC_LEN: usize = 2;

/// Unvalidated track-creation input as received from the caller.
///
/// All fields are optional at the wire level so that missing fields report
/// through the validator rather than as a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTrackInput {
    pub name: Option<String>,
    pub artist_names: Option<Vec<String>>,
    pub duration_ms: Option<i32>,
    pub isrc: Option<String>,
    pub release_date: Option<String>,
}

/// Unvalidated track-update input. Every field is optional; only present
/// fields are validated and applied.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTrackInput {
    pub name: Option<String>,
    pub artist_names: Option<Vec<String>>,
    pub duration_ms: Option<i32>,
    pub isrc: Option<String>,
    pub release_date: Option<String>,
}

/// Unvalidated resolve-by-name-and-artists query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResolveTrackInput {
    pub name: Option<String>,
    pub artist_names: Option<Vec<String>>,
}

/// Validated resolve query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackQuery {
    pub name: String,
    pub artist_names: Vec<String>,
}

fn check_track_name(name: Option<&str>, violations: &mut Vec<FieldViolation>) -> Option<String> {
    match name {
        None => {
            violations.push(FieldViolation::new("name", "Track name is required"));
            None
        }
        Some("") => {
            violations.push(FieldViolation::new("name", "Track name cannot be empty"));
            None
        }
        Some(s) if s.chars().count() < MIN_NAME_LEN => {
            violations.push(FieldViolation::new(
                "name",
                format!("Track name must be at least {MIN_NAME_LEN} characters long"),
            ));
            None
        }
        Some(s) => Some(s.to_string()),
    }
}

fn check_artist_names(
    artist_names: Option<&[String]>,
    violations: &mut Vec<FieldViolation>,
) -> Option<Vec<String>> {
    let names = match artist_names {
        None | Some([]) => {
            violations.push(FieldViolation::new(
                "artist_names",
                "Artist names cannot be empty",
            ));
            return None;
        }
        Some(names) => names,
    };

    for name in names {
        if name.is_empty() {
            violations.push(FieldViolation::new(
                "artist_names",
                "Artist name cannot be empty",
            ));
            return None;
        }
        if name.chars().count() < MIN_NAME_LEN {
            violations.push(FieldViolation::new(
                "artist_names",
                format!("Each artist name must be at least {MIN_NAME_LEN} characters long"),
            ));
            return None;
        }
    }

    Some(names.to_vec())
}

fn check_isrc(isrc: Option<&str>, violations: &mut Vec<FieldViolation>) -> Option<String> {
    match isrc {
        None => {
            violations.push(FieldViolation::new("isrc", "ISRC is required"));
            None
        }
        Some("") => {
            violations.push(FieldViolation::new("isrc", "ISRC cannot be empty"));
            None
        }
        Some(s) if s.chars().count() < MIN_ISRC_LEN => {
            violations.push(FieldViolation::new(
                "isrc",
                format!("ISRC must be at least {MIN_ISRC_LEN} characters long"),
            ));
            None
        }
        Some(s) => Some(s.to_string()),
    }
}

fn check_release_date(
    release_date: Option<&str>,
    violations: &mut Vec<FieldViolation>,
) -> Option<NaiveDate> {
    match release_date {
        None => {
            violations.push(FieldViolation::new(
                "release_date",
                "Release date is required",
            ));
            None
        }
        Some(s) => match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            Ok(date) => Some(date),
            Err(_) => {
                violations.push(FieldViolation::new(
                    "release_date",
                    "Release date must be in ISO format (YYYY-MM-DD)",
                ));
                None
            }
        },
    }
}

/// Validate creation input, returning the parsed [`NewTrack`] or every
/// field-level violation in declaration order.
pub fn validate_new_track(input: &CreateTrackInput) -> Result<NewTrack, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let name = check_track_name(input.name.as_deref(), &mut violations);
    let artist_names = check_artist_names(input.artist_names.as_deref(), &mut violations);
    let duration_ms = match input.duration_ms {
        Some(d) => Some(d),
        None => {
            violations.push(FieldViolation::new("duration_ms", "Duration is required"));
            None
        }
    };
    let isrc = check_isrc(input.isrc.as_deref(), &mut violations);
    let release_date = check_release_date(input.release_date.as_deref(), &mut violations);

    match (name, artist_names, duration_ms, isrc, release_date) {
        (Some(name), Some(artist_names), Some(duration_ms), Some(isrc), Some(release_date))
            if violations.is_empty() =>
        {
            Ok(NewTrack {
                name,
                artist_names,
                duration_ms,
                isrc,
                release_date,
            })
        }
        _ => Err(violations),
    }
}

/// Validate update input, returning a [`TrackPatch`] with only the present
/// fields, each checked against the same rules as creation.
pub fn validate_track_patch(input: &UpdateTrackInput) -> Result<TrackPatch, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let name = match input.name.as_deref() {
        Some(s) => check_track_name(Some(s), &mut violations),
        None => None,
    };
    let artist_names = match input.artist_names.as_deref() {
        Some(names) => check_artist_names(Some(names), &mut violations),
        None => None,
    };
    let isrc = match input.isrc.as_deref() {
        Some(s) => check_isrc(Some(s), &mut violations),
        None => None,
    };
    let release_date = match input.release_date.as_deref() {
        Some(s) => check_release_date(Some(s), &mut violations),
        None => None,
    };

    if violations.is_empty() {
        Ok(TrackPatch {
            name,
            artist_names,
            duration_ms: input.duration_ms,
            isrc,
            release_date,
        })
    } else {
        Err(violations)
    }
}

/// Validate a resolve query (name plus artist list, both required).
pub fn validate_track_query(input: &ResolveTrackInput) -> Result<TrackQuery, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    let name = check_track_name(input.name.as_deref(), &mut violations);
    let artist_names = check_artist_names(input.artist_names.as_deref(), &mut violations);

    match (name, artist_names) {
        (Some(name), Some(artist_names)) if violations.is_empty() => Ok(TrackQuery {
            name,
            artist_names,
        }),
        _ => Err(violations),
    }
}
