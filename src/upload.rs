//! Checks the upload page runs before it submits a track.
//!
//! These are stricter than `POST /tracks`: a release date in the past is refused
//! here but still accepted by the server.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::domain::track::NewTrack;

pub const TITLE_REQUIRED: &str = "Track title is required";
pub const ARTIST_REQUIRED: &str = "Artist name is required";
pub const RELEASE_DATE_REQUIRED: &str = "Release date is required";
pub const RELEASE_DATE_INVALID: &str = "Release date must be a valid date";
pub const RELEASE_DATE_IN_PAST: &str = "Release date cannot be in the past";
pub const GENRE_REQUIRED: &str = "Genre is required";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// field name to message, keyed like the JSON upload body
pub type FieldErrors = BTreeMap<&'static str, &'static str>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadForm {
    pub title: String,
    pub artist_name: String,
    pub release_date: String,
    pub genre: String,
}

impl UploadForm {
    /// Validates every field against `today`, reporting all failures at once.
    pub fn validate(&self, today: NaiveDate) -> Result<NewTrack, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.insert("title", TITLE_REQUIRED);
        }

        let artist_name = self.artist_name.trim();
        if artist_name.is_empty() {
            errors.insert("artistName", ARTIST_REQUIRED);
        }

        let release_date = self.release_date.trim();
        if release_date.is_empty() {
            errors.insert("releaseDate", RELEASE_DATE_REQUIRED);
        } else {
            match NaiveDate::parse_from_str(release_date, DATE_FORMAT) {
                Ok(date) if date < today => {
                    errors.insert("releaseDate", RELEASE_DATE_IN_PAST);
                }
                Ok(_) => {}
                Err(_) => {
                    errors.insert("releaseDate", RELEASE_DATE_INVALID);
                }
            }
        }

        if self.genre.is_empty() {
            errors.insert("genre", GENRE_REQUIRED);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(NewTrack {
            title: title.to_string(),
            artist_name: artist_name.to_string(),
            release_date: release_date.to_string(),
            genre: self.genre.clone(),
        })
    }

    /// validates against the local calendar date
    pub fn validate_today(&self) -> Result<NewTrack, FieldErrors> {
        self.validate(chrono::Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn form() -> UploadForm {
        UploadForm {
            title: "New".into(),
            artist_name: "A".into(),
            release_date: "2025-07-01".into(),
            genre: "Rock".into(),
        }
    }

    #[test]
    fn test_complete_form_is_accepted() {
        let new = form().validate(today()).unwrap();

        assert_eq!(new.title, "New");
        assert_eq!(new.release_date, "2025-07-01");
        assert_eq!(new.genre, "Rock");
    }

    #[test]
    fn test_release_today_is_accepted() {
        let mut f = form();
        f.release_date = "2025-06-01".into();
        assert!(f.validate(today()).is_ok());
    }

    #[test]
    fn test_empty_form_reports_each_field() {
        let errors = UploadForm::default().validate(today()).unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors["title"], TITLE_REQUIRED);
        assert_eq!(errors["artistName"], ARTIST_REQUIRED);
        assert_eq!(errors["releaseDate"], RELEASE_DATE_REQUIRED);
        assert_eq!(errors["genre"], GENRE_REQUIRED);
    }

    #[test]
    fn test_blank_title_and_artist_are_required() {
        let mut f = form();
        f.title = "   ".into();
        f.artist_name = "\t".into();

        let errors = f.validate(today()).unwrap_err();
        assert_eq!(
            errors,
            FieldErrors::from([("artistName", ARTIST_REQUIRED), ("title", TITLE_REQUIRED)])
        );
    }

    #[test]
    fn test_past_release_date_is_rejected() {
        let mut f = form();
        f.release_date = "2025-01-01".into();

        let errors = f.validate(today()).unwrap_err();
        assert_eq!(errors, FieldErrors::from([("releaseDate", RELEASE_DATE_IN_PAST)]));
    }

    #[test]
    fn test_unparseable_release_date_is_rejected() {
        let mut f = form();
        f.release_date = "next friday".into();

        let errors = f.validate(today()).unwrap_err();
        assert_eq!(errors["releaseDate"], RELEASE_DATE_INVALID);
    }

    #[test]
    fn test_far_future_date_passes_today_check() {
        let mut f = form();
        f.release_date = "2999-12-31".into();
        assert!(f.validate_today().is_ok());
    }
}
