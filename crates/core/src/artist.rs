//! Artist create/update payloads and list filters.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::slug::slugify;
use crate::validation::{trimmed, Checks};

/// Body of `POST /artists`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewArtist {
    pub name: String,
    pub role: String,
    pub bio: String,
    pub hero_image: String,
    pub gallery: Vec<String>,
    pub featured: bool,
}

impl NewArtist {
    /// Validate the payload and return it trimmed, along with its derived slug.
    pub fn validate(self) -> Result<(NewArtist, String), CoreError> {
        Checks::new()
            .required("name", &self.name, "Name is required")
            .required("role", &self.role, "Role is required")
            .required("bio", &self.bio, "Bio is required")
            .required("heroImage", &self.hero_image, "Hero image is required")
            .finish()?;

        let slug = slugify(&self.name);
        if slug.is_empty() {
            return Err(CoreError::invalid(
                "name",
                "Name must contain at least one letter or digit",
            ));
        }

        let artist = NewArtist {
            name: self.name.trim().to_string(),
            role: self.role.trim().to_string(),
            bio: self.bio.trim().to_string(),
            hero_image: self.hero_image.trim().to_string(),
            gallery: self.gallery,
            featured: self.featured,
        };
        Ok((artist, slug))
    }
}

/// Body of `PUT /artists/{slug}`. Absent or blank fields are left unchanged.
///
/// The slug is never recomputed on rename; links stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtistPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl ArtistPatch {
    /// Trim text fields and drop the blank ones.
    pub fn normalized(self) -> Self {
        Self {
            name: trimmed(self.name),
            role: trimmed(self.role),
            bio: trimmed(self.bio),
            hero_image: trimmed(self.hero_image),
            gallery: self.gallery,
            featured: self.featured,
        }
    }
}

/// Filter for the artist listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArtistFilter {
    /// Only featured artists when `true`; no filtering otherwise.
    pub featured: bool,
    /// Exact match on the role label.
    pub role: Option<String>,
}

impl ArtistFilter {
    pub fn featured() -> Self {
        Self {
            featured: true,
            role: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn sample() -> NewArtist {
        NewArtist {
            name: "  Jane O'Brien!! ".into(),
            role: "Muralist".into(),
            bio: "Paints walls.".into(),
            hero_image: "https://img.example/jane.jpg".into(),
            gallery: vec!["a.jpg".into(), "b.jpg".into()],
            featured: false,
        }
    }

    #[test]
    fn validate_derives_slug_and_trims() {
        let (artist, slug) = sample().validate().unwrap();
        assert_eq!(slug, "jane-o-brien");
        assert_eq!(artist.name, "Jane O'Brien!!");
        assert_eq!(artist.gallery, ["a.jpg", "b.jpg"]);
    }

    #[test]
    fn validate_requires_core_fields() {
        let err = NewArtist::default().validate().unwrap_err();
        assert_matches!(err, CoreError::Validation(errors) => {
            let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
            assert_eq!(fields, ["name", "role", "bio", "heroImage"]);
        });
    }

    #[test]
    fn punctuation_only_name_rejected() {
        let input = NewArtist {
            name: "?!".into(),
            ..sample()
        };
        assert_matches!(input.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn patch_drops_blank_fields() {
        let patch = ArtistPatch {
            name: Some("   ".into()),
            bio: Some(" New bio ".into()),
            featured: Some(false),
            ..Default::default()
        }
        .normalized();
        assert_eq!(patch.name, None);
        assert_eq!(patch.bio.as_deref(), Some("New bio"));
        assert_eq!(patch.featured, Some(false));
    }
}
