//! Profile document for the `profiles` collection.

use bson::serde_helpers::chrono_datetime_as_bson_datetime;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use tribe_core::domain::{Education, Experience, Profile, SocialLinks};
use tribe_core::error::RepoError;

use super::parse_id;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileDocument {
    #[serde(rename = "_id")]
    pub id: String,
    pub user_id: String,
    pub company: String,
    pub status: String,
    pub location: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub experience: Vec<ExperienceDocument>,
    pub education: Vec<EducationDocument>,
    #[serde(default)]
    pub social: SocialDocument,
    #[serde(with = "chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

/// Dates on embedded entries are calendar dates, stored as plain
/// `YYYY-MM-DD` strings rather than BSON datetimes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExperienceDocument {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub from: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EducationDocument {
    pub id: String,
    pub university: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub location: String,
    pub from: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SocialDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

impl From<Profile> for ProfileDocument {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            user_id: profile.user_id.to_string(),
            company: profile.company,
            status: profile.status,
            location: profile.location,
            skills: profile.skills,
            bio: profile.bio,
            experience: profile.experience.into_iter().map(Into::into).collect(),
            education: profile.education.into_iter().map(Into::into).collect(),
            social: SocialDocument {
                linkedin: profile.social.linkedin,
                youtube: profile.social.youtube,
            },
            created_at: profile.created_at,
        }
    }
}

impl TryFrom<ProfileDocument> for Profile {
    type Error = RepoError;

    fn try_from(doc: ProfileDocument) -> Result<Self, RepoError> {
        Ok(Self {
            id: parse_id(&doc.id)?,
            user_id: parse_id(&doc.user_id)?,
            company: doc.company,
            status: doc.status,
            location: doc.location,
            skills: doc.skills,
            bio: doc.bio,
            experience: doc
                .experience
                .into_iter()
                .map(Experience::try_from)
                .collect::<Result<_, _>>()?,
            education: doc
                .education
                .into_iter()
                .map(Education::try_from)
                .collect::<Result<_, _>>()?,
            social: SocialLinks {
                linkedin: doc.social.linkedin,
                youtube: doc.social.youtube,
            },
            created_at: doc.created_at,
        })
    }
}

impl From<Experience> for ExperienceDocument {
    fn from(entry: Experience) -> Self {
        Self {
            id: entry.id.to_string(),
            title: entry.title,
            company: entry.company,
            location: entry.location,
            from: entry.from,
            to: entry.to,
            current: entry.current,
            description: entry.description,
        }
    }
}

impl TryFrom<ExperienceDocument> for Experience {
    type Error = RepoError;

    fn try_from(doc: ExperienceDocument) -> Result<Self, RepoError> {
        Ok(Self {
            id: parse_id(&doc.id)?,
            title: doc.title,
            company: doc.company,
            location: doc.location,
            from: doc.from,
            to: doc.to,
            current: doc.current,
            description: doc.description,
        })
    }
}

impl From<Education> for EducationDocument {
    fn from(entry: Education) -> Self {
        Self {
            id: entry.id.to_string(),
            university: entry.university,
            degree: entry.degree,
            fieldofstudy: entry.fieldofstudy,
            location: entry.location,
            from: entry.from,
            to: entry.to,
            description: entry.description,
        }
    }
}

impl TryFrom<EducationDocument> for Education {
    type Error = RepoError;

    fn try_from(doc: EducationDocument) -> Result<Self, RepoError> {
        Ok(Self {
            id: parse_id(&doc.id)?,
            university: doc.university,
            degree: doc.degree,
            fieldofstudy: doc.fieldofstudy,
            location: doc.location,
            from: doc.from,
            to: doc.to,
            description: doc.description,
        })
    }
}
