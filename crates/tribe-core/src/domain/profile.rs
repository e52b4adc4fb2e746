use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Profile aggregate - one per user, mutated and persisted as a whole.
///
/// The embedded `experience` and `education` lists are ordered newest-first:
/// additions go to the head, removals preserve the relative order of the
/// remaining entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub user_id: Uuid,
    pub company: String,
    pub status: String,
    pub location: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    #[serde(default)]
    pub social: SocialLinks,
    pub created_at: DateTime<Utc>,
}

/// A career entry embedded in a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub id: Uuid,
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

/// A study entry embedded in a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub id: Uuid,
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

/// Optional external links on a profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

/// Top-level profile fields accepted on create or update.
///
/// `None` means "use the default" on create and "leave unchanged" on update.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub company: Option<String>,
    pub status: Option<String>,
    pub location: Option<String>,
    pub skills: Option<Vec<String>>,
    pub bio: Option<String>,
    pub linkedin: Option<String>,
    pub youtube: Option<String>,
}

/// Candidate experience entry; validated by [`Profile::add_experience`].
#[derive(Debug, Clone)]
pub struct ExperienceInput {
    pub title: String,
    pub company: String,
    pub location: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// Candidate education entry; validated by [`Profile::add_education`].
#[derive(Debug, Clone)]
pub struct EducationInput {
    pub university: String,
    pub degree: String,
    pub fieldofstudy: String,
    pub location: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub description: Option<String>,
}

impl Profile {
    /// Create a profile for a user who does not have one yet.
    pub fn create(user_id: Uuid, update: ProfileUpdate) -> Result<Self, DomainError> {
        let company = required(update.company, "Company is required")?;
        let status = required(update.status, "Status is required")?;
        let location = required(update.location, "Location is required")?;
        let skills = update.skills.unwrap_or_default();
        if skills.is_empty() {
            return Err(DomainError::Validation("Skills are required".to_string()));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            company,
            status,
            location,
            skills,
            bio: update.bio,
            experience: Vec::new(),
            education: Vec::new(),
            social: SocialLinks {
                linkedin: update.linkedin,
                youtube: update.youtube,
            },
            created_at: Utc::now(),
        })
    }

    /// Merge the provided top-level fields; unspecified fields are retained.
    pub fn apply(&mut self, update: ProfileUpdate) {
        if let Some(company) = update.company {
            self.company = company;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(skills) = update.skills {
            self.skills = skills;
        }
        if let Some(bio) = update.bio {
            self.bio = Some(bio);
        }
        if let Some(linkedin) = update.linkedin {
            self.social.linkedin = Some(linkedin);
        }
        if let Some(youtube) = update.youtube {
            self.social.youtube = Some(youtube);
        }
    }

    /// Validate and insert an experience entry at the head of the list.
    /// Returns the freshly assigned entry id.
    pub fn add_experience(&mut self, input: ExperienceInput) -> Result<Uuid, DomainError> {
        non_empty(&input.title, "Title is required")?;
        non_empty(&input.company, "Company is required")?;
        non_empty(&input.location, "Location is required")?;
        let from = input
            .from
            .ok_or_else(|| DomainError::Validation("From date is required".to_string()))?;

        let entry = Experience {
            id: Uuid::new_v4(),
            title: input.title,
            company: input.company,
            location: input.location,
            from,
            to: input.to,
            current: input.current,
            description: input.description,
        };
        let id = entry.id;
        self.experience.insert(0, entry);
        Ok(id)
    }

    /// Remove the experience entry with the given id.
    pub fn remove_experience(&mut self, exp_id: Uuid) -> Result<(), DomainError> {
        if !self.experience.iter().any(|e| e.id == exp_id) {
            return Err(DomainError::NotFound {
                entity_type: "experience",
                id: exp_id,
            });
        }
        self.experience.retain(|e| e.id != exp_id);
        Ok(())
    }

    /// Validate and insert an education entry at the head of the list.
    /// Returns the freshly assigned entry id.
    pub fn add_education(&mut self, input: EducationInput) -> Result<Uuid, DomainError> {
        non_empty(&input.university, "University is required")?;
        non_empty(&input.degree, "Degree is required")?;
        non_empty(&input.fieldofstudy, "Field of study is required")?;
        non_empty(&input.location, "Location is required")?;
        let from = input
            .from
            .ok_or_else(|| DomainError::Validation("From date is required".to_string()))?;

        let entry = Education {
            id: Uuid::new_v4(),
            university: input.university,
            degree: input.degree,
            fieldofstudy: input.fieldofstudy,
            location: input.location,
            from,
            to: input.to,
            description: input.description,
        };
        let id = entry.id;
        self.education.insert(0, entry);
        Ok(id)
    }

    /// Remove the education entry with the given id.
    pub fn remove_education(&mut self, edu_id: Uuid) -> Result<(), DomainError> {
        if !self.education.iter().any(|e| e.id == edu_id) {
            return Err(DomainError::NotFound {
                entity_type: "education",
                id: edu_id,
            });
        }
        self.education.retain(|e| e.id != edu_id);
        Ok(())
    }
}

/// Split a comma-delimited skills string, trimming each element.
/// Empty elements are dropped; order is preserved as provided.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|skill| skill.trim().to_string())
        .filter(|skill| !skill.is_empty())
        .collect()
}

fn required(value: Option<String>, message: &str) -> Result<String, DomainError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(DomainError::Validation(message.to_string())),
    }
}

fn non_empty(value: &str, message: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(message.to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_update() -> ProfileUpdate {
        ProfileUpdate {
            company: Some("Acme".to_string()),
            status: Some("Developer".to_string()),
            location: Some("NYC".to_string()),
            skills: Some(vec!["Rust".to_string(), "SQL".to_string()]),
            ..Default::default()
        }
    }

    fn experience_input() -> ExperienceInput {
        ExperienceInput {
            title: "Eng".to_string(),
            company: "Acme".to_string(),
            location: "NYC".to_string(),
            from: NaiveDate::from_ymd_opt(2020, 1, 1),
            to: None,
            current: false,
            description: None,
        }
    }

    #[test]
    fn test_create_requires_status() {
        let mut update = base_update();
        update.status = None;

        let result = Profile::create(Uuid::new_v4(), update);

        assert!(matches!(result, Err(DomainError::Validation(msg)) if msg.contains("Status")));
    }

    #[test]
    fn test_create_requires_skills() {
        let mut update = base_update();
        update.skills = Some(Vec::new());

        let result = Profile::create(Uuid::new_v4(), update);

        assert!(matches!(result, Err(DomainError::Validation(msg)) if msg.contains("Skills")));
    }

    #[test]
    fn test_apply_with_only_bio_retains_other_fields() {
        let mut profile = Profile::create(Uuid::new_v4(), base_update()).unwrap();

        profile.apply(ProfileUpdate {
            bio: Some("Hello".to_string()),
            ..Default::default()
        });

        assert_eq!(profile.bio.as_deref(), Some("Hello"));
        assert_eq!(profile.company, "Acme");
        assert_eq!(profile.status, "Developer");
        assert_eq!(profile.location, "NYC");
        assert_eq!(profile.skills, vec!["Rust", "SQL"]);
    }

    #[test]
    fn test_add_experience_inserts_at_head() {
        let mut profile = Profile::create(Uuid::new_v4(), base_update()).unwrap();

        profile.add_experience(experience_input()).unwrap();
        let mut second = experience_input();
        second.title = "Senior Eng".to_string();
        profile.add_experience(second).unwrap();

        assert_eq!(profile.experience.len(), 2);
        assert_eq!(profile.experience[0].title, "Senior Eng");
        assert_eq!(profile.experience[1].title, "Eng");
    }

    #[test]
    fn test_add_experience_fields_match_input() {
        let mut profile = Profile::create(Uuid::new_v4(), base_update()).unwrap();

        let id = profile.add_experience(experience_input()).unwrap();

        assert_eq!(profile.experience.len(), 1);
        let entry = &profile.experience[0];
        assert_eq!(entry.id, id);
        assert!(!entry.id.is_nil());
        assert_eq!(entry.title, "Eng");
        assert_eq!(entry.company, "Acme");
        assert_eq!(entry.location, "NYC");
        assert_eq!(entry.from, NaiveDate::from_ymd_opt(2020, 1, 1).unwrap());
    }

    #[test]
    fn test_add_experience_requires_from_date() {
        let mut profile = Profile::create(Uuid::new_v4(), base_update()).unwrap();
        let mut input = experience_input();
        input.from = None;

        let result = profile.add_experience(input);

        assert!(matches!(result, Err(DomainError::Validation(msg)) if msg.contains("From date")));
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn test_add_then_remove_experience_restores_list() {
        let mut profile = Profile::create(Uuid::new_v4(), base_update()).unwrap();
        profile.add_experience(experience_input()).unwrap();
        let before = profile.experience.clone();

        let mut input = experience_input();
        input.title = "Contractor".to_string();
        let id = profile.add_experience(input).unwrap();
        profile.remove_experience(id).unwrap();

        assert_eq!(profile.experience, before);
    }

    #[test]
    fn test_remove_experience_by_id_not_position() {
        let mut profile = Profile::create(Uuid::new_v4(), base_update()).unwrap();
        let first = profile.add_experience(experience_input()).unwrap();
        let second = profile.add_experience(experience_input()).unwrap();
        let third = profile.add_experience(experience_input()).unwrap();

        // Removing the middle entry keeps head and tail in order.
        profile.remove_experience(second).unwrap();

        let ids: Vec<Uuid> = profile.experience.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![third, first]);
    }

    #[test]
    fn test_remove_missing_experience_is_not_found() {
        let mut profile = Profile::create(Uuid::new_v4(), base_update()).unwrap();
        profile.add_experience(experience_input()).unwrap();

        let result = profile.remove_experience(Uuid::new_v4());

        assert!(matches!(
            result,
            Err(DomainError::NotFound {
                entity_type: "experience",
                ..
            })
        ));
        assert_eq!(profile.experience.len(), 1);
    }

    #[test]
    fn test_add_education_validates_required_fields() {
        let mut profile = Profile::create(Uuid::new_v4(), base_update()).unwrap();

        let result = profile.add_education(EducationInput {
            university: "MIT".to_string(),
            degree: String::new(),
            fieldofstudy: "CS".to_string(),
            location: "Cambridge".to_string(),
            from: NaiveDate::from_ymd_opt(2016, 9, 1),
            to: None,
            description: None,
        });

        assert!(matches!(result, Err(DomainError::Validation(msg)) if msg.contains("Degree")));
        assert!(profile.education.is_empty());
    }

    #[test]
    fn test_remove_education_preserves_remaining_order() {
        let mut profile = Profile::create(Uuid::new_v4(), base_update()).unwrap();
        let input = EducationInput {
            university: "MIT".to_string(),
            degree: "BSc".to_string(),
            fieldofstudy: "CS".to_string(),
            location: "Cambridge".to_string(),
            from: NaiveDate::from_ymd_opt(2016, 9, 1),
            to: None,
            description: None,
        };
        let first = profile.add_education(input.clone()).unwrap();
        let second = profile.add_education(input.clone()).unwrap();
        let third = profile.add_education(input).unwrap();

        profile.remove_education(second).unwrap();

        let ids: Vec<Uuid> = profile.education.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![third, first]);
    }

    #[test]
    fn test_parse_skills_splits_and_trims() {
        let skills = parse_skills("Rust, SQL ,  Docker,,");
        assert_eq!(skills, vec!["Rust", "SQL", "Docker"]);
    }
}
