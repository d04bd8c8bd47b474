use serde::{Deserialize, Serialize};

/// `/v2/me` payload. Every field is optional on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MeResponse {
    pub localized_first_name: String,
    pub localized_last_name: String,
    pub headline: LocalizedText,
    pub location_name: String,
    pub industry_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LocalizedText {
    pub localized: Localized,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Localized {
    #[serde(rename = "en_US")]
    pub en_us: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Elements<T> {
    #[serde(default)]
    pub elements: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SkillElement {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionElement {
    pub title: String,
    pub company_name: String,
    pub start_date: Option<YearOnly>,
    pub end_date: Option<YearOnly>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct YearOnly {
    pub year: Option<i32>,
}

/// The three raw API responses for one member.
#[derive(Debug, Clone, Default)]
pub struct ProfileBundle {
    pub me: MeResponse,
    pub skills: Elements<SkillElement>,
    pub positions: Elements<PositionElement>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedinPosition {
    pub role: String,
    pub company: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinkedinProfile {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub industry: String,
    pub skills: Vec<String>,
    pub experience: Vec<LinkedinPosition>,
}

/// Flattens the raw responses into the structured profile.
pub fn analyze_profile(bundle: ProfileBundle) -> LinkedinProfile {
    let me = bundle.me;
    let name = format!("{} {}", me.localized_first_name, me.localized_last_name)
        .trim()
        .to_string();

    LinkedinProfile {
        name,
        headline: me.headline.localized.en_us,
        location: me.location_name,
        industry: me.industry_name,
        skills: bundle
            .skills
            .elements
            .into_iter()
            .filter_map(|skill| skill.name)
            .collect(),
        experience: bundle
            .positions
            .elements
            .into_iter()
            .map(|position| LinkedinPosition {
                duration: duration(position.start_date, position.end_date),
                role: position.title,
                company: position.company_name,
            })
            .collect(),
    }
}

/// "2019 - 2022", or "2019 - Present" while the position is open.
/// A missing start year leaves only the end.
fn duration(start: Option<YearOnly>, end: Option<YearOnly>) -> String {
    let end = end
        .and_then(|d| d.year)
        .map_or_else(|| "Present".to_string(), |y| y.to_string());
    match start.and_then(|d| d.year) {
        Some(year) => format!("{year} - {end}"),
        None => end,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bundle(
        me: serde_json::Value,
        skills: serde_json::Value,
        positions: serde_json::Value,
    ) -> ProfileBundle {
        ProfileBundle {
            me: serde_json::from_value(me).unwrap(),
            skills: serde_json::from_value(skills).unwrap(),
            positions: serde_json::from_value(positions).unwrap(),
        }
    }

    #[test]
    fn test_analyze_full_profile() {
        let profile = analyze_profile(bundle(
            json!({
                "localizedFirstName": "Asha",
                "localizedLastName": "Rao",
                "headline": {"localized": {"en_US": "Backend engineer"}},
                "locationName": "Pune, India",
                "industryName": "Software"
            }),
            json!({"elements": [{"name": "Rust"}, {"name": "SQL"}, {}]}),
            json!({"elements": [
                {"title": "Engineer", "companyName": "Acme",
                 "startDate": {"year": 2019}, "endDate": {"year": 2022}},
                {"title": "Senior Engineer", "companyName": "Globex",
                 "startDate": {"year": 2022}}
            ]}),
        ));

        assert_eq!(profile.name, "Asha Rao");
        assert_eq!(profile.headline, "Backend engineer");
        assert_eq!(profile.location, "Pune, India");
        assert_eq!(profile.industry, "Software");
        assert_eq!(profile.skills, vec!["Rust", "SQL"]);
        assert_eq!(profile.experience[0].duration, "2019 - 2022");
        assert_eq!(profile.experience[1].duration, "2022 - Present");
        assert_eq!(profile.experience[1].company, "Globex");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let profile = analyze_profile(bundle(
            json!({"localizedFirstName": "Asha"}),
            json!({}),
            json!({"elements": [{"title": "Intern"}]}),
        ));
        assert_eq!(profile.name, "Asha");
        assert_eq!(profile.headline, "");
        assert!(profile.skills.is_empty());
        assert_eq!(profile.experience[0].company, "");
        assert_eq!(profile.experience[0].duration, "Present");
    }
}
