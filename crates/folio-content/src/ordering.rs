//! Deterministic display orders for each collection.
//!
//! Every order ends on an identifying name so two loads of the same content
//! always produce the same sequence.

use std::cmp::Ordering;

use folio_core::entities::{CaseStudy, Certification, Experience, Project, SkillGroup};

/// Newest first; missing or unparseable dates last.
fn newest_first<T: Ord>(a: Option<T>, b: Option<T>) -> Ordering {
    b.cmp(&a)
}

/// Featured first, then newest `startDate`, then slug.
pub fn sort_projects(projects: &mut [Project]) {
    projects.sort_by(|a, b| {
        b.featured
            .cmp(&a.featured)
            .then_with(|| newest_first(a.started_on(), b.started_on()))
            .then_with(|| a.slug.cmp(&b.slug))
    });
}

/// Groups with an explicit `order` first (ascending), the rest by name.
pub fn sort_skill_groups(groups: &mut [SkillGroup]) {
    groups.sort_by(|a, b| match (a.order, b.order) {
        (Some(x), Some(y)) => x.total_cmp(&y).then_with(|| a.group.cmp(&b.group)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.group.cmp(&b.group),
    });
}

pub fn sort_certifications(certifications: &mut [Certification]) {
    certifications.sort_by(|a, b| {
        newest_first(a.issued_on(), b.issued_on()).then_with(|| a.name.cmp(&b.name))
    });
}

pub fn sort_experience(experience: &mut [Experience]) {
    experience.sort_by(|a, b| {
        newest_first(a.started_on(), b.started_on()).then_with(|| a.company.cmp(&b.company))
    });
}

pub fn sort_case_studies(case_studies: &mut [CaseStudy]) {
    case_studies.sort_by(|a, b| {
        newest_first(a.published_on(), b.published_on()).then_with(|| a.slug.cmp(&b.slug))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::entities::{ProjectLinks, Skill};
    use pretty_assertions::assert_eq;

    fn project(slug: &str, featured: bool, start: Option<&str>) -> Project {
        Project {
            slug: slug.into(),
            name: slug.into(),
            summary: "A sample project summary".into(),
            description: None,
            tech: vec!["Rust".into()],
            links: ProjectLinks::default(),
            impact: vec!["Shipped".into()],
            role: "Engineer".into(),
            featured,
            images: None,
            metrics: None,
            category: None,
            start_date: start.map(Into::into),
            end_date: None,
        }
    }

    fn group(name: &str, order: Option<f64>) -> SkillGroup {
        SkillGroup {
            group: name.into(),
            items: vec![Skill {
                name: "Rust".into(),
                category: "language".into(),
                proficiency: None,
                years: None,
                description: None,
            }],
            order,
        }
    }

    #[test]
    fn projects_featured_then_newest_then_slug() {
        let mut projects = vec![
            project("old", false, Some("2019-01")),
            project("undated", false, None),
            project("new", false, Some("2024-06-01")),
            project("star", true, Some("2018")),
            project("also-new", false, Some("2024-06-01")),
        ];
        sort_projects(&mut projects);
        let slugs: Vec<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, ["star", "also-new", "new", "old", "undated"]);
    }

    #[test]
    fn skill_groups_ordered_before_unordered() {
        let mut groups = vec![
            group("Tools", None),
            group("Languages", Some(2.0)),
            group("Cloud", None),
            group("Frameworks", Some(1.5)),
        ];
        sort_skill_groups(&mut groups);
        let names: Vec<&str> = groups.iter().map(|g| g.group.as_str()).collect();
        assert_eq!(names, ["Frameworks", "Languages", "Cloud", "Tools"]);
    }

    #[test]
    fn experience_newest_first() {
        let job = |company: &str, start: &str| Experience {
            company: company.into(),
            role: "Engineer".into(),
            start_date: start.into(),
            end_date: None,
            location: "Remote".into(),
            description: "Did a lot of useful work.".into(),
            achievements: vec!["Shipped".into()],
            tech: vec![],
        };
        let mut experience = vec![job("A", "2018-01"), job("B", "2022-05"), job("C", "2020")];
        sort_experience(&mut experience);
        let companies: Vec<&str> = experience.iter().map(|e| e.company.as_str()).collect();
        assert_eq!(companies, ["B", "C", "A"]);
    }

    #[test]
    fn certifications_undated_last() {
        let cert = |name: &str, date: Option<&str>| Certification {
            name: name.into(),
            issuer: "Issuer".into(),
            url: "https://example.com".into(),
            date: date.map(Into::into),
            credential_id: None,
            skills: None,
            description: None,
        };
        let mut certs = vec![cert("B", None), cert("A", None), cert("C", Some("2021-03"))];
        sort_certifications(&mut certs);
        let names: Vec<&str> = certs.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }
}
