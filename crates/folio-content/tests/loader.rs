//! Loader behaviour against real content trees in temp directories.

use std::fs;
use std::path::Path;

use folio_config::ContentConfig;
use folio_content::{ContentError, ContentLoader};
use folio_schema::ErrorKind;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use tempfile::TempDir;

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn write_json(root: &Path, rel: &str, value: &Value) {
    write(root, rel, &serde_json::to_string_pretty(value).unwrap());
}

fn project(slug: &str, featured: bool, start: &str) -> Value {
    json!({
        "slug": slug,
        "name": format!("Project {slug}"),
        "summary": "A project used in loader tests",
        "tech": ["Rust"],
        "links": { "repo": format!("https://github.com/example/{slug}") },
        "impact": ["Made things faster"],
        "role": "Engineer",
        "featured": featured,
        "startDate": start
    })
}

fn profile() -> Value {
    json!({
        "name": "Ada Example",
        "title": "Platform Engineer",
        "location": "Lisbon",
        "bio": "Builds reliable infrastructure for small teams.",
        "links": {
            "email": "ada@example.com",
            "github": "https://github.com/ada",
            "linkedin": "https://linkedin.com/in/ada",
            "resume": "/resume.pdf"
        }
    })
}

fn case_study(project: &str, date: &str, featured: bool) -> String {
    format!(
        "---\ntitle: Study of {project}\nproject: {project}\nproblem: Slow pages\napproach: Cache more\nimpact: Faster pages\ndate: {date}\nfeatured: {featured}\n---\n\n## Context\n\nSome words about the work.\n\n"
    )
}

fn loader(dir: &TempDir) -> ContentLoader {
    ContentLoader::new(dir.path()).unwrap()
}

// ---------------------------------------------------------------------------
// Single-file sources
// ---------------------------------------------------------------------------

#[test]
fn loads_profile() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "profile.json", &profile());

    let profile = loader(&dir).load_profile().unwrap();
    assert_eq!(profile.name, "Ada Example");
    assert_eq!(profile.links.get("github"), Some("https://github.com/ada"));
}

#[test]
fn missing_profile_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = loader(&dir).load_profile().unwrap_err();
    assert!(matches!(err, ContentError::Io { .. }), "{err}");
    assert!(loader(&dir).load_profile_safe().is_none());
}

#[test]
fn malformed_profile_json_is_a_json_error() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "profile.json", "{ \"name\": ");
    let err = loader(&dir).load_profile().unwrap_err();
    assert!(matches!(err, ContentError::Json { .. }), "{err}");
}

#[test]
fn invalid_profile_names_the_field() {
    let dir = TempDir::new().unwrap();
    let mut data = profile();
    data["bio"] = json!("short");
    data["links"]["blog"] = json!("not a url");
    write_json(dir.path(), "profile.json", &data);

    let err = loader(&dir).load_profile().unwrap_err();
    let fields: Vec<&str> = err
        .validation_errors()
        .iter()
        .map(|e| e.field.as_str())
        .collect();
    assert_eq!(fields, ["bio"]);
    assert!(err.to_string().contains("profile.json"));
}

#[test]
fn extra_profile_link_must_be_url() {
    let dir = TempDir::new().unwrap();
    let mut data = profile();
    data["links"]["blog"] = json!("not a url");
    write_json(dir.path(), "profile.json", &data);

    let err = loader(&dir).load_profile().unwrap_err();
    let errors = err.validation_errors();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "links.blog");
    assert_eq!(errors[0].code, ErrorKind::InvalidUrl);
}

#[test]
fn skills_are_sorted_by_order_then_name() {
    let dir = TempDir::new().unwrap();
    let item = json!([{ "name": "Rust", "category": "language" }]);
    write_json(
        dir.path(),
        "skills.json",
        &json!([
            { "group": "Tools", "items": item },
            { "group": "Languages", "items": item, "order": 2 },
            { "group": "Cloud", "items": item },
            { "group": "Frameworks", "items": item, "order": 1 }
        ]),
    );

    let groups = loader(&dir).load_skills().unwrap();
    let names: Vec<&str> = groups.iter().map(|g| g.group.as_str()).collect();
    assert_eq!(names, ["Frameworks", "Languages", "Cloud", "Tools"]);
}

#[test]
fn fractional_skill_numbers_load() {
    let dir = TempDir::new().unwrap();
    write_json(
        dir.path(),
        "skills.json",
        &json!([
            {
                "group": "Languages",
                "items": [{ "name": "Rust", "category": "language", "proficiency": 7.5, "years": 3.5 }],
                "order": 1.5
            },
            {
                "group": "Cloud",
                "items": [{ "name": "AWS", "category": "cloud", "proficiency": 6 }],
                "order": 1
            }
        ]),
    );

    let groups = loader(&dir).load_skills().unwrap();
    let names: Vec<&str> = groups.iter().map(|g| g.group.as_str()).collect();
    assert_eq!(names, ["Cloud", "Languages"]);
    assert_eq!(groups[1].items[0].proficiency, Some(7.5));
}

#[test]
fn experience_is_newest_first() {
    let dir = TempDir::new().unwrap();
    let job = |company: &str, start: &str, end: Option<&str>| {
        let mut value = json!({
            "company": company,
            "role": "Engineer",
            "startDate": start,
            "location": "Remote",
            "description": "Worked on the platform team.",
            "achievements": ["Shipped the thing"]
        });
        if let Some(end) = end {
            value["endDate"] = json!(end);
        }
        value
    };
    write_json(
        dir.path(),
        "experience.json",
        &json!([
            job("Old Co", "2016-01", Some("2019-06")),
            job("Now Co", "2022-03", Some("Present")),
            job("Mid Co", "2019-07", Some("2022-02"))
        ]),
    );

    let experience = loader(&dir).load_experience().unwrap();
    let companies: Vec<&str> = experience.iter().map(|e| e.company.as_str()).collect();
    assert_eq!(companies, ["Now Co", "Mid Co", "Old Co"]);
    assert!(experience[0].is_current());
    assert!(!experience[1].is_current());
}

#[test]
fn invalid_certification_list_fails_with_indexed_field() {
    let dir = TempDir::new().unwrap();
    write_json(
        dir.path(),
        "certifications.json",
        &json!([
            { "name": "CKA", "issuer": "CNCF", "url": "https://cncf.io/cka", "date": "2022-11" },
            { "name": "Bad", "issuer": "Nobody", "url": "not-a-url" }
        ]),
    );

    let err = loader(&dir).load_certifications().unwrap_err();
    assert_eq!(err.validation_errors()[0].field, "1.url");
    assert!(loader(&dir).load_certifications_safe().is_none());
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[test]
fn malformed_project_is_skipped() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "projects/a.json", &project("alpha", false, "2023-01"));
    write(dir.path(), "projects/b.json", "{ not json");
    write_json(dir.path(), "projects/c.json", &project("gamma", true, "2020-01"));

    let projects = loader(&dir).load_projects().unwrap();
    let slugs: Vec<&str> = projects.iter().map(|p| p.slug.as_str()).collect();
    assert_eq!(slugs, ["gamma", "alpha"]);
}

#[test]
fn invalid_project_is_skipped() {
    let dir = TempDir::new().unwrap();
    let mut bad = project("broken", false, "2023-01");
    bad["tech"] = json!([]);
    write_json(dir.path(), "projects/broken.json", &bad);
    write_json(dir.path(), "projects/ok.json", &project("ok", false, "2023-01"));

    let projects = loader(&dir).load_projects().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].slug, "ok");
}

#[test]
fn non_json_files_are_ignored() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "projects/a.json", &project("alpha", false, "2023-01"));
    write(dir.path(), "projects/README.md", "# notes");

    assert_eq!(loader(&dir).load_projects().unwrap().len(), 1);
}

#[test]
fn missing_projects_directory_is_empty() {
    let dir = TempDir::new().unwrap();
    assert!(loader(&dir).load_projects().unwrap().is_empty());
}

#[test]
fn duplicate_slug_keeps_first_file() {
    let dir = TempDir::new().unwrap();
    let mut first = project("same", false, "2023-01");
    first["name"] = json!("First");
    let mut second = project("same", false, "2024-01");
    second["name"] = json!("Second");
    write_json(dir.path(), "projects/1-first.json", &first);
    write_json(dir.path(), "projects/2-second.json", &second);

    let projects = loader(&dir).load_projects().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].name, "First");
}

#[test]
fn all_invalid_projects_fail_by_default() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "projects/a.json", "[]");
    write(dir.path(), "projects/b.json", "nope");

    let err = loader(&dir).load_projects().unwrap_err();
    assert!(
        matches!(err, ContentError::NoValidItems { skipped: 2, .. }),
        "{err}"
    );
    assert!(loader(&dir).load_projects_safe().is_none());
}

#[test]
fn all_invalid_projects_allowed_when_configured() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "projects/a.json", "[]");

    let loader = ContentLoader::from_config(&ContentConfig {
        root: dir.path().to_path_buf(),
        allow_all_invalid: true,
        ..ContentConfig::default()
    })
    .unwrap();
    assert!(loader.load_projects().unwrap().is_empty());
}

#[test]
fn skip_limit_is_enforced() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "projects/a.json", &project("alpha", false, "2023-01"));
    write(dir.path(), "projects/b.json", "nope");
    write(dir.path(), "projects/c.json", "nope");

    let loader = ContentLoader::from_config(&ContentConfig {
        root: dir.path().to_path_buf(),
        max_skipped: Some(1),
        ..ContentConfig::default()
    })
    .unwrap();
    let err = loader.load_projects().unwrap_err();
    assert!(
        matches!(err, ContentError::TooManySkipped { skipped: 2, limit: 1, .. }),
        "{err}"
    );
}

#[test]
fn load_project_by_slug() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "projects/anything.json", &project("edge-cache", false, "2023-01"));

    let loader = loader(&dir);
    assert_eq!(loader.load_project("edge-cache").unwrap().unwrap().slug, "edge-cache");
    assert!(loader.load_project("missing").unwrap().is_none());
    assert!(loader.load_project("../profile").unwrap().is_none());
    assert!(loader.load_project("Edge-Cache").unwrap().is_none());
    assert!(loader.load_project_safe("edge-cache").is_some());
}

#[rstest]
#[case("../projects/edge-cache")]
#[case("edge cache")]
#[case("edge_cache")]
#[case("-edge")]
#[case("")]
fn malformed_slugs_are_never_looked_up(#[case] slug: &str) {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "projects/edge-cache.json", &project("edge-cache", false, "2023-01"));
    write(dir.path(), "case-studies/edge-cache.mdx", &case_study("edge-cache", "2024-01-01", false));

    let loader = loader(&dir);
    assert!(loader.load_project(slug).unwrap().is_none());
    assert!(loader.get_case_study_by_slug(slug).is_none());
}

#[test]
fn repeated_loads_are_identical() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "profile.json", &profile());
    write_json(dir.path(), "projects/a.json", &project("alpha", false, "2023-01"));
    write_json(dir.path(), "projects/b.json", &project("beta", false, "2023-01"));
    write(dir.path(), "case-studies/alpha.mdx", &case_study("alpha", "2024-02-01", true));

    let loader = loader(&dir);
    assert_eq!(loader.load_profile().unwrap(), loader.load_profile().unwrap());
    assert_eq!(loader.load_projects().unwrap(), loader.load_projects().unwrap());
    assert_eq!(loader.get_all_case_studies(), loader.get_all_case_studies());
}

// ---------------------------------------------------------------------------
// Case studies
// ---------------------------------------------------------------------------

#[test]
fn case_study_slugs_are_sorted_stems() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "case-studies/zeta.mdx", &case_study("zeta", "2024-01-01", false));
    write(dir.path(), "case-studies/alpha.mdx", &case_study("alpha", "2024-01-01", false));
    write(dir.path(), "case-studies/notes.txt", "ignored");

    assert_eq!(loader(&dir).get_all_case_study_slugs(), ["alpha", "zeta"]);
}

#[test]
fn missing_case_study_directory_has_no_slugs() {
    let dir = TempDir::new().unwrap();
    assert!(loader(&dir).get_all_case_study_slugs().is_empty());
    assert!(loader(&dir).get_all_case_studies().is_empty());
}

#[test]
fn case_study_resolves_its_project() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "projects/alpha.json", &project("alpha", false, "2023-01"));
    write(dir.path(), "case-studies/alpha-study.mdx", &case_study("alpha", "2024-02-01", true));

    let study = loader(&dir).get_case_study_by_slug("alpha-study").unwrap();
    assert_eq!(study.slug, "alpha-study");
    assert_eq!(study.frontmatter.title, "Study of alpha");
    assert!(study.frontmatter.featured);
    assert_eq!(study.content, "## Context\n\nSome words about the work.");
    assert_eq!(study.reading_time_minutes, 1);
    assert_eq!(study.project.unwrap().slug, "alpha");
}

#[test]
fn case_study_with_unknown_project_has_no_project() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "case-studies/orphan.mdx", &case_study("ghost", "2024-02-01", false));

    let study = loader(&dir).get_case_study_by_slug("orphan").unwrap();
    assert!(study.project.is_none());
}

#[test]
fn unquoted_numeric_front_matter_loads() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "case-studies/yearly.mdx",
        "---\ntitle: Yearly review\nproject: alpha\nproblem: Drift\napproach: Audit\nimpact: 40\ndate: 2024\ntags: [infra, 2024]\n---\nBody",
    );

    let loader = loader(&dir);
    let study = loader.get_case_study_by_slug("yearly").unwrap();
    assert_eq!(study.frontmatter.date, "2024");
    assert_eq!(study.frontmatter.impact, "40");
    assert_eq!(study.frontmatter.tags, ["infra", "2024"]);
    assert_eq!(loader.get_all_case_studies().len(), 1);
}

#[test]
fn nonexistent_case_study_is_none() {
    let dir = TempDir::new().unwrap();
    assert!(loader(&dir).get_case_study_by_slug("nope").is_none());
    assert!(loader(&dir).get_case_study_by_slug("../profile").is_none());
}

#[test]
fn case_study_missing_required_key_is_none() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "case-studies/partial.mdx",
        "---\ntitle: Partial\nproject: alpha\nproblem: x\napproach: y\ndate: 2024-01-01\n---\nBody",
    );
    write(
        dir.path(),
        "case-studies/unclosed.mdx",
        "---\ntitle: Unclosed\n",
    );

    let loader = loader(&dir);
    assert!(loader.get_case_study_by_slug("partial").is_none());
    assert!(loader.get_case_study_by_slug("unclosed").is_none());
    assert!(loader.get_all_case_studies().is_empty());
}

#[test]
fn case_studies_sorted_and_filtered() {
    let dir = TempDir::new().unwrap();
    write_json(dir.path(), "projects/alpha.json", &project("alpha", false, "2023-01"));
    write_json(dir.path(), "projects/beta.json", &project("beta", false, "2023-01"));
    write(dir.path(), "case-studies/one.mdx", &case_study("alpha", "2023-05-01", false));
    write(dir.path(), "case-studies/two.mdx", &case_study("beta", "2024-05-01", true));
    write(dir.path(), "case-studies/three.mdx", &case_study("alpha", "2024-01-01", true));

    let loader = loader(&dir);
    let all: Vec<String> = loader
        .get_all_case_studies()
        .into_iter()
        .map(|cs| cs.slug)
        .collect();
    assert_eq!(all, ["two", "three", "one"]);

    let featured: Vec<String> = loader
        .get_featured_case_studies()
        .into_iter()
        .map(|cs| cs.slug)
        .collect();
    assert_eq!(featured, ["two", "three"]);

    let for_alpha: Vec<String> = loader
        .get_case_studies_for_project("alpha")
        .into_iter()
        .map(|cs| cs.slug)
        .collect();
    assert_eq!(for_alpha, ["three", "one"]);
    assert!(
        loader
            .get_all_case_studies()
            .iter()
            .all(|cs| cs.project.is_some())
    );
}
