//! Static taxonomy tables used by the extractor, comparator and bullet rubric.
//!
//! All tables are immutable. Compiled regexes are built once on first use.

use once_cell::sync::Lazy;
use regex::Regex;

/// Display grouping for recognised skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Languages,
    Frontend,
    Backend,
    Databases,
    Cloud,
    Tools,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 6] = [
        SkillCategory::Languages,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Databases,
        SkillCategory::Cloud,
        SkillCategory::Tools,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            SkillCategory::Languages => "Programming Languages",
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Databases => "Databases",
            SkillCategory::Cloud => "Cloud & DevOps",
            SkillCategory::Tools => "Tools & Practices",
        }
    }
}

/// Skill patterns per category. Each entry is one regex alternation; the
/// first match of an entry in a text is the one that gets normalized.
const SKILL_PATTERNS: &[(SkillCategory, &[&str])] = &[
    (
        SkillCategory::Languages,
        &[
            r"javascript|js",
            r"typescript",
            r"python",
            r"java",
            r"c\+\+",
            r"c#",
            r"ruby",
            r"golang",
            r"rust",
            r"php",
            r"swift",
            r"kotlin",
            r"scala",
            r"sql",
        ],
    ),
    (
        SkillCategory::Frontend,
        &[
            r"angular(?:js)?",
            r"react(?:\.?js)?",
            r"vue(?:\.?js)?",
            r"svelte",
            r"next\.?js",
            r"html5?",
            r"css3?",
            r"sass|scss",
            r"tailwind(?:\s?css)?",
            r"redux",
            r"rxjs",
        ],
    ),
    (
        SkillCategory::Backend,
        &[
            r"node\.?js",
            r"express(?:\.?js)?",
            r"django",
            r"flask",
            r"fastapi",
            r"spring(?:\s?boot)?",
            r"\.net|dotnet",
            r"graphql",
            r"rest(?:ful)?\s?apis?",
            r"microservices",
        ],
    ),
    (
        SkillCategory::Databases,
        &[
            r"postgres(?:ql)?",
            r"mysql",
            r"mongodb|mongo",
            r"redis",
            r"sqlite",
            r"dynamodb",
            r"elasticsearch",
            r"oracle",
            r"supabase",
            r"firebase",
        ],
    ),
    (
        SkillCategory::Cloud,
        &[
            r"aws|amazon web services",
            r"azure",
            r"gcp|google cloud(?: platform)?",
            r"docker",
            r"kubernetes|k8s",
            r"terraform",
            r"serverless",
        ],
    ),
    (
        SkillCategory::Tools,
        &[
            r"git",
            r"github",
            r"gitlab",
            r"jenkins",
            r"ci\s?/\s?cd",
            r"jira",
            r"webpack",
            r"jest",
            r"cypress",
            r"figma",
            r"linux",
            r"agile",
            r"scrum",
        ],
    ),
];

/// A compiled taxonomy entry. The `skill` capture group holds the matched text.
pub struct SkillPattern {
    pub category: SkillCategory,
    pub regex: Regex,
}

/// Whole-word boundaries that also treat `+` and `#` as part of a word, so
/// `c` never matches inside `c++` or `c#`. A leading `.` is a word character
/// too, which keeps `js` from matching the tail of `node.js`.
fn whole_word(alternation: &str) -> String {
    format!(r"(?i)(?:^|[^\w+#.])(?P<skill>{alternation})(?:[^\w+#]|$)")
}

pub static COMPILED_SKILL_PATTERNS: Lazy<Vec<SkillPattern>> = Lazy::new(|| {
    SKILL_PATTERNS
        .iter()
        .flat_map(|(category, patterns)| {
            patterns.iter().map(move |pattern| SkillPattern {
                category: *category,
                regex: Regex::new(&whole_word(pattern)).expect("valid skill pattern"),
            })
        })
        .collect()
});

/// Special-case spellings applied before the title-case fallback.
/// Keys are lower-case with single spaces.
pub const SKILL_REWRITES: &[(&str, &str)] = &[
    ("js", "JavaScript"),
    ("javascript", "JavaScript"),
    ("typescript", "TypeScript"),
    ("c++", "C++"),
    ("c#", "C#"),
    ("golang", "Go"),
    ("php", "PHP"),
    ("sql", "SQL"),
    ("angularjs", "Angular"),
    ("react.js", "React"),
    ("reactjs", "React"),
    ("vue", "Vue.js"),
    ("vuejs", "Vue.js"),
    ("vue.js", "Vue.js"),
    ("next.js", "Next.js"),
    ("nextjs", "Next.js"),
    ("html", "HTML"),
    ("html5", "HTML"),
    ("css", "CSS"),
    ("css3", "CSS"),
    ("sass", "Sass"),
    ("scss", "Sass"),
    ("tailwind", "Tailwind CSS"),
    ("tailwindcss", "Tailwind CSS"),
    ("tailwind css", "Tailwind CSS"),
    ("rxjs", "RxJS"),
    ("nodejs", "Node.js"),
    ("node.js", "Node.js"),
    ("express.js", "Express"),
    ("expressjs", "Express"),
    ("fastapi", "FastAPI"),
    ("springboot", "Spring Boot"),
    (".net", ".NET"),
    ("dotnet", ".NET"),
    ("graphql", "GraphQL"),
    ("rest api", "REST API"),
    ("rest apis", "REST API"),
    ("restapi", "REST API"),
    ("restapis", "REST API"),
    ("restful api", "REST API"),
    ("restful apis", "REST API"),
    ("restfulapi", "REST API"),
    ("restfulapis", "REST API"),
    ("postgres", "PostgreSQL"),
    ("postgresql", "PostgreSQL"),
    ("mysql", "MySQL"),
    ("mongo", "MongoDB"),
    ("mongodb", "MongoDB"),
    ("sqlite", "SQLite"),
    ("dynamodb", "DynamoDB"),
    ("elasticsearch", "Elasticsearch"),
    ("aws", "AWS"),
    ("amazon web services", "AWS"),
    ("gcp", "GCP"),
    ("google cloud", "GCP"),
    ("google cloud platform", "GCP"),
    ("k8s", "Kubernetes"),
    ("github", "GitHub"),
    ("gitlab", "GitLab"),
    ("ci/cd", "CI/CD"),
    ("ci / cd", "CI/CD"),
    ("ci /cd", "CI/CD"),
    ("ci/ cd", "CI/CD"),
];

/// Groups of mutually transferable skills, keyed by lower-case name.
pub const TRANSFERABLE_SKILLS: &[&[&str]] = &[
    &["angular", "react", "vue.js", "vue", "svelte"],
    &["aws", "azure", "gcp", "google cloud"],
    &["docker", "kubernetes"],
    &["postgresql", "mysql", "sqlite", "oracle", "sql server"],
    &["mongodb", "dynamodb", "firebase"],
    &["javascript", "typescript"],
    &["java", "kotlin", "scala"],
    &["node.js", "express", "django", "flask", "fastapi", "spring boot", ".net"],
    &["jenkins", "github actions", "gitlab ci", "ci/cd"],
    &["terraform", "cloudformation", "ansible"],
    &["jest", "cypress", "mocha"],
    &["redux", "rxjs"],
];

pub const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "also", "among", "another", "because",
    "been", "before", "being", "below", "between", "both", "cannot", "could", "does",
    "doing", "down", "during", "each", "every", "from", "further", "have",
    "having", "here", "hers", "herself", "himself", "into", "itself", "just", "more",
    "most", "must", "myself", "only", "other", "ours", "over", "same", "should", "some",
    "such", "than", "that", "their", "theirs", "them", "then", "there", "these", "they",
    "this", "those", "through", "under", "until", "very", "were", "what", "when",
    "where", "which", "while", "will", "with", "within", "would", "your", "yours",
    "ability", "across", "based", "candidate", "company", "including", "looking",
    "plus", "preferred", "required", "requirements", "responsibilities", "role",
    "strong", "team", "using", "well", "work", "working", "years", "join", "like",
    "ideal", "help", "make", "part", "able", "want",
];

pub const ACTION_VERBS: &[&str] = &[
    "achieved", "architected", "automated", "built", "championed", "collaborated",
    "configured", "coordinated", "created", "delivered", "deployed", "designed",
    "developed", "directed", "drove", "engineered", "established", "executed",
    "implemented", "improved", "increased", "integrated", "launched", "led",
    "maintained", "managed", "mentored", "migrated", "modernized", "optimized",
    "orchestrated", "organized", "overhauled", "pioneered", "reduced", "refactored",
    "resolved", "scaled", "shipped", "spearheaded", "streamlined", "supervised",
    "trained", "transformed",
];

/// Outcome-language stems; any word starting with one of these counts.
pub const IMPACT_STEMS: &[&str] = &[
    "increas", "reduc", "improv", "sav", "generat", "boost", "accelerat", "optimiz",
    "optimis", "enhanc", "decreas", "grew", "grow", "achiev", "deliver", "streamlin",
    "eliminat", "cut", "minimiz", "maximiz", "revenue", "result", "enabl",
];

pub const TECHNICAL_TERMS: &[&str] = &[
    "api", "apis", "algorithm", "architecture", "automation", "backend", "cache",
    "caching", "cloud", "database", "databases", "deployment", "docker", "frontend",
    "framework", "infrastructure", "kubernetes", "microservice", "microservices",
    "pipeline", "pipelines", "platform", "protocol", "scalable", "schema", "sdk",
    "server", "service", "services", "system", "systems",
];

/// Minimum character length for a job-description keyword.
pub const MIN_KEYWORD_LEN: usize = 4;

/// Maximum number of keywords returned by keyword extraction.
pub const MAX_KEYWORDS: usize = 20;

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Looks up the special-case spelling for a lower-cased, whitespace-collapsed name.
pub fn rewrite_for(key: &str) -> Option<&'static str> {
    SKILL_REWRITES
        .iter()
        .find(|(from, _)| *from == key)
        .map(|(_, to)| *to)
}

/// Skills that can stand in for `skill` (lower-case), excluding itself.
pub fn transferable_for(skill: &str) -> Vec<&'static str> {
    let mut related = Vec::new();
    for group in TRANSFERABLE_SKILLS {
        if group.contains(&skill) {
            for &candidate in group.iter() {
                if candidate != skill && !related.contains(&candidate) {
                    related.push(candidate);
                }
            }
        }
    }
    related
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_skill_patterns_compile() {
        let total: usize = SKILL_PATTERNS.iter().map(|(_, p)| p.len()).sum();
        assert_eq!(COMPILED_SKILL_PATTERNS.len(), total);
    }

    #[test]
    fn test_rewrite_keys_are_lowercase() {
        for (from, _) in SKILL_REWRITES {
            assert_eq!(*from, from.to_lowercase(), "rewrite key {from} must be lower-case");
        }
    }

    #[test]
    fn test_transferable_is_symmetric() {
        assert!(transferable_for("angular").contains(&"react"));
        assert!(transferable_for("react").contains(&"angular"));
        assert!(transferable_for("docker").contains(&"kubernetes"));
        assert!(transferable_for("kubernetes").contains(&"docker"));
    }

    #[test]
    fn test_transferable_excludes_self_and_unknown() {
        assert!(!transferable_for("aws").contains(&"aws"));
        assert!(transferable_for("cobol").is_empty());
    }

    #[test]
    fn test_c_plus_plus_does_not_match_plain_c() {
        let cpp = COMPILED_SKILL_PATTERNS
            .iter()
            .find(|p| p.regex.as_str().contains(r"c\+\+"))
            .unwrap();
        assert!(cpp.regex.is_match("Proficient in C++ and Rust"));
        assert!(!cpp.regex.is_match("Proficient in C and Rust"));
    }

    #[test]
    fn test_java_does_not_match_javascript() {
        let java = COMPILED_SKILL_PATTERNS
            .iter()
            .find(|p| p.regex.as_str().contains("(?P<skill>java)"))
            .unwrap();
        assert!(!java.regex.is_match("Expert in JavaScript"));
        assert!(java.regex.is_match("Expert in Java."));
    }
}
