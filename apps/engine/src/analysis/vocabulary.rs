//! Skill vocabulary — the fixed tables of recognized terms, grouped by category.
//!
//! Exposed as constant data rather than behavior so tests can enumerate
//! coverage directly. Canonical spelling lives here; the extractor always
//! reports these spellings, never the spelling found in the source text.

/// Programming languages.
pub const LANGUAGES: &[&str] = &[
    "JavaScript",
    "TypeScript",
    "Python",
    "Java",
    "C++",
    "C#",
    "Go",
    "Rust",
    "Ruby",
    "PHP",
    "Swift",
    "Kotlin",
    "Scala",
    "SQL",
];

/// Frameworks and libraries.
pub const FRAMEWORKS: &[&str] = &[
    "React",
    "Angular",
    "Vue",
    "Next.js",
    "Node.js",
    "Express",
    "Django",
    "Flask",
    "FastAPI",
    "Spring Boot",
    "Rails",
    "Laravel",
    ".NET",
    "GraphQL",
    "TensorFlow",
    "PyTorch",
];

/// Databases and data stores.
pub const DATABASES: &[&str] = &[
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "SQLite",
    "Elasticsearch",
    "DynamoDB",
    "Cassandra",
    "SQL Server",
];

/// Cloud platforms and DevOps tooling.
pub const CLOUD_DEVOPS: &[&str] = &[
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Terraform",
    "Jenkins",
    "CircleCI",
    "GitHub Actions",
    "Ansible",
    "Lambda",
    "S3",
    "EC2",
];

/// Generic engineering tools.
pub const TOOLS: &[&str] = &[
    "Git",
    "Jira",
    "Figma",
    "Postman",
    "Webpack",
    "Vite",
    "Kafka",
    "RabbitMQ",
    "gRPC",
];

/// Methodology and concept terms.
pub const CONCEPTS: &[&str] = &[
    "REST",
    "CI/CD",
    "Agile",
    "Scrum",
    "TDD",
    "Microservices",
    "Machine Learning",
    "Distributed Systems",
    "System Design",
    "Unit Testing",
    "OOP",
    "NoSQL",
    "DevOps",
];

/// All vocabulary categories, for enumeration in tests and scanning.
pub const CATEGORIES: &[(&str, &[&str])] = &[
    ("language", LANGUAGES),
    ("framework", FRAMEWORKS),
    ("database", DATABASES),
    ("cloud_devops", CLOUD_DEVOPS),
    ("tool", TOOLS),
    ("concept", CONCEPTS),
];

/// Iterates every canonical term across all categories.
pub fn all() -> impl Iterator<Item = &'static str> {
    CATEGORIES.iter().flat_map(|(_, terms)| terms.iter().copied())
}
