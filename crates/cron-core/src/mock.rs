//! # Mock Data Providers
//!
//! Static seed data standing in for an analysis backend. Every provider returns
//! a fresh owned copy so a view can mutate its list without affecting the next
//! mount.

use serde::Serialize;

use crate::file_tree::{FileNode, IssueKind};
use crate::project::{Activity, ActivityKind, Impact, Project, ProjectStatus};
use crate::suggestion::{Severity, Suggestion, SuggestionCategory};

/// File selected when the analysis view mounts (`UserProfile.tsx`).
pub const DEFAULT_SELECTED_FILE: &str = "3";

/// Display name used by the editor when the selection is unknown.
pub const SAMPLE_FILE_NAME: &str = "UserProfile.tsx";

pub const SAMPLE_LANGUAGE: &str = "TypeScript";

pub const SAMPLE_ENCODING: &str = "UTF-8";

/// Canned result reported by the simulated analysis.
pub const ANALYSIS_RESULT: &str = "Analysis complete - 3 optimization opportunities found";

/// Languages offered by the new-project form.
pub const LANGUAGES: [&str; 10] = [
    "TypeScript",
    "JavaScript",
    "Python",
    "Java",
    "C#",
    "Go",
    "Rust",
    "PHP",
    "Ruby",
    "Swift",
];

/// Source shown in the code editor.
pub const SAMPLE_SOURCE: &str = r#"import React, { useState, useEffect } from 'react';
import { UserService } from '../services/UserService';

// TODO: This component has performance issues
const UserProfile = ({ userId }) => {
  const [user, setUser] = useState(null);
  const [loading, setLoading] = useState(true);
  const [error, setError] = useState(null);

  // Performance issue: This effect runs on every render
  useEffect(() => {
    fetchUserData();
  });

  const fetchUserData = async () => {
    try {
      setLoading(true);
      const userData = await UserService.getUser(userId);
      setUser(userData);
    } catch (err) {
      setError(err.message);
    } finally {
      setLoading(false);
    }
  };

  // Code smell: Multiple early returns
  if (loading) return <div>Loading...</div>;
  if (error) return <div>Error: {error}</div>;
  if (!user) return <div>No user found</div>;

  return (
    <div className="user-profile">
      <h2>{user.name}</h2>
      <p>{user.email}</p>
      <p>{user.bio}</p>
    </div>
  );
};

export default UserProfile;"#;

/// The mock project tree.
pub fn seed_file_tree() -> Vec<FileNode> {
    vec![
        FileNode::folder(
            "1",
            "src",
            "/src",
            vec![
                FileNode::folder(
                    "2",
                    "components",
                    "/src/components",
                    vec![
                        FileNode::file("3", "UserProfile.tsx", "/src/components/UserProfile.tsx")
                            .with_issues(3, IssueKind::Warning),
                        FileNode::file("4", "Dashboard.tsx", "/src/components/Dashboard.tsx")
                            .with_issues(1, IssueKind::Error),
                    ],
                ),
                FileNode::folder(
                    "5",
                    "utils",
                    "/src/utils",
                    vec![
                        FileNode::file("6", "api.ts", "/src/utils/api.ts")
                            .with_issues(5, IssueKind::Suggestion),
                        FileNode::file("7", "helpers.ts", "/src/utils/helpers.ts"),
                    ],
                ),
            ],
        ),
        FileNode::file("8", "package.json", "/package.json"),
    ]
}

/// The three suggestions every analysis view starts with.
pub fn seed_suggestions() -> Vec<Suggestion> {
    vec![
        Suggestion {
            id: "1".into(),
            category: SuggestionCategory::Performance,
            severity: Severity::Critical,
            title: "Remove infinite useEffect loop".into(),
            description: "The useEffect hook runs on every render because it lacks a dependency array, causing performance issues.".into(),
            line_number: 11,
            original_code: "useEffect(() => {\n  fetchUserData();\n});".into(),
            suggested_code: "useEffect(() => {\n  fetchUserData();\n}, [userId]);".into(),
            impact: "High - Prevents infinite re-renders and improves performance significantly".into(),
            reasoning: "Adding userId to the dependency array ensures the effect only runs when the userId changes.".into(),
            expanded: false,
        },
        Suggestion {
            id: "2".into(),
            category: SuggestionCategory::Refactoring,
            severity: Severity::Moderate,
            title: "Consolidate early returns".into(),
            description: "Multiple early returns can be consolidated into a more maintainable structure.".into(),
            line_number: 24,
            original_code: "if (loading) return <div>Loading...</div>;\nif (error) return <div>Error: {error}</div>;\nif (!user) return <div>No user found</div>;".into(),
            suggested_code: "if (loading) {\n  return <LoadingSpinner />;\n}\n\nif (error) {\n  return <ErrorMessage message={error} />;\n}\n\nif (!user) {\n  return <EmptyState message=\"No user found\" />;\n}".into(),
            impact: "Medium - Improves code maintainability and user experience".into(),
            reasoning: "Using dedicated components for different states makes the code more modular and easier to test.".into(),
            expanded: false,
        },
        Suggestion {
            id: "3".into(),
            category: SuggestionCategory::BestPractice,
            severity: Severity::Minor,
            title: "Add PropTypes or TypeScript interface".into(),
            description: "Component props should be properly typed for better development experience.".into(),
            line_number: 5,
            original_code: "const UserProfile = ({ userId }) => {".into(),
            suggested_code: "interface UserProfileProps {\n  userId: string;\n}\n\nconst UserProfile: React.FC<UserProfileProps> = ({ userId }) => {".into(),
            impact: "Low - Improves type safety and development experience".into(),
            reasoning: "Proper typing prevents runtime errors and improves IDE support.".into(),
            expanded: false,
        },
    ]
}

fn seed_project(
    id: &str,
    name: &str,
    path: &str,
    last_analyzed: &str,
    (issues_found, issues_fixed): (u32, u32),
    language: &str,
    status: ProjectStatus,
) -> Project {
    Project {
        id: id.into(),
        name: name.into(),
        path: path.into(),
        last_analyzed: last_analyzed.into(),
        issues_found,
        issues_fixed,
        language: language.into(),
        status,
        description: None,
        git_repository: None,
        created_at: None,
    }
}

pub fn seed_projects() -> Vec<Project> {
    vec![
        seed_project(
            "1",
            "E-commerce Frontend",
            "/Users/dev/projects/ecommerce-frontend",
            "2 hours ago",
            (12, 8),
            "TypeScript",
            ProjectStatus::Completed,
        ),
        seed_project(
            "2",
            "API Gateway",
            "/Users/dev/projects/api-gateway",
            "1 day ago",
            (5, 5),
            "Node.js",
            ProjectStatus::Completed,
        ),
        seed_project(
            "3",
            "Mobile App Backend",
            "/Users/dev/projects/mobile-backend",
            "Analyzing...",
            (0, 0),
            "Python",
            ProjectStatus::Analyzing,
        ),
    ]
}

pub fn seed_activity() -> Vec<Activity> {
    vec![
        Activity {
            id: "1".into(),
            kind: ActivityKind::Optimization,
            project: "E-commerce Frontend".into(),
            description: "Applied React.memo optimization to ProductCard component".into(),
            timestamp: "30 minutes ago".into(),
            impact: Impact::High,
        },
        Activity {
            id: "2".into(),
            kind: ActivityKind::Fix,
            project: "API Gateway".into(),
            description: "Fixed memory leak in authentication middleware".into(),
            timestamp: "2 hours ago".into(),
            impact: Impact::High,
        },
        Activity {
            id: "3".into(),
            kind: ActivityKind::Analysis,
            project: "E-commerce Frontend".into(),
            description: "Completed full codebase analysis - 12 issues detected".into(),
            timestamp: "3 hours ago".into(),
            impact: Impact::Medium,
        },
    ]
}

/// A question/answer pair on the help page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub fn faqs() -> &'static [Faq] {
    const FAQS: &[Faq] = &[
        Faq {
            question: "How does CRON analyze my code?",
            answer: "CRON uses advanced static analysis and machine learning models trained on best practices to identify optimization opportunities, performance bottlenecks, and code smells in your codebase.",
        },
        Faq {
            question: "Is my code sent to external servers?",
            answer: "By default, CRON processes your code locally for maximum privacy. You can optionally enable cloud processing for enhanced features, with end-to-end encryption.",
        },
        Faq {
            question: "Which programming languages are supported?",
            answer: "CRON currently supports TypeScript, JavaScript, Python, and Java, with more languages being added regularly.",
        },
        Faq {
            question: "How accurate are the suggestions?",
            answer: "Our AI models are trained on millions of code examples and best practices. While highly accurate, we recommend reviewing each suggestion before applying it to your codebase.",
        },
    ];
    FAQS
}
