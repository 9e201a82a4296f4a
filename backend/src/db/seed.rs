//! Mock reference data loaded into every fresh catalog database.

pub const AUTHORS: &[(u32, &str)] = &[(1, "Cory House"), (2, "Scott Allen"), (3, "Dan Wahlin")];

/// `(title, slug, author_id, category)`
pub const COURSES: &[(&str, &str, u32, &str)] = &[
    (
        "Securing React Apps with Auth0",
        "react-auth0-authentication-security",
        1,
        "JavaScript",
    ),
    ("React: The Big Picture", "react-big-picture", 1, "JavaScript"),
    (
        "Creating Reusable React Components",
        "react-creating-reusable-components",
        1,
        "JavaScript",
    ),
    (
        "Building a JavaScript Development Environment",
        "javascript-development-environment",
        1,
        "JavaScript",
    ),
    (
        "Building Applications with React and Redux",
        "react-redux-react-router-es6",
        1,
        "JavaScript",
    ),
    (
        "Building Applications in React and Flux",
        "react-flux-building-applications",
        1,
        "JavaScript",
    ),
    (
        "Clean Code: Writing Code for Humans",
        "writing-clean-code-humans",
        1,
        "Software Practices",
    ),
    (
        "Architecting Applications for the Real World",
        "architecting-applications-dotnet",
        1,
        "Software Architecture",
    ),
    (
        "Becoming an Outlier: Reprogramming the Developer Mind",
        "career-reboot-for-developer-mind",
        1,
        "Career",
    ),
    ("Web Component Fundamentals", "web-components-shadow-dom", 1, "HTML5"),
];
