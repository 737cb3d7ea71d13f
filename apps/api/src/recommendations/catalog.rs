use uuid::Uuid;

use crate::models::internship::Posting;

fn posting(
    title: &str,
    company: &str,
    location: &str,
    duration: &str,
    stipend: &str,
    description: &str,
    required_skills: &[&str],
    sector: &str,
    work_mode: &str,
    education_level: &str,
) -> Posting {
    Posting {
        id: Uuid::new_v4(),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        duration: duration.to_string(),
        stipend: stipend.to_string(),
        description: description.to_string(),
        required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
        sector: sector.to_string(),
        work_mode: work_mode.to_string(),
        education_level: education_level.to_string(),
        is_active: true,
    }
}

/// The reference posting catalog. Seeds an empty `internships` table on
/// startup and backs the in-memory posting fake in tests. Order matters:
/// it is the tie-break for equal scores.
pub fn seed_catalog() -> Vec<Posting> {
    vec![
        posting(
            "Software Development Intern",
            "TechCorp India",
            "Bangalore",
            "3 Months",
            "₹15,000/month",
            "Work on cutting-edge web applications using React and Node.js",
            &["programming", "web-development", "database"],
            "technology",
            "hybrid",
            "bachelor",
        ),
        posting(
            "Data Science Intern",
            "DataAnalytics Pvt Ltd",
            "Mumbai",
            "6 Months",
            "₹20,000/month",
            "Analyze large datasets and build machine learning models",
            &["data-analysis", "machine-learning", "programming"],
            "technology",
            "remote",
            "bachelor",
        ),
        posting(
            "Marketing Intern",
            "Digital Marketing Solutions",
            "Delhi",
            "2 Months",
            "₹10,000/month",
            "Create digital marketing campaigns and social media content",
            &["communication", "creativity", "analytical-thinking"],
            "media",
            "onsite",
            "bachelor",
        ),
        posting(
            "Finance Intern",
            "Investment Bank Ltd",
            "Mumbai",
            "3 Months",
            "₹25,000/month",
            "Assist in financial analysis and investment research",
            &["analytical-thinking", "problem-solving", "communication"],
            "finance",
            "onsite",
            "bachelor",
        ),
        posting(
            "Cybersecurity Intern",
            "SecureTech Solutions",
            "Hyderabad",
            "4 Months",
            "₹18,000/month",
            "Learn about network security and threat analysis",
            &["cybersecurity", "networking", "problem-solving"],
            "technology",
            "hybrid",
            "bachelor",
        ),
    ]
}
