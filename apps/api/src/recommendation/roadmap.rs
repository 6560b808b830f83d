//! Four-week learning plans, keyed off the top-ranked career.

use tracing::debug;

use crate::models::career::SkillRoadmapWeek;
use crate::models::profile::CareerProfile;
use crate::recommendation::scorer::score;

#[derive(Debug)]
pub struct WeekTemplate {
    pub week: u8,
    pub title: &'static str,
    pub tasks: &'static [&'static str],
    pub resources: &'static [&'static str],
}

impl WeekTemplate {
    fn to_week(&self) -> SkillRoadmapWeek {
        SkillRoadmapWeek {
            week: self.week,
            title: self.title.to_string(),
            tasks: self.tasks.iter().map(|s| s.to_string()).collect(),
            resources: self.resources.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug)]
pub struct RoadmapTemplate {
    pub name: &'static str,
    pub weeks: [WeekTemplate; 4],
}

impl RoadmapTemplate {
    pub fn to_weeks(&self) -> Vec<SkillRoadmapWeek> {
        self.weeks.iter().map(WeekTemplate::to_week).collect()
    }
}

pub static SOFTWARE_DEVELOPMENT: RoadmapTemplate = RoadmapTemplate {
    name: "software_development",
    weeks: [
        WeekTemplate {
            week: 1,
            title: "Programming Fundamentals",
            tasks: &[
                "Learn basic JavaScript syntax and concepts",
                "Complete 10 coding challenges on a practice platform",
                "Build a simple calculator application",
                "Set up development environment (VS Code, Git)",
            ],
            resources: &[
                "MDN Web Docs - JavaScript Guide",
                "FreeCodeCamp JavaScript course",
                "Codecademy JavaScript track",
            ],
        },
        WeekTemplate {
            week: 2,
            title: "Web Development Basics",
            tasks: &[
                "Learn HTML5 semantic elements and structure",
                "Master CSS3 styling and responsive design",
                "Create your first interactive web page",
                "Practice with CSS Grid and Flexbox",
            ],
            resources: &[
                "W3Schools HTML/CSS tutorials",
                "CSS-Tricks website",
                "Responsive Web Design course",
            ],
        },
        WeekTemplate {
            week: 3,
            title: "React Framework",
            tasks: &[
                "Understand React components and JSX",
                "Learn state management with useState hook",
                "Build a todo list application",
                "Practice component composition and props",
            ],
            resources: &[
                "Official React documentation",
                "React tutorial on reactjs.org",
                "Scrimba React course",
            ],
        },
        WeekTemplate {
            week: 4,
            title: "Project & Portfolio",
            tasks: &[
                "Build a complete portfolio website",
                "Deploy your project using Vercel or Netlify",
                "Create a GitHub repository with clean code",
                "Write project documentation and README",
            ],
            resources: &[
                "GitHub Pages documentation",
                "Portfolio examples on Dribbble",
                "LinkedIn profile optimization guide",
            ],
        },
    ],
};

pub static DATA_SCIENCE: RoadmapTemplate = RoadmapTemplate {
    name: "data_science",
    weeks: [
        WeekTemplate {
            week: 1,
            title: "Python & Data Analysis",
            tasks: &[
                "Learn Python basics and data types",
                "Master pandas for data manipulation",
                "Practice with numpy for numerical computing",
                "Complete basic data analysis exercises",
            ],
            resources: &[
                "Python.org official tutorial",
                "Pandas documentation and tutorials",
                "Kaggle Learn Python course",
            ],
        },
        WeekTemplate {
            week: 2,
            title: "Statistics & Visualization",
            tasks: &[
                "Study descriptive and inferential statistics",
                "Learn matplotlib and seaborn for visualization",
                "Create compelling data visualizations",
                "Understand correlation vs causation",
            ],
            resources: &[
                "Khan Academy Statistics course",
                "Matplotlib tutorials",
                "Seaborn documentation",
            ],
        },
        WeekTemplate {
            week: 3,
            title: "Machine Learning Basics",
            tasks: &[
                "Understand supervised vs unsupervised learning",
                "Learn scikit-learn library basics",
                "Build your first predictive model",
                "Practice with classification and regression",
            ],
            resources: &[
                "Scikit-learn tutorials",
                "Coursera Machine Learning course",
                "Towards Data Science articles",
            ],
        },
        WeekTemplate {
            week: 4,
            title: "Portfolio Project",
            tasks: &[
                "Complete an end-to-end data science project",
                "Create a Jupyter notebook with analysis",
                "Build a dashboard or web app",
                "Present findings and insights clearly",
            ],
            resources: &[
                "Kaggle datasets",
                "Streamlit for web apps",
                "GitHub portfolio examples",
            ],
        },
    ],
};

pub static GENERAL_CAREER: RoadmapTemplate = RoadmapTemplate {
    name: "general_career",
    weeks: [
        WeekTemplate {
            week: 1,
            title: "Industry Foundation",
            tasks: &[
                "Research industry trends and best practices",
                "Identify key skills and certifications needed",
                "Create a learning plan and timeline",
                "Connect with professionals on LinkedIn",
            ],
            resources: &[
                "Industry reports and whitepapers",
                "LinkedIn Learning courses",
                "Professional association websites",
            ],
        },
        WeekTemplate {
            week: 2,
            title: "Core Skill Development",
            tasks: &[
                "Take online courses in relevant skills",
                "Complete practical exercises and projects",
                "Join online communities and forums",
                "Start building a portfolio of work",
            ],
            resources: &[
                "Coursera specialization courses",
                "Udemy skill-specific courses",
                "YouTube educational channels",
            ],
        },
        WeekTemplate {
            week: 3,
            title: "Hands-on Practice",
            tasks: &[
                "Work on real-world projects",
                "Seek feedback from experienced professionals",
                "Participate in hackathons or competitions",
                "Volunteer for relevant opportunities",
            ],
            resources: &[
                "GitHub open source projects",
                "Local meetups and events",
                "Professional mentorship platforms",
            ],
        },
        WeekTemplate {
            week: 4,
            title: "Portfolio & Networking",
            tasks: &[
                "Create a professional portfolio website",
                "Optimize your LinkedIn profile",
                "Apply for internships or entry-level positions",
                "Prepare for technical interviews",
            ],
            resources: &[
                "Portfolio design inspiration",
                "Interview preparation guides",
                "Job search platforms and strategies",
            ],
        },
    ],
};

/// Picks the template for a career title. "Software" is checked before "Data".
pub fn template_for(title: &str) -> &'static RoadmapTemplate {
    if title.contains("Software") {
        &SOFTWARE_DEVELOPMENT
    } else if title.contains("Data") {
        &DATA_SCIENCE
    } else {
        &GENERAL_CAREER
    }
}

/// Runs the scorer and returns the plan for the rank-1 career.
pub fn select_roadmap(profile: &CareerProfile) -> Vec<SkillRoadmapWeek> {
    let recommendations = score(profile);
    let top_title = recommendations
        .first()
        .map(|r| r.title.as_str())
        .unwrap_or_default();
    let template = template_for(top_title);
    debug!("Selected {} roadmap for top career '{top_title}'", template.name);
    template.to_weeks()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(interests: &str, academic: &str) -> CareerProfile {
        CareerProfile::new("Test User", interests, academic)
    }

    fn week_titles(weeks: &[SkillRoadmapWeek]) -> Vec<&str> {
        weeks.iter().map(|w| w.title.as_str()).collect()
    }

    #[test]
    fn test_templates_have_weeks_one_to_four() {
        for template in [&SOFTWARE_DEVELOPMENT, &DATA_SCIENCE, &GENERAL_CAREER] {
            let numbers: Vec<u8> = template.weeks.iter().map(|w| w.week).collect();
            assert_eq!(numbers, vec![1, 2, 3, 4], "{}", template.name);
            for week in &template.weeks {
                assert_eq!(week.tasks.len(), 4);
                assert_eq!(week.resources.len(), 3);
            }
        }
    }

    #[test]
    fn test_template_for_title() {
        assert_eq!(template_for("Software Developer").name, "software_development");
        assert_eq!(template_for("Data Scientist").name, "data_science");
        assert_eq!(template_for("UX/UI Designer").name, "general_career");
        assert_eq!(template_for("Product Manager").name, "general_career");
        assert_eq!(template_for("").name, "general_career");
    }

    #[test]
    fn test_technology_profile_gets_software_plan() {
        let weeks = select_roadmap(&profile(
            "technology, programming",
            "Bachelor's in Computer Science",
        ));
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0].title, "Programming Fundamentals");
        assert_eq!(
            week_titles(&weeks),
            vec![
                "Programming Fundamentals",
                "Web Development Basics",
                "React Framework",
                "Project & Portfolio",
            ]
        );
    }

    #[test]
    fn test_design_profile_gets_general_plan() {
        let weeks = select_roadmap(&profile("design, creative", "design"));
        assert_eq!(
            week_titles(&weeks),
            vec![
                "Industry Foundation",
                "Core Skill Development",
                "Hands-on Practice",
                "Portfolio & Networking",
            ]
        );
    }

    #[test]
    fn test_marketing_profile_gets_general_plan() {
        let weeks = select_roadmap(&profile("marketing", "MBA"));
        assert_eq!(weeks[0].title, "Industry Foundation");
    }

    #[test]
    fn test_blank_profile_defaults_to_software_plan() {
        // Software Developer has the highest base score.
        let weeks = select_roadmap(&profile("", ""));
        assert_eq!(weeks[0].title, "Programming Fundamentals");
    }

    #[test]
    fn test_week_numbers_in_order() {
        let weeks = select_roadmap(&profile("security", "engineering"));
        let numbers: Vec<u8> = weeks.iter().map(|w| w.week).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_select_roadmap_is_idempotent() {
        let p = profile("creative", "art");
        assert_eq!(select_roadmap(&p), select_roadmap(&p));
    }

    #[test]
    fn test_data_template_content() {
        let weeks = DATA_SCIENCE.to_weeks();
        assert_eq!(weeks[2].title, "Machine Learning Basics");
        assert_eq!(weeks[3].resources[1], "Streamlit for web apps");
    }
}
